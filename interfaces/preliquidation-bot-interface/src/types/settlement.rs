use soroban_sdk::{contracttype, Address, BytesN};

/// Outcome of a pre-liquidation executed inside the flash loan callback
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct Settlement {
    pub market_id: BytesN<32>,
    pub borrower: Address,
    /// Flash loan amount spent on the repayment
    pub amount: i128,
    pub premium: i128,
    pub repaid_shares: i128,
    pub repaid_assets: i128,
    /// Collateral received by the receiver
    pub seized_assets: i128,
}
