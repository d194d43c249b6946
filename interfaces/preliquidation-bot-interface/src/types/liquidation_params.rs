use soroban_sdk::{contracttype, Address, BytesN};

/// Flash loan callback payload, XDR encoded into the `params` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct LiquidationParams {
    pub market_id: BytesN<32>,
    pub borrower: Address,
    pub pre_liquidation: Address,
}
