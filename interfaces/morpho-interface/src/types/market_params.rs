use soroban_sdk::{contracttype, Address};

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct MarketParams {
    pub loan_token: Address,
    pub collateral_token: Address,
    pub oracle: Address,
    pub irm: Address,
    /// Liquidation loan-to-value, WAD scaled
    pub lltv: i128,
}
