use soroban_sdk::contracttype;

/// Raw market and position state next to the bot's view of it
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct PositionReport {
    pub lltv: i128,
    pub borrow_shares: i128,
    pub collateral: i128,
    pub total_borrow_assets: i128,
    pub total_borrow_shares: i128,
    /// False when the bot failed to evaluate the position
    pub evaluated: bool,
    pub liquidatable: bool,
    pub repay_amount: i128,
    pub net_profit: i128,
}
