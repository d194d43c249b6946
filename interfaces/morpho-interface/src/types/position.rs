use soroban_sdk::contracttype;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[contracttype]
pub struct Position {
    pub supply_shares: i128,
    pub borrow_shares: i128,
    /// Absolute amount of collateral token, not shares
    pub collateral: i128,
}
