use soroban_sdk::contracttype;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[contracttype]
pub struct Market {
    pub total_supply_assets: i128,
    pub total_supply_shares: i128,
    pub total_borrow_assets: i128,
    pub total_borrow_shares: i128,
    pub last_update: u64,
    pub fee: i128,
}
