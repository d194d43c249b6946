use soroban_sdk::contracttype;

/// Expected outcome of a pre-liquidation, in loan token units
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[contracttype]
pub struct Profitability {
    pub repay_amount: i128,
    pub seized_amount: i128,
    pub flash_loan_fee: i128,
    pub net_profit: i128,
}
