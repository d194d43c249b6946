use common::{DEFAULT_FLASH_LOAN_FEE, DEFAULT_LTV_THRESHOLD, DEFAULT_REPAY_FACTOR};
use soroban_sdk::contracttype;

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct BotConfig {
    /// Loan-to-value above which a position is liquidatable, WAD scaled
    pub ltv_threshold: i128,
    /// Part of the debt repaid per pre-liquidation, basis points
    pub repay_factor: u32,
    /// Flash loan premium estimate, basis points
    pub flash_loan_fee: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            ltv_threshold: DEFAULT_LTV_THRESHOLD,
            repay_factor: DEFAULT_REPAY_FACTOR,
            flash_loan_fee: DEFAULT_FLASH_LOAN_FEE,
        }
    }
}
