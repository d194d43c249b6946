use common::Wad;
use morpho_interface::types::market_params::MarketParams;

/// Position figures derived on every evaluation, never persisted
#[derive(Debug, Clone)]
pub struct PositionData {
    pub market_params: MarketParams,
    /// Debt in loan token, rounded up from borrow shares
    pub debt: i128,
    pub collateral: i128,
    /// Collateral valued in loan token
    pub collateral_value: i128,
    pub ltv: Wad,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    /// None when the borrower has no debt or no collateral
    pub position: Option<PositionData>,
    pub liquidatable: bool,
    pub repay_amount: i128,
}

impl Evaluation {
    pub fn empty() -> Self {
        Self {
            position: None,
            liquidatable: false,
            repay_amount: 0,
        }
    }
}
