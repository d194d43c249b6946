use soroban_sdk::{contracttype, Address};

/// Risk configuration of a pre-liquidation contract. All ratios are WAD scaled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct PreLiquidationParams {
    pub pre_lltv: i128,
    /// Close factor at `pre_lltv`
    pub pre_lcf_1: i128,
    /// Close factor at `lltv`
    pub pre_lcf_2: i128,
    /// Incentive factor at `pre_lltv`
    pub pre_lif_1: i128,
    /// Incentive factor at `lltv`
    pub pre_lif_2: i128,
    pub pre_liquidation_oracle: Address,
}
