use common::{Wad, DEFAULT_PRE_LIF_1, DEFAULT_PRE_LIF_2, DEFAULT_PRE_LLTV};
use pre_liquidation_interface::PreLiquidationClient;
use soroban_sdk::Env;

use crate::storage::read_pre_liquidation;

/// Incentive band used to price a pre-liquidation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreLiquidationBounds {
    pub pre_lltv: Wad,
    pub pre_lif_1: Wad,
    pub pre_lif_2: Wad,
}

impl Default for PreLiquidationBounds {
    fn default() -> Self {
        Self {
            pre_lltv: Wad::from_inner(DEFAULT_PRE_LLTV),
            pre_lif_1: Wad::from_inner(DEFAULT_PRE_LIF_1),
            pre_lif_2: Wad::from_inner(DEFAULT_PRE_LIF_2),
        }
    }
}

/// Reads the band from the configured pre-liquidation contract,
/// falls back to defaults when none is configured
pub fn read_pre_liquidation_bounds(env: &Env) -> PreLiquidationBounds {
    match read_pre_liquidation(env) {
        Some(pre_liquidation) => {
            let params = PreLiquidationClient::new(env, &pre_liquidation).pre_liquidation_params();

            PreLiquidationBounds {
                pre_lltv: Wad::from_inner(params.pre_lltv),
                pre_lif_1: Wad::from_inner(params.pre_lif_1),
                pre_lif_2: Wad::from_inner(params.pre_lif_2),
            }
        }
        None => PreLiquidationBounds::default(),
    }
}
