use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::Env;

use crate::{mul_div_ceil, mul_div_floor, PERCENTAGE_FACTOR};

/// Converts shares to assets rounding up, so debt is never understated.
/// Empty pool (no shares) converts to zero.
pub fn to_assets_up(
    env: &Env,
    shares: i128,
    total_assets: i128,
    total_shares: i128,
) -> Option<i128> {
    if total_shares == 0 {
        return Some(0);
    }

    mul_div_ceil(env, shares, total_assets, total_shares)
}

/// Converts assets to shares rounding down.
/// Empty pool (no assets) converts to zero.
pub fn to_shares_down(
    env: &Env,
    assets: i128,
    total_assets: i128,
    total_shares: i128,
) -> Option<i128> {
    if total_assets == 0 {
        return Some(0);
    }

    mul_div_floor(env, assets, total_shares, total_assets)
}

/// Applies basis points to value, rounding down: value * bps / 10_000
pub fn percent_mul(value: i128, bps: u32) -> Option<i128> {
    value.fixed_mul_floor(i128::from(bps), i128::from(PERCENTAGE_FACTOR))
}
