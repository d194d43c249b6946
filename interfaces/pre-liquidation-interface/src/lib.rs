#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};
use types::pre_liquidation_params::PreLiquidationParams;

pub mod types;

pub struct Spec;

/// Partial liquidation of a single market, allowed between `pre_lltv`
/// and the market `lltv`
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PreLiquidationClient")]
pub trait PreLiquidationTrait {
    /// Repays debt of `borrower` with loan token pulled from `liquidator`
    /// and transfers seized collateral to `liquidator`.
    /// Exactly one of `seized_assets` and `repaid_shares` must be non-zero.
    /// Returns (seized_assets, repaid_assets).
    fn pre_liquidate(
        env: Env,
        liquidator: Address,
        borrower: Address,
        seized_assets: i128,
        repaid_shares: i128,
        data: Bytes,
    ) -> (i128, i128);

    fn pre_liquidation_params(env: Env) -> PreLiquidationParams;
}
