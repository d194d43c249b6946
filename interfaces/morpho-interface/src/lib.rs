#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, BytesN, Env};
use types::market::Market;
use types::market_params::MarketParams;
use types::position::Position;

pub mod types;

pub struct Spec;

/// Read side of the lending protocol plus the liquidation primitive
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "MorphoClient")]
pub trait MorphoTrait {
    /// Immutable parameters of the market identified by `id`
    fn market_params(env: Env, id: BytesN<32>) -> MarketParams;

    /// Aggregated supply and borrow totals of the market
    fn market(env: Env, id: BytesN<32>) -> Market;

    /// Shares and collateral of `user` in the market
    fn position(env: Env, id: BytesN<32>, user: Address) -> Position;

    /// Repays `repaid_shares` of `borrower` debt (or enough debt to seize
    /// `seized_assets`) and transfers the seized collateral to `liquidator`.
    /// Returns (seized_assets, repaid_assets).
    fn liquidate(
        env: Env,
        liquidator: Address,
        market_params: MarketParams,
        borrower: Address,
        seized_assets: i128,
        repaid_shares: i128,
        data: Bytes,
    ) -> (i128, i128);
}
