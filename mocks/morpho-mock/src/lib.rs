#![deny(warnings)]
#![no_std]

use common::to_assets_up;
use morpho_interface::types::market::Market;
use morpho_interface::types::market_params::MarketParams;
use morpho_interface::types::position::Position;
use morpho_interface::MorphoTrait;
use soroban_sdk::{contract, contractimpl, token, Address, Bytes, BytesN, Env};
use storage::*;

mod storage;

#[contract]
pub struct MorphoMock;

#[contractimpl]
impl MorphoTrait for MorphoMock {
    fn market_params(env: Env, id: BytesN<32>) -> MarketParams {
        read_market_params(&env, &id)
    }

    fn market(env: Env, id: BytesN<32>) -> Market {
        read_market(&env, &id)
    }

    fn position(env: Env, id: BytesN<32>, user: Address) -> Position {
        read_position(&env, &id, &user)
    }

    /// Trusts the caller for `seized_assets`, only `repaid_shares` liquidations
    /// are supported
    fn liquidate(
        env: Env,
        liquidator: Address,
        market_params: MarketParams,
        borrower: Address,
        seized_assets: i128,
        repaid_shares: i128,
        _data: Bytes,
    ) -> (i128, i128) {
        liquidator.require_auth();

        let id = read_market_id(&env, &market_params);
        let mut market = read_market(&env, &id);
        let mut position = read_position(&env, &id, &borrower);

        let repaid_assets = to_assets_up(
            &env,
            repaid_shares,
            market.total_borrow_assets,
            market.total_borrow_shares,
        )
        .unwrap();

        position.borrow_shares -= repaid_shares;
        position.collateral -= seized_assets;
        market.total_borrow_shares -= repaid_shares;
        market.total_borrow_assets -= repaid_assets.min(market.total_borrow_assets);

        assert!(position.borrow_shares >= 0 && position.collateral >= 0);

        write_market(&env, &id, &market);
        write_position(&env, &id, &borrower, &position);

        token::Client::new(&env, &market_params.loan_token).transfer_from(
            &env.current_contract_address(),
            &liquidator,
            &env.current_contract_address(),
            &repaid_assets,
        );
        token::Client::new(&env, &market_params.collateral_token).transfer(
            &env.current_contract_address(),
            &liquidator,
            &seized_assets,
        );

        (seized_assets, repaid_assets)
    }
}

#[contractimpl]
impl MorphoMock {
    pub fn create_market(env: Env, id: BytesN<32>, params: MarketParams) {
        write_market_params(&env, &id, &params);
    }

    pub fn set_market(env: Env, id: BytesN<32>, market: Market) {
        write_market(&env, &id, &market);
    }

    pub fn set_position(env: Env, id: BytesN<32>, user: Address, position: Position) {
        write_position(&env, &id, &user, &position);
    }
}
