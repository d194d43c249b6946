#![deny(warnings)]
#![no_std]

use common::{mul_div_floor, to_assets_up, Wad, ORACLE_PRICE_SCALE};
use morpho_interface::MorphoClient;
use oracle_interface::OracleClient;
use pre_liquidation_interface::types::pre_liquidation_params::PreLiquidationParams;
use pre_liquidation_interface::PreLiquidationTrait;
use soroban_sdk::{contract, contractimpl, token, Address, Bytes, BytesN, Env};
use storage::*;

mod storage;

#[contract]
pub struct PreLiquidationMock;

#[contractimpl]
impl PreLiquidationTrait for PreLiquidationMock {
    /// Seizes collateral worth `repaid_assets * pre_lif_1` at the
    /// pre-liquidation oracle price
    fn pre_liquidate(
        env: Env,
        liquidator: Address,
        borrower: Address,
        seized_assets: i128,
        repaid_shares: i128,
        data: Bytes,
    ) -> (i128, i128) {
        liquidator.require_auth();
        assert!(seized_assets == 0 && repaid_shares > 0);

        let params = read_params(&env);
        let market_id = read_market_id(&env);
        let morpho = MorphoClient::new(&env, &read_morpho(&env));

        let market_params = morpho.market_params(&market_id);
        let market = morpho.market(&market_id);

        let repaid_assets = to_assets_up(
            &env,
            repaid_shares,
            market.total_borrow_assets,
            market.total_borrow_shares,
        )
        .unwrap();

        let seized_value = Wad::from_inner(params.pre_lif_1)
            .mul_int(&env, repaid_assets)
            .unwrap();
        let price = OracleClient::new(&env, &params.pre_liquidation_oracle).price();
        let seized_assets = mul_div_floor(&env, seized_value, ORACLE_PRICE_SCALE, price).unwrap();

        let this = env.current_contract_address();
        let loan_token = token::Client::new(&env, &market_params.loan_token);

        loan_token.transfer_from(&this, &liquidator, &this, &repaid_assets);
        loan_token.approve(
            &this,
            &morpho.address,
            &repaid_assets,
            &(env.ledger().sequence() + 1),
        );

        let (seized_assets, repaid_assets) = morpho.liquidate(
            &this,
            &market_params,
            &borrower,
            &seized_assets,
            &repaid_shares,
            &data,
        );

        token::Client::new(&env, &market_params.collateral_token).transfer(
            &this,
            &liquidator,
            &seized_assets,
        );

        (seized_assets, repaid_assets)
    }

    fn pre_liquidation_params(env: Env) -> PreLiquidationParams {
        read_params(&env)
    }
}

#[contractimpl]
impl PreLiquidationMock {
    pub fn initialize(env: Env, morpho: Address, market_id: BytesN<32>, params: PreLiquidationParams) {
        write_config(&env, &morpho, &market_id, &params);
    }
}
