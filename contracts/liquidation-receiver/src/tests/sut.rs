#![cfg(test)]
extern crate std;

use common::{
    DEFAULT_PRE_LIF_1, DEFAULT_PRE_LIF_2, DEFAULT_PRE_LLTV, ORACLE_PRICE_SCALE, WAD,
};
use liquidation_receiver_interface::LiquidationReceiverClient;
use morpho_interface::types::market::Market;
use morpho_interface::types::market_params::MarketParams;
use morpho_interface::types::position::Position;
use morpho_mock::{MorphoMock, MorphoMockClient};
use oracle_mock::{OracleMock, OracleMockClient};
use pre_liquidation_interface::types::pre_liquidation_params::PreLiquidationParams;
use pre_liquidation_mock::{PreLiquidationMock, PreLiquidationMockClient};
use preliquidation_bot_interface::types::liquidation_params::LiquidationParams;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::token::StellarAssetClient as TokenAdminClient;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::LiquidationReceiver;

pub const DEBT: i128 = 1_000_000_000;

pub const AMOUNT: i128 = 100_000_000;

pub const PREMIUM: i128 = 90_000;

pub struct Sut<'a> {
    pub bot: Address,
    pub flash_loan_pool: Address,
    pub borrower: Address,
    pub market_id: BytesN<32>,
    pub receiver: LiquidationReceiverClient<'a>,
    pub morpho: MorphoMockClient<'a>,
    pub pre_liquidation: PreLiquidationMockClient<'a>,
    pub loan_token: TokenClient<'a>,
    pub collateral_token: TokenClient<'a>,
}

impl<'a> Sut<'a> {
    pub fn params(&self, env: &Env) -> Bytes {
        LiquidationParams {
            market_id: self.market_id.clone(),
            borrower: self.borrower.clone(),
            pre_liquidation: self.pre_liquidation.address.clone(),
        }
        .to_xdr(env)
    }
}

/// Receiver holding a flash loan of AMOUNT plus the premium,
/// borrower owes DEBT against the same amount of collateral
pub(crate) fn init_receiver<'a>(env: &Env) -> Sut<'a> {
    let bot = Address::generate(env);
    let flash_loan_pool = Address::generate(env);
    let borrower = Address::generate(env);
    let token_admin = Address::generate(env);
    let market_id = BytesN::from_array(env, &[3; 32]);

    #[allow(deprecated)]
    let loan_token_contract = env.register_stellar_asset_contract(token_admin.clone());
    #[allow(deprecated)]
    let collateral_token_contract = env.register_stellar_asset_contract(token_admin);

    let oracle = OracleMockClient::new(env, &env.register_contract(None, OracleMock));
    oracle.set_price(&ORACLE_PRICE_SCALE);

    let morpho = MorphoMockClient::new(env, &env.register_contract(None, MorphoMock));
    morpho.create_market(
        &market_id,
        &MarketParams {
            loan_token: loan_token_contract.clone(),
            collateral_token: collateral_token_contract.clone(),
            oracle: oracle.address.clone(),
            irm: Address::generate(env),
            lltv: 900_000_000_000_000_000,
        },
    );
    morpho.set_market(
        &market_id,
        &Market {
            total_supply_assets: 2 * DEBT,
            total_supply_shares: 2 * DEBT,
            total_borrow_assets: DEBT,
            total_borrow_shares: DEBT,
            last_update: 0,
            fee: 0,
        },
    );
    morpho.set_position(
        &market_id,
        &borrower,
        &Position {
            supply_shares: 0,
            borrow_shares: DEBT,
            collateral: DEBT,
        },
    );

    let pre_liquidation =
        PreLiquidationMockClient::new(env, &env.register_contract(None, PreLiquidationMock));
    pre_liquidation.initialize(
        &morpho.address,
        &market_id,
        &PreLiquidationParams {
            pre_lltv: DEFAULT_PRE_LLTV,
            pre_lcf_1: WAD / 10,
            pre_lcf_2: WAD / 2,
            pre_lif_1: DEFAULT_PRE_LIF_1,
            pre_lif_2: DEFAULT_PRE_LIF_2,
            pre_liquidation_oracle: oracle.address.clone(),
        },
    );

    let receiver =
        LiquidationReceiverClient::new(env, &env.register_contract(None, LiquidationReceiver));
    receiver.initialize(
        &bot,
        &flash_loan_pool,
        &morpho.address,
        &loan_token_contract,
    );

    TokenAdminClient::new(env, &loan_token_contract).mint(&receiver.address, &(AMOUNT + PREMIUM));
    TokenAdminClient::new(env, &collateral_token_contract).mint(&morpho.address, &DEBT);

    Sut {
        bot,
        flash_loan_pool,
        borrower,
        market_id,
        receiver,
        morpho,
        pre_liquidation,
        loan_token: TokenClient::new(env, &loan_token_contract),
        collateral_token: TokenClient::new(env, &collateral_token_contract),
    }
}
