#![deny(warnings)]
#![no_std]

use methods::{
    check_position::check_position, execute_preliquidation::execute_preliquidation,
    initialize::initialize, recover_token::recover_token, set_config::set_config,
    set_pre_liquidation::set_pre_liquidation, simulate_profitability::simulate_profitability,
    upgrade::upgrade,
};
use preliquidation_bot_interface::types::{
    bot_config::BotConfig, error::Error, profitability::Profitability, settlement::Settlement,
};
use preliquidation_bot_interface::PreLiquidationBotTrait;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct PreLiquidationBot;

#[contractimpl]
impl PreLiquidationBotTrait for PreLiquidationBot {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        owner: Address,
        morpho: Address,
        flash_loan_pool: Address,
        receiver: Address,
        loan_token: Address,
        pre_liquidation: Option<Address>,
        config: BotConfig,
    ) -> Result<(), Error> {
        initialize(
            &env,
            &owner,
            &morpho,
            &flash_loan_pool,
            &receiver,
            &loan_token,
            &pre_liquidation,
            &config,
        )
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        upgrade(&env, &new_wasm_hash)
    }

    fn version() -> u32 {
        1
    }

    fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    fn config(env: Env) -> Result<BotConfig, Error> {
        read_config(&env)
    }

    fn set_config(env: Env, config: BotConfig) -> Result<(), Error> {
        set_config(&env, &config)
    }

    fn receiver(env: Env) -> Result<Address, Error> {
        read_receiver(&env)
    }

    fn pre_liquidation(env: Env) -> Option<Address> {
        read_pre_liquidation(&env)
    }

    fn set_pre_liquidation(env: Env, pre_liquidation: Option<Address>) -> Result<(), Error> {
        set_pre_liquidation(&env, &pre_liquidation)
    }

    fn check_position(
        env: Env,
        market_id: BytesN<32>,
        borrower: Address,
    ) -> Result<(bool, i128), Error> {
        check_position(&env, &market_id, &borrower)
    }

    fn simulate_profitability(
        env: Env,
        market_id: BytesN<32>,
        borrower: Address,
    ) -> Result<Profitability, Error> {
        simulate_profitability(&env, &market_id, &borrower)
    }

    fn execute_preliquidation(
        env: Env,
        market_id: BytesN<32>,
        borrower: Address,
    ) -> Result<Settlement, Error> {
        execute_preliquidation(&env, &market_id, &borrower)
    }

    fn recover_token(env: Env, token: Address) -> Result<i128, Error> {
        recover_token(&env, &token)
    }
}
