#![deny(warnings)]
#![no_std]

use methods::{
    execute_operation::execute_operation, initialize::initialize, recover_token::recover_token,
    take_settlement::take_settlement,
};
use liquidation_receiver_interface::LiquidationReceiverTrait;
use preliquidation_bot_interface::types::{error::Error, settlement::Settlement};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct LiquidationReceiver;

#[contractimpl]
impl LiquidationReceiverTrait for LiquidationReceiver {
    fn initialize(
        env: Env,
        bot: Address,
        flash_loan_pool: Address,
        morpho: Address,
        loan_token: Address,
    ) -> Result<(), Error> {
        initialize(&env, &bot, &flash_loan_pool, &morpho, &loan_token)
    }

    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> Result<bool, Error> {
        execute_operation(&env, &asset, amount, premium, &initiator, &params)
    }

    fn take_settlement(env: Env) -> Result<Option<Settlement>, Error> {
        take_settlement(&env)
    }

    fn recover_token(env: Env, token: Address, to: Address) -> Result<i128, Error> {
        recover_token(&env, &token, &to)
    }
}
