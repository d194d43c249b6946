#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, BytesN, Env};
use types::bot_config::BotConfig;
use types::error::Error;
use types::profitability::Profitability;
use types::settlement::Settlement;

pub mod types;

pub struct Spec;

/// Interface for PreLiquidationBot
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PreLiquidationBotClient")]
pub trait PreLiquidationBotTrait {
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
    ) -> Result<(), Error>;

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;

    fn version() -> u32;

    fn owner(env: Env) -> Result<Address, Error>;

    fn config(env: Env) -> Result<BotConfig, Error>;

    fn set_config(env: Env, config: BotConfig) -> Result<(), Error>;

    fn receiver(env: Env) -> Result<Address, Error>;

    fn pre_liquidation(env: Env) -> Option<Address>;

    fn set_pre_liquidation(env: Env, pre_liquidation: Option<Address>) -> Result<(), Error>;

    /// Returns whether the position is above the pre-liquidation threshold
    /// and the amount of loan token to repay if so
    fn check_position(
        env: Env,
        market_id: BytesN<32>,
        borrower: Address,
    ) -> Result<(bool, i128), Error>;

    fn simulate_profitability(
        env: Env,
        market_id: BytesN<32>,
        borrower: Address,
    ) -> Result<Profitability, Error>;

    /// Flash borrows the suggested repay amount and pre-liquidates `borrower`
    /// through the receiver contract
    fn execute_preliquidation(
        env: Env,
        market_id: BytesN<32>,
        borrower: Address,
    ) -> Result<Settlement, Error>;

    /// Sweeps `token` balance of the bot and of the receiver to the owner
    fn recover_token(env: Env, token: Address) -> Result<i128, Error>;
}
