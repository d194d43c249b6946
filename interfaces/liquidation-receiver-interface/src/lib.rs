#![deny(warnings)]
#![no_std]

use preliquidation_bot_interface::types::error::Error;
use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};

pub struct Spec;

/// Flash loan receiver owned by PreLiquidationBot.
/// Soroban forbids contract re-entry, so the callback can't live on the bot
/// that initiates the flash loan.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LiquidationReceiverClient")]
pub trait LiquidationReceiverTrait {
    fn initialize(
        env: Env,
        bot: Address,
        flash_loan_pool: Address,
        morpho: Address,
        loan_token: Address,
    ) -> Result<(), Error>;

    /// Flash loan callback, see `flash_loan_interface::FlashLoanReceiverTrait`
    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> Result<bool, Error>;

    /// Returns and clears the settlement recorded by the last callback
    fn take_settlement(env: Env) -> Result<Option<Settlement>, Error>;

    fn recover_token(env: Env, token: Address, to: Address) -> Result<i128, Error>;
}
