use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage::{has_bot, write_bot, write_flash_loan_pool, write_loan_token, write_morpho};

pub fn initialize(
    env: &Env,
    bot: &Address,
    flash_loan_pool: &Address,
    morpho: &Address,
    loan_token: &Address,
) -> Result<(), Error> {
    if has_bot(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }

    write_bot(env, bot);
    write_flash_loan_pool(env, flash_loan_pool);
    write_morpho(env, morpho);
    write_loan_token(env, loan_token);

    Ok(())
}
