use common::{PERCENTAGE_FACTOR, WAD};
use preliquidation_bot_interface::types::bot_config::BotConfig;
use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_owner, read_execution_state, read_owner};
use crate::types::execution_state::ExecutionState;

pub fn require_owner_not_exist(env: &Env) {
    if has_owner(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_owner(env: &Env) -> Result<Address, Error> {
    let owner: Address = read_owner(env)?;
    owner.require_auth();
    Ok(owner)
}

pub fn require_valid_config(env: &Env, config: &BotConfig) {
    assert_with_error!(
        env,
        config.ltv_threshold > 0 && config.ltv_threshold <= WAD,
        Error::InvalidConfig
    );
    assert_with_error!(
        env,
        config.repay_factor > 0 && config.repay_factor <= PERCENTAGE_FACTOR,
        Error::InvalidConfig
    );
    assert_with_error!(
        env,
        config.flash_loan_fee <= PERCENTAGE_FACTOR,
        Error::InvalidConfig
    );
}

pub fn require_idle(env: &Env) {
    assert_with_error!(
        env,
        read_execution_state(env) == ExecutionState::Idle,
        Error::ExecutionInProgress
    );
}
