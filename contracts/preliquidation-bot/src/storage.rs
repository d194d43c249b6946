use preliquidation_bot_interface::types::bot_config::BotConfig;
use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{contracttype, Address, Env};

use crate::types::execution_state::ExecutionState;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Morpho,
    FlashLoanPool,
    Receiver,
    LoanToken,
    PreLiquidation,
    Config,
    ExecutionState,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

fn read_address(env: &Env, key: &DataKey) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(key)
        .ok_or(Error::Uninitialized)
}

pub fn has_owner(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_owner(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::Owner)
}

pub fn write_morpho(env: &Env, morpho: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Morpho, morpho);
}

pub fn read_morpho(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::Morpho)
}

pub fn write_flash_loan_pool(env: &Env, pool: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::FlashLoanPool, pool);
}

pub fn read_flash_loan_pool(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::FlashLoanPool)
}

pub fn write_receiver(env: &Env, receiver: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Receiver, receiver);
}

pub fn read_receiver(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::Receiver)
}

pub fn write_loan_token(env: &Env, loan_token: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::LoanToken, loan_token);
}

pub fn read_loan_token(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::LoanToken)
}

pub fn write_pre_liquidation(env: &Env, pre_liquidation: &Option<Address>) {
    bump_instance(env);

    match pre_liquidation {
        Some(address) => env
            .storage()
            .instance()
            .set(&DataKey::PreLiquidation, address),
        None => env.storage().instance().remove(&DataKey::PreLiquidation),
    }
}

pub fn read_pre_liquidation(env: &Env) -> Option<Address> {
    bump_instance(env);

    env.storage().instance().get(&DataKey::PreLiquidation)
}

pub fn write_config(env: &Env, config: &BotConfig) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<BotConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

/// Execution state lives in temporary storage and is reset to Idle before
/// `execute_preliquidation` returns
pub fn write_execution_state(env: &Env, state: &ExecutionState) {
    match state {
        ExecutionState::Idle => env
            .storage()
            .temporary()
            .remove(&DataKey::ExecutionState),
        _ => env
            .storage()
            .temporary()
            .set(&DataKey::ExecutionState, state),
    }
}

pub fn read_execution_state(env: &Env) -> ExecutionState {
    env.storage()
        .temporary()
        .get(&DataKey::ExecutionState)
        .unwrap_or(ExecutionState::Idle)
}
