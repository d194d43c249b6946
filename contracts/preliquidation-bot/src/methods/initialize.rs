use preliquidation_bot_interface::types::bot_config::BotConfig;
use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    write_config, write_flash_loan_pool, write_loan_token, write_morpho, write_owner,
    write_pre_liquidation, write_receiver,
};

use super::utils::validation::{require_owner_not_exist, require_valid_config};

#[allow(clippy::too_many_arguments)]
pub fn initialize(
    env: &Env,
    owner: &Address,
    morpho: &Address,
    flash_loan_pool: &Address,
    receiver: &Address,
    loan_token: &Address,
    pre_liquidation: &Option<Address>,
    config: &BotConfig,
) -> Result<(), Error> {
    require_owner_not_exist(env);
    require_valid_config(env, config);

    write_owner(env, owner);
    write_morpho(env, morpho);
    write_flash_loan_pool(env, flash_loan_pool);
    write_receiver(env, receiver);
    write_loan_token(env, loan_token);
    write_pre_liquidation(env, pre_liquidation);
    write_config(env, config);

    event::initialized(env, owner, receiver, config);

    Ok(())
}
