use preliquidation_bot_interface::types::bot_config::BotConfig;
use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_config;

use super::utils::validation::{require_owner, require_valid_config};

pub fn set_config(env: &Env, config: &BotConfig) -> Result<(), Error> {
    require_owner(env)?;
    require_valid_config(env, config);

    write_config(env, config);

    event::config_changed(env, config);

    Ok(())
}
