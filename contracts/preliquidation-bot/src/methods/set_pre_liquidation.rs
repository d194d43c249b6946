use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_pre_liquidation;

use super::utils::validation::require_owner;

pub fn set_pre_liquidation(env: &Env, pre_liquidation: &Option<Address>) -> Result<(), Error> {
    require_owner(env)?;

    write_pre_liquidation(env, pre_liquidation);

    event::pre_liquidation_changed(env, pre_liquidation);

    Ok(())
}
