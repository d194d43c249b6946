use preliquidation_bot_interface::types::error::Error;
use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::Env;

use crate::storage::{read_bot, take_settlement as take_stored_settlement};

pub fn take_settlement(env: &Env) -> Result<Option<Settlement>, Error> {
    read_bot(env)?.require_auth();

    Ok(take_stored_settlement(env))
}
