use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{Address, BytesN, Env};

use crate::event;
use crate::storage::{read_config, read_morpho};

use super::utils::evaluate::evaluate;

pub fn check_position(
    env: &Env,
    market_id: &BytesN<32>,
    borrower: &Address,
) -> Result<(bool, i128), Error> {
    let config = read_config(env)?;
    let morpho = read_morpho(env)?;

    let evaluation = evaluate(env, &morpho, &config, market_id, borrower)?;

    if let Some(position) = evaluation.position.as_ref() {
        event::position_checked(env, market_id, borrower, position, evaluation.liquidatable);
    }

    Ok((evaluation.liquidatable, evaluation.repay_amount))
}
