use liquidation_receiver_interface::LiquidationReceiverClient;
use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::read_receiver;

use super::utils::validation::require_owner;

/// Collateral seized by pre-liquidations accumulates on the receiver,
/// so both balances are swept.
pub fn recover_token(env: &Env, token: &Address) -> Result<i128, Error> {
    let owner = require_owner(env)?;

    let token_client = token::Client::new(env, token);
    let balance = token_client.balance(&env.current_contract_address());

    if balance > 0 {
        token_client.transfer(&env.current_contract_address(), &owner, &balance);
    }

    let receiver = read_receiver(env)?;
    let receiver_balance = LiquidationReceiverClient::new(env, &receiver).recover_token(token, &owner);

    let recovered = balance
        .checked_add(receiver_balance)
        .ok_or(Error::MathOverflowError)?;

    event::token_recovered(env, token, &owner, recovered);

    Ok(recovered)
}
