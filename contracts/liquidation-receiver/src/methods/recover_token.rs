use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::storage::read_bot;

pub fn recover_token(env: &Env, token: &Address, to: &Address) -> Result<i128, Error> {
    read_bot(env)?.require_auth();

    let token_client = token::Client::new(env, token);
    let balance = token_client.balance(&env.current_contract_address());

    if balance > 0 {
        token_client.transfer(&env.current_contract_address(), to, &balance);
    }

    Ok(balance)
}
