use flash_loan_interface::FlashLoanPoolClient;
use liquidation_receiver_interface::LiquidationReceiverClient;
use preliquidation_bot_interface::types::error::Error;
use preliquidation_bot_interface::types::liquidation_params::LiquidationParams;
use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{assert_with_error, Address, BytesN, Env};

use crate::event;
use crate::storage::{
    read_config, read_flash_loan_pool, read_loan_token, read_morpho, read_pre_liquidation,
    read_receiver, write_execution_state,
};
use crate::types::execution_state::ExecutionState;

use super::utils::evaluate::evaluate;
use super::utils::validation::{require_idle, require_owner};

pub fn execute_preliquidation(
    env: &Env,
    market_id: &BytesN<32>,
    borrower: &Address,
) -> Result<Settlement, Error> {
    require_owner(env)?;
    require_idle(env);

    let pre_liquidation =
        read_pre_liquidation(env).ok_or(Error::PreLiquidationNotConfigured)?;
    let config = read_config(env)?;
    let morpho = read_morpho(env)?;
    let loan_token = read_loan_token(env)?;

    let evaluation = evaluate(env, &morpho, &config, market_id, borrower)?;

    assert_with_error!(
        env,
        evaluation.liquidatable && evaluation.repay_amount > 0,
        Error::NotLiquidatable
    );

    let position = evaluation.position.ok_or(Error::NotLiquidatable)?;

    assert_with_error!(
        env,
        position.market_params.loan_token == loan_token,
        Error::AssetMismatch
    );

    let receiver = read_receiver(env)?;
    let params = LiquidationParams {
        market_id: market_id.clone(),
        borrower: borrower.clone(),
        pre_liquidation,
    }
    .to_xdr(env);

    write_execution_state(env, &ExecutionState::FlashLoanRequested);
    event::flash_loan_requested(env, market_id, borrower, &loan_token, evaluation.repay_amount);

    FlashLoanPoolClient::new(env, &read_flash_loan_pool(env)?).flash_loan_simple(
        &env.current_contract_address(),
        &receiver,
        &loan_token,
        &evaluation.repay_amount,
        &params,
        &0,
    );

    let settlement = LiquidationReceiverClient::new(env, &receiver)
        .take_settlement()
        .ok_or(Error::CallbackNotExecuted)?;

    assert_with_error!(
        env,
        settlement.market_id == *market_id && settlement.borrower == *borrower,
        Error::CallbackNotExecuted
    );

    write_execution_state(env, &ExecutionState::Idle);
    event::preliquidation_settled(env, &settlement);

    Ok(settlement)
}
