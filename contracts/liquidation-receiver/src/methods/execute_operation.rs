use common::to_shares_down;
use morpho_interface::MorphoClient;
use pre_liquidation_interface::PreLiquidationClient;
use preliquidation_bot_interface::types::error::Error;
use preliquidation_bot_interface::types::liquidation_params::LiquidationParams;
use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::xdr::FromXdr;
use soroban_sdk::{assert_with_error, log, token, Address, Bytes, Env};

use crate::event;
use crate::storage::{
    has_settlement, read_bot, read_flash_loan_pool, read_loan_token, read_morpho,
    write_settlement, APPROVAL_LEDGERS,
};

/// Repays `amount` of borrower debt through the pre-liquidation contract and
/// approves the pool to pull `amount + premium` back.
/// Any failure reverts the whole flash loan.
pub fn execute_operation(
    env: &Env,
    asset: &Address,
    amount: i128,
    premium: i128,
    initiator: &Address,
    params: &Bytes,
) -> Result<bool, Error> {
    let flash_loan_pool = read_flash_loan_pool(env)?;
    flash_loan_pool.require_auth();

    assert_with_error!(env, *initiator == read_bot(env)?, Error::InvalidInitiator);
    assert_with_error!(env, *asset == read_loan_token(env)?, Error::AssetMismatch);
    assert_with_error!(env, !has_settlement(env), Error::UnexpectedCallback);

    let params =
        LiquidationParams::from_xdr(env, params).map_err(|_| Error::InvalidCallbackParams)?;

    // totals may have moved since the amount was sized, shares are re-derived
    let market = MorphoClient::new(env, &read_morpho(env)?).market(&params.market_id);
    let repaid_shares = to_shares_down(
        env,
        amount,
        market.total_borrow_assets,
        market.total_borrow_shares,
    )
    .ok_or(Error::MathOverflowError)?;

    let this = env.current_contract_address();
    let expiration_ledger = env.ledger().sequence() + APPROVAL_LEDGERS;
    let loan_token = token::Client::new(env, asset);

    loan_token.approve(&this, &params.pre_liquidation, &amount, &expiration_ledger);

    let (seized_assets, repaid_assets) = PreLiquidationClient::new(env, &params.pre_liquidation)
        .pre_liquidate(&this, &params.borrower, &0, &repaid_shares, &Bytes::new(env));

    let repayment = amount
        .checked_add(premium)
        .ok_or(Error::MathOverflowError)?;
    loan_token.approve(&this, &flash_loan_pool, &repayment, &expiration_ledger);

    log!(
        env,
        "pre-liquidation executed",
        repaid_shares,
        repaid_assets,
        seized_assets
    );

    let settlement = Settlement {
        market_id: params.market_id,
        borrower: params.borrower,
        amount,
        premium,
        repaid_shares,
        repaid_assets,
        seized_assets,
    };

    write_settlement(env, &settlement);
    event::preliquidation_executed(env, &settlement);

    Ok(true)
}
