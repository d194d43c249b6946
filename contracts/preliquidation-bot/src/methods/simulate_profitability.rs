use common::{liquidation_incentive_factor, percent_mul, Wad};
use preliquidation_bot_interface::types::error::Error;
use preliquidation_bot_interface::types::profitability::Profitability;
use soroban_sdk::{assert_with_error, log, Address, BytesN, Env};

use crate::storage::{read_config, read_morpho};

use super::utils::evaluate::evaluate;
use super::utils::pre_liquidation_bounds::read_pre_liquidation_bounds;

pub fn simulate_profitability(
    env: &Env,
    market_id: &BytesN<32>,
    borrower: &Address,
) -> Result<Profitability, Error> {
    let config = read_config(env)?;
    let morpho = read_morpho(env)?;

    let evaluation = evaluate(env, &morpho, &config, market_id, borrower)?;

    let position = match evaluation.position {
        Some(position) if evaluation.liquidatable => position,
        _ => return Ok(Profitability::default()),
    };

    let bounds = read_pre_liquidation_bounds(env);
    let lltv = Wad::from_inner(position.market_params.lltv);

    assert_with_error!(
        env,
        lltv > bounds.pre_lltv,
        Error::InvalidPreLiquidationParams
    );

    let incentive_factor = liquidation_incentive_factor(
        position.ltv,
        bounds.pre_lltv,
        lltv,
        bounds.pre_lif_1,
        bounds.pre_lif_2,
    )
    .ok_or(Error::MathOverflowError)?;

    let repay_amount = evaluation.repay_amount;
    let seized_amount = incentive_factor
        .mul_int(env, repay_amount)
        .ok_or(Error::MathOverflowError)?;
    let flash_loan_fee =
        percent_mul(repay_amount, config.flash_loan_fee).ok_or(Error::MathOverflowError)?;

    let net_profit = seized_amount
        .checked_sub(repay_amount)
        .and_then(|profit| profit.checked_sub(flash_loan_fee))
        .ok_or(Error::MathOverflowError)?
        .max(0);

    log!(
        env,
        "profitability simulated",
        incentive_factor.into_inner(),
        repay_amount,
        seized_amount,
        flash_loan_fee,
        net_profit
    );

    Ok(Profitability {
        repay_amount,
        seized_amount,
        flash_loan_fee,
        net_profit,
    })
}
