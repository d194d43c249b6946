use common::{
    mul_div_ceil, mul_div_floor, percent_mul, to_assets_up, Wad, ORACLE_PRICE_SCALE, WAD,
};
use morpho_interface::MorphoClient;
use oracle_interface::OracleClient;
use preliquidation_bot_interface::types::bot_config::BotConfig;
use preliquidation_bot_interface::types::error::Error;
use soroban_sdk::{assert_with_error, log, Address, BytesN, Env};

use crate::types::evaluation::{Evaluation, PositionData};

/// Reads the borrower position and prices it against the market oracle.
/// Returns None when there is no debt or no collateral.
pub fn calc_position_data(
    env: &Env,
    morpho: &Address,
    market_id: &BytesN<32>,
    borrower: &Address,
) -> Result<Option<PositionData>, Error> {
    let morpho = MorphoClient::new(env, morpho);

    let market_params = morpho.market_params(market_id);
    let position = morpho.position(market_id, borrower);
    let market = morpho.market(market_id);

    let debt = to_assets_up(
        env,
        position.borrow_shares,
        market.total_borrow_assets,
        market.total_borrow_shares,
    )
    .ok_or(Error::MathOverflowError)?;

    if debt == 0 || position.collateral == 0 {
        return Ok(None);
    }

    let price = OracleClient::new(env, &market_params.oracle).price();
    assert_with_error!(env, price > 0, Error::InvalidOraclePrice);

    let collateral_value = calc_collateral_value(env, position.collateral, price)?;

    // dust collateral valued at zero is maximally unhealthy
    let ltv = if collateral_value == 0 {
        Wad::MAX
    } else {
        Wad::from_inner(
            mul_div_ceil(env, debt, WAD, collateral_value).ok_or(Error::MathOverflowError)?,
        )
    };

    log!(
        env,
        "position evaluated",
        borrower.clone(),
        debt,
        position.collateral,
        collateral_value,
        ltv.into_inner()
    );

    Ok(Some(PositionData {
        market_params,
        debt,
        collateral: position.collateral,
        collateral_value,
        ltv,
    }))
}

/// collateral * price / ORACLE_PRICE_SCALE, rounded down
pub fn calc_collateral_value(env: &Env, collateral: i128, price: i128) -> Result<i128, Error> {
    mul_div_floor(env, collateral, price, ORACLE_PRICE_SCALE).ok_or(Error::MathOverflowError)
}

/// Position is liquidatable when its ltv is strictly above the threshold.
/// The suggested repay amount is `repay_factor` of the debt.
pub fn evaluate(
    env: &Env,
    morpho: &Address,
    config: &BotConfig,
    market_id: &BytesN<32>,
    borrower: &Address,
) -> Result<Evaluation, Error> {
    let position = match calc_position_data(env, morpho, market_id, borrower)? {
        Some(position) => position,
        None => return Ok(Evaluation::empty()),
    };

    let liquidatable = position.ltv > Wad::from_inner(config.ltv_threshold);
    let repay_amount = if liquidatable {
        percent_mul(position.debt, config.repay_factor).ok_or(Error::MathOverflowError)?
    } else {
        0
    };

    Ok(Evaluation {
        position: Some(position),
        liquidatable,
        repay_amount,
    })
}
