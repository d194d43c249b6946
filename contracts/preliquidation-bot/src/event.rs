use preliquidation_bot_interface::types::bot_config::BotConfig;
use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::{Address, BytesN, Env, Symbol};

use crate::types::evaluation::PositionData;

pub(crate) fn initialized(e: &Env, owner: &Address, receiver: &Address, config: &BotConfig) {
    let topics = (Symbol::new(e, "initialize"), owner, receiver);
    e.events().publish(
        topics,
        (
            config.ltv_threshold,
            config.repay_factor,
            config.flash_loan_fee,
        ),
    );
}

pub(crate) fn config_changed(e: &Env, config: &BotConfig) {
    let topics = (Symbol::new(e, "config_changed"),);
    e.events().publish(
        topics,
        (
            config.ltv_threshold,
            config.repay_factor,
            config.flash_loan_fee,
        ),
    );
}

pub(crate) fn pre_liquidation_changed(e: &Env, pre_liquidation: &Option<Address>) {
    let topics = (Symbol::new(e, "pre_liquidation_changed"),);
    e.events().publish(topics, pre_liquidation.clone());
}

pub(crate) fn position_checked(
    e: &Env,
    market_id: &BytesN<32>,
    borrower: &Address,
    position: &PositionData,
    liquidatable: bool,
) {
    let topics = (Symbol::new(e, "position_checked"), market_id.clone(), borrower.clone());
    e.events().publish(
        topics,
        (
            position.debt,
            position.collateral,
            position.collateral_value,
            position.ltv.into_inner(),
            liquidatable,
        ),
    );
}

pub(crate) fn flash_loan_requested(
    e: &Env,
    market_id: &BytesN<32>,
    borrower: &Address,
    asset: &Address,
    amount: i128,
) {
    let topics = (Symbol::new(e, "flash_loan_requested"), market_id.clone(), borrower.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn preliquidation_settled(e: &Env, settlement: &Settlement) {
    let topics = (
        Symbol::new(e, "preliquidation_settled"),
        settlement.market_id.clone(),
        settlement.borrower.clone(),
    );
    e.events().publish(
        topics,
        (
            settlement.amount,
            settlement.premium,
            settlement.repaid_assets,
            settlement.seized_assets,
        ),
    );
}

pub(crate) fn token_recovered(e: &Env, token: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "token_recovered"), token.clone());
    e.events().publish(topics, (to.clone(), amount));
}
