#![deny(warnings)]
#![no_std]

use liquidation_receiver_interface::LiquidationReceiverClient;
use morpho_interface::MorphoClient;
use preliquidation_bot_interface::PreLiquidationBotClient;
use preliquidation_bot_interface::types::bot_config::BotConfig;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env};
use types::position_report::PositionReport;

pub mod types;

#[cfg(test)]
mod tests;

#[contract]
pub struct Deployer;

#[contractimpl]
impl Deployer {
    /// Deploys the bot and its flash loan receiver, then initializes both so
    /// that each one trusts the other. Returns (bot, receiver).
    #[allow(clippy::too_many_arguments)]
    pub fn deploy_bot(
        env: Env,
        bot_salt: BytesN<32>,
        bot_wasm_hash: BytesN<32>,
        receiver_salt: BytesN<32>,
        receiver_wasm_hash: BytesN<32>,
        owner: Address,
        morpho: Address,
        flash_loan_pool: Address,
        loan_token: Address,
        pre_liquidation: Option<Address>,
        config: BotConfig,
    ) -> (Address, Address) {
        let bot = env
            .deployer()
            .with_current_contract(bot_salt)
            .deploy(bot_wasm_hash);
        let receiver = env
            .deployer()
            .with_current_contract(receiver_salt)
            .deploy(receiver_wasm_hash);

        initialize_pair(
            &env,
            &bot,
            &receiver,
            &owner,
            &morpho,
            &flash_loan_pool,
            &loan_token,
            &pre_liquidation,
            &config,
        );

        log!(&env, "bot deployed", bot.clone(), receiver.clone(), owner);

        (bot, receiver)
    }

    /// Dumps the market and position state a bot decision is based on and
    /// runs the bot evaluation on it. Evaluation failures are logged and
    /// reported with `evaluated = false`.
    pub fn diagnose(
        env: Env,
        bot: Address,
        morpho: Address,
        market_id: BytesN<32>,
        borrower: Address,
    ) -> PositionReport {
        let morpho = MorphoClient::new(&env, &morpho);

        let market_params = morpho.market_params(&market_id);
        let market = morpho.market(&market_id);
        let position = morpho.position(&market_id, &borrower);

        log!(
            &env,
            "market",
            market_params.lltv,
            market.total_borrow_assets,
            market.total_borrow_shares
        );
        log!(
            &env,
            "position",
            borrower.clone(),
            position.borrow_shares,
            position.collateral
        );

        let mut report = PositionReport {
            lltv: market_params.lltv,
            borrow_shares: position.borrow_shares,
            collateral: position.collateral,
            total_borrow_assets: market.total_borrow_assets,
            total_borrow_shares: market.total_borrow_shares,
            evaluated: false,
            liquidatable: false,
            repay_amount: 0,
            net_profit: 0,
        };

        let bot = PreLiquidationBotClient::new(&env, &bot);

        match bot.try_check_position(&market_id, &borrower) {
            Ok(Ok((liquidatable, repay_amount))) => {
                report.liquidatable = liquidatable;
                report.repay_amount = repay_amount;
            }
            _ => {
                log!(&env, "position evaluation failed", borrower);
                return report;
            }
        }

        match bot.try_simulate_profitability(&market_id, &borrower) {
            Ok(Ok(profitability)) => report.net_profit = profitability.net_profit,
            _ => {
                log!(&env, "profitability simulation failed", borrower);
                return report;
            }
        }

        report.evaluated = true;

        log!(
            &env,
            "position diagnosed",
            report.liquidatable,
            report.repay_amount,
            report.net_profit
        );

        report
    }
}

/// Binds a deployed receiver to its bot and the bot to its receiver
#[allow(clippy::too_many_arguments)]
pub(crate) fn initialize_pair(
    env: &Env,
    bot: &Address,
    receiver: &Address,
    owner: &Address,
    morpho: &Address,
    flash_loan_pool: &Address,
    loan_token: &Address,
    pre_liquidation: &Option<Address>,
    config: &BotConfig,
) {
    LiquidationReceiverClient::new(env, receiver).initialize(
        bot,
        flash_loan_pool,
        morpho,
        loan_token,
    );
    PreLiquidationBotClient::new(env, bot).initialize(
        owner,
        morpho,
        flash_loan_pool,
        receiver,
        loan_token,
        pre_liquidation,
        config,
    );
}
