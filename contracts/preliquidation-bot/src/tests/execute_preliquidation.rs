extern crate std;

use morpho_interface::types::market_params::MarketParams;
use morpho_interface::types::position::Position;
use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, Events};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use crate::tests::sut::{init_bot, set_position, ONE, POOL_LIQUIDITY, RECEIVER_BUFFER};

#[test]
fn should_pre_liquidate_position() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    let settlement = sut
        .bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);

    assert_eq!(
        settlement,
        Settlement {
            market_id: sut.market_id.clone(),
            borrower: sut.borrower.clone(),
            amount: 1_686_125_000,
            premium: 1_517_512,
            repaid_shares: 1_686_125_000_000_000,
            repaid_assets: 1_686_125_000,
            seized_assets: 1_770_431_250,
        }
    );

    assert_eq!(
        sut.morpho.position(&sut.market_id, &sut.borrower),
        Position {
            supply_shares: 0,
            borrow_shares: 7_063_875_000_000_000,
            collateral: 8_229_568_750,
        }
    );

    assert_eq!(
        sut.loan_token.balance(&sut.flash_loan_pool.address),
        POOL_LIQUIDITY + 1_517_512
    );
    assert_eq!(
        sut.loan_token.balance(&sut.receiver.address),
        RECEIVER_BUFFER - 1_686_125_000 - 1_517_512
    );
    assert_eq!(sut.loan_token.balance(&sut.morpho.address), 1_686_125_000);
    assert_eq!(
        sut.collateral_token.balance(&sut.receiver.address),
        1_770_431_250
    );
    assert_eq!(sut.loan_token.balance(&sut.bot.address), 0);
}

#[test]
fn should_require_owner() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    sut.bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);

    let (address, invocation) = env.auths().pop().unwrap();

    assert_eq!(address, sut.owner);
    assert_eq!(
        invocation.function,
        AuthorizedFunction::Contract((
            sut.bot.address.clone(),
            Symbol::new(&env, "execute_preliquidation"),
            vec![
                &env,
                sut.market_id.into_val(&env),
                sut.borrower.into_val(&env)
            ]
        ))
    );
}

#[test]
fn should_return_to_idle_after_execution() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    sut.bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);

    // ltv 0.858 after the first round, still above threshold
    let (liquidatable, repay_amount) = sut.bot.check_position(&sut.market_id, &sut.borrower);
    assert!(liquidatable);
    assert_eq!(repay_amount, 1_361_208_712);

    let settlement = sut
        .bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);

    assert_eq!(settlement.amount, 1_361_208_712);
    assert_eq!(sut.receiver.take_settlement(), None);
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    sut.bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.bot.address.clone(),
                (
                    Symbol::new(&env, "preliquidation_settled"),
                    sut.market_id.clone(),
                    sut.borrower.clone()
                )
                    .into_val(&env),
                (
                    1_686_125_000i128,
                    1_517_512i128,
                    1_686_125_000i128,
                    1_770_431_250i128
                )
                    .into_val(&env)
            ),
        ]
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_position_is_healthy() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 1_000 * ONE, 1_300 * ONE);

    sut.bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_position_is_empty() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);

    sut.bot
        .execute_preliquidation(&sut.market_id, &Address::generate(&env));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #106)")]
fn should_fail_without_pre_liquidation_contract() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, false);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    sut.bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #104)")]
fn should_fail_when_callback_is_not_executed() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);
    sut.flash_loan_pool.set_skip_callback(&true);

    sut.bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_when_market_lends_other_token() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    let market_params = sut.morpho.market_params(&sut.market_id);
    sut.morpho.create_market(
        &sut.market_id,
        &MarketParams {
            loan_token: Address::generate(&env),
            ..market_params
        },
    );

    sut.bot
        .execute_preliquidation(&sut.market_id, &sut.borrower);
}

#[test]
fn should_not_change_balances_when_unauthorized() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    env.set_auths(&[]);

    assert!(sut
        .bot
        .try_execute_preliquidation(&sut.market_id, &sut.borrower)
        .is_err());

    assert_eq!(
        sut.loan_token.balance(&sut.flash_loan_pool.address),
        POOL_LIQUIDITY
    );
    assert_eq!(sut.collateral_token.balance(&sut.receiver.address), 0);
}

#[test]
fn should_fail_when_receiver_cannot_cover_repayment() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_bot(&env, true);
    set_position(&env, &sut, 875 * ONE, 1_000 * ONE);

    sut.bot.recover_token(&sut.loan_token.address);
    assert_eq!(sut.loan_token.balance(&sut.receiver.address), 0);

    assert!(sut
        .bot
        .try_execute_preliquidation(&sut.market_id, &sut.borrower)
        .is_err());

    assert_eq!(
        sut.loan_token.balance(&sut.flash_loan_pool.address),
        POOL_LIQUIDITY
    );
    assert_eq!(
        sut.morpho.position(&sut.market_id, &sut.borrower).collateral,
        1_000 * ONE
    );
}
