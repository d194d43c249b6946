extern crate std;

use soroban_sdk::testutils::{AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{vec, Env, IntoVal, Symbol};

use crate::tests::sut::{init_receiver, AMOUNT, PREMIUM};

#[test]
fn should_require_bot() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_receiver(&env);

    sut.receiver.take_settlement();

    assert_eq!(
        env.auths(),
        [(
            sut.bot.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    sut.receiver.address.clone(),
                    Symbol::new(&env, "take_settlement"),
                    vec![&env]
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
}

#[test]
fn should_clear_settlement() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_receiver(&env);

    assert_eq!(sut.receiver.take_settlement(), None);

    sut.receiver.execute_operation(
        &sut.loan_token.address,
        &AMOUNT,
        &PREMIUM,
        &sut.bot,
        &sut.params(&env),
    );

    assert!(sut.receiver.take_settlement().is_some());
    assert_eq!(sut.receiver.take_settlement(), None);
}

#[test]
fn should_require_bot_to_recover_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_receiver(&env);

    let recovered = sut
        .receiver
        .recover_token(&sut.loan_token.address, &sut.bot);

    assert_eq!(
        env.auths(),
        [(
            sut.bot.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    sut.receiver.address.clone(),
                    Symbol::new(&env, "recover_token"),
                    vec![
                        &env,
                        sut.loan_token.address.into_val(&env),
                        sut.bot.into_val(&env)
                    ]
                )),
                sub_invocations: std::vec![]
            }
        )]
    );

    assert_eq!(recovered, AMOUNT + PREMIUM);
    assert_eq!(sut.loan_token.balance(&sut.bot), AMOUNT + PREMIUM);
}
