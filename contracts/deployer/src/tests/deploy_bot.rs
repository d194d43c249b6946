extern crate std;

use liquidation_receiver::LiquidationReceiver;
use liquidation_receiver_interface::LiquidationReceiverClient;
use preliquidation_bot::PreLiquidationBot;
use preliquidation_bot_interface::types::bot_config::BotConfig;
use preliquidation_bot_interface::PreLiquidationBotClient;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{vec, Address, Env, Symbol};

use crate::{initialize_pair, Deployer};

struct Sut<'a> {
    deployer: Address,
    owner: Address,
    morpho: Address,
    flash_loan_pool: Address,
    loan_token: Address,
    pre_liquidation: Option<Address>,
    bot: PreLiquidationBotClient<'a>,
    receiver: LiquidationReceiverClient<'a>,
}

impl<'a> Sut<'a> {
    fn initialize_pair(&self, env: &Env) {
        env.as_contract(&self.deployer, || {
            initialize_pair(
                env,
                &self.bot.address,
                &self.receiver.address,
                &self.owner,
                &self.morpho,
                &self.flash_loan_pool,
                &self.loan_token,
                &self.pre_liquidation,
                &BotConfig::default(),
            )
        });
    }
}

fn init<'a>(env: &Env) -> Sut<'a> {
    Sut {
        deployer: env.register_contract(None, Deployer),
        owner: Address::generate(env),
        morpho: Address::generate(env),
        flash_loan_pool: Address::generate(env),
        loan_token: Address::generate(env),
        pre_liquidation: Some(Address::generate(env)),
        bot: PreLiquidationBotClient::new(env, &env.register_contract(None, PreLiquidationBot)),
        receiver: LiquidationReceiverClient::new(
            env,
            &env.register_contract(None, LiquidationReceiver),
        ),
    }
}

#[test]
fn should_bind_bot_to_receiver() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init(&env);
    sut.initialize_pair(&env);

    assert_eq!(sut.bot.owner(), sut.owner);
    assert_eq!(sut.bot.receiver(), sut.receiver.address);
    assert_eq!(sut.bot.pre_liquidation(), sut.pre_liquidation);
    assert_eq!(sut.bot.config(), BotConfig::default());
}

#[test]
fn should_bind_receiver_to_bot() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init(&env);
    sut.initialize_pair(&env);

    assert_eq!(sut.receiver.take_settlement(), None);

    assert_eq!(
        env.auths(),
        [(
            sut.bot.address.clone(),
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
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_not_initialize_pair_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init(&env);
    sut.initialize_pair(&env);
    sut.initialize_pair(&env);
}
