use preliquidation_bot_interface::types::error::Error;
use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

/// Allowances given inside the callback only need to outlive the transaction
pub(crate) const APPROVAL_LEDGERS: u32 = 20;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Bot,
    FlashLoanPool,
    Morpho,
    LoanToken,
    Settlement,
}

fn read_address(env: &Env, key: &DataKey) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(key)
        .ok_or(Error::Uninitialized)
}

fn write_address(env: &Env, key: &DataKey, address: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(key, address);
}

pub fn has_bot(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Bot)
}

pub fn write_bot(env: &Env, bot: &Address) {
    write_address(env, &DataKey::Bot, bot);
}

pub fn read_bot(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::Bot)
}

pub fn write_flash_loan_pool(env: &Env, pool: &Address) {
    write_address(env, &DataKey::FlashLoanPool, pool);
}

pub fn read_flash_loan_pool(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::FlashLoanPool)
}

pub fn write_morpho(env: &Env, morpho: &Address) {
    write_address(env, &DataKey::Morpho, morpho);
}

pub fn read_morpho(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::Morpho)
}

pub fn write_loan_token(env: &Env, loan_token: &Address) {
    write_address(env, &DataKey::LoanToken, loan_token);
}

pub fn read_loan_token(env: &Env) -> Result<Address, Error> {
    read_address(env, &DataKey::LoanToken)
}

pub fn has_settlement(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::Settlement)
}

pub fn write_settlement(env: &Env, settlement: &Settlement) {
    env.storage()
        .temporary()
        .set(&DataKey::Settlement, settlement);
}

pub fn take_settlement(env: &Env) -> Option<Settlement> {
    let settlement = env.storage().temporary().get(&DataKey::Settlement);

    if settlement.is_some() {
        env.storage().temporary().remove(&DataKey::Settlement);
    }

    settlement
}
