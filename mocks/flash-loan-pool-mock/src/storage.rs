use soroban_sdk::{contracttype, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    FlashLoanFee,
    SkipCallback,
}

pub fn write_flash_loan_fee(env: &Env, fee: u32) {
    env.storage().instance().set(&DataKey::FlashLoanFee, &fee);
}

pub fn read_flash_loan_fee(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::FlashLoanFee)
        .unwrap_or(0)
}

pub fn write_skip_callback(env: &Env, skip: bool) {
    env.storage().instance().set(&DataKey::SkipCallback, &skip);
}

pub fn read_skip_callback(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::SkipCallback)
        .unwrap_or(false)
}
