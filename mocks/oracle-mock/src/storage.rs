use soroban_sdk::{contracttype, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Price,
}

pub fn write_price(env: &Env, price: i128) {
    env.storage().instance().set(&DataKey::Price, &price);
}

pub fn read_price(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::Price)
}
