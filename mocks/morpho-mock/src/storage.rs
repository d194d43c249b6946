use morpho_interface::types::market::Market;
use morpho_interface::types::market_params::MarketParams;
use morpho_interface::types::position::Position;
use soroban_sdk::{contracttype, Address, BytesN, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    MarketParams(BytesN<32>),
    MarketId(MarketParams),
    Market(BytesN<32>),
    Position(BytesN<32>, Address),
}

pub fn write_market_params(env: &Env, id: &BytesN<32>, params: &MarketParams) {
    env.storage()
        .instance()
        .set(&DataKey::MarketParams(id.clone()), params);
    env.storage()
        .instance()
        .set(&DataKey::MarketId(params.clone()), id);
}

pub fn read_market_params(env: &Env, id: &BytesN<32>) -> MarketParams {
    env.storage()
        .instance()
        .get(&DataKey::MarketParams(id.clone()))
        .unwrap()
}

pub fn read_market_id(env: &Env, params: &MarketParams) -> BytesN<32> {
    env.storage()
        .instance()
        .get(&DataKey::MarketId(params.clone()))
        .unwrap()
}

pub fn write_market(env: &Env, id: &BytesN<32>, market: &Market) {
    env.storage()
        .instance()
        .set(&DataKey::Market(id.clone()), market);
}

pub fn read_market(env: &Env, id: &BytesN<32>) -> Market {
    env.storage()
        .instance()
        .get(&DataKey::Market(id.clone()))
        .unwrap_or_default()
}

pub fn write_position(env: &Env, id: &BytesN<32>, user: &Address, position: &Position) {
    env.storage()
        .instance()
        .set(&DataKey::Position(id.clone(), user.clone()), position);
}

pub fn read_position(env: &Env, id: &BytesN<32>, user: &Address) -> Position {
    env.storage()
        .instance()
        .get(&DataKey::Position(id.clone(), user.clone()))
        .unwrap_or_default()
}
