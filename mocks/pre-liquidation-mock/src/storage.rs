use pre_liquidation_interface::types::pre_liquidation_params::PreLiquidationParams;
use soroban_sdk::{contracttype, Address, BytesN, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Morpho,
    MarketId,
    Params,
}

pub fn write_config(env: &Env, morpho: &Address, market_id: &BytesN<32>, params: &PreLiquidationParams) {
    env.storage().instance().set(&DataKey::Morpho, morpho);
    env.storage().instance().set(&DataKey::MarketId, market_id);
    env.storage().instance().set(&DataKey::Params, params);
}

pub fn read_morpho(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Morpho).unwrap()
}

pub fn read_market_id(env: &Env) -> BytesN<32> {
    env.storage().instance().get(&DataKey::MarketId).unwrap()
}

pub fn read_params(env: &Env) -> PreLiquidationParams {
    env.storage().instance().get(&DataKey::Params).unwrap()
}
