#![deny(warnings)]
#![no_std]

mod storage;

use crate::storage::*;
use common::ORACLE_PRICE_SCALE;
use oracle_interface::OracleTrait;
use soroban_sdk::{contract, contractimpl, Env};

#[contract]
pub struct OracleMock;

#[contractimpl]
impl OracleTrait for OracleMock {
    /// Defaults to 1:1 until a price is set
    fn price(env: Env) -> i128 {
        read_price(&env).unwrap_or(ORACLE_PRICE_SCALE)
    }
}

#[contractimpl]
impl OracleMock {
    pub fn set_price(env: Env, price: i128) {
        write_price(&env, price);
    }
}
