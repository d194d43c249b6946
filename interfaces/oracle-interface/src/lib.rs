#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env};

pub struct Spec;

/// Market oracle interface description
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "OracleClient")]
pub trait OracleTrait {
    /// Price of one unit of collateral quoted in loan token units,
    /// scaled by 1e36
    fn price(env: Env) -> i128;
}
