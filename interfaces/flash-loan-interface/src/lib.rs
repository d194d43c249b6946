#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};

pub struct Spec;

/// Single asset flash loan provider.
/// Sends `amount` of `asset` to `receiver`, invokes its `execute_operation`
/// and pulls `amount + premium` back from `receiver` through allowance.
/// `initiator` must authorize the call and is passed through to the receiver.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanPoolClient")]
pub trait FlashLoanPoolTrait {
    fn flash_loan_simple(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
        referral_code: u32,
    );
}

#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiverTrait {
    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> bool;
}
