#![deny(warnings)]
#![no_std]

use common::percent_mul;
use flash_loan_interface::{FlashLoanPoolTrait, FlashLoanReceiverClient};
use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Bytes, Env};
use storage::{read_flash_loan_fee, read_skip_callback, write_flash_loan_fee, write_skip_callback};

mod storage;

#[contract]
pub struct FlashLoanPoolMock;

#[contractimpl]
impl FlashLoanPoolTrait for FlashLoanPoolMock {
    fn flash_loan_simple(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
        _referral_code: u32,
    ) {
        initiator.require_auth();

        if read_skip_callback(&env) {
            return;
        }

        let premium = percent_mul(amount, read_flash_loan_fee(&env)).unwrap();
        let token_client = token::Client::new(&env, &asset);

        token_client.transfer(&env.current_contract_address(), &receiver, &amount);

        let loan_received = FlashLoanReceiverClient::new(&env, &receiver).execute_operation(
            &asset,
            &amount,
            &premium,
            &initiator,
            &params,
        );
        assert!(loan_received);

        token_client.transfer_from(
            &env.current_contract_address(),
            &receiver,
            &env.current_contract_address(),
            &(amount + premium),
        );

        let topics = (symbol_short!("flash"), initiator, receiver);
        env.events().publish(topics, (asset, amount, premium));
    }
}

#[contractimpl]
impl FlashLoanPoolMock {
    /// Premium in basis points
    pub fn set_flash_loan_fee(env: Env, fee: u32) {
        write_flash_loan_fee(&env, fee);
    }

    /// Returns without lending or calling the receiver
    pub fn set_skip_callback(env: Env, skip: bool) {
        write_skip_callback(&env, skip);
    }
}
