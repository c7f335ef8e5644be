#![deny(warnings)]
#![no_std]

use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env};

pub mod ledger;
pub mod storage;


/// Guard for every mutating entry point: the caller proves its identity and
/// must be one of the addresses wired at initialization.
pub fn require_authorized(env: &Env, who: &Address, allowed: &[Address]) {
    who.require_auth();

    assert_with_error!(env, allowed.iter().any(|a| a == who), Error::Unauthorized);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}
