#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::error::Error;

pub mod types;

pub struct ActivePoolSpec;
pub struct DefaultPoolSpec;
pub struct StabilityPoolSpec;

pub use active_pool_iface::{ActivePoolClient, ActivePoolTrait};
pub use default_pool_iface::{DefaultPoolClient, DefaultPoolTrait};
pub use stability_pool_iface::{StabilityPoolClient, StabilityPoolTrait};

mod active_pool_iface {
use super::*;

/// Interface for the Active Pool: custody of collateral backing open
/// positions and the debt issued against them.
#[contractspecfn(name = "ActivePoolSpec", export = false)]
#[contractclient(name = "ActivePoolClient")]
pub trait ActivePoolTrait {
    fn initialize(
        env: Env,
        borrower_operations: Address,
        trove_manager: Address,
        stability_pool: Address,
        default_pool: Address,
        collateral_token: Address,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn increase_debt(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn decrease_debt(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn receive_collateral(env: Env, from: Address, amount: i128) -> Result<(), Error>;

    fn send_collateral(env: Env, who: Address, recipient: Address, amount: i128)
        -> Result<(), Error>;

    fn get_collateral(env: Env) -> i128;

    fn get_debt(env: Env) -> i128;

    fn get_collateral_token_address(env: Env) -> Result<Address, Error>;

    fn borrower_operations(env: Env) -> Result<Address, Error>;

    fn trove_manager(env: Env) -> Result<Address, Error>;

    fn stability_pool(env: Env) -> Result<Address, Error>;

    fn default_pool(env: Env) -> Result<Address, Error>;
}
}

mod default_pool_iface {
use super::*;

/// Interface for the Default Pool: collateral and debt detached from
/// liquidated positions, staged for redistribution.
#[contractspecfn(name = "DefaultPoolSpec", export = false)]
#[contractclient(name = "DefaultPoolClient")]
pub trait DefaultPoolTrait {
    fn initialize(
        env: Env,
        trove_manager: Address,
        active_pool: Address,
        collateral_token: Address,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn increase_debt(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn decrease_debt(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn receive_collateral(env: Env, from: Address, amount: i128) -> Result<(), Error>;

    fn send_collateral_to_active_pool(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn get_collateral(env: Env) -> i128;

    fn get_debt(env: Env) -> i128;

    fn get_collateral_token_address(env: Env) -> Result<Address, Error>;

    fn trove_manager(env: Env) -> Result<Address, Error>;

    fn active_pool(env: Env) -> Result<Address, Error>;
}
} // end default_pool_iface

mod stability_pool_iface {
use super::*;

/// Interface for the Stability Pool: pooled deposits and the collateral
/// accrued to them from liquidations.
#[contractspecfn(name = "StabilityPoolSpec", export = false)]
#[contractclient(name = "StabilityPoolClient")]
pub trait StabilityPoolTrait {
    fn initialize(
        env: Env,
        borrower_operations: Address,
        trove_manager: Address,
        active_pool: Address,
        collateral_token: Address,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn increase_total_deposits(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn decrease_total_deposits(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn receive_collateral(env: Env, from: Address, amount: i128) -> Result<(), Error>;

    fn get_collateral(env: Env) -> i128;

    fn get_total_deposits(env: Env) -> i128;

    fn get_collateral_token_address(env: Env) -> Result<Address, Error>;

    fn borrower_operations(env: Env) -> Result<Address, Error>;

    fn trove_manager(env: Env) -> Result<Address, Error>;

    fn active_pool(env: Env) -> Result<Address, Error>;
}
} // end stability_pool_iface
