#![deny(warnings)]
#![no_std]

use common_ledger::ledger;
use common_ledger::storage::{
    has_collateral_token, read_collateral_balance, read_collateral_token, read_debt_balance,
    write_collateral_token,
};
use common_ledger::{require_authorized, require_positive_amount};
use pool_interface::types::error::Error;
use pool_interface::StabilityPoolTrait;
use soroban_sdk::{assert_with_error, contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod storage;


#[contract]
pub struct StabilityPool;

#[contractimpl]
impl StabilityPoolTrait for StabilityPool {
    /// Initializes the Stability Pool with its authorized peers and the
    /// collateral token it custodies.
    ///
    /// # Panics
    ///
    /// Panics with `AlreadyInitialized` if the pool has already been initialized.
    ///
    fn initialize(
        env: Env,
        borrower_operations: Address,
        trove_manager: Address,
        active_pool: Address,
        collateral_token: Address,
    ) -> Result<(), Error> {
        assert_with_error!(env, !has_collateral_token(&env), Error::AlreadyInitialized);

        write_borrower_operations(&env, &borrower_operations);
        write_trove_manager(&env, &trove_manager);
        write_active_pool(&env, &active_pool);
        write_collateral_token(&env, &collateral_token);

        event::initialized(&env, &trove_manager, &active_pool, &collateral_token);

        Ok(())
    }

    fn version() -> u32 {
        1
    }

    /// Adds `amount` to the recorded pooled deposits. Trove manager only.
    fn increase_total_deposits(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        require_authorized(&env, &who, &[read_trove_manager(&env)?]);
        require_positive_amount(&env, amount);

        let total = ledger::add_debt(&env, amount)?;
        event::deposits_updated(&env, total);

        Ok(())
    }

    /// Removes `amount` from the recorded pooled deposits.
    ///
    /// # Panics
    ///
    /// Panics with `InsufficientDebt` if the amount exceeds the recorded
    /// deposits.
    ///
    fn decrease_total_deposits(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        require_authorized(&env, &who, &[read_trove_manager(&env)?]);
        require_positive_amount(&env, amount);

        let total = ledger::subtract_debt(&env, amount)?;
        event::deposits_updated(&env, total);

        Ok(())
    }

    /// Pulls `amount` of the collateral token out of `from`'s allowance into
    /// the pool's custody and records it. Active pool only.
    fn receive_collateral(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        require_authorized(&env, &from, &[read_active_pool(&env)?]);
        require_positive_amount(&env, amount);

        ledger::pull_collateral(&env, &from, amount)?;
        event::collateral_received(&env, &from, amount);

        Ok(())
    }

    fn get_collateral(env: Env) -> i128 {
        read_collateral_balance(&env)
    }

    fn get_total_deposits(env: Env) -> i128 {
        read_debt_balance(&env)
    }

    fn get_collateral_token_address(env: Env) -> Result<Address, Error> {
        read_collateral_token(&env)
    }

    fn borrower_operations(env: Env) -> Result<Address, Error> {
        read_borrower_operations(&env)
    }

    fn trove_manager(env: Env) -> Result<Address, Error> {
        read_trove_manager(&env)
    }

    fn active_pool(env: Env) -> Result<Address, Error> {
        read_active_pool(&env)
    }
}
