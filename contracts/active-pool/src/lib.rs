#![deny(warnings)]
#![no_std]

use common_ledger::ledger;
use common_ledger::storage::{
    has_collateral_token, read_collateral_balance, read_collateral_token, read_debt_balance,
    write_collateral_token,
};
use common_ledger::{require_authorized, require_positive_amount};
use pool_interface::types::error::Error;
use pool_interface::{ActivePoolTrait, DefaultPoolClient, StabilityPoolClient};
use soroban_sdk::{assert_with_error, contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod storage;

#[cfg(test)]
mod test;

#[contract]
pub struct ActivePool;

#[contractimpl]
impl ActivePoolTrait for ActivePool {
    /// Initializes the Active Pool with its authorized peers and the
    /// collateral token it custodies.
    ///
    /// # Arguments
    ///
    /// - borrower_operations - The address of the borrower operations contract.
    /// - trove_manager - The address of the trove manager contract.
    /// - stability_pool - The address of the stability pool contract.
    /// - default_pool - The address of the default pool contract.
    /// - collateral_token - The address of the custodied collateral token.
    ///
    /// # Panics
    ///
    /// Panics with `AlreadyInitialized` if the pool has already been initialized.
    ///
    fn initialize(
        env: Env,
        borrower_operations: Address,
        trove_manager: Address,
        stability_pool: Address,
        default_pool: Address,
        collateral_token: Address,
    ) -> Result<(), Error> {
        assert_with_error!(env, !has_collateral_token(&env), Error::AlreadyInitialized);

        write_borrower_operations(&env, &borrower_operations);
        write_trove_manager(&env, &trove_manager);
        write_stability_pool(&env, &stability_pool);
        write_default_pool(&env, &default_pool);
        write_collateral_token(&env, &collateral_token);

        event::initialized(&env, &borrower_operations, &trove_manager, &collateral_token);

        Ok(())
    }

    fn version() -> u32 {
        1
    }

    /// Adds `amount` to the recorded debt against the open positions.
    ///
    /// # Panics
    ///
    /// Panics with `Unauthorized` if the caller is neither borrower
    /// operations nor the trove manager.
    /// Panics with `InvalidAmount` if the amount is not positive.
    ///
    fn increase_debt(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        require_authorized(
            &env,
            &who,
            &[read_borrower_operations(&env)?, read_trove_manager(&env)?],
        );
        require_positive_amount(&env, amount);

        let debt = ledger::add_debt(&env, amount)?;
        event::debt_updated(&env, debt);

        Ok(())
    }

    /// Removes `amount` from the recorded debt.
    ///
    /// # Panics
    ///
    /// Panics with `Unauthorized` if the caller is neither borrower
    /// operations nor the trove manager.
    /// Panics with `InsufficientDebt` if the amount exceeds the recorded debt.
    ///
    fn decrease_debt(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        require_authorized(
            &env,
            &who,
            &[read_borrower_operations(&env)?, read_trove_manager(&env)?],
        );
        require_positive_amount(&env, amount);

        let debt = ledger::subtract_debt(&env, amount)?;
        event::debt_updated(&env, debt);

        Ok(())
    }

    /// Pulls `amount` of the collateral token out of `from`'s allowance into
    /// the pool's custody and records it. The only way the recorded balance
    /// grows.
    ///
    /// # Panics
    ///
    /// Panics with `Unauthorized` if `from` is neither borrower operations
    /// nor the default pool.
    /// Panics if the token pull fails; no counter changes persist.
    ///
    fn receive_collateral(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        require_authorized(
            &env,
            &from,
            &[read_borrower_operations(&env)?, read_default_pool(&env)?],
        );
        require_positive_amount(&env, amount);

        ledger::pull_collateral(&env, &from, amount)?;
        event::collateral_received(&env, &from, amount);

        Ok(())
    }

    /// Sends `amount` of collateral to `recipient`. When the recipient is the
    /// default pool or the stability pool, the peer's `receive_collateral`
    /// runs in the same invocation so both counters move in lockstep.
    ///
    /// # Panics
    ///
    /// Panics with `Unauthorized` if the caller is not borrower operations,
    /// the trove manager or the stability pool.
    /// Panics with `InsufficientCollateral` if the amount exceeds the
    /// recorded balance.
    ///
    fn send_collateral(
        env: Env,
        who: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_authorized(
            &env,
            &who,
            &[
                read_borrower_operations(&env)?,
                read_trove_manager(&env)?,
                read_stability_pool(&env)?,
            ],
        );
        require_positive_amount(&env, amount);

        let this = env.current_contract_address();

        if recipient == read_default_pool(&env)? {
            ledger::approve_pull(&env, &recipient, amount)?;
            DefaultPoolClient::new(&env, &recipient).receive_collateral(&this, &amount);
            ledger::debit_collateral(&env, amount)?;
        } else if recipient == read_stability_pool(&env)? {
            ledger::approve_pull(&env, &recipient, amount)?;
            StabilityPoolClient::new(&env, &recipient).receive_collateral(&this, &amount);
            ledger::debit_collateral(&env, amount)?;
        } else {
            ledger::push_collateral(&env, &recipient, amount)?;
        }

        event::collateral_sent(&env, &recipient, amount);

        Ok(())
    }

    fn get_collateral(env: Env) -> i128 {
        read_collateral_balance(&env)
    }

    fn get_debt(env: Env) -> i128 {
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

    fn stability_pool(env: Env) -> Result<Address, Error> {
        read_stability_pool(&env)
    }

    fn default_pool(env: Env) -> Result<Address, Error> {
        read_default_pool(&env)
    }
}
