#![deny(warnings)]
#![no_std]

use common_ledger::ledger;
use common_ledger::storage::{
    has_collateral_token, read_collateral_balance, read_collateral_token, read_debt_balance,
    write_collateral_token,
};
use common_ledger::{require_authorized, require_positive_amount};
use pool_interface::types::error::Error;
use pool_interface::{ActivePoolClient, DefaultPoolTrait};
use soroban_sdk::{assert_with_error, contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod storage;


#[contract]
pub struct DefaultPool;

#[contractimpl]
impl DefaultPoolTrait for DefaultPool {
    /// Initializes the Default Pool with its authorized peers and the
    /// collateral token it custodies.
    ///
    /// # Panics
    ///
    /// Panics with `AlreadyInitialized` if the pool has already been initialized.
    ///
    fn initialize(
        env: Env,
        trove_manager: Address,
        active_pool: Address,
        collateral_token: Address,
    ) -> Result<(), Error> {
        assert_with_error!(env, !has_collateral_token(&env), Error::AlreadyInitialized);

        write_trove_manager(&env, &trove_manager);
        write_active_pool(&env, &active_pool);
        write_collateral_token(&env, &collateral_token);

        event::initialized(&env, &trove_manager, &active_pool, &collateral_token);

        Ok(())
    }

    fn version() -> u32 {
        1
    }

    /// Adds `amount` to the debt staged for redistribution. Trove manager only.
    fn increase_debt(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        require_authorized(&env, &who, &[read_trove_manager(&env)?]);
        require_positive_amount(&env, amount);

        let debt = ledger::add_debt(&env, amount)?;
        event::debt_updated(&env, debt);

        Ok(())
    }

    /// Removes `amount` from the staged debt, flooring at zero: the
    /// redistribution math upstream rounds, and the resulting dust must not
    /// halt a liquidation.
    fn decrease_debt(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        require_authorized(&env, &who, &[read_trove_manager(&env)?]);
        require_positive_amount(&env, amount);

        let debt = ledger::subtract_debt_clamped(&env, amount);
        event::debt_updated(&env, debt);

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

    /// Moves `amount` of absorbed collateral back into general custody by
    /// crediting the Active Pool's `receive_collateral` in the same
    /// invocation. Trove manager only.
    ///
    /// # Panics
    ///
    /// Panics with `InsufficientCollateral` if the amount exceeds the
    /// recorded balance.
    ///
    fn send_collateral_to_active_pool(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        require_authorized(&env, &who, &[read_trove_manager(&env)?]);
        require_positive_amount(&env, amount);

        let active_pool = read_active_pool(&env)?;
        let this = env.current_contract_address();

        ledger::approve_pull(&env, &active_pool, amount)?;
        ActivePoolClient::new(&env, &active_pool).receive_collateral(&this, &amount);
        ledger::debit_collateral(&env, amount)?;

        event::collateral_sent(&env, &active_pool, amount);

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

    fn trove_manager(env: Env) -> Result<Address, Error> {
        read_trove_manager(&env)
    }

    fn active_pool(env: Env) -> Result<Address, Error> {
        read_active_pool(&env)
    }
}
