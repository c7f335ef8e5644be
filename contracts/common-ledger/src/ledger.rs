use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

use crate::storage::{
    read_collateral_balance, read_collateral_token, read_debt_balance, write_collateral_balance,
    write_debt_balance,
};

// Allowances granted for a cross-pool move are consumed within the same
// invocation; one ledger of lifetime is all they need.
const PEER_ALLOWANCE_TTL_LEDGERS: u32 = 1;

pub fn add_debt(env: &Env, amount: i128) -> Result<i128, Error> {
    let debt = read_debt_balance(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_debt_balance(env, debt);

    Ok(debt)
}

pub fn subtract_debt(env: &Env, amount: i128) -> Result<i128, Error> {
    let debt = read_debt_balance(env);
    assert_with_error!(env, amount <= debt, Error::InsufficientDebt);

    let debt = debt - amount;
    write_debt_balance(env, debt);

    Ok(debt)
}

/// Decrease that floors at zero instead of failing: redistribution rounding
/// can leave debt dust below the smallest external increment.
pub fn subtract_debt_clamped(env: &Env, amount: i128) -> i128 {
    let debt = read_debt_balance(env)
        .checked_sub(amount)
        .map_or(0, |d| d.max(0));

    write_debt_balance(env, debt);

    debt
}

/// Pulls `amount` of the collateral token out of `from`'s prior allowance
/// into the pool's custody. The counter moves only once the transfer has
/// succeeded; a failed pull aborts the invocation with the counter untouched.
pub fn pull_collateral(env: &Env, from: &Address, amount: i128) -> Result<i128, Error> {
    let token = read_collateral_token(env)?;
    let this = env.current_contract_address();

    token::Client::new(env, &token).transfer_from(&this, from, &this, &amount);

    let balance = read_collateral_balance(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    write_collateral_balance(env, balance);

    Ok(balance)
}

/// Pushes `amount` of the collateral token to an external recipient and
/// decreases the counter. Fails when `amount` exceeds the recorded balance.
pub fn push_collateral(env: &Env, to: &Address, amount: i128) -> Result<i128, Error> {
    let balance = read_collateral_balance(env);
    assert_with_error!(env, amount <= balance, Error::InsufficientCollateral);

    let token = read_collateral_token(env)?;
    token::Client::new(env, &token).transfer(&env.current_contract_address(), to, &amount);

    let balance = balance - amount;
    write_collateral_balance(env, balance);

    Ok(balance)
}

/// Decrement half of a cross-pool move: the receiving pool has already
/// pulled the tokens, only the local counter moves here.
pub fn debit_collateral(env: &Env, amount: i128) -> Result<i128, Error> {
    let balance = read_collateral_balance(env);
    assert_with_error!(env, amount <= balance, Error::InsufficientCollateral);

    let balance = balance - amount;
    write_collateral_balance(env, balance);

    Ok(balance)
}

/// Grants a peer pool the pull-allowance it consumes in `pull_collateral`.
pub fn approve_pull(env: &Env, spender: &Address, amount: i128) -> Result<(), Error> {
    let token = read_collateral_token(env)?;
    let live_until = env.ledger().sequence() + PEER_ALLOWANCE_TTL_LEDGERS;

    token::Client::new(env, &token).approve(
        &env.current_contract_address(),
        spender,
        &amount,
        &live_until,
    );

    Ok(())
}
