#![cfg(test)]
#![allow(deprecated)]
extern crate std;

use pool_interface::types::error::Error;
use pool_interface::{ActivePoolClient, DefaultPoolClient, StabilityPoolClient};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::token::StellarAssetClient as TokenAdminClient;
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use crate::ActivePool;
use default_pool::DefaultPool;
use stability_pool::StabilityPool;

struct Sut<'a> {
    pool: ActivePoolClient<'a>,
    token: TokenClient<'a>,
    token_admin: TokenAdminClient<'a>,
    borrower_operations: Address,
    trove_manager: Address,
    stability_pool: Address,
    default_pool: Address,
}

fn init_pool<'a>(env: &Env) -> Sut<'a> {
    let token_admin = Address::generate(env);
    let token_address = env.register_stellar_asset_contract(token_admin.clone());

    let pool = ActivePoolClient::new(env, &env.register_contract(None, ActivePool));

    let borrower_operations = Address::generate(env);
    let trove_manager = Address::generate(env);
    let stability_pool = Address::generate(env);
    let default_pool = Address::generate(env);

    pool.initialize(
        &borrower_operations,
        &trove_manager,
        &stability_pool,
        &default_pool,
        &token_address,
    );

    Sut {
        pool,
        token: TokenClient::new(env, &token_address),
        token_admin: TokenAdminClient::new(env, &token_address),
        borrower_operations,
        trove_manager,
        stability_pool,
        default_pool,
    }
}

fn fund_pool(env: &Env, sut: &Sut, amount: i128) {
    sut.token_admin.mint(&sut.borrower_operations, &amount);
    sut.token.approve(
        &sut.borrower_operations,
        &sut.pool.address,
        &amount,
        &(env.ledger().sequence() + 100),
    );
    sut.pool.receive_collateral(&sut.borrower_operations, &amount);
}

/// Active, Default and Stability Pool wired against each other for
/// cross-pool moves.
struct Protocol<'a> {
    active_pool: ActivePoolClient<'a>,
    default_pool: DefaultPoolClient<'a>,
    stability_pool: StabilityPoolClient<'a>,
    token: TokenClient<'a>,
    token_admin: TokenAdminClient<'a>,
    borrower_operations: Address,
    trove_manager: Address,
}

fn init_protocol<'a>(env: &Env) -> Protocol<'a> {
    let token_admin = Address::generate(env);
    let token_address = env.register_stellar_asset_contract(token_admin.clone());

    let active_pool = ActivePoolClient::new(env, &env.register_contract(None, ActivePool));
    let default_pool = DefaultPoolClient::new(env, &env.register_contract(None, DefaultPool));
    let stability_pool =
        StabilityPoolClient::new(env, &env.register_contract(None, StabilityPool));

    let borrower_operations = Address::generate(env);
    let trove_manager = Address::generate(env);

    active_pool.initialize(
        &borrower_operations,
        &trove_manager,
        &stability_pool.address,
        &default_pool.address,
        &token_address,
    );
    default_pool.initialize(&trove_manager, &active_pool.address, &token_address);
    stability_pool.initialize(
        &borrower_operations,
        &trove_manager,
        &active_pool.address,
        &token_address,
    );

    Protocol {
        active_pool,
        default_pool,
        stability_pool,
        token: TokenClient::new(env, &token_address),
        token_admin: TokenAdminClient::new(env, &token_address),
        borrower_operations,
        trove_manager,
    }
}

fn fund_active_pool(env: &Env, protocol: &Protocol, amount: i128) {
    protocol
        .token_admin
        .mint(&protocol.borrower_operations, &amount);
    protocol.token.approve(
        &protocol.borrower_operations,
        &protocol.active_pool.address,
        &amount,
        &(env.ledger().sequence() + 100),
    );
    protocol
        .active_pool
        .receive_collateral(&protocol.borrower_operations, &amount);
}

#[test]
fn should_set_token_address() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(sut.pool.get_collateral_token_address(), sut.token.address);
    assert_eq!(sut.pool.borrower_operations(), sut.borrower_operations);
    assert_eq!(sut.pool.trove_manager(), sut.trove_manager);
    assert_eq!(sut.pool.stability_pool(), sut.stability_pool);
    assert_eq!(sut.pool.default_pool(), sut.default_pool);
}

#[test]
fn should_start_empty() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(sut.pool.get_collateral(), 0);
    assert_eq!(sut.pool.get_debt(), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_when_already_initialized() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.initialize(
        &sut.borrower_operations,
        &sut.trove_manager,
        &sut.stability_pool,
        &sut.default_pool,
        &sut.token.address,
    );
}

#[test]
fn should_increase_and_decrease_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.increase_debt(&sut.borrower_operations, &100);
    assert_eq!(sut.pool.get_debt(), 100);

    sut.pool.decrease_debt(&sut.borrower_operations, &100);
    assert_eq!(sut.pool.get_debt(), 0);
}

#[test]
fn should_allow_trove_manager_to_mutate_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.increase_debt(&sut.trove_manager, &250);
    sut.pool.decrease_debt(&sut.trove_manager, &50);

    assert_eq!(sut.pool.get_debt(), 200);
}

#[test]
fn should_emit_debt_updated() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.increase_debt(&sut.borrower_operations, &100);

    let event = env.events().all().pop_back_unchecked();
    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.pool.address.clone(),
                (Symbol::new(&env, "debt_updated"),).into_val(&env),
                100i128.into_val(&env)
            ),
        ]
    );
}

#[test]
fn should_reject_unknown_debt_mutator() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let alice = Address::generate(&env);

    assert_eq!(
        sut.pool.try_increase_debt(&alice, &100),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(sut.pool.get_debt(), 0);

    sut.pool.increase_debt(&sut.borrower_operations, &100);

    assert_eq!(
        sut.pool.try_decrease_debt(&alice, &100),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(sut.pool.get_debt(), 100);
}

#[test]
fn should_reject_zero_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(
        sut.pool.try_increase_debt(&sut.borrower_operations, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        sut.pool.try_increase_debt(&sut.borrower_operations, &-1),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn should_fail_decreasing_debt_below_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(
        sut.pool.try_decrease_debt(&sut.borrower_operations, &1),
        Err(Ok(Error::InsufficientDebt))
    );
    assert_eq!(sut.pool.get_debt(), 0);
}

#[test]
fn should_fail_closed_on_debt_overflow() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.increase_debt(&sut.borrower_operations, &i128::MAX);

    assert_eq!(
        sut.pool.try_increase_debt(&sut.borrower_operations, &1),
        Err(Ok(Error::MathOverflowError))
    );
    assert_eq!(sut.pool.get_debt(), i128::MAX);
}

#[test]
fn should_receive_collateral() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    fund_pool(&env, &sut, 100);

    assert_eq!(sut.pool.get_collateral(), 100);
    assert_eq!(sut.token.balance(&sut.pool.address), 100);
    assert_eq!(sut.token.balance(&sut.borrower_operations), 0);
}

#[test]
fn should_leave_counter_when_pull_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    // no allowance granted, the pull reverts inside the token contract
    sut.token_admin.mint(&sut.borrower_operations, &100);
    assert!(sut
        .pool
        .try_receive_collateral(&sut.borrower_operations, &100)
        .is_err());

    assert_eq!(sut.pool.get_collateral(), 0);
    assert_eq!(sut.token.balance(&sut.pool.address), 0);
}

#[test]
fn should_reject_unknown_collateral_source() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let alice = Address::generate(&env);

    sut.token_admin.mint(&alice, &100);
    sut.token.approve(
        &alice,
        &sut.pool.address,
        &100,
        &(env.ledger().sequence() + 100),
    );

    assert_eq!(
        sut.pool.try_receive_collateral(&alice, &100),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(sut.pool.get_collateral(), 0);
}

#[test]
fn should_send_collateral_to_external_recipient() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let bob = Address::generate(&env);

    fund_pool(&env, &sut, 100);

    sut.pool.send_collateral(&sut.borrower_operations, &bob, &100);

    assert_eq!(sut.pool.get_collateral(), 0);
    assert_eq!(sut.token.balance(&bob), 100);
    assert_eq!(sut.token.balance(&sut.pool.address), 0);
}

#[test]
fn should_fail_sending_more_than_recorded() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let bob = Address::generate(&env);

    fund_pool(&env, &sut, 100);

    assert_eq!(
        sut.pool
            .try_send_collateral(&sut.borrower_operations, &bob, &150),
        Err(Ok(Error::InsufficientCollateral))
    );
    assert_eq!(sut.pool.get_collateral(), 100);
    assert_eq!(sut.token.balance(&bob), 0);
}

#[test]
fn should_reject_unknown_collateral_sender() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let alice = Address::generate(&env);

    fund_pool(&env, &sut, 100);

    assert_eq!(
        sut.pool.try_send_collateral(&alice, &alice, &100),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(sut.pool.get_collateral(), 100);
}

#[test]
fn should_move_collateral_to_default_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let protocol = init_protocol(&env);

    fund_active_pool(&env, &protocol, 100);

    protocol.active_pool.send_collateral(
        &protocol.trove_manager,
        &protocol.default_pool.address,
        &40,
    );

    assert_eq!(protocol.active_pool.get_collateral(), 60);
    assert_eq!(protocol.default_pool.get_collateral(), 40);
    assert_eq!(protocol.token.balance(&protocol.active_pool.address), 60);
    assert_eq!(protocol.token.balance(&protocol.default_pool.address), 40);
}

#[test]
fn should_move_collateral_to_stability_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let protocol = init_protocol(&env);

    fund_active_pool(&env, &protocol, 100);

    protocol.active_pool.send_collateral(
        &protocol.stability_pool.address,
        &protocol.stability_pool.address,
        &100,
    );

    assert_eq!(protocol.active_pool.get_collateral(), 0);
    assert_eq!(protocol.stability_pool.get_collateral(), 100);
    assert_eq!(protocol.token.balance(&protocol.stability_pool.address), 100);
}

#[test]
fn should_return_collateral_from_default_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let protocol = init_protocol(&env);

    fund_active_pool(&env, &protocol, 100);
    protocol.active_pool.send_collateral(
        &protocol.trove_manager,
        &protocol.default_pool.address,
        &100,
    );

    assert_eq!(protocol.active_pool.get_collateral(), 0);
    assert_eq!(protocol.default_pool.get_collateral(), 100);

    protocol
        .default_pool
        .send_collateral_to_active_pool(&protocol.trove_manager, &100);

    assert_eq!(protocol.default_pool.get_collateral(), 0);
    assert_eq!(protocol.active_pool.get_collateral(), 100);
    assert_eq!(protocol.token.balance(&protocol.active_pool.address), 100);
    assert_eq!(protocol.token.balance(&protocol.default_pool.address), 0);
}
