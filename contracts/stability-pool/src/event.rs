use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(
    e: &Env,
    trove_manager: &Address,
    active_pool: &Address,
    collateral_token: &Address,
) {
    let topics = (
        symbol_short!("init"),
        trove_manager.clone(),
        active_pool.clone(),
    );
    e.events().publish(topics, collateral_token.clone());
}

pub(crate) fn deposits_updated(e: &Env, total: i128) {
    let topics = (Symbol::new(e, "deposits_updated"),);
    e.events().publish(topics, total);
}

pub(crate) fn collateral_received(e: &Env, from: &Address, amount: i128) {
    let topics = (Symbol::new(e, "coll_received"), from.clone());
    e.events().publish(topics, amount);
}
