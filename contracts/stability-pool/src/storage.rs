use common_ledger::storage::{HIGH_INSTANCE_BUMP_LEDGERS, LOW_INSTANCE_BUMP_LEDGERS};
use pool_interface::types::error::Error;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    BorrowerOperations,
    TroveManager,
    ActivePool,
}

pub fn write_borrower_operations(env: &Env, address: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::BorrowerOperations, address);
}

pub fn read_borrower_operations(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::BorrowerOperations)
        .ok_or(Error::Uninitialized)
}

pub fn write_trove_manager(env: &Env, address: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::TroveManager, address);
}

pub fn read_trove_manager(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::TroveManager)
        .ok_or(Error::Uninitialized)
}

pub fn write_active_pool(env: &Env, address: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::ActivePool, address);
}

pub fn read_active_pool(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::ActivePool)
        .ok_or(Error::Uninitialized)
}
