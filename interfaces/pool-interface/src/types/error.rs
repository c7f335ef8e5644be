use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Unauthorized = 2,

    InvalidAmount = 100,
    InsufficientCollateral = 101,
    InsufficientDebt = 102,

    MathOverflowError = 400,
}
