use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    InvalidConfig = 2,

    AssetMismatch = 100,
    InvalidInitiator = 101,
    UnexpectedCallback = 102,
    ExecutionInProgress = 103,
    CallbackNotExecuted = 104,
    InvalidCallbackParams = 105,
    PreLiquidationNotConfigured = 106,

    NotLiquidatable = 200,
    InvalidOraclePrice = 201,
    InvalidPreLiquidationParams = 202,

    MathOverflowError = 400,
}
