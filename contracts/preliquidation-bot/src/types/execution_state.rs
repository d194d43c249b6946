use soroban_sdk::contracttype;

/// Idle -> FlashLoanRequested -> (receiver callback) -> Idle.
/// A failure at any step reverts the transaction, so no other state is
/// ever persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum ExecutionState {
    Idle,
    FlashLoanRequested,
}
