use soroban_sdk::{Env, I256};

/// x * y / denominator rounded down, with a 256-bit intermediate.
/// None when denominator is not positive or the result leaves i128.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> Option<i128> {
    if denominator <= 0 {
        return None;
    }

    I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
}

/// x * y / denominator rounded up, with a 256-bit intermediate.
/// Operands are expected to be non-negative.
pub fn mul_div_ceil(env: &Env, x: i128, y: i128, denominator: i128) -> Option<i128> {
    if denominator <= 0 {
        return None;
    }

    let denominator = I256::from_i128(env, denominator);

    I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .add(&denominator.sub(&I256::from_i128(env, 1)))
        .div(&denominator)
        .to_i128()
}
