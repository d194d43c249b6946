use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::Env;

use crate::{mul_div_floor, WAD};

/// Fixed type with inner type of i128 and fixed denominator 10e18
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Wad(i128);

impl Wad {
    pub const DENOMINATOR: i128 = WAD;
    pub const ZERO: Wad = Wad(0);
    pub const ONE: Wad = Wad(Self::DENOMINATOR);
    pub const MAX: Wad = Wad(i128::MAX);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct Wad from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> Wad {
        Wad(inner.into())
    }

    /// Multiplication of two fixed values
    pub fn checked_mul(self, value: Wad) -> Option<Wad> {
        self.0
            .fixed_mul_floor(value.0, Self::DENOMINATOR)
            .map(Wad)
    }

    /// Division of two Wad values
    pub fn checked_div(self, value: Wad) -> Option<Wad> {
        self.0
            .fixed_div_floor(value.0, Self::DENOMINATOR)
            .map(Wad)
    }

    /// Sum of two fixed values
    pub fn checked_add(self, value: Wad) -> Option<Wad> {
        self.0.checked_add(value.0).map(Wad)
    }

    /// Subtraction of two fixed values
    pub fn checked_sub(self, other: Wad) -> Option<Wad> {
        self.0.checked_sub(other.0).map(Wad)
    }

    /// Calculates product of fixed value and int value.
    /// Result is int value rounded down, the intermediate product is 256-bit
    pub fn mul_int(self, env: &Env, other: i128) -> Option<i128> {
        mul_div_floor(env, other, self.0, Self::DENOMINATOR)
    }

    /// Restricts value to [min, max]
    pub fn clamp(self, min: Wad, max: Wad) -> Wad {
        self.max(min).min(max)
    }

    /// Returns max value
    pub fn max(self, other: Wad) -> Wad {
        if self.0.gt(&other.0) {
            self
        } else {
            other
        }
    }

    /// Returns min value
    pub fn min(self, other: Wad) -> Wad {
        if self.0.lt(&other.0) {
            self
        } else {
            other
        }
    }
}
