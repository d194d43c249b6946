#![deny(warnings)]
#![no_std]

mod incentive;
mod shares;
mod wad;
mod wide;

pub use incentive::*;
pub use shares::*;
pub use wad::*;
pub use wide::*;

/// Fixed point scale used for ratios (18 decimals)
pub const WAD: i128 = 1_000_000_000_000_000_000;

/// Scale of the prices returned by market oracles (36 decimals)
pub const ORACLE_PRICE_SCALE: i128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

/// Percent representation
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Loan-to-value above which a position is pre-liquidated (85%)
pub const DEFAULT_LTV_THRESHOLD: i128 = 850_000_000_000_000_000;

/// Share of the debt repaid by a single pre-liquidation, in basis points
pub const DEFAULT_REPAY_FACTOR: u32 = 1_927;

/// Flash loan premium estimate, in basis points
pub const DEFAULT_FLASH_LOAN_FEE: u32 = 9;

/// Fallbacks used when no pre-liquidation contract is configured
pub const DEFAULT_PRE_LLTV: i128 = 700_000_000_000_000_000;
pub const DEFAULT_PRE_LIF_1: i128 = 1_050_000_000_000_000_000;
pub const DEFAULT_PRE_LIF_2: i128 = 1_082_500_000_000_000_000;
