pub mod evaluate;
pub mod pre_liquidation_bounds;
pub mod validation;
