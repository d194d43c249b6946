pub mod market;
pub mod market_params;
pub mod position;
