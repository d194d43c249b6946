pub mod bot_config;
pub mod error;
pub mod liquidation_params;
pub mod profitability;
pub mod settlement;
