pub mod check_position;
pub mod execute_preliquidation;
pub mod initialize;
pub mod recover_token;
pub mod set_config;
pub mod set_pre_liquidation;
pub mod simulate_profitability;
pub mod upgrade;
pub mod utils;
