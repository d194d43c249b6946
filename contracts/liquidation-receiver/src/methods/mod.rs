pub mod execute_operation;
pub mod initialize;
pub mod recover_token;
pub mod take_settlement;
