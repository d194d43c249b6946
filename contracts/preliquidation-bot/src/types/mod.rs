pub mod evaluation;
pub mod execution_state;
