pub mod execute_preliquidation;
