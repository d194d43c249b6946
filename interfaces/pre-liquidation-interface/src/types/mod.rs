pub mod pre_liquidation_params;
