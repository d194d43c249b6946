pub mod position_report;
