pub mod sut;
pub mod take_settlement;
