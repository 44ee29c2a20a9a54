pub mod convert;
pub mod quiz;
