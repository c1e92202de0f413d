pub mod format;
pub mod rounding;
