pub mod factory;
pub mod format;

pub use factory::{build_formatter, FORMATS};
