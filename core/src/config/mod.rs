pub mod load;
pub mod types;

pub use load::EnvOverrides;
pub use types::*;
