pub mod config;
mod error;
mod mutant;
mod mutation;
mod stats;

pub use error::*;
pub use mutant::*;
pub use mutation::*;
pub use stats::*;
