pub mod core;
pub mod languages;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::engine::operators::{OperatorTable, Sentinels};
pub use core::engine::orchestrator::MutantGenerator;
pub use core::engine::traits::LanguageEngine;
pub use core::engine::utils;
pub use core::main_shared::run_main;
pub use core::registry::LanguageRegistry;
