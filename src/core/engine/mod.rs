pub mod classify;
pub mod decision;
pub mod operators;
pub mod orchestrator;
pub mod rewriter;
pub mod traits;
pub mod tree;
pub mod utils;
