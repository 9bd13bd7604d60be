pub mod engine;
mod lower;
pub mod syntax;
