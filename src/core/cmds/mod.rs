pub mod generate;

pub use generate::execute_generate;
