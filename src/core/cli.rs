use std::path::PathBuf;

use clap::Parser;

use crate::types::config::parse_probability_override;

/// Generate randomly mutated variants of a Python program
#[derive(Parser, Debug)]
#[command(name = "pymutant", version, about, long_about = None)]
pub struct Args {
    /// Python source file to mutate
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Number of mutants to generate; files 0.py to COUNT-1.py are written
    #[arg(value_name = "COUNT")]
    pub count: u64,

    /// All relative paths will be interpreted relative to this directory.
    #[arg(long)]
    pub cwd: Option<String>,

    /// Directory the mutant files are written to (overrides config out_dir)
    #[arg(long = "out-dir")]
    pub out_dir: Option<String>,

    /// Mutation probability for one category, e.g. "binary_op=0.5". May be repeated.
    #[arg(long = "probability", value_name = "CATEGORY=P", value_parser = parse_probability_override)]
    pub probabilities: Vec<(String, f64)>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level")]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color")]
    pub log_color: Option<String>,
}
