use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SentinelConfig {
    pub number: Option<String>,
    pub string: Option<String>,
}

impl SentinelConfig {
    pub fn number(&self) -> &str {
        self.number.as_deref().unwrap_or("481")
    }

    pub fn string(&self) -> &str {
        self.string.as_deref().unwrap_or("SE")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub out_dir: Option<String>,

    // Nested sections
    pub log: Option<LogConfig>,
    /// Category name -> probability; unset categories keep their defaults
    pub probabilities: Option<BTreeMap<String, f64>>,
    pub sentinels: Option<SentinelConfig>,
}

impl Config {
    pub fn out_dir(&self) -> &str {
        self.out_dir.as_deref().unwrap_or(".")
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        self.probabilities.clone().unwrap_or_default()
    }

    pub fn sentinels(&self) -> SentinelConfig {
        self.sentinels.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub out_dir: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub probabilities: Vec<(String, f64)>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn get_config_filename() -> &'static str {
    "pymutant.toml"
}

pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

pub fn init_with_overrides(overrides: &CliOverrides) -> AppResult<()> {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file() {
        let file_cfg = read_config_file(&path)?;
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
    Ok(())
}

pub fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path)?;
    toml::from_str::<Config>(&contents)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
}

pub fn apply_file_config(cfg: &mut Config, file: &Config) {
    if file.out_dir.is_some() {
        cfg.out_dir = file.out_dir.clone();
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge probabilities per category
    if let Some(file_probs) = &file.probabilities {
        let mut probs = cfg.probabilities();
        probs.extend(file_probs.iter().map(|(k, v)| (k.clone(), *v)));
        cfg.probabilities = Some(probs);
    }

    // Merge sentinels section
    if let Some(file_sentinels) = &file.sentinels {
        let mut sentinels = cfg.sentinels();
        if file_sentinels.number.is_some() {
            sentinels.number = file_sentinels.number.clone();
        }
        if file_sentinels.string.is_some() {
            sentinels.string = file_sentinels.string.clone();
        }
        cfg.sentinels = Some(sentinels);
    }
}

pub fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(out_dir) = &overrides.out_dir
        && !out_dir.trim().is_empty()
    {
        cfg.out_dir = Some(out_dir.clone());
    }

    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    if !overrides.probabilities.is_empty() {
        let mut probs = cfg.probabilities();
        for (name, p) in &overrides.probabilities {
            probs.insert(name.clone(), *p);
        }
        cfg.probabilities = Some(probs);
    }
}

/// Parse a `CATEGORY=P` command line override
pub fn parse_probability_override(input: &str) -> Result<(String, f64), String> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=P, got '{input}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing category name in '{input}'"));
    }
    let p: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid probability '{}'", value.trim()))?;
    Ok((name.to_string(), p))
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let config_filename = get_config_filename();
    for dir in cwd.ancestors() {
        let candidate = dir.join(config_filename);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
