use std::collections::HashMap;

use strum::{Display, EnumString, IntoEnumIterator};

use crate::types::config::Config;
use crate::types::{AppError, AppResult, MutationCategory};

/// Probability used for any category missing from the table
pub const FALLBACK_PROBABILITY: f64 = 0.1;

/// Relational and membership operators that may appear in a comparison chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum CompareOp {
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    LtE,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ">=")]
    GtE,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    NotEq,
    #[strum(serialize = "in")]
    In,
    #[strum(serialize = "not in")]
    NotIn,
    #[strum(serialize = "is")]
    Is,
    #[strum(serialize = "is not")]
    IsNot,
}

impl CompareOp {
    /// Logical negation of the ordering operators. Everything else is returned unchanged.
    pub fn negated(self) -> Self {
        match self {
            CompareOp::Gt => CompareOp::LtE,
            CompareOp::LtE => CompareOp::Gt,
            CompareOp::GtE => CompareOp::Lt,
            CompareOp::Lt => CompareOp::GtE,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum BinaryOperator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mult,
    #[strum(serialize = "@")]
    MatMult,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "//")]
    FloorDiv,
    #[strum(serialize = "%")]
    Mod,
    #[strum(serialize = "**")]
    Pow,
    #[strum(serialize = "<<")]
    LShift,
    #[strum(serialize = ">>")]
    RShift,
    #[strum(serialize = "|")]
    BitOr,
    #[strum(serialize = "^")]
    BitXor,
    #[strum(serialize = "&")]
    BitAnd,
}

impl BinaryOperator {
    /// Arithmetic swap. `/` maps to `*`, but `*` only ever maps to `//`.
    pub fn swapped(self) -> Self {
        match self {
            BinaryOperator::Add => BinaryOperator::Sub,
            BinaryOperator::Sub => BinaryOperator::Add,
            BinaryOperator::Mult => BinaryOperator::FloorDiv,
            BinaryOperator::FloorDiv => BinaryOperator::Mult,
            BinaryOperator::Div => BinaryOperator::Mult,
            other => other,
        }
    }
}

/// Fixed replacement values for mutated literals
#[derive(Debug, Clone, PartialEq)]
pub struct Sentinels {
    pub number: String,
    pub string: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            number: "481".to_string(),
            string: "SE".to_string(),
        }
    }
}

impl Sentinels {
    pub fn new(number: &str, string: &str) -> AppResult<Self> {
        let number_ok = number.starts_with(|c: char| c.is_ascii_digit())
            && number.replace('_', "").parse::<f64>().is_ok();
        if !number_ok {
            return Err(AppError::Config(format!(
                "number sentinel '{number}' is not a non-negative numeric literal"
            )));
        }
        if string.contains(['"', '\'', '\\', '\n', '\r']) {
            return Err(AppError::Config(format!(
                "string sentinel {string:?} may not contain quotes, backslashes or newlines"
            )));
        }
        Ok(Self {
            number: number.to_string(),
            string: string.to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let sentinels = cfg.sentinels();
        Self::new(sentinels.number(), sentinels.string())
    }
}

/// Per-category mutation probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    probabilities: HashMap<MutationCategory, f64>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self {
            probabilities: MutationCategory::iter()
                .map(|c| (c, c.default_probability()))
                .collect(),
        }
    }
}

impl OperatorTable {
    /// A table with no entries; every lookup yields [`FALLBACK_PROBABILITY`]
    pub fn empty() -> Self {
        Self {
            probabilities: HashMap::new(),
        }
    }

    /// A table where every category has the same probability
    pub fn uniform(probability: f64) -> AppResult<Self> {
        let mut table = Self::empty();
        for category in MutationCategory::iter() {
            table.set(category, probability)?;
        }
        Ok(table)
    }

    pub fn probability(&self, category: MutationCategory) -> f64 {
        self.probabilities
            .get(&category)
            .copied()
            .unwrap_or(FALLBACK_PROBABILITY)
    }

    pub fn set(&mut self, category: MutationCategory, probability: f64) -> AppResult<()> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(AppError::Config(format!(
                "probability for {category} must be within [0, 1], got {probability}"
            )));
        }
        self.probabilities.insert(category, probability);
        Ok(())
    }

    pub fn with(mut self, category: MutationCategory, probability: f64) -> AppResult<Self> {
        self.set(category, probability)?;
        Ok(self)
    }

    /// Defaults overlaid with the `[probabilities]` entries of a config
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut table = Self::default();
        for (name, probability) in cfg.probabilities() {
            let category = name.parse::<MutationCategory>().map_err(|_| {
                AppError::Config(format!(
                    "unknown mutation category '{name}' (expected one of: {})",
                    MutationCategory::iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?;
            table.set(category, probability)?;
        }
        Ok(table)
    }

    /// All configured entries in category order
    pub fn entries(&self) -> Vec<(MutationCategory, f64)> {
        MutationCategory::iter()
            .filter_map(|c| self.probabilities.get(&c).map(|p| (c, *p)))
            .collect()
    }
}
