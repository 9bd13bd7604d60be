use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// The class of tree node a transformation rule applies to.
///
/// Names are snake_case everywhere they are user-facing (config keys, CLI
/// overrides and log lines), e.g. `binary_op`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MutationCategory {
    NumberLiteral,
    StringLiteral,
    Comparison,
    BinaryOp,
    Assign,
    AugAssign,
    AnnAssign,
}

impl MutationCategory {
    pub fn default_probability(self) -> f64 {
        match self {
            MutationCategory::NumberLiteral => 0.01,
            MutationCategory::StringLiteral => 0.1,
            MutationCategory::Comparison => 0.04,
            MutationCategory::BinaryOp => 0.2,
            MutationCategory::Assign => 0.001,
            MutationCategory::AugAssign => 0.001,
            MutationCategory::AnnAssign => 0.001,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MutationCategory::NumberLiteral => "Replace a numeric literal with the number sentinel",
            MutationCategory::StringLiteral => "Replace a string literal with the string sentinel",
            MutationCategory::Comparison => "Negate every relational operator in a comparison",
            MutationCategory::BinaryOp => "Swap an arithmetic operator",
            MutationCategory::Assign => "Delete an assignment statement",
            MutationCategory::AugAssign => "Delete an augmented assignment statement",
            MutationCategory::AnnAssign => "Delete an annotated assignment statement",
        }
    }

    /// Statement-level categories remove the whole node instead of editing it.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            MutationCategory::Assign | MutationCategory::AugAssign | MutationCategory::AnnAssign
        )
    }
}
