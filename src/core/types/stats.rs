use std::collections::BTreeMap;
use std::fmt;

use crate::types::MutationCategory;

/// Statistics for a single rewrite pass over one program tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewriteStats {
    /// Map from category to number of eligible nodes that consumed a draw
    pub visited: BTreeMap<MutationCategory, usize>,
    /// Map from category to number of mutations actually applied
    pub applied: BTreeMap<MutationCategory, usize>,
}

impl RewriteStats {
    pub fn record_visit(&mut self, category: MutationCategory) {
        *self.visited.entry(category).or_insert(0) += 1;
    }

    pub fn record_applied(&mut self, category: MutationCategory) {
        *self.applied.entry(category).or_insert(0) += 1;
    }

    pub fn applied(&self, category: MutationCategory) -> usize {
        self.applied.get(&category).copied().unwrap_or(0)
    }

    pub fn total_visited(&self) -> usize {
        self.visited.values().sum()
    }

    pub fn total_applied(&self) -> usize {
        self.applied.values().sum()
    }
}

impl fmt::Display for RewriteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied.is_empty() {
            return write!(f, "no mutations ({} eligible nodes)", self.total_visited());
        }
        let parts: Vec<String> = self
            .applied
            .iter()
            .map(|(category, count)| format!("{category}={count}"))
            .collect();
        write!(
            f,
            "{} ({} of {} eligible nodes)",
            parts.join(", "),
            self.total_applied(),
            self.total_visited()
        )
    }
}
