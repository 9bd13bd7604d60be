use rand::Rng;

use crate::core::engine::operators::OperatorTable;
use crate::types::MutationCategory;

/// Per-node Bernoulli trial against the operator table.
///
/// Owns the random sequence for one mutant; every call consumes exactly one draw.
pub struct Decider<'a, R> {
    table: &'a OperatorTable,
    rng: R,
}

impl<'a, R: Rng> Decider<'a, R> {
    pub fn new(table: &'a OperatorTable, rng: R) -> Self {
        Self { table, rng }
    }

    pub fn should_mutate(&mut self, category: MutationCategory) -> bool {
        let sample: f64 = self.rng.r#gen();
        sample < self.table.probability(category)
    }
}
