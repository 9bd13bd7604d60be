use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::LanguageEngine;
use crate::core::engine::decision::Decider;
use crate::core::engine::operators::{OperatorTable, Sentinels};
use crate::core::engine::rewriter::TreeRewriter;
use crate::types::{AppResult, Mutant, ParseError};

/// Produces the numbered mutants of one source text.
///
/// Mutant `i` is computed from a fresh parse and a generator seeded with `i`,
/// so any mutant can be reproduced on its own.
pub struct MutantGenerator<'a> {
    engine: &'a dyn LanguageEngine,
    table: &'a OperatorTable,
    sentinels: &'a Sentinels,
}

impl<'a> MutantGenerator<'a> {
    pub fn new(
        engine: &'a dyn LanguageEngine,
        table: &'a OperatorTable,
        sentinels: &'a Sentinels,
    ) -> Self {
        Self {
            engine,
            table,
            sentinels,
        }
    }

    /// Compute mutant `index` of `source`
    pub fn mutant(&self, source: &str, index: u64) -> Result<Mutant, ParseError> {
        let mut program = self.engine.parse(source)?;
        let rng = ChaCha8Rng::seed_from_u64(index);
        let rewriter = TreeRewriter::new(Decider::new(self.table, rng), self.sentinels);
        let stats = rewriter.rewrite_program(&mut program);
        debug!("Mutant {index}: {stats}");

        Ok(Mutant {
            index,
            seed: index,
            text: self.engine.unparse(&program),
            stats,
        })
    }

    /// Generate mutants `0..count` in order, handing each to `sink`.
    ///
    /// The original is parsed once up front so a syntax error is reported
    /// before anything reaches the sink. A sink error stops the run.
    pub fn generate<F>(&self, source: &str, count: u64, mut sink: F) -> AppResult<()>
    where
        F: FnMut(Mutant) -> AppResult<()>,
    {
        self.engine.parse(source)?;
        for index in 0..count {
            sink(self.mutant(source, index)?)?;
        }
        Ok(())
    }

    pub fn generate_all(&self, source: &str, count: u64) -> AppResult<Vec<Mutant>> {
        let mut mutants = Vec::new();
        self.generate(source, count, |mutant| {
            mutants.push(mutant);
            Ok(())
        })?;
        Ok(mutants)
    }
}
