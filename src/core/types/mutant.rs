use crate::types::RewriteStats;

/// One fully regenerated program variant
#[derive(Debug, Clone, PartialEq)]
pub struct Mutant {
    pub index: u64,
    /// Seed of the random sequence that produced this mutant; always equal to `index`
    pub seed: u64,
    pub text: String,
    pub stats: RewriteStats,
}

impl Mutant {
    /// Output identifier, also the stem of the persisted file name
    pub fn id(&self) -> String {
        self.index.to_string()
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.id(), extension)
    }
}
