use tree_sitter::Language as TsLanguage;

use crate::core::engine::tree::Program;
use crate::types::ParseError;

/// Core trait that language implementations must provide
pub trait LanguageEngine: Send + Sync {
    /// Language name (e.g., "Python")
    fn name(&self) -> &'static str;

    /// File extensions this language handles; the first one names mutant files
    fn extensions(&self) -> &[&'static str];

    /// Get the tree-sitter Language for parsing
    fn tree_sitter_language(&self) -> TsLanguage;

    /// Parse source text into an owned program tree
    fn parse(&self, source: &str) -> Result<Program, ParseError>;

    /// Regenerate source text from a (possibly rewritten) program tree
    fn unparse(&self, program: &Program) -> String {
        program.to_source()
    }

    /// Extension used for generated mutant files
    fn output_extension(&self) -> &'static str {
        self.extensions().first().copied().unwrap_or("txt")
    }
}
