use std::sync::OnceLock;
use tree_sitter::Language as TsLanguage;

use crate::LanguageEngine;
use crate::core::engine::tree::Program;
use crate::types::ParseError;
use crate::utils::{first_error_position, parse_source};

use super::lower::lower_program;

static PYTHON_LANGUAGE: OnceLock<TsLanguage> = OnceLock::new();

pub struct PythonLanguageEngine;

impl Default for PythonLanguageEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonLanguageEngine {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageEngine for PythonLanguageEngine {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn extensions(&self) -> &[&'static str] {
        &["py", "pyw"]
    }

    fn tree_sitter_language(&self) -> TsLanguage {
        PYTHON_LANGUAGE
            .get_or_init(|| tree_sitter_python::LANGUAGE.into())
            .clone()
    }

    fn parse(&self, source: &str) -> Result<Program, ParseError> {
        let tree = parse_source(source, &self.tree_sitter_language(), self.name())?;
        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error_position(root).unwrap_or((1, 1));
            return Err(ParseError::Syntax { line, column });
        }
        lower_program(root, source)
    }
}
