pub mod nodes {
    pub const MODULE: &str = "module";
    pub const BLOCK: &str = "block";
    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const ASSIGNMENT: &str = "assignment";
    pub const AUGMENTED_ASSIGNMENT: &str = "augmented_assignment";
    pub const COMPARISON: &str = "comparison_operator";
    pub const BINARY_OPERATOR: &str = "binary_operator";
    pub const INTEGER: &str = "integer";
    pub const FLOAT: &str = "float";
    pub const STRING: &str = "string";
    pub const CONCATENATED_STRING: &str = "concatenated_string";
    pub const INTERPOLATION: &str = "interpolation";
    pub const ATTRIBUTE: &str = "attribute";
}

pub mod fields {
    pub const TYPE: &str = "type";
    pub const OBJECT: &str = "object";
}

/// String prefix letters that make a literal something other than a plain `str`
pub const NON_TEXT_PREFIXES: &[char] = &['b', 'B', 'f', 'F', 't', 'T'];
