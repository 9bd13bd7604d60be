//! Owned program tree shared by the rewriter and the regenerator.
//!
//! Every node keeps the exact source text that preceded it (`leading`), and
//! interior nodes keep whatever followed their last child (`trailing`), so
//! rendering an untouched tree reproduces the input byte for byte.

use crate::core::engine::operators::{BinaryOperator, CompareOp};

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub root: Node,
    /// Text after the root node, usually the final newline
    pub trailing: String,
}

impl Program {
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        self.root.write_to(&mut out);
        out.push_str(&self.trailing);
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub leading: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Number(NumberLiteral),
    Str(StringLiteral),
    Compare(Comparison),
    BinOp(BinaryOp),
    Assign(Composite),
    AugAssign(Composite),
    AnnAssign(Composite),
    Suite(Suite),
    Composite(Composite),
    CompareOp(CompareToken),
    BinaryOperator(BinaryOperator),
    Token(String),
    Trivia(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub text: String,
    /// Receiver of an attribute access, as in `1.0.hex()`
    pub attribute_object: bool,
}

impl NumberLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attribute_object: false,
        }
    }

    /// Replace the literal. A receiver is parenthesized so `481.hex()` is never produced.
    pub fn replace_with(&mut self, value: &str) {
        self.text = if self.attribute_object {
            format!("({value})")
        } else {
            value.to_string()
        };
    }
}

/// A plain string literal, or an implicit concatenation of plain string literals
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub text: String,
    /// Prefix and opening quote, e.g. `r"""`
    pub open: String,
    pub close: String,
}

impl StringLiteral {
    /// Replace the literal's value, keeping prefix and quote style
    pub fn set_value(&mut self, value: &str) {
        self.text = format!("{}{}{}", self.open, value, self.close);
    }
}

/// A comparison operator with its source spelling.
///
/// `text` differs from the canonical spelling only for `not in` and `is not`
/// written with extra spaces, comments or line continuations between the keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareToken {
    pub op: CompareOp,
    pub text: String,
}

impl CompareToken {
    pub fn new(op: CompareOp) -> Self {
        Self {
            op,
            text: op.to_string(),
        }
    }

    pub fn negate(&mut self) {
        let negated = self.op.negated();
        if negated != self.op {
            *self = Self::new(negated);
        }
    }
}

/// Operands interleaved with [`NodeKind::CompareOp`] nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub parts: Vec<Node>,
}

impl Comparison {
    pub fn operators(&self) -> Vec<CompareOp> {
        self.parts
            .iter()
            .filter_map(|part| match &part.kind {
                NodeKind::CompareOp(token) => Some(token.op),
                _ => None,
            })
            .collect()
    }

    pub fn negate_all(&mut self) {
        for part in &mut self.parts {
            if let NodeKind::CompareOp(token) = &mut part.kind {
                token.negate();
            }
        }
    }
}

/// Left operand, one [`NodeKind::BinaryOperator`] node, right operand
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub parts: Vec<Node>,
}

impl BinaryOp {
    pub fn operator(&self) -> Option<BinaryOperator> {
        self.parts.iter().find_map(|part| match part.kind {
            NodeKind::BinaryOperator(op) => Some(op),
            _ => None,
        })
    }

    pub fn swap_operator(&mut self) {
        for part in &mut self.parts {
            if let NodeKind::BinaryOperator(op) = &mut part.kind {
                *op = op.swapped();
            }
        }
    }
}

/// A sequence of statements: the module body or an indented block
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    pub children: Vec<Node>,
    pub trailing: String,
    /// Blocks must keep at least one statement; the module body may be empty
    pub requires_body: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    /// Grammar node kind, kept for diagnostics
    pub kind: String,
    pub children: Vec<Node>,
    pub trailing: String,
}

impl Node {
    pub fn new(leading: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            leading: leading.into(),
            kind,
        }
    }

    /// Keyword placeholder used for a block whose statements were all removed
    pub fn pass(leading: impl Into<String>) -> Self {
        Self::new(
            leading,
            NodeKind::Composite(Composite {
                kind: "pass_statement".to_string(),
                children: vec![Node::new("", NodeKind::Token("pass".to_string()))],
                trailing: String::new(),
            }),
        )
    }

    /// Anything in a suite that is not a separator or trivia
    pub fn is_statement(&self) -> bool {
        !matches!(self.kind, NodeKind::Token(_) | NodeKind::Trivia(_))
    }

    pub fn is_separator(&self) -> bool {
        matches!(&self.kind, NodeKind::Token(t) if t == ";")
    }

    pub fn to_source(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub fn write_to(&self, out: &mut String) {
        out.push_str(&self.leading);
        match &self.kind {
            NodeKind::Number(lit) => out.push_str(&lit.text),
            NodeKind::Str(lit) => out.push_str(&lit.text),
            NodeKind::Compare(cmp) => write_all(&cmp.parts, out),
            NodeKind::BinOp(op) => write_all(&op.parts, out),
            NodeKind::Assign(c)
            | NodeKind::AugAssign(c)
            | NodeKind::AnnAssign(c)
            | NodeKind::Composite(c) => {
                write_all(&c.children, out);
                out.push_str(&c.trailing);
            }
            NodeKind::Suite(suite) => {
                write_all(&suite.children, out);
                out.push_str(&suite.trailing);
            }
            NodeKind::CompareOp(token) => out.push_str(&token.text),
            NodeKind::BinaryOperator(op) => out.push_str(&op.to_string()),
            NodeKind::Token(text) | NodeKind::Trivia(text) => out.push_str(text),
        }
    }

    /// Pre-order iteration over this node and all descendants
    pub fn walk<F>(&self, callback: &mut F)
    where
        F: FnMut(&Node),
    {
        callback(self);
        for child in self.children() {
            child.walk(callback);
        }
    }

    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Compare(cmp) => &cmp.parts,
            NodeKind::BinOp(op) => &op.parts,
            NodeKind::Assign(c)
            | NodeKind::AugAssign(c)
            | NodeKind::AnnAssign(c)
            | NodeKind::Composite(c) => &c.children,
            NodeKind::Suite(suite) => &suite.children,
            NodeKind::Number(_)
            | NodeKind::Str(_)
            | NodeKind::CompareOp(_)
            | NodeKind::BinaryOperator(_)
            | NodeKind::Token(_)
            | NodeKind::Trivia(_) => &[],
        }
    }
}

fn write_all(nodes: &[Node], out: &mut String) {
    for node in nodes {
        node.write_to(out);
    }
}
