//! Lowering of the tree-sitter concrete tree into the owned [`Program`] tree.
//!
//! Source text between tokens (spaces, newlines, indentation) becomes the
//! `leading` text of the next node, so nothing is lost on the way back.

use std::str::FromStr;

use tree_sitter::Node as TsNode;

use crate::core::engine::operators::{BinaryOperator, CompareOp};
use crate::core::engine::tree::{
    BinaryOp, CompareToken, Comparison, Composite, Node, NodeKind, NumberLiteral, Program,
    StringLiteral, Suite,
};
use crate::types::{MutationCategory, ParseError};
use crate::utils::{node_text, take_text};

use super::syntax::{NON_TEXT_PREFIXES, fields, nodes};

pub fn lower_program(root: TsNode, source: &str) -> Result<Program, ParseError> {
    let mut lowering = Lowering { source, pos: 0 };
    let root = lowering.lower(root)?;
    let trailing = take_text(source, &mut lowering.pos, source.len());
    Ok(Program { root, trailing })
}

struct Lowering<'s> {
    source: &'s str,
    /// Byte offset of the first source byte not yet attributed to any node
    pos: usize,
}

impl Lowering<'_> {
    fn lower(&mut self, node: TsNode) -> Result<Node, ParseError> {
        let leading = take_text(self.source, &mut self.pos, node.start_byte());
        let kind = self.lower_kind(node)?;
        Ok(Node::new(leading, kind))
    }

    fn lower_kind(&mut self, node: TsNode) -> Result<NodeKind, ParseError> {
        if node.is_extra() {
            return Ok(NodeKind::Trivia(self.rest_of(node)));
        }
        match node.kind() {
            nodes::INTEGER | nodes::FLOAT => Ok(NodeKind::Number(NumberLiteral {
                text: self.rest_of(node),
                attribute_object: is_attribute_object(node),
            })),
            nodes::STRING | nodes::CONCATENATED_STRING => {
                match plain_string_delimiters(node, self.source) {
                    Some((open, close)) => Ok(NodeKind::Str(StringLiteral {
                        text: self.rest_of(node),
                        open,
                        close,
                    })),
                    None => Ok(NodeKind::Composite(self.composite(node)?)),
                }
            }
            nodes::MODULE | nodes::BLOCK => {
                let (children, trailing) = self.children(node)?;
                Ok(NodeKind::Suite(Suite {
                    children,
                    trailing,
                    requires_body: node.kind() == nodes::BLOCK,
                }))
            }
            nodes::EXPRESSION_STATEMENT => {
                let composite = self.composite(node)?;
                Ok(match assignment_category(node) {
                    Some(MutationCategory::Assign) => NodeKind::Assign(composite),
                    Some(MutationCategory::AugAssign) => NodeKind::AugAssign(composite),
                    Some(MutationCategory::AnnAssign) => NodeKind::AnnAssign(composite),
                    _ => NodeKind::Composite(composite),
                })
            }
            nodes::COMPARISON => {
                let parts = self.operator_parts(node, |spelling, text, line| {
                    CompareOp::from_str(spelling)
                        .map(|op| NodeKind::CompareOp(CompareToken { op, text }))
                        .map_err(|_| ParseError::UnsupportedOperator {
                            operator: spelling.to_string(),
                            line,
                        })
                })?;
                Ok(NodeKind::Compare(Comparison { parts }))
            }
            nodes::BINARY_OPERATOR => {
                let parts = self.operator_parts(node, |spelling, _text, line| {
                    BinaryOperator::from_str(spelling)
                        .map(NodeKind::BinaryOperator)
                        .map_err(|_| ParseError::UnsupportedOperator {
                            operator: spelling.to_string(),
                            line,
                        })
                })?;
                Ok(NodeKind::BinOp(BinaryOp { parts }))
            }
            _ if node.child_count() == 0 => Ok(NodeKind::Token(self.rest_of(node))),
            _ => Ok(NodeKind::Composite(self.composite(node)?)),
        }
    }

    /// Consume the node's text as a single leaf
    fn rest_of(&mut self, node: TsNode) -> String {
        take_text(self.source, &mut self.pos, node.end_byte())
    }

    fn composite(&mut self, node: TsNode) -> Result<Composite, ParseError> {
        let (children, trailing) = self.children(node)?;
        Ok(Composite {
            kind: node.kind().to_string(),
            children,
            trailing,
        })
    }

    fn children(&mut self, node: TsNode) -> Result<(Vec<Node>, String), ParseError> {
        let mut cursor = node.walk();
        let ts_children: Vec<TsNode> = node.children(&mut cursor).collect();
        let mut children = Vec::with_capacity(ts_children.len());
        for child in ts_children {
            children.push(self.lower(child)?);
        }
        let trailing = take_text(self.source, &mut self.pos, node.end_byte());
        Ok((children, trailing))
    }

    /// Children of an operator expression, with the anonymous operator tokens
    /// lowered through `operator(spelling, source_text, line)`
    fn operator_parts<F>(&mut self, node: TsNode, operator: F) -> Result<Vec<Node>, ParseError>
    where
        F: Fn(&str, String, usize) -> Result<NodeKind, ParseError>,
    {
        let mut cursor = node.walk();
        let ts_children: Vec<TsNode> = node.children(&mut cursor).collect();
        let mut parts = Vec::with_capacity(ts_children.len());
        let mut index = 0;
        while let Some(&child) = ts_children.get(index) {
            index += 1;
            if child.is_named() || child.is_extra() {
                parts.push(self.lower(child)?);
                continue;
            }
            let leading = take_text(self.source, &mut self.pos, child.start_byte());
            let mut spelling = child.kind().to_string();
            let mut end = child.end_byte();
            // `not in` and `is not` may arrive as two keyword tokens, possibly with
            // comments in between; the text between them is kept verbatim
            if let Some(second) = second_keyword(child.kind()) {
                let rest = &ts_children[index..];
                if let Some(offset) = rest.iter().position(|n| !n.is_extra()) {
                    let next = rest[offset];
                    if !next.is_named() && next.kind() == second {
                        spelling = format!("{} {}", child.kind(), second);
                        end = next.end_byte();
                        index += offset + 1;
                    }
                }
            }
            let text = take_text(self.source, &mut self.pos, end);
            let kind = operator(&spelling, text, child.start_position().row + 1)?;
            parts.push(Node::new(leading, kind));
        }
        let trailing = take_text(self.source, &mut self.pos, node.end_byte());
        if !trailing.is_empty() {
            parts.push(Node::new(trailing, NodeKind::Trivia(String::new())));
        }
        Ok(parts)
    }
}

fn second_keyword(first: &str) -> Option<&'static str> {
    match first {
        "not" => Some("in"),
        "is" => Some("not"),
        _ => None,
    }
}

/// Whether a numeric literal is the receiver of an attribute access
fn is_attribute_object(node: TsNode) -> bool {
    node.parent().is_some_and(|parent| {
        parent.kind() == nodes::ATTRIBUTE
            && parent.child_by_field_name(fields::OBJECT) == Some(node)
    })
}

/// Statement-level category of an `expression_statement`, if it is an assignment
fn assignment_category(node: TsNode) -> Option<MutationCategory> {
    let mut cursor = node.walk();
    let named: Vec<TsNode> = node
        .named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect();
    let [only] = named.as_slice() else {
        return None;
    };
    match only.kind() {
        nodes::ASSIGNMENT if only.child_by_field_name(fields::TYPE).is_some() => {
            Some(MutationCategory::AnnAssign)
        }
        nodes::ASSIGNMENT => Some(MutationCategory::Assign),
        nodes::AUGMENTED_ASSIGNMENT => Some(MutationCategory::AugAssign),
        _ => None,
    }
}

/// Opening and closing delimiters if `node` is a plain text string literal (or an
/// implicit concatenation of them). f-strings and bytes literals return `None`.
fn plain_string_delimiters(node: TsNode, source: &str) -> Option<(String, String)> {
    let parts: Vec<TsNode> = if node.kind() == nodes::CONCATENATED_STRING {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|c| !c.is_extra())
            .collect()
    } else {
        vec![node]
    };

    let mut delimiters = None;
    for part in &parts {
        if part.kind() != nodes::STRING || has_interpolation(part) {
            return None;
        }
        let found = string_delimiters(node_text(part, source))?;
        delimiters.get_or_insert(found);
    }
    delimiters
}

fn has_interpolation(node: &TsNode) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| c.kind() == nodes::INTERPOLATION);
    found
}

fn string_delimiters(text: &str) -> Option<(String, String)> {
    let quote_start = text.find(['"', '\''])?;
    let prefix = &text[..quote_start];
    if prefix.contains(NON_TEXT_PREFIXES) {
        return None;
    }
    let body = &text[quote_start..];
    let quote = if body.starts_with("\"\"\"") || body.starts_with("'''") {
        &body[..3]
    } else {
        &body[..1]
    };
    if body.len() < 2 * quote.len() || !body.ends_with(quote) {
        return None;
    }
    Some((format!("{prefix}{quote}"), quote.to_string()))
}
