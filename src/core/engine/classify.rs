use crate::core::engine::tree::{Node, NodeKind};
use crate::types::MutationCategory;

/// Report the mutation category of a node, if it has one
pub fn classify(node: &Node) -> Option<MutationCategory> {
    match node.kind {
        NodeKind::Number(_) => Some(MutationCategory::NumberLiteral),
        NodeKind::Str(_) => Some(MutationCategory::StringLiteral),
        NodeKind::Compare(_) => Some(MutationCategory::Comparison),
        NodeKind::BinOp(_) => Some(MutationCategory::BinaryOp),
        NodeKind::Assign(_) => Some(MutationCategory::Assign),
        NodeKind::AugAssign(_) => Some(MutationCategory::AugAssign),
        NodeKind::AnnAssign(_) => Some(MutationCategory::AnnAssign),
        NodeKind::Suite(_)
        | NodeKind::Composite(_)
        | NodeKind::CompareOp(_)
        | NodeKind::BinaryOperator(_)
        | NodeKind::Token(_)
        | NodeKind::Trivia(_) => None,
    }
}
