use log::trace;
use rand::Rng;

use crate::core::engine::classify::classify;
use crate::core::engine::decision::Decider;
use crate::core::engine::operators::Sentinels;
use crate::core::engine::tree::{Node, NodeKind, Program};
use crate::types::RewriteStats;

/// Result of rewriting one node
#[derive(Debug, Clone, PartialEq)]
pub enum Rewritten {
    Kept(Node),
    /// The node was deleted; its leading text is handed back to the parent sequence
    Removed { leading: String },
}

/// Single pre-order traversal that applies triggered mutations.
///
/// A categorized node draws once before its children are visited. Removed
/// statements are not descended into.
pub struct TreeRewriter<'a, R> {
    decider: Decider<'a, R>,
    sentinels: &'a Sentinels,
    stats: RewriteStats,
}

impl<'a, R: Rng> TreeRewriter<'a, R> {
    pub fn new(decider: Decider<'a, R>, sentinels: &'a Sentinels) -> Self {
        Self {
            decider,
            sentinels,
            stats: RewriteStats::default(),
        }
    }

    /// Rewrite a whole program in place and return what happened
    pub fn rewrite_program(mut self, program: &mut Program) -> RewriteStats {
        let root = std::mem::replace(
            &mut program.root,
            Node::new("", NodeKind::Token(String::new())),
        );
        program.root = match self.rewrite(root) {
            Rewritten::Kept(node) => node,
            // The root is always a suite, which is never categorized
            Rewritten::Removed { leading } => Node::new(leading, NodeKind::Token(String::new())),
        };
        self.stats
    }

    pub fn rewrite(&mut self, mut node: Node) -> Rewritten {
        if let Some(category) = classify(&node) {
            self.stats.record_visit(category);
            if self.decider.should_mutate(category) {
                self.stats.record_applied(category);
                trace!("Applying {category} to {:?}", node.to_source().trim());
                if category.is_statement() {
                    return Rewritten::Removed {
                        leading: node.leading,
                    };
                }
                match &mut node.kind {
                    NodeKind::Number(lit) => lit.replace_with(&self.sentinels.number),
                    NodeKind::Str(lit) => lit.set_value(&self.sentinels.string),
                    NodeKind::Compare(cmp) => cmp.negate_all(),
                    NodeKind::BinOp(op) => op.swap_operator(),
                    NodeKind::Assign(_)
                    | NodeKind::AugAssign(_)
                    | NodeKind::AnnAssign(_)
                    | NodeKind::Suite(_)
                    | NodeKind::Composite(_)
                    | NodeKind::CompareOp(_)
                    | NodeKind::BinaryOperator(_)
                    | NodeKind::Token(_)
                    | NodeKind::Trivia(_) => {}
                }
            }
        }
        self.rewrite_children(&mut node);
        Rewritten::Kept(node)
    }

    fn rewrite_children(&mut self, node: &mut Node) {
        match &mut node.kind {
            NodeKind::Suite(suite) => {
                let children = std::mem::take(&mut suite.children);
                suite.children = self.rewrite_sequence(children, suite.requires_body);
            }
            NodeKind::Assign(c)
            | NodeKind::AugAssign(c)
            | NodeKind::AnnAssign(c)
            | NodeKind::Composite(c) => {
                let children = std::mem::take(&mut c.children);
                c.children = self.rewrite_sequence(children, false);
            }
            NodeKind::Compare(cmp) => {
                let parts = std::mem::take(&mut cmp.parts);
                cmp.parts = self.rewrite_sequence(parts, false);
            }
            NodeKind::BinOp(op) => {
                let parts = std::mem::take(&mut op.parts);
                op.parts = self.rewrite_sequence(parts, false);
            }
            NodeKind::Number(_)
            | NodeKind::Str(_)
            | NodeKind::CompareOp(_)
            | NodeKind::BinaryOperator(_)
            | NodeKind::Token(_)
            | NodeKind::Trivia(_) => {}
        }
    }

    /// Rewrite siblings in order, then drop removed ones.
    ///
    /// A removed node's leading text replaces that of the next kept sibling, unless
    /// that would pull a statement onto the line of a preceding `;`. A `;` directly
    /// after a removed node goes with it. With `requires_body`, a sequence that
    /// would be left without statements keeps a `pass` where the first removed
    /// statement was.
    fn rewrite_sequence(&mut self, children: Vec<Node>, requires_body: bool) -> Vec<Node> {
        let mut outcomes: Vec<Rewritten> =
            children.into_iter().map(|c| self.rewrite(c)).collect();

        if requires_body {
            let has_statement = outcomes
                .iter()
                .any(|o| matches!(o, Rewritten::Kept(node) if node.is_statement()));
            let first_removed = outcomes
                .iter()
                .position(|o| matches!(o, Rewritten::Removed { .. }));
            if let (false, Some(index)) = (has_statement, first_removed) {
                if let Rewritten::Removed { leading } = &mut outcomes[index] {
                    let leading = std::mem::take(leading);
                    outcomes[index] = Rewritten::Kept(Node::pass(leading));
                }
            }
        }

        let mut kept = Vec::with_capacity(outcomes.len());
        let mut pending_leading: Option<String> = None;
        let mut drop_separator = false;
        for outcome in outcomes {
            match outcome {
                Rewritten::Kept(node) if drop_separator && node.is_separator() => {
                    drop_separator = false;
                }
                Rewritten::Kept(mut node) => {
                    drop_separator = false;
                    if let Some(leading) = pending_leading.take() {
                        let joins_line = !leading.contains('\n') && node.leading.contains('\n');
                        if joins_line && kept.last().is_some_and(Node::is_separator) {
                            // The removed statement followed a `;`. The next one
                            // stays on its own line and the dangling `;` goes.
                            kept.pop();
                        } else {
                            node.leading = leading;
                        }
                    }
                    kept.push(node);
                }
                Rewritten::Removed { leading } => {
                    drop_separator = true;
                    pending_leading.get_or_insert(leading);
                }
            }
        }
        kept
    }
}
