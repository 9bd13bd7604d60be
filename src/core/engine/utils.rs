use tree_sitter::{Language, Node, Parser, Tree, TreeCursor};

use crate::types::ParseError;

/// Parse source text with a tree-sitter grammar
pub fn parse_source(
    source: &str,
    language: &Language,
    language_name: &'static str,
) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| ParseError::Language {
            language: language_name,
            reason: e.to_string(),
        })?;
    parser.parse(source, None).ok_or(ParseError::NoTree)
}

/// Get text content of a node from source
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Take the source text between `*pos` and `upto`, advancing `*pos`.
/// Returns an empty string if `upto` is not ahead of `*pos`.
pub fn take_text(source: &str, pos: &mut usize, upto: usize) -> String {
    if upto > *pos {
        let text = source[*pos..upto].to_string();
        *pos = upto;
        text
    } else {
        String::new()
    }
}

/// Visit all nodes in the tree with a callback, using a provided cursor for advanced usage
pub fn visit_nodes_with_cursor<F>(node: Node, cursor: &mut TreeCursor, callback: &mut F)
where
    F: FnMut(Node),
{
    callback(node);

    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            visit_nodes_with_cursor(child, cursor, callback);

            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

/// First error or missing node in document order, as a 1-based (line, column)
pub fn first_error_position(root: Node) -> Option<(usize, usize)> {
    let mut found: Option<(usize, usize)> = None;
    let mut cursor = root.walk();
    visit_nodes_with_cursor(root, &mut cursor, &mut |node| {
        if found.is_none() && (node.is_error() || node.is_missing()) {
            let point = node.start_position();
            found = Some((point.row + 1, point.column + 1));
        }
    });
    found
}
