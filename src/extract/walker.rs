//! Markup tree walker
//!
//! A generic depth-first, pre-order traversal over a parsed markup tree.
//! The walker is purely structural: it invokes the caller's visitor once per
//! element node before descending into that node's children, left to right,
//! and knows nothing about field semantics. There is no early exit; the
//! traversal always runs to completion, which is an acceptable cost for the
//! page sizes this tool deals with.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

/// Walks the subtree rooted at `node`, invoking `visit` for every element.
///
/// Non-element nodes (text, comments, the document root) are descended
/// through but not visited.
pub fn walk<'a, F>(node: NodeRef<'a, Node>, visit: &mut F)
where
    F: FnMut(ElementRef<'a>),
{
    if let Some(element) = ElementRef::wrap(node) {
        visit(element);
    }

    for child in node.children() {
        walk(child, visit);
    }
}

/// Walks an entire parsed document from its root.
pub fn walk_document<'a, F>(document: &'a Html, visit: &mut F)
where
    F: FnMut(ElementRef<'a>),
{
    walk(document.tree.root(), visit);
}
