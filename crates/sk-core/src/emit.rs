//! SVG fragment emission.
//!
//! Renders a shape tree to the string-encoded form hosts persist: nested
//! `<g>` elements carrying identifiers and transform attributes, `<rect>`
//! leaves carrying geometry and a flat `stroke:none` fill style. This is
//! string encoding only — writing it anywhere is the host's business.

use crate::model::{ShapeKind, ShapeTree};
use petgraph::graph::NodeIndex;
use std::fmt::Write;

/// Emit the tree's elements (root excluded) as an SVG fragment.
#[must_use]
pub fn emit_svg(tree: &ShapeTree) -> String {
    let mut out = String::new();
    for child in tree.children(tree.root) {
        emit_element(tree, child, 0, &mut out);
    }
    out
}

fn emit_element(tree: &ShapeTree, idx: NodeIndex, depth: usize, out: &mut String) {
    let element = &tree.graph[idx];
    let pad = "  ".repeat(depth);

    match &element.kind {
        ShapeKind::Root => {
            for child in tree.children(idx) {
                emit_element(tree, child, depth, out);
            }
        }
        ShapeKind::Group => {
            let _ = write!(out, "{pad}<g id=\"{}\"", element.id);
            if let Some(t) = &element.transform {
                let _ = write!(out, " transform=\"{}\"", t.to_attr());
            }
            let children = tree.children(idx);
            if children.is_empty() {
                out.push_str("/>\n");
            } else {
                out.push_str(">\n");
                for child in children {
                    emit_element(tree, child, depth + 1, out);
                }
                let _ = writeln!(out, "{pad}</g>");
            }
        }
        ShapeKind::Rect {
            x,
            y,
            width,
            height,
        } => {
            // Member rects are anonymous in the persisted document, matching
            // the scheme: only groups are addressed by identifier.
            let _ = write!(
                out,
                "{pad}<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\""
            );
            if let Some(t) = &element.transform {
                let _ = write!(out, " transform=\"{}\"", t.to_attr());
            }
            if let Some(fill) = &element.fill {
                let _ = write!(out, " style=\"stroke:none;fill:{}\"", fill.to_hex());
            }
            out.push_str("/>\n");
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
