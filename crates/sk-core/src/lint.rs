//! Lint diagnostics for state-sheet trees.
//!
//! Reports structural issues without modifying the document. Nothing here
//! changes authoring behavior — in particular, duplicate identifiers are
//! legal output of a repeated generation pass and are only reported.

use crate::id::ElementId;
use crate::model::{ShapeKind, ShapeTree};
use crate::naming::{ButtonState, parse_frame_piece_id, parse_interior_id};
use std::collections::{HashMap, HashSet};

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Should be looked at — likely a mistake.
    Warning,
    /// Informational — expected in some workflows.
    Info,
}

/// A single lint diagnostic for a tree element.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The identifier this diagnostic refers to.
    pub element_id: ElementId,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "duplicate-id", "missing-state").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over the tree and return diagnostics.
#[must_use]
pub fn lint_document(tree: &ShapeTree) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_duplicate_ids(tree, &mut diags);
    lint_empty_groups(tree, &mut diags);
    lint_missing_states(tree, &mut diags);
    log::debug!("lint: {} diagnostics", diags.len());
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

/// Warn when a named identifier is carried by more than one element.
/// Lookup resolves to the most recently registered element; earlier ones
/// are unreachable by id.
fn lint_duplicate_ids(tree: &ShapeTree, diags: &mut Vec<LintDiagnostic>) {
    let mut counts: HashMap<ElementId, usize> = HashMap::new();
    for idx in tree.graph.node_indices() {
        let id = tree.graph[idx].id;
        if !id.is_anonymous() {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    for (id, count) in counts {
        if count > 1 {
            diags.push(LintDiagnostic {
                element_id: id,
                message: format!(
                    "Identifier `{id}` is carried by {count} elements — only the newest is reachable by id."
                ),
                severity: LintSeverity::Warning,
                rule: "duplicate-id",
            });
        }
    }
}

/// Info on groups containing no elements. A frame side generated with zero
/// thickness is the usual source.
fn lint_empty_groups(tree: &ShapeTree, diags: &mut Vec<LintDiagnostic>) {
    for idx in tree.graph.node_indices() {
        let element = &tree.graph[idx];
        if matches!(element.kind, ShapeKind::Group) && tree.children(idx).is_empty() {
            diags.push(LintDiagnostic {
                element_id: element.id,
                message: format!("Group `{}` contains no shapes.", element.id),
                severity: LintSeverity::Info,
                rule: "empty-group",
            });
        }
    }
}

/// Info when a basename covers some but not all five button states.
fn lint_missing_states(tree: &ShapeTree, diags: &mut Vec<LintDiagnostic>) {
    let mut seen: HashMap<String, HashSet<ButtonState>> = HashMap::new();

    for idx in tree.graph.node_indices() {
        let id = tree.graph[idx].id;
        if id.is_anonymous() {
            continue;
        }
        let (basename, state) = match parse_frame_piece_id(id.as_str()) {
            Some((basename, state, _side)) => (basename, state),
            None => match parse_interior_id(id.as_str()) {
                Some(pair) => pair,
                None => continue,
            },
        };
        seen.entry(basename.to_string()).or_default().insert(state);
    }

    let mut basenames: Vec<_> = seen.into_iter().collect();
    basenames.sort_by(|a, b| a.0.cmp(&b.0));

    for (basename, states) in basenames {
        let missing: Vec<&str> = ButtonState::ALL
            .into_iter()
            .filter(|s| !states.contains(s))
            .map(ButtonState::as_str)
            .collect();
        if !missing.is_empty() {
            diags.push(LintDiagnostic {
                element_id: ElementId::intern(&basename),
                message: format!(
                    "Basename `{basename}` is missing states: {}.",
                    missing.join(", ")
                ),
                severity: LintSeverity::Info,
                rule: "missing-state",
            });
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
