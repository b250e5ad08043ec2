//! Interior generation: the flat fill inside a button's frame.

use sk_core::NodeIndex;
use sk_core::model::{Element, INTERIOR_FILL, ShapeTree};
use sk_core::naming::{ButtonState, interior_id};

/// Generate one state's interior: a group `{basename}-{state}` holding a
/// single `width × height` rectangle at `(x, y)`.
#[allow(clippy::too_many_arguments)]
pub fn draw_interior(
    tree: &mut ShapeTree,
    parent: NodeIndex,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    basename: &str,
    state: ButtonState,
) {
    let g = tree.create_child(parent, Element::group(interior_id(basename, state)));
    tree.create_child(
        g,
        Element::rect(x, y, width, height).with_fill(INTERIOR_FILL),
    );
    log::debug!("generated interior {basename}-{state} at ({x},{y})");
}

// ─── Tests ────────────────────────────────────────────────────────────────
