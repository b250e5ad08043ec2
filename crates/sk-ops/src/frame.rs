//! Beveled frame generation.
//!
//! A frame is eight sibling groups of unit rectangles tiling the border of
//! a content rectangle: four edge strips repeated `thickness` times and
//! four dense corner grids. Strips and content sit one reserved unit ring
//! apart.

use serde::{Deserialize, Serialize};
use sk_core::NodeIndex;
use sk_core::model::{Element, FRAME_FILL, ShapeTree};
use sk_core::naming::{ButtonState, FrameSide, frame_piece_id};

/// Edge cell size. Frames are authored at unit scale and stretched by the
/// consuming style engine, so this never varies.
const RW: f32 = 1.0;

/// Per-side border thickness in unit cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameBorders {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for FrameBorders {
    fn default() -> Self {
        Self {
            top: 1,
            bottom: 1,
            left: 1,
            right: 1,
        }
    }
}

/// Generate the eight frame groups for one state around a `width × height`
/// content area whose outer frame origin is `(x, y)`.
///
/// Groups are created even when their computed cell count is zero, so the
/// full identifier set always exists for downstream duplication.
#[allow(clippy::too_many_arguments)]
pub fn draw_frame(
    tree: &mut ShapeTree,
    parent: NodeIndex,
    x: f32,
    y: f32,
    borders: FrameBorders,
    width: f32,
    height: f32,
    basename: &str,
    state: ButtonState,
) {
    let FrameBorders {
        top,
        bottom,
        left,
        right,
    } = borders;

    // Content rectangle starts one reserved unit ring past the left/top strips.
    let content_x = x + (left as f32 + 1.0) * RW;
    let content_y = y + (top as f32 + 1.0) * RW;
    let below_y = y + (top as f32 + 2.0) * RW + height;
    let right_x = x + (left as f32 + 2.0) * RW + width;

    let g = piece(tree, parent, basename, state, FrameSide::Top);
    for i in 0..top {
        cell(tree, g, content_x, y + RW * i as f32, width, RW);
    }

    let g = piece(tree, parent, basename, state, FrameSide::Bottom);
    for i in 0..bottom {
        cell(tree, g, content_x, below_y + RW * i as f32, width, RW);
    }

    let g = piece(tree, parent, basename, state, FrameSide::Left);
    for i in 0..left {
        cell(tree, g, x + RW * i as f32, content_y, RW, height);
    }

    let g = piece(tree, parent, basename, state, FrameSide::Right);
    for i in 0..right {
        cell(tree, g, right_x + RW * i as f32, content_y, RW, height);
    }

    let g = piece(tree, parent, basename, state, FrameSide::TopLeft);
    for i in 0..left {
        for j in 0..top {
            cell(tree, g, x + RW * i as f32, y + RW * j as f32, RW, RW);
        }
    }

    let g = piece(tree, parent, basename, state, FrameSide::TopRight);
    for i in 0..right {
        for j in 0..top {
            cell(tree, g, right_x + RW * i as f32, y + RW * j as f32, RW, RW);
        }
    }

    let g = piece(tree, parent, basename, state, FrameSide::BottomLeft);
    for i in 0..left {
        for j in 0..bottom {
            cell(tree, g, x + RW * i as f32, below_y + RW * j as f32, RW, RW);
        }
    }

    let g = piece(tree, parent, basename, state, FrameSide::BottomRight);
    for i in 0..right {
        for j in 0..bottom {
            cell(
                tree,
                g,
                right_x + RW * i as f32,
                below_y + RW * j as f32,
                RW,
                RW,
            );
        }
    }

    log::debug!("generated frame {basename}-{state} at ({x},{y})");
}

fn piece(
    tree: &mut ShapeTree,
    parent: NodeIndex,
    basename: &str,
    state: ButtonState,
    side: FrameSide,
) -> NodeIndex {
    log::trace!("frame piece {basename}-{state}-{side}");
    tree.create_child(parent, Element::group(frame_piece_id(basename, state, side)))
}

fn cell(tree: &mut ShapeTree, group: NodeIndex, x: f32, y: f32, w: f32, h: f32) {
    tree.create_child(group, Element::rect(x, y, w, h).with_fill(FRAME_FILL));
}

// ─── Tests ────────────────────────────────────────────────────────────────
