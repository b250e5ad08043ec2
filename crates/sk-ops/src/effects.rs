//! Authoring effects — one entry point per dialog in the family.
//!
//! Generation effects lay the enabled states out left-to-right in a row
//! starting at the host's view center, advancing the x-origin by
//! `width + 10` between successive states. The advance happens for every
//! state, enabled or not, so each state always lands in its own column.
//!
//! Duplication effects derive new pieces from existing ones: state
//! variants fan out horizontally from the normal column in 30-unit steps,
//! rebasename copies shift one row up (−30) under the new basename.

use sk_core::NodeIndex;
use sk_core::model::ShapeTree;
use sk_core::naming::ButtonState;

use crate::duplicate::{Offset, copy_frame, copy_interior};
use crate::frame::draw_frame;
use crate::interior::draw_interior;
use crate::options::{FrameOptions, InteriorOptions, RebaseOptions, StateVariantOptions};

/// Horizontal gap between state columns in a generated sheet.
const COLUMN_GAP: f32 = 10.0;

/// Horizontal step between a state variant and the normal column.
const VARIANT_STEP: f32 = 30.0;

/// Vertical shift applied to rebasename copies.
const REBASE_STEP: f32 = -30.0;

/// Generate interiors for every enabled state, one column per state.
pub fn generate_interiors(
    tree: &mut ShapeTree,
    parent: NodeIndex,
    view_center: (f32, f32),
    opts: &InteriorOptions,
) {
    let (mut x, y) = view_center;
    let width = opts.width as f32;
    let height = opts.height as f32;

    for state in ButtonState::ALL {
        if state.index() > 0 {
            x += width + COLUMN_GAP;
        }
        if opts.states.enabled(state) {
            draw_interior(tree, parent, x, y, width, height, &opts.basename, state);
        }
    }
}

/// Generate frames for every enabled state, one column per state.
pub fn generate_frames(
    tree: &mut ShapeTree,
    parent: NodeIndex,
    view_center: (f32, f32),
    opts: &FrameOptions,
) {
    let (mut x, y) = view_center;
    let width = opts.width as f32;
    let height = opts.height as f32;
    let borders = opts.borders();

    for state in ButtonState::ALL {
        if state.index() > 0 {
            x += width + COLUMN_GAP;
        }
        if opts.states.enabled(state) {
            draw_frame(
                tree,
                parent,
                x,
                y,
                borders,
                width,
                height,
                &opts.basename,
                state,
            );
        }
    }
}

/// Derive enabled state-variant interiors from the existing normal
/// interior, offsetting each copy into its own column.
pub fn generate_interior_states(tree: &mut ShapeTree, opts: &StateVariantOptions) {
    for state in variant_states(opts) {
        copy_interior(
            tree,
            &opts.basename,
            ButtonState::Normal,
            &opts.basename,
            state,
            Offset::horizontal(VARIANT_STEP * state.index() as f32),
        );
    }
}

/// Derive enabled state-variant frames from the existing normal frame.
pub fn generate_frame_states(tree: &mut ShapeTree, opts: &StateVariantOptions) {
    for state in variant_states(opts) {
        copy_frame(
            tree,
            &opts.basename,
            ButtonState::Normal,
            &opts.basename,
            state,
            Offset::horizontal(VARIANT_STEP * state.index() as f32),
        );
    }
}

/// Copy enabled interior states to a new basename, one row up.
pub fn copy_interiors(tree: &mut ShapeTree, opts: &RebaseOptions) {
    for state in ButtonState::ALL {
        if opts.states.enabled(state) {
            copy_interior(
                tree,
                &opts.basename,
                state,
                &opts.newbasename,
                state,
                Offset::vertical(REBASE_STEP),
            );
        }
    }
}

/// Copy enabled frame states to a new basename, one row up.
pub fn copy_frames(tree: &mut ShapeTree, opts: &RebaseOptions) {
    for state in ButtonState::ALL {
        if opts.states.enabled(state) {
            copy_frame(
                tree,
                &opts.basename,
                state,
                &opts.newbasename,
                state,
                Offset::vertical(REBASE_STEP),
            );
        }
    }
}

/// The enabled non-normal states, in canonical order. Each state is gated
/// on its own flag; the normal flag never participates (normal is the
/// duplication source).
fn variant_states(opts: &StateVariantOptions) -> impl Iterator<Item = ButtonState> + '_ {
    ButtonState::ALL
        .into_iter()
        .filter(|s| *s != ButtonState::Normal)
        .filter(|s| opts.states.enabled(*s))
}

// ─── Tests ────────────────────────────────────────────────────────────────
