//! Identifier-based duplication with a pure-translation offset.
//!
//! One parameterized procedure covers every copy flow in the family:
//! an axis, a signed magnitude, and an identifier set (one id for an
//! interior, the fixed eight-piece set for a frame). A lookup miss is not
//! an error — the requested copy simply does not appear, and a partial
//! frame copy is a valid outcome.

use sk_core::id::ElementId;
use sk_core::model::ShapeTree;
use sk_core::naming::{ButtonState, frame_piece_ids, interior_id};
use sk_core::transform::Transform;

/// Which translation slot of the transform a copy offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A signed translation along exactly one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub axis: Axis,
    pub amount: f32,
}

impl Offset {
    pub const fn horizontal(amount: f32) -> Self {
        Self {
            axis: Axis::Horizontal,
            amount,
        }
    }

    pub const fn vertical(amount: f32) -> Self {
        Self {
            axis: Axis::Vertical,
            amount,
        }
    }

    /// Apply onto an optional source transform: compose with an existing
    /// matrix (rotation/scale untouched) or synthesize a pure translation.
    fn apply(self, transform: Option<Transform>) -> Transform {
        let base = transform.unwrap_or(Transform::IDENTITY);
        match self.axis {
            Axis::Horizontal => base.translated(self.amount, 0.0),
            Axis::Vertical => base.translated(0.0, self.amount),
        }
    }
}

/// Copy the element identified by `source` to a new sibling identified by
/// `target`, offset by `offset`. The source is never mutated.
///
/// Returns `false` when `source` resolves to nothing (the copy is skipped).
pub fn duplicate_as(
    tree: &mut ShapeTree,
    source: ElementId,
    target: ElementId,
    offset: Offset,
) -> bool {
    let Some(src) = tree.find_by_id(source) else {
        // Missing source: the copy is skipped, nothing is surfaced.
        return false;
    };
    let Some(parent) = tree.parent(src) else {
        return false;
    };

    let copy = tree.deep_copy(src);
    tree.set_id(copy, target);
    let composed = offset.apply(tree.graph[copy].transform);
    tree.graph[copy].transform = Some(composed);
    tree.append_child(parent, copy);
    log::debug!("duplicated {source} -> {target}");
    true
}

/// Run `duplicate_as` over a set of (source, target) identifier pairs with
/// one shared offset. Returns the number of copies made.
pub fn duplicate_set(
    tree: &mut ShapeTree,
    pairs: impl IntoIterator<Item = (ElementId, ElementId)>,
    offset: Offset,
) -> usize {
    pairs
        .into_iter()
        .filter(|&(source, target)| duplicate_as(tree, source, target, offset))
        .count()
}

/// Copy one interior group `{basename}-{state}` to
/// `{newbasename}-{newstate}`.
pub fn copy_interior(
    tree: &mut ShapeTree,
    basename: &str,
    state: ButtonState,
    newbasename: &str,
    newstate: ButtonState,
    offset: Offset,
) -> bool {
    duplicate_as(
        tree,
        interior_id(basename, state),
        interior_id(newbasename, newstate),
        offset,
    )
}

/// Copy all eight frame pieces of `{basename}-{state}` to
/// `{newbasename}-{newstate}`, each offset independently. Pieces missing
/// from the source are skipped; returns the number actually copied.
pub fn copy_frame(
    tree: &mut ShapeTree,
    basename: &str,
    state: ButtonState,
    newbasename: &str,
    newstate: ButtonState,
    offset: Offset,
) -> usize {
    let sources = frame_piece_ids(basename, state);
    let targets = frame_piece_ids(newbasename, newstate);
    duplicate_set(tree, sources.into_iter().zip(targets), offset)
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sk_core::id::ElementId;
    use sk_core::model::Element;
    use sk_core::naming::{FrameSide, frame_piece_id, interior_id};

    fn seed_interior(tree: &mut ShapeTree, basename: &str, state: ButtonState) {
        let root = tree.root;
        let g = tree.create_child(root, Element::group(interior_id(basename, state)));
        tree.create_child(g, Element::rect(0.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn missing_source_produces_nothing_and_does_not_raise() {
        let mut tree = ShapeTree::new();
        let before = tree.element_count();

        let copied = duplicate_as(
            &mut tree,
            ElementId::intern("ghost-normal"),
            ElementId::intern("ghost-focused"),
            Offset::horizontal(30.0),
        );

        assert!(!copied);
        assert_eq!(tree.element_count(), before);
    }

    #[test]
    fn copy_without_prior_transform_synthesizes_pure_translation() {
        let mut tree = ShapeTree::new();
        seed_interior(&mut tree, "btn", ButtonState::Normal);

        assert!(copy_interior(
            &mut tree,
            "btn",
            ButtonState::Normal,
            "btn",
            ButtonState::Focused,
            Offset::horizontal(30.0),
        ));

        let copy = tree
            .get_by_id(interior_id("btn", ButtonState::Focused))
            .unwrap();
        assert_eq!(copy.transform, Some(Transform::translation(30.0, 0.0)));
    }

    #[test]
    fn horizontal_offset_only_touches_tx() {
        let mut tree = ShapeTree::new();
        seed_interior(&mut tree, "btn", ButtonState::Normal);
        let src = tree.find_by_id(interior_id("btn", ButtonState::Normal)).unwrap();
        let existing = Transform {
            a: 0.0,
            b: -1.0,
            tx: 5.0,
            c: 1.0,
            d: 0.0,
            ty: 7.0,
        };
        tree.graph[src].transform = Some(existing);

        copy_interior(
            &mut tree,
            "btn",
            ButtonState::Normal,
            "btn",
            ButtonState::Pressed,
            Offset::horizontal(60.0),
        );

        let copy = tree
            .get_by_id(interior_id("btn", ButtonState::Pressed))
            .unwrap();
        let t = copy.transform.unwrap();
        assert_eq!((t.a, t.b, t.c, t.d), (0.0, -1.0, 1.0, 0.0));
        assert_eq!(t.tx, 65.0);
        assert_eq!(t.ty, 7.0);

        // Source transform untouched
        assert_eq!(tree.graph[src].transform, Some(existing));
    }

    #[test]
    fn vertical_offset_only_touches_ty() {
        let mut tree = ShapeTree::new();
        seed_interior(&mut tree, "btn", ButtonState::Normal);
        let src = tree.find_by_id(interior_id("btn", ButtonState::Normal)).unwrap();
        tree.graph[src].transform = Some(Transform::translation(4.0, 9.0));

        copy_interior(
            &mut tree,
            "btn",
            ButtonState::Normal,
            "copy",
            ButtonState::Normal,
            Offset::vertical(-30.0),
        );

        let copy = tree
            .get_by_id(interior_id("copy", ButtonState::Normal))
            .unwrap();
        assert_eq!(copy.transform, Some(Transform::translation(4.0, -21.0)));
    }

    #[test]
    fn partial_frames_copy_whatever_exists() {
        let mut tree = ShapeTree::new();
        let root = tree.root;
        // Only three of the eight pieces exist
        for side in [FrameSide::Top, FrameSide::Left, FrameSide::BottomRight] {
            tree.create_child(
                root,
                Element::group(frame_piece_id("btn", ButtonState::Normal, side)),
            );
        }

        let copied = copy_frame(
            &mut tree,
            "btn",
            ButtonState::Normal,
            "btn",
            ButtonState::Focused,
            Offset::horizontal(30.0),
        );

        assert_eq!(copied, 3);
        assert!(
            tree.find_by_id(frame_piece_id("btn", ButtonState::Focused, FrameSide::Top))
                .is_some()
        );
        assert!(
            tree.find_by_id(frame_piece_id("btn", ButtonState::Focused, FrameSide::Right))
                .is_none()
        );
    }

    #[test]
    fn full_frame_copies_all_eight_pieces() {
        let mut tree = ShapeTree::new();
        let root = tree.root;
        for side in FrameSide::ALL {
            tree.create_child(
                root,
                Element::group(frame_piece_id("btn", ButtonState::Normal, side)),
            );
        }

        let copied = copy_frame(
            &mut tree,
            "btn",
            ButtonState::Normal,
            "tool",
            ButtonState::Normal,
            Offset::vertical(-30.0),
        );
        assert_eq!(copied, 8);

        for side in FrameSide::ALL {
            let copy = tree
                .get_by_id(frame_piece_id("tool", ButtonState::Normal, side))
                .unwrap();
            assert_eq!(copy.transform, Some(Transform::translation(0.0, -30.0)));
        }
    }
}
