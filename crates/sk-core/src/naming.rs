//! Button states, frame sides, and the identifier scheme that binds them.
//!
//! Every visual piece of a button is addressed by a constructed identifier:
//! `{basename}-{state}` for interiors, `{basename}-{state}-{side}` for frame
//! pieces. The scheme is centralized here — other scripts in the family
//! round-trip on these exact strings, so construction must be bit-exact.

use crate::id::ElementId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

// ─── Button states ───────────────────────────────────────────────────────

/// The five interaction states of a button, in canonical sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    Normal,
    Focused,
    Pressed,
    Toggled,
    Disabled,
}

impl ButtonState {
    /// Canonical order — drives both sheet layout and state-variant offsets.
    pub const ALL: [ButtonState; 5] = [
        ButtonState::Normal,
        ButtonState::Focused,
        ButtonState::Pressed,
        ButtonState::Toggled,
        ButtonState::Disabled,
    ];

    /// The lowercase tag persisted in identifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonState::Normal => "normal",
            ButtonState::Focused => "focused",
            ButtonState::Pressed => "pressed",
            ButtonState::Toggled => "toggled",
            ButtonState::Disabled => "disabled",
        }
    }

    /// Position in canonical order (normal = 0). State-variant duplication
    /// offsets each copy by a column width times this index.
    pub fn index(self) -> usize {
        match self {
            ButtonState::Normal => 0,
            ButtonState::Focused => 1,
            ButtonState::Pressed => 2,
            ButtonState::Toggled => 3,
            ButtonState::Disabled => 4,
        }
    }

    /// Parse a lowercase state tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Frame sides ─────────────────────────────────────────────────────────

/// The eight border regions of a frame: four edge strips and four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSide {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FrameSide {
    pub const ALL: [FrameSide; 8] = [
        FrameSide::Top,
        FrameSide::Bottom,
        FrameSide::Left,
        FrameSide::Right,
        FrameSide::TopLeft,
        FrameSide::TopRight,
        FrameSide::BottomLeft,
        FrameSide::BottomRight,
    ];

    /// The lowercase tag persisted in identifiers (`topleft`, not `top-left`).
    pub fn as_str(self) -> &'static str {
        match self {
            FrameSide::Top => "top",
            FrameSide::Bottom => "bottom",
            FrameSide::Left => "left",
            FrameSide::Right => "right",
            FrameSide::TopLeft => "topleft",
            FrameSide::TopRight => "topright",
            FrameSide::BottomLeft => "bottomleft",
            FrameSide::BottomRight => "bottomright",
        }
    }

    /// Parse a lowercase side tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }
}

impl fmt::Display for FrameSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Identifier scheme ───────────────────────────────────────────────────

/// Identifier of a state's interior group: `{basename}-{state}`.
pub fn interior_id(basename: &str, state: ButtonState) -> ElementId {
    ElementId::intern(&format!("{basename}-{state}"))
}

/// Identifier of one frame piece: `{basename}-{state}-{side}`.
pub fn frame_piece_id(basename: &str, state: ButtonState, side: FrameSide) -> ElementId {
    ElementId::intern(&format!("{basename}-{state}-{side}"))
}

/// The full eight-piece identifier set of one frame.
pub fn frame_piece_ids(basename: &str, state: ButtonState) -> SmallVec<[ElementId; 8]> {
    FrameSide::ALL
        .into_iter()
        .map(|side| frame_piece_id(basename, state, side))
        .collect()
}

/// Split an interior identifier back into `(basename, state)`.
/// Returns `None` for ids that don't end in a `-{state}` suffix.
pub fn parse_interior_id(id: &str) -> Option<(&str, ButtonState)> {
    let (basename, tag) = id.rsplit_once('-')?;
    let state = ButtonState::from_tag(tag)?;
    if basename.is_empty() {
        return None;
    }
    Some((basename, state))
}

/// Split a frame-piece identifier back into `(basename, state, side)`.
pub fn parse_frame_piece_id(id: &str) -> Option<(&str, ButtonState, FrameSide)> {
    let (rest, tag) = id.rsplit_once('-')?;
    let side = FrameSide::from_tag(tag)?;
    let (basename, state) = parse_interior_id(rest)?;
    Some((basename, state, side))
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_ids_are_bit_exact() {
        assert_eq!(interior_id("btn", ButtonState::Normal).as_str(), "btn-normal");
        assert_eq!(
            interior_id("toolbar-btn", ButtonState::Disabled).as_str(),
            "toolbar-btn-disabled"
        );
    }

    #[test]
    fn frame_piece_ids_cover_all_eight_sides() {
        let ids = frame_piece_ids("btn", ButtonState::Pressed);
        assert_eq!(ids.len(), 8);
        assert_eq!(ids[0].as_str(), "btn-pressed-top");
        assert_eq!(ids[4].as_str(), "btn-pressed-topleft");
        assert_eq!(ids[7].as_str(), "btn-pressed-bottomright");
    }

    #[test]
    fn state_index_matches_canonical_order() {
        for (i, state) in ButtonState::ALL.into_iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn parse_inverts_construction() {
        let id = interior_id("toolbar-btn", ButtonState::Focused);
        assert_eq!(
            parse_interior_id(id.as_str()),
            Some(("toolbar-btn", ButtonState::Focused))
        );

        let id = frame_piece_id("btn", ButtonState::Toggled, FrameSide::BottomLeft);
        assert_eq!(
            parse_frame_piece_id(id.as_str()),
            Some(("btn", ButtonState::Toggled, FrameSide::BottomLeft))
        );
    }

    #[test]
    fn parse_rejects_unrelated_ids() {
        assert_eq!(parse_interior_id("background"), None);
        assert_eq!(parse_interior_id("normal"), None);
        assert_eq!(parse_frame_piece_id("btn-normal"), None);
    }
}
