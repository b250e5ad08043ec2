//! Host dialog option surfaces.
//!
//! Each authoring effect is configured from a flat map of typed options
//! filled by the host's configuration dialog. The structs here mirror
//! those dialogs key-for-key (serde handles the map), with the dialog
//! defaults: basename `button`, new basename `copybutton`, one-cell
//! borders, 30-unit content, every state enabled.

use serde::{Deserialize, Serialize};
use sk_core::naming::ButtonState;

use crate::frame::FrameBorders;

fn default_true() -> bool {
    true
}

fn default_basename() -> String {
    "button".to_string()
}

fn default_newbasename() -> String {
    "copybutton".to_string()
}

fn default_thickness() -> u32 {
    1
}

fn default_extent() -> u32 {
    30
}

// ─── State flags ─────────────────────────────────────────────────────────

/// Per-state enable flags, one checkbox per button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFlags {
    #[serde(default = "default_true")]
    pub normal: bool,
    #[serde(default = "default_true")]
    pub focused: bool,
    #[serde(default = "default_true")]
    pub pressed: bool,
    #[serde(default = "default_true")]
    pub toggled: bool,
    #[serde(default = "default_true")]
    pub disabled: bool,
}

impl Default for StateFlags {
    fn default() -> Self {
        Self {
            normal: true,
            focused: true,
            pressed: true,
            toggled: true,
            disabled: true,
        }
    }
}

impl StateFlags {
    /// Whether `state`'s checkbox is set.
    pub fn enabled(&self, state: ButtonState) -> bool {
        match state {
            ButtonState::Normal => self.normal,
            ButtonState::Focused => self.focused,
            ButtonState::Pressed => self.pressed,
            ButtonState::Toggled => self.toggled,
            ButtonState::Disabled => self.disabled,
        }
    }
}

// ─── Per-effect option surfaces ──────────────────────────────────────────

/// Options of the interior generation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorOptions {
    #[serde(default = "default_basename")]
    pub basename: String,
    #[serde(default = "default_extent")]
    pub width: u32,
    #[serde(default = "default_extent")]
    pub height: u32,
    #[serde(flatten)]
    pub states: StateFlags,
}

/// Options of the frame generation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameOptions {
    #[serde(default = "default_basename")]
    pub basename: String,
    #[serde(default = "default_thickness")]
    pub top: u32,
    #[serde(default = "default_thickness")]
    pub bottom: u32,
    #[serde(default = "default_thickness")]
    pub left: u32,
    #[serde(default = "default_thickness")]
    pub right: u32,
    #[serde(default = "default_extent")]
    pub width: u32,
    #[serde(default = "default_extent")]
    pub height: u32,
    #[serde(flatten)]
    pub states: StateFlags,
}

impl Default for InteriorOptions {
    fn default() -> Self {
        Self {
            basename: default_basename(),
            width: default_extent(),
            height: default_extent(),
            states: StateFlags::default(),
        }
    }
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            basename: default_basename(),
            top: default_thickness(),
            bottom: default_thickness(),
            left: default_thickness(),
            right: default_thickness(),
            width: default_extent(),
            height: default_extent(),
            states: StateFlags::default(),
        }
    }
}

impl FrameOptions {
    pub fn borders(&self) -> FrameBorders {
        FrameBorders {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
        }
    }
}

/// Options of the state-variant dialogs (derive focused/pressed/toggled/
/// disabled pieces from an existing normal state). The normal flag is
/// accepted but meaningless — the normal state is the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVariantOptions {
    #[serde(default = "default_basename")]
    pub basename: String,
    #[serde(flatten)]
    pub states: StateFlags,
}

impl Default for StateVariantOptions {
    fn default() -> Self {
        Self {
            basename: default_basename(),
            states: StateFlags::default(),
        }
    }
}

/// Options of the rebasename-copy dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebaseOptions {
    #[serde(default = "default_basename")]
    pub basename: String,
    #[serde(default = "default_newbasename")]
    pub newbasename: String,
    #[serde(flatten)]
    pub states: StateFlags,
}

impl Default for RebaseOptions {
    fn default() -> Self {
        Self {
            basename: default_basename(),
            newbasename: default_newbasename(),
            states: StateFlags::default(),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
