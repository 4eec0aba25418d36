//! Input model: mouse buttons, keys, and what a pointer landed on.
//!
//! The host performs DOM hit-testing (items and handles are real elements)
//! and reports the result as a `Target`. Coordinates travel alongside as
//! screen-space `Point`s together with the board's `BoardRect`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A keyboard key name as reported by the browser (e.g. `"Enter"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key ends edit mode for every item.
    #[must_use]
    pub fn is_commit(&self) -> bool {
        self.0 == "Enter"
    }
}

/// Manipulation control shown on an item while it is in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    /// Bottom-right dot; starts a resize.
    Resize,
    /// Top-center dot; starts a rotation.
    Rotate,
    /// Top-left dot; removes the item on click.
    Delete,
}

/// What a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Board surface outside any item.
    Background,
    /// An item's body.
    Body(ItemId),
    /// One of an item's edit handles.
    Handle(ItemId, Handle),
}

impl Target {
    /// The item this target belongs to, if any.
    #[must_use]
    pub fn item(self) -> Option<ItemId> {
        match self {
            Self::Background => None,
            Self::Body(id) | Self::Handle(id, _) => Some(id),
        }
    }
}
