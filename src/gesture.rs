//! Gesture contexts and the geometry each gesture produces.
//!
//! A `GestureContext` is captured once at pointer-down and never changes for
//! the rest of the gesture. Every pointer-move is evaluated against it with
//! `GestureContext::step`, so intermediate frames never drift from the
//! start-of-gesture reference values (drag offset, resize origin, rotation
//! pivot) even if the host re-measures the board between events.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_ITEM_SIZE, RESIZE_GAIN};
use crate::geometry::{BoardRect, Point, Size, angle_degrees, clamp_to_extent};
use crate::item::{GeometryPatch, Item, ItemId};

/// Which kind of gesture is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Dragging,
    Resizing,
    Rotating,
}

/// Reference values for one gesture, fixed at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureContext {
    /// Moving an item with its body.
    Dragging {
        id: ItemId,
        /// Board rectangle measured at gesture start.
        board: BoardRect,
        /// Board-local pointer position minus item position at gesture start.
        offset: Point,
    },
    /// Uniformly scaling an item from its resize handle.
    Resizing {
        id: ItemId,
        /// Screen-space pointer position at gesture start.
        start_pointer: Point,
        /// Item size at gesture start.
        start_size: Size,
    },
    /// Pointing an item at the cursor from its rotate handle.
    Rotating {
        id: ItemId,
        /// Board rectangle measured at gesture start.
        board: BoardRect,
        /// Board-local center of the item at gesture start; the pivot.
        center: Point,
    },
}

impl GestureContext {
    /// Begin dragging `item` from screen point `pointer`.
    #[must_use]
    pub fn drag(item: &Item, pointer: Point, board: BoardRect) -> Self {
        let offset = board.to_local(pointer).sub(item.position);
        Self::Dragging { id: item.id(), board, offset }
    }

    /// Begin resizing `item` from screen point `pointer`.
    #[must_use]
    pub fn resize(item: &Item, pointer: Point) -> Self {
        Self::Resizing { id: item.id(), start_pointer: pointer, start_size: item.size }
    }

    /// Begin rotating `item` about its current center.
    #[must_use]
    pub fn rotate(item: &Item, board: BoardRect) -> Self {
        Self::Rotating { id: item.id(), board, center: item.center() }
    }

    #[must_use]
    pub fn item_id(&self) -> ItemId {
        match *self {
            Self::Dragging { id, .. } | Self::Resizing { id, .. } | Self::Rotating { id, .. } => id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Dragging { .. } => GestureKind::Dragging,
            Self::Resizing { .. } => GestureKind::Resizing,
            Self::Rotating { .. } => GestureKind::Rotating,
        }
    }

    /// Geometry for `item` with the pointer at screen point `pointer`.
    #[must_use]
    pub fn step(&self, item: &Item, pointer: Point) -> GeometryPatch {
        match *self {
            Self::Dragging { board, offset, .. } => {
                GeometryPatch::position(drag_position(board, offset, item.size, pointer))
            }
            Self::Resizing { start_pointer, start_size, .. } => {
                GeometryPatch::size(Size::square(resize_side(start_size, pointer.sub(start_pointer))))
            }
            Self::Rotating { board, center, .. } => {
                GeometryPatch::rotation(angle_degrees(center, board.to_local(pointer)))
            }
        }
    }
}

/// Item position for a drag step, clamped so the bounding box stays on the board.
#[must_use]
pub fn drag_position(board: BoardRect, offset: Point, size: Size, pointer: Point) -> Point {
    let target = board.to_local(pointer).sub(offset);
    Point::new(
        clamp_to_extent(target.x, board.size.width - size.width),
        clamp_to_extent(target.y, board.size.height - size.height),
    )
}

/// Side length for a resize step.
///
/// The magnitude of the whole displacement grows or shrinks the item
/// depending only on the sign of its horizontal part. Zero horizontal
/// displacement counts as growth.
#[must_use]
pub fn resize_side(start: Size, delta: Point) -> f64 {
    let direction = if delta.x >= 0.0 { 1.0 } else { -1.0 };
    (start.width + delta.length() * direction * RESIZE_GAIN).max(MIN_ITEM_SIZE)
}
