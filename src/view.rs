//! Render inputs derived from board state.
//!
//! Stacking is decided here, not by reordering items: every item sits at the
//! same base z-index in insertion order, and the item being dragged is lifted
//! above the rest for the duration of the drag.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Serialize;

use crate::consts::{DRAGGING_Z_INDEX, HANDLE_Z_INDEX, ITEM_Z_INDEX};
use crate::engine::Board;
use crate::gesture::{GestureContext, GestureKind};
use crate::input::Handle;
use crate::item::{Item, ItemId};

/// Help text shown while any item is in edit mode.
pub const EDIT_HINT: &str = "blue: resize | green: rotate | red: delete | Enter: done";

/// Handles drawn on an item in edit mode.
pub const EDIT_HANDLES: [Handle; 3] = [Handle::Resize, Handle::Rotate, Handle::Delete];

/// How one item should be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,
    pub z_index: i32,
    pub cursor: &'static str,
    pub selected: bool,
    pub editing: bool,
    /// Visible handles; empty unless editing.
    pub handles: Vec<Handle>,
    /// z-index of the handles within the item, when shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_z_index: Option<i32>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    /// Items in insertion order.
    pub items: Vec<ItemView>,
    pub selected: Option<ItemId>,
    /// Ids in edit mode, ascending.
    pub editing: Vec<ItemId>,
    pub gesture: Option<GestureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_hint: Option<&'static str>,
}

impl BoardView {
    /// Serialize for a JavaScript host.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ItemView> {
        self.items.iter().find(|v| v.item.id() == id)
    }
}

pub(crate) fn build(board: &Board) -> BoardView {
    let dragging = match board.gesture_context() {
        Some(GestureContext::Dragging { id, .. }) => Some(*id),
        _ => None,
    };
    let items = board
        .items()
        .iter()
        .map(|item| item_view(board, item, dragging == Some(item.id())))
        .collect();
    let editing = board.editing_ids();
    let edit_hint = if editing.is_empty() { None } else { Some(EDIT_HINT) };

    BoardView { items, selected: board.selected(), editing, gesture: board.active_gesture(), edit_hint }
}

fn item_view(board: &Board, item: &Item, dragging: bool) -> ItemView {
    let editing = board.is_editing(item.id());
    ItemView {
        item: item.clone(),
        z_index: if dragging { DRAGGING_Z_INDEX } else { ITEM_Z_INDEX },
        cursor: if dragging { "grabbing" } else { "grab" },
        selected: board.selected() == Some(item.id()),
        editing,
        handles: if editing { EDIT_HANDLES.to_vec() } else { Vec::new() },
        handle_z_index: editing.then_some(HANDLE_Z_INDEX),
    }
}
