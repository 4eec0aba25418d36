//! Item model: placed decorations, their geometry, and the in-memory store.
//!
//! This module defines what sits on the board (`Item`, `ItemKind`,
//! `ItemContent`), a sparse-update type for geometry edits (`GeometryPatch`),
//! and the store that owns all live items in insertion order (`ItemStore`).
//!
//! Insertion order is the default stacking order; the renderer reads
//! `ItemStore::all` front to back. Identity and content are fixed at
//! creation; only position, size, and rotation change afterwards.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{PHOTO_SIZE, STICKER_SIZE, TAPE_SIZE};
use crate::geometry::{Point, Size};
use crate::jitter::Jitter;
use crate::palette::{ImageRef, StickerKey, TapeColor};

/// Unique identifier for a placed item. Assigned from a counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hosts echo ids back through DOM attributes as plain numbers.
impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a placed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Uploaded image, free-form rectangle.
    Photo,
    /// Strip of washi tape, free-form rectangle.
    Tape,
    /// Glyph sticker; its width drives the glyph scale.
    Sticker,
}

impl ItemKind {
    /// Size given to a freshly created item of this kind.
    #[must_use]
    pub fn default_size(self) -> Size {
        let (w, h) = match self {
            Self::Photo => PHOTO_SIZE,
            Self::Tape => TAPE_SIZE,
            Self::Sticker => STICKER_SIZE,
        };
        Size::new(w, h)
    }
}

/// Kind-dependent payload. The variant determines the item's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum ItemContent {
    Photo(ImageRef),
    Tape(TapeColor),
    Sticker(StickerKey),
}

impl ItemContent {
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Photo(_) => ItemKind::Photo,
            Self::Tape(_) => ItemKind::Tape,
            Self::Sticker(_) => ItemKind::Sticker,
        }
    }
}

/// A decoration placed on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    #[serde(flatten)]
    content: ItemContent,
    /// Top-left corner in board-local pixels.
    pub position: Point,
    /// Bounding box size in pixels.
    pub size: Size,
    /// Clockwise rotation in degrees around the bounding-box center.
    pub rotation: f64,
}

impl Item {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    #[must_use]
    pub fn content(&self) -> &ItemContent {
        &self.content
    }

    /// Center of the unrotated bounding box in board-local pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.position.x + self.size.width / 2.0, self.position.y + self.size.height / 2.0)
    }
}

/// Sparse geometry update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl GeometryPatch {
    #[must_use]
    pub fn position(p: Point) -> Self {
        Self { position: Some(p), ..Self::default() }
    }

    #[must_use]
    pub fn size(s: Size) -> Self {
        Self { size: Some(s), ..Self::default() }
    }

    #[must_use]
    pub fn rotation(deg: f64) -> Self {
        Self { rotation: Some(deg), ..Self::default() }
    }
}

/// In-memory, insertion-ordered store of placed items.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }

    /// Append a new item at `position` with a fresh id, the kind's default
    /// size, and a rotation drawn from `jitter`.
    pub fn create(&mut self, content: ItemContent, position: Point, jitter: &mut dyn Jitter) -> &Item {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        let size = content.kind().default_size();
        let index = self.items.len();
        self.items.push(Item { id, content, position, size, rotation: jitter.rotation() });
        &self.items[index]
    }

    /// Merge the supplied geometry fields into an item. Returns false if the
    /// item doesn't exist.
    pub fn update(&mut self, id: ItemId, patch: &GeometryPatch) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        if let Some(p) = patch.position {
            item.position = p;
        }
        if let Some(s) = patch.size {
            item.size = s;
        }
        if let Some(r) = patch.rotation {
            item.rotation = r;
        }
        true
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// All items in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
