//! Palette: the tape colors and stickers offered for drag-to-board placement,
//! the photo reference type, and the menu state that exposes them.
//!
//! A palette drag hands the board a `PaletteSelection` describing what to
//! create. Hosts that ship the selection through a drag-and-drop transfer as
//! text use `PaletteSelection::from_transfer_data` to parse it back.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::{ItemContent, ItemKind};

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("unknown tape color: {0}")]
    UnknownTape(String),
    #[error("unknown sticker key: {0}")]
    UnknownSticker(String),
    #[error("palette item kind not draggable: {0:?}")]
    NotDraggable(ItemKind),
    #[error("malformed palette payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("not an image data URL")]
    NotAnImage,
}

// =============================================================================
// TAPE
// =============================================================================

/// Washi-tape color key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapeColor {
    #[default]
    Gray,
    Pink,
    Blue,
    Yellow,
    Green,
    Brown,
}

impl TapeColor {
    pub const ALL: [TapeColor; 6] = [Self::Gray, Self::Pink, Self::Blue, Self::Yellow, Self::Green, Self::Brown];

    /// The palette key as used in transfer payloads.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Brown => "brown",
        }
    }

    /// CSS background used to paint a strip of this tape.
    #[must_use]
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Gray => "linear-gradient(135deg, rgba(200,200,200,0.9), rgba(150,150,150,0.9))",
            Self::Pink => "linear-gradient(135deg, rgba(255,105,97,0.9), rgba(255,75,85,0.9))",
            Self::Blue => "linear-gradient(135deg, rgba(74,144,226,0.9), rgba(56,103,214,0.9))",
            Self::Yellow => "linear-gradient(135deg, rgba(255,206,84,0.9), rgba(255,179,71,0.9))",
            Self::Green => "linear-gradient(135deg, rgba(129,199,132,0.9), rgba(102,187,106,0.9))",
            Self::Brown => "linear-gradient(135deg, rgba(141,110,99,0.9), rgba(109,76,65,0.9))",
        }
    }
}

impl FromStr for TapeColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| PaletteError::UnknownTape(s.to_string()))
    }
}

// =============================================================================
// STICKERS
// =============================================================================

/// Sticker key, `a` through `l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerKey {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

impl StickerKey {
    pub const ALL: [StickerKey; 12] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
            Self::G => "g",
            Self::H => "h",
            Self::I => "i",
            Self::J => "j",
            Self::K => "k",
            Self::L => "l",
        }
    }

    /// The glyph drawn for this sticker.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::A => "🦋",
            Self::B => "🌸",
            Self::C => "⭐",
            Self::D => "💖",
            Self::E => "🌙",
            Self::F => "☀️",
            Self::G => "🍀",
            Self::H => "🎵",
            Self::I => "✨",
            Self::J => "🌈",
            Self::K => "🎈",
            Self::L => "🎀",
        }
    }
}

impl FromStr for StickerKey {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| PaletteError::UnknownSticker(s.to_string()))
    }
}

// =============================================================================
// PHOTOS
// =============================================================================

/// Displayable image reference produced by the host's image loader
/// (a `data:image/...` URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Accept a data URL whose media type is an image.
    ///
    /// # Errors
    ///
    /// Returns `NotAnImage` for anything other than a `data:image/` URL.
    pub fn from_data_url(url: impl Into<String>) -> Result<Self, PaletteError> {
        let url = url.into();
        if url.starts_with("data:image/") {
            Ok(Self(url))
        } else {
            Err(PaletteError::NotAnImage)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Data URLs run to megabytes; logs only need the media type.
        let head = self.0.split_once(',').map_or(self.0.as_str(), |(head, _)| head);
        write!(f, "{head},…")
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// What a palette drag will create when dropped on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSelection {
    Tape(TapeColor),
    Sticker(StickerKey),
}

/// Wire shape of a palette drag payload, e.g. `{"kind":"tape","content":"pink"}`.
#[derive(Debug, Deserialize)]
struct TransferPayload {
    kind: ItemKind,
    content: String,
}

impl PaletteSelection {
    /// Parse the text carried by a drag-and-drop transfer.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` for invalid JSON, `NotDraggable` for photos, and
    /// `UnknownTape` / `UnknownSticker` for keys outside the palette.
    pub fn from_transfer_data(data: &str) -> Result<Self, PaletteError> {
        let payload: TransferPayload = serde_json::from_str(data)?;
        match payload.kind {
            ItemKind::Tape => Ok(Self::Tape(payload.content.parse()?)),
            ItemKind::Sticker => Ok(Self::Sticker(payload.content.parse()?)),
            ItemKind::Photo => Err(PaletteError::NotDraggable(ItemKind::Photo)),
        }
    }

    /// Encode as transfer text; the inverse of `from_transfer_data`.
    #[must_use]
    pub fn to_transfer_data(self) -> String {
        // Palette keys are fixed lowercase ASCII, so no escaping is needed.
        let (kind, content) = match self {
            Self::Tape(c) => ("tape", c.key()),
            Self::Sticker(k) => ("sticker", k.key()),
        };
        format!(r#"{{"kind":"{kind}","content":"{content}"}}"#)
    }

    /// Item content this selection creates.
    #[must_use]
    pub fn content(self) -> ItemContent {
        match self {
            Self::Tape(c) => ItemContent::Tape(c),
            Self::Sticker(k) => ItemContent::Sticker(k),
        }
    }
}

// =============================================================================
// MENU STATE
// =============================================================================

/// Which palette menu is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMenu {
    Tape,
    Sticker,
}

/// Palette menu and highlighted swatches.
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    open_menu: Option<PaletteMenu>,
    tape: TapeColor,
    sticker: StickerKey,
}

impl PaletteState {
    /// Open `menu`, or close it if it is already the open one.
    pub fn toggle_menu(&mut self, menu: PaletteMenu) {
        self.open_menu = if self.open_menu == Some(menu) { None } else { Some(menu) };
    }

    #[must_use]
    pub fn open_menu(&self) -> Option<PaletteMenu> {
        self.open_menu
    }

    pub fn choose_tape(&mut self, color: TapeColor) {
        self.tape = color;
    }

    pub fn choose_sticker(&mut self, key: StickerKey) {
        self.sticker = key;
    }

    /// The highlighted tape color (also the board's header tape).
    #[must_use]
    pub fn tape(&self) -> TapeColor {
        self.tape
    }

    #[must_use]
    pub fn sticker(&self) -> StickerKey {
        self.sticker
    }
}
