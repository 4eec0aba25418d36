//! Shared numeric constants for the board engine.

// ── Item sizes ──────────────────────────────────────────────────

/// Floor for item width and height enforced by the resize gesture.
pub const MIN_ITEM_SIZE: f64 = 20.0;

/// Default photo size (width, height) in pixels.
pub const PHOTO_SIZE: (f64, f64) = (100.0, 100.0);

/// Default tape strip size (width, height) in pixels.
pub const TAPE_SIZE: (f64, f64) = (80.0, 25.0);

/// Default sticker size (width, height) in pixels; stickers scale uniformly.
pub const STICKER_SIZE: (f64, f64) = (30.0, 30.0);

// ── Gestures ────────────────────────────────────────────────────

/// Fraction of pointer displacement applied to the size during a resize.
pub const RESIZE_GAIN: f64 = 0.5;

// ── Creation defaults ───────────────────────────────────────────

/// Max absolute rotation jitter, in degrees, given to new items.
pub const DEFAULT_JITTER_DEGREES: f64 = 10.0;

/// Largest jitter range accepted; beyond a half turn the range only repeats.
pub const MAX_JITTER_DEGREES: f64 = 180.0;

/// Board-local position where uploaded photos are placed.
pub const DEFAULT_UPLOAD_POSITION: (f64, f64) = (400.0, 200.0);

// ── Stacking ────────────────────────────────────────────────────

/// z-index of a placed item at rest (editing or not).
pub const ITEM_Z_INDEX: i32 = 15;

/// z-index of the item currently being dragged.
pub const DRAGGING_Z_INDEX: i32 = 20;

/// z-index of the resize/rotate/delete handles within an item.
pub const HANDLE_Z_INDEX: i32 = 30;
