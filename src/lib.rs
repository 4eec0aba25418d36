//! Interaction engine for a decorative calendar board.
//!
//! The board is a month calendar that users decorate with photos, washi tape
//! and stickers. This crate owns the state behind it: the item store, the
//! selection and edit-mode sets, the drag/resize/rotate gesture lifecycle, and
//! the palette drop zone. The host (a browser page or any other UI shell)
//! forwards raw input to [`engine::Board`] and draws from
//! [`engine::Board::view`]; every handler returns the [`engine::Action`]s the
//! host should react to.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Board`] state container and input handlers |
//! | [`item`] | Placed items, ids, and the insertion-ordered store |
//! | [`gesture`] | Per-gesture context and the drag/resize/rotate math |
//! | [`selection`] | Single selection plus the edit-mode set |
//! | [`listeners`] | Scoped move/up subscriptions for an active gesture |
//! | [`palette`] | Tape colors, stickers, images, and drag payloads |
//! | [`input`] | Pointer buttons, keys, and hit targets |
//! | [`view`] | Render inputs: stacking, cursors, handles |
//! | [`jitter`] | Random initial rotation |
//! | [`geometry`] | Points, sizes, and board-local conversions |
//! | [`calendar`] | Month grid under the decorations |
//! | [`notes`] | Per-day notes |
//! | [`config`] | Environment-driven board settings |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`consts`] | Default sizes, limits, and z-indices |

pub mod calendar;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod item;
pub mod jitter;
pub mod listeners;
pub mod logging;
pub mod notes;
pub mod palette;
pub mod selection;
pub mod view;
