//! The board engine: one state container that owns the items, the selection
//! and edit-mode state, the palette, and at most one active gesture.
//!
//! DESIGN
//! ======
//! Every entry point is a plain method call from the host's event loop and
//! returns the `Action`s the host should react to. Nothing here blocks or
//! spawns; the board is single-writer by construction.
//!
//! A gesture starts on pointer-down, captures an immutable `GestureContext`,
//! and holds the `ListenerGuard` for its global move/up subscriptions. It
//! ends on pointer-up (the only termination signal) or when its item is
//! removed; either way the session is dropped and the subscriptions go
//! with it. While a session exists, every other pointer-down is ignored.
//!
//! Failures are absorbed: an unknown item id, a second gesture, a drop with
//! no palette selection, or a malformed payload all log at `debug` and
//! return no actions.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::config::BoardConfig;
use crate::consts::{DEFAULT_JITTER_DEGREES, DEFAULT_UPLOAD_POSITION};
use crate::geometry::{BoardRect, Point};
use crate::gesture::{GestureContext, GestureKind};
use crate::input::{Button, Handle, Key, Target};
use crate::item::{GeometryPatch, Item, ItemContent, ItemId, ItemStore};
use crate::jitter::{Jitter, RngJitter};
use crate::listeners::{GestureListeners, ListenerGuard};
use crate::palette::{ImageRef, PaletteSelection, PaletteState};
use crate::selection::Selection;
use crate::view::{self, BoardView};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemCreated(Item),
    ItemUpdated { id: ItemId, fields: GeometryPatch },
    ItemRemoved { id: ItemId },
    SelectionChanged(Option<ItemId>),
    EditingChanged,
    GestureStarted(GestureKind),
    GestureEnded(GestureKind),
    SetCursor(&'static str),
    RenderNeeded,
}

/// One in-flight gesture and the subscriptions that feed it.
#[derive(Debug)]
struct GestureSession {
    context: GestureContext,
    _listeners: ListenerGuard,
}

/// A pointer-down on an item body, remembered until the matching click.
#[derive(Debug, Clone, Copy)]
struct Press {
    id: ItemId,
    was_selected: bool,
    moved: bool,
}

pub struct Board {
    store: ItemStore,
    selection: Selection,
    gesture: Option<GestureSession>,
    press: Option<Press>,
    palette: PaletteState,
    palette_drag: Option<PaletteSelection>,
    upload_position: Point,
    jitter: Box<dyn Jitter>,
    listeners: Box<dyn GestureListeners>,
}

impl Board {
    /// Create an empty board with an injected jitter source and listener host.
    pub fn new(jitter: impl Jitter + 'static, listeners: impl GestureListeners + 'static) -> Self {
        Self {
            store: ItemStore::new(),
            selection: Selection::default(),
            gesture: None,
            press: None,
            palette: PaletteState::default(),
            palette_drag: None,
            upload_position: Point::new(DEFAULT_UPLOAD_POSITION.0, DEFAULT_UPLOAD_POSITION.1),
            jitter: Box::new(jitter),
            listeners: Box::new(listeners),
        }
    }

    /// Create a board from config, seeding the jitter RNG when a seed is set.
    pub fn from_config(config: &BoardConfig, listeners: impl GestureListeners + 'static) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut board = Self::new(RngJitter::new(rng, config.jitter_degrees), listeners);
        board.upload_position = config.upload_position;
        board
    }

    /// Board with OS-seeded default jitter and the given listener host.
    pub fn with_listeners(listeners: impl GestureListeners + 'static) -> Self {
        Self::new(RngJitter::new(StdRng::from_os_rng(), DEFAULT_JITTER_DEGREES), listeners)
    }

    // --- Pointer gestures ---

    /// Pointer pressed on `target` at screen point `pointer`.
    pub fn on_pointer_down(&mut self, target: Target, pointer: Point, board: BoardRect, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        if let Some(active) = &self.gesture {
            debug!(active = ?active.context.kind(), ?target, "gesture already active; pointer-down ignored");
            return Vec::new();
        }

        match target {
            Target::Background | Target::Handle(_, Handle::Delete) => Vec::new(),
            Target::Body(id) => {
                let Some(item) = self.store.get(id) else {
                    debug!(%id, "pointer-down on missing item");
                    return Vec::new();
                };
                let context = GestureContext::drag(item, pointer, board);
                let was_selected = self.selection.is_selected(id);
                self.press = Some(Press { id, was_selected, moved: false });

                let mut actions = self.begin(context);
                if !was_selected {
                    self.selection.select(id);
                    actions.insert(0, Action::SelectionChanged(Some(id)));
                }
                actions
            }
            Target::Handle(id, handle) => {
                if !self.selection.is_editing(id) {
                    debug!(%id, ?handle, "handle pressed on item not in edit mode");
                    return Vec::new();
                }
                let Some(item) = self.store.get(id) else {
                    debug!(%id, "pointer-down on handle of missing item");
                    return Vec::new();
                };
                let context = match handle {
                    Handle::Resize => GestureContext::resize(item, pointer),
                    Handle::Rotate => GestureContext::rotate(item, board),
                    Handle::Delete => return Vec::new(),
                };
                self.begin(context)
            }
        }
    }

    /// Pointer moved anywhere in the document.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let Some(session) = &self.gesture else {
            return Vec::new();
        };
        let context = session.context;
        let id = context.item_id();
        let Some(item) = self.store.get(id) else {
            debug!(%id, "active gesture lost its item");
            return Vec::new();
        };

        let fields = context.step(item, pointer);
        if fields.position.is_some_and(|p| p != item.position) {
            if let Some(press) = self.press.as_mut().filter(|p| p.id == id) {
                press.moved = true;
            }
        }
        self.store.update(id, &fields);
        trace!(%id, kind = ?context.kind(), ?fields, "gesture step");

        vec![Action::ItemUpdated { id, fields }, Action::RenderNeeded]
    }

    /// Pointer released anywhere in the document; ends the active gesture.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.gesture.take() {
            Some(session) => Self::finish(session),
            None => Vec::new(),
        }
    }

    fn begin(&mut self, context: GestureContext) -> Vec<Action> {
        let kind = context.kind();
        let listeners = self.listeners.attach(kind);
        self.gesture = Some(GestureSession { context, _listeners: listeners });
        debug!(id = %context.item_id(), ?kind, "gesture started");

        let mut actions = vec![Action::GestureStarted(kind)];
        if kind == GestureKind::Dragging {
            actions.push(Action::SetCursor("grabbing"));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn finish(session: GestureSession) -> Vec<Action> {
        let kind = session.context.kind();
        debug!(id = %session.context.item_id(), ?kind, "gesture ended");
        drop(session);

        let mut actions = vec![Action::GestureEnded(kind)];
        if kind == GestureKind::Dragging {
            actions.push(Action::SetCursor("grab"));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Clicks, keys, context menu ---

    /// Click (press and release without a drag) on `target`.
    pub fn on_click(&mut self, target: Target) -> Vec<Action> {
        let press = self.press.take();
        match target {
            Target::Background => {
                if self.selection.selected().is_none() {
                    return Vec::new();
                }
                self.selection.clear_selection();
                vec![Action::SelectionChanged(None), Action::RenderNeeded]
            }
            Target::Body(id) => {
                if !self.store.contains(id) {
                    debug!(%id, "click on missing item");
                    return Vec::new();
                }
                let was_selected = match press {
                    Some(p) if p.id == id && p.moved => return Vec::new(),
                    Some(p) if p.id == id => p.was_selected,
                    _ => self.selection.is_selected(id),
                };
                self.selection.toggle_from(id, was_selected);
                vec![Action::SelectionChanged(self.selection.selected()), Action::RenderNeeded]
            }
            Target::Handle(id, Handle::Delete) => {
                if !self.selection.is_editing(id) {
                    debug!(%id, "delete handle clicked on item not in edit mode");
                    return Vec::new();
                }
                self.remove(id)
            }
            Target::Handle(..) => Vec::new(),
        }
    }

    /// Secondary action on an item: remove it, editing or not.
    pub fn on_context_menu(&mut self, id: ItemId) -> Vec<Action> {
        self.remove(id)
    }

    /// Document-level key press.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_commit() {
            return Vec::new();
        }
        self.commit()
    }

    /// Leave edit mode for every item and clear the selection.
    pub fn commit(&mut self) -> Vec<Action> {
        let had_editing = self.selection.editing_count() > 0;
        let had_selection = self.selection.selected().is_some();
        if !had_editing && !had_selection {
            return Vec::new();
        }
        info!(editing = self.selection.editing_count(), "edits committed");
        self.selection.commit();

        let mut actions = Vec::new();
        if had_editing {
            actions.push(Action::EditingChanged);
        }
        if had_selection {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Item lifecycle ---

    /// Remove an item and every reference to it: selection, edit mode, and
    /// any gesture operating on it.
    pub fn remove(&mut self, id: ItemId) -> Vec<Action> {
        let Some(item) = self.store.remove(id) else {
            debug!(%id, "remove of missing item");
            return Vec::new();
        };
        info!(%id, kind = ?item.kind(), "item removed");

        let mut actions = vec![Action::ItemRemoved { id }];
        let was_editing = self.selection.is_editing(id);
        if self.selection.forget(id) {
            actions.push(Action::SelectionChanged(None));
        }
        if was_editing {
            actions.push(Action::EditingChanged);
        }
        if self.gesture.as_ref().is_some_and(|s| s.context.item_id() == id) {
            if let Some(session) = self.gesture.take() {
                let ended = Self::finish(session);
                actions.extend(ended.into_iter().filter(|a| *a != Action::RenderNeeded));
            }
        }
        if self.press.is_some_and(|p| p.id == id) {
            self.press = None;
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Merge geometry into an item directly. Returns false if it doesn't exist.
    pub fn update(&mut self, id: ItemId, fields: &GeometryPatch) -> bool {
        self.store.update(id, fields)
    }

    fn place(&mut self, content: ItemContent, position: Point) -> Vec<Action> {
        let item = self.store.create(content, position, self.jitter.as_mut()).clone();
        let id = item.id();
        self.selection.enter_new(id);
        info!(%id, kind = ?item.kind(), x = position.x, y = position.y, "item created");

        vec![
            Action::ItemCreated(item),
            Action::SelectionChanged(Some(id)),
            Action::EditingChanged,
            Action::RenderNeeded,
        ]
    }

    // --- Palette drop zone and photo upload ---

    /// A palette swatch started dragging toward the board.
    pub fn begin_palette_drag(&mut self, selection: PaletteSelection) {
        self.palette_drag = Some(selection);
    }

    /// The palette drag ended somewhere other than the board.
    pub fn cancel_palette_drag(&mut self) {
        self.palette_drag = None;
    }

    /// Whether the board should accept a drag-over (no move-drag in progress).
    #[must_use]
    pub fn accepts_drop(&self) -> bool {
        self.active_gesture() != Some(GestureKind::Dragging)
    }

    /// Drop the pending palette selection at screen point `pointer`.
    pub fn on_drop(&mut self, pointer: Point, board: BoardRect) -> Vec<Action> {
        if !self.accepts_drop() {
            debug!("drop ignored while dragging an item");
            return Vec::new();
        }
        let Some(selection) = self.palette_drag.take() else {
            debug!("drop ignored: no palette selection");
            return Vec::new();
        };
        self.place(selection.content(), board.to_local(pointer))
    }

    /// Drop carrying its palette selection as transfer text.
    pub fn on_drop_payload(&mut self, data: &str, pointer: Point, board: BoardRect) -> Vec<Action> {
        if !self.accepts_drop() {
            debug!("drop ignored while dragging an item");
            return Vec::new();
        }
        match PaletteSelection::from_transfer_data(data) {
            Ok(selection) => {
                self.palette_drag = Some(selection);
                self.on_drop(pointer, board)
            }
            Err(e) => {
                debug!(error = %e, "drop ignored: malformed payload");
                Vec::new()
            }
        }
    }

    /// Place a loaded photo at the upload position.
    pub fn upload_photo(&mut self, image: ImageRef) -> Vec<Action> {
        debug!(%image, "photo uploaded");
        self.place(ItemContent::Photo(image), self.upload_position)
    }

    #[must_use]
    pub fn palette(&self) -> &PaletteState {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut PaletteState {
        &mut self.palette
    }

    #[must_use]
    pub fn pending_palette(&self) -> Option<PaletteSelection> {
        self.palette_drag
    }

    // --- Queries ---

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.store.all()
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selection.selected()
    }

    #[must_use]
    pub fn is_editing(&self, id: ItemId) -> bool {
        self.selection.is_editing(id)
    }

    /// Ids in edit mode, ascending.
    #[must_use]
    pub fn editing_ids(&self) -> Vec<ItemId> {
        self.selection.editing_ids()
    }

    #[must_use]
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.gesture.as_ref().map(|s| s.context.kind())
    }

    #[must_use]
    pub fn gesture_context(&self) -> Option<&GestureContext> {
        self.gesture.as_ref().map(|s| &s.context)
    }

    /// Snapshot of everything the renderer needs.
    #[must_use]
    pub fn view(&self) -> BoardView {
        view::build(self)
    }
}
