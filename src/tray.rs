//! Reorder state machine.
//!
//! [`Tray`] is the only writer of the item order and the stable keys. Pointer
//! events come in through the `on_*` handlers (or [`Tray::handle`] /
//! [`Tray::pump`]); each handler mutates state synchronously and returns the
//! [`Action`]s the host should react to. Rendering is strictly downstream: the
//! host reads [`Tray::views`] or calls [`Tray::render`] after a
//! [`Action::RenderNeeded`], and never mutates the tray from inside a render.
//!
//! Hover swaps reorder the row as a preview and are not reported to the host
//! callback. Only a drop that leaves the item somewhere other than where the
//! drag began invokes the reorder callback, exactly once, with
//! `(origin, target)`. Cancelling a drag keeps whatever order the previews
//! left behind.

#[cfg(test)]
#[path = "tray_test.rs"]
mod tray_test;

use std::rc::Rc;
use std::time::Duration;

use crate::clock::Clock;
use crate::config::{ConfigError, TrayConfig};
use crate::debounce::SwapDebouncer;
use crate::event::{Action, PointerEvent, PointerEventSource};
use crate::geometry::{self, Point, Rect};
use crate::keys::{ItemKey, KeyGenerator};
use crate::scale;
use crate::session::{DragPhase, DragSession};

/// Reads the tray's current on-screen box from the rendering collaborator.
///
/// Queried on every classification and never cached; `None` means the tray
/// has not been laid out yet.
pub trait LayoutSource {
    fn container_box(&self) -> Option<Rect>;
}

impl<F> LayoutSource for F
where
    F: Fn() -> Option<Rect>,
{
    fn container_box(&self) -> Option<Rect> {
        self()
    }
}

/// Host callback invoked once per committed reorder with `(old_index, new_index)`.
pub type ReorderCallback = Box<dyn FnMut(usize, usize)>;

/// Everything a renderer needs to paint one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView {
    /// Stable key to attach transitions to.
    pub key: ItemKey,
    /// Current position in the row.
    pub index: usize,
    /// Magnification factor, `>= 1.0`.
    pub scale: f64,
    /// Magnified width, capped at the configured maximum.
    pub width: f64,
    /// Magnified height, capped at the configured maximum.
    pub height: f64,
    /// Lateral shift previewing the dragged item's departure.
    pub offset: Point,
    /// This is the item under the pointer.
    pub is_dragged: bool,
    /// How long the renderer should take to move the item to its new slot.
    pub transition: Duration,
}

/// A horizontal row of items that can be reordered by dragging.
pub struct Tray<T> {
    items: Vec<T>,
    keys: Vec<ItemKey>,
    key_gen: KeyGenerator,
    session: Option<DragSession>,
    phase: DragPhase,
    debouncer: SwapDebouncer,
    config: TrayConfig,
    layout: Box<dyn LayoutSource>,
    on_reorder: Option<ReorderCallback>,
}

impl<T> Tray<T> {
    /// Build a tray with the default configuration.
    #[must_use]
    pub fn new(items: Vec<T>, clock: Rc<dyn Clock>, layout: impl LayoutSource + 'static) -> Self {
        Self::build(items, clock, Box::new(layout), TrayConfig::default())
    }

    /// Build a tray with a custom configuration.
    pub fn with_config(
        items: Vec<T>,
        clock: Rc<dyn Clock>,
        layout: impl LayoutSource + 'static,
        config: TrayConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(items, clock, Box::new(layout), config))
    }

    fn build(items: Vec<T>, clock: Rc<dyn Clock>, layout: Box<dyn LayoutSource>, config: TrayConfig) -> Self {
        let mut key_gen = KeyGenerator::new();
        let keys = items.iter().map(|_| key_gen.next_key()).collect();
        Self {
            items,
            keys,
            key_gen,
            session: None,
            phase: DragPhase::Idle,
            debouncer: SwapDebouncer::new(clock, &config),
            config,
            layout,
            on_reorder: None,
        }
    }

    /// Register the host's reorder callback.
    #[must_use]
    pub fn on_reorder(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_reorder = Some(Box::new(callback));
        self
    }

    // --- Item list ---

    /// Append an item and return the key assigned to it.
    pub fn push(&mut self, item: T) -> ItemKey {
        let key = self.key_gen.next_key();
        self.items.push(item);
        self.keys.push(key);
        key
    }

    /// Remove the item at `index`. Ends any drag in progress, leaving the
    /// previewed order in place.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        if self.session.take().is_some() {
            tracing::debug!(index, "drag ended by item removal");
            self.phase = DragPhase::Idle;
        }
        self.keys.remove(index);
        Some(self.items.remove(index))
    }

    /// Swap in a new item list. Every item gets a fresh key; drag and swap
    /// state are discarded.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.session = None;
        self.phase = DragPhase::Idle;
        self.debouncer.reset();
        self.keys = items.iter().map(|_| self.key_gen.next_key()).collect();
        self.items = items;
    }

    // --- Event dispatch ---

    /// Dispatch one pointer event to its handler.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        match event {
            PointerEvent::DragStart { index } => self.on_drag_start(index),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Hover { target } => self.on_hover(target),
            PointerEvent::Drop { target } => self.on_drop(target),
            PointerEvent::Cancel => self.on_cancel(),
        }
    }

    /// Drain `source`, handling every event in order.
    pub fn pump(&mut self, source: &mut impl PointerEventSource) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Some(event) = source.next_event() {
            actions.extend(self.handle(event));
        }
        actions
    }

    // --- Drag lifecycle ---

    /// Pick up the item at `index`. A drag already in progress is replaced.
    pub fn on_drag_start(&mut self, index: usize) -> Vec<Action> {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "drag start ignored: index out of range");
            return Vec::new();
        }
        if let Some(stale) = self.session.take() {
            tracing::debug!(stale = stale.dragged_index(), "replacing unfinished drag");
        }
        self.session = Some(DragSession::start(index));
        self.phase = DragPhase::Dragging;
        tracing::debug!(index, "drag started");
        vec![Action::RenderNeeded]
    }

    /// Record a pointer move in global coordinates.
    pub fn on_pointer_move(&mut self, global: Point) -> Vec<Action> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let container = self.layout.container_box();
        let update = session.update_pointer(global, container, &self.config);
        if !update.moved {
            tracing::trace!(x = global.x, y = global.y, "pointer jitter ignored");
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(2);
        if update.outside_changed {
            let outside = session.is_outside();
            tracing::debug!(outside, "pointer crossed tray boundary");
            actions.push(Action::OutsideChanged { outside });
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// The pointer entered the item at `target`: preview the dragged item there.
    pub fn on_hover(&mut self, target: usize) -> Vec<Action> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let from = session.dragged_index();
        self.request_swap(from, target)
    }

    /// Move the item at `from` to `to` if the debouncer allows it.
    ///
    /// This is the live preview path; it never calls the host callback.
    pub fn request_swap(&mut self, from: usize, to: usize) -> Vec<Action> {
        let len = self.items.len();
        if from >= len || to >= len {
            tracing::debug!(from, to, len, "swap ignored: index out of range");
            return Vec::new();
        }
        if let Err(rejected) = self.debouncer.admit(from, to) {
            tracing::trace!(from, to, %rejected, "swap dropped");
            return Vec::new();
        }

        self.move_item(from, to);
        if let Some(session) = self.session.as_mut() {
            session.track_move(from, to);
        }
        tracing::debug!(from, to, "hover swap");
        vec![Action::SwapPreviewed { from, to }, Action::RenderNeeded]
    }

    /// Release the dragged item over the slot at `target`.
    ///
    /// The item moves from wherever hover swaps left it to `target`. The host
    /// is told about the whole drag, `(origin, target)`, unless the item ends
    /// up where it started.
    pub fn on_drop(&mut self, target: usize) -> Vec<Action> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        if target >= self.items.len() {
            tracing::debug!(target, "drop outside any slot, cancelling");
            return self.on_cancel();
        }
        let origin = session.origin_index();
        let current = session.dragged_index();
        if current != target {
            self.move_item(current, target);
        }
        if origin == target {
            self.finish();
            return vec![Action::RenderNeeded];
        }
        self.commit(origin, target)
    }

    /// Terminal reorder of the item at `from` to `to`, ending any drag.
    ///
    /// Equal indices are a no-op and do not reach the host callback.
    pub fn accept(&mut self, from: usize, to: usize) -> Vec<Action> {
        let len = self.items.len();
        if from == to || from >= len || to >= len {
            if from != to {
                tracing::debug!(from, to, len, "accept ignored: index out of range");
            }
            return if self.finish() { vec![Action::RenderNeeded] } else { Vec::new() };
        }
        self.move_item(from, to);
        self.commit(from, to)
    }

    /// Abandon the drag. Order changes made by hover swaps stay.
    pub fn on_cancel(&mut self) -> Vec<Action> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let dragged = session.dragged_index();
        self.finish();
        tracing::debug!(dragged, "drag cancelled");
        vec![Action::RenderNeeded]
    }

    fn commit(&mut self, from: usize, to: usize) -> Vec<Action> {
        tracing::debug!(from, to, "reorder committed");
        if let Some(callback) = self.on_reorder.as_mut() {
            callback(from, to);
        }
        self.finish();
        vec![Action::Reordered { from, to }, Action::RenderNeeded]
    }

    /// Return to idle. Reports whether a drag was actually in progress.
    fn finish(&mut self) -> bool {
        self.phase = DragPhase::Idle;
        self.session.take().is_some()
    }

    fn move_item(&mut self, from: usize, to: usize) {
        let item = self.items.remove(from);
        self.items.insert(to, item);
        let key = self.keys.remove(from);
        self.keys.insert(to, key);
    }

    // --- Views ---

    /// Per-item render hints in current order.
    #[must_use]
    pub fn views(&self) -> Vec<ItemView> {
        let cfg = &self.config;
        let session = self.session.as_ref();
        let transition = if self.debouncer.is_animating() { cfg.swap_visual() } else { cfg.reorder_animation() };
        self.keys
            .iter()
            .enumerate()
            .map(|(index, &key)| {
                let scale = scale::scale_of(index, session, cfg);
                ItemView {
                    key,
                    index,
                    scale,
                    width: scale::magnified_size(scale, cfg.item_width, cfg.max_item_width),
                    height: scale::magnified_size(scale, cfg.item_height, cfg.max_item_height),
                    offset: self.offset_of(index),
                    is_dragged: session.is_some_and(|s| s.dragged_index() == index),
                    transition,
                }
            })
            .collect()
    }

    /// Run the host's rendering function over every item in order.
    pub fn render<V>(&self, mut paint: impl FnMut(&T, &ItemView) -> V) -> Vec<V> {
        self.items
            .iter()
            .zip(self.views())
            .map(|(item, view)| paint(item, &view))
            .collect()
    }

    /// Magnification of the item at `index`.
    #[must_use]
    pub fn scale_of(&self, index: usize) -> f64 {
        scale::scale_of(index, self.session.as_ref(), &self.config)
    }

    /// Lateral shift of the item at `index`.
    ///
    /// Once the dragged item is pulled outside the tray, items before it shift
    /// right and items after it shift left by half an item, closing its slot.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> Point {
        let Some(session) = self.session.as_ref().filter(|s| s.is_outside()) else {
            return Point::default();
        };
        let half = self.config.item_width / 2.0;
        let dragged = session.dragged_index();
        if index < dragged {
            Point::new(half, 0.0)
        } else if index > dragged {
            Point::new(-half, 0.0)
        } else {
            Point::default()
        }
    }

    /// Slot under a global pointer position, if the tray is laid out and non-empty.
    #[must_use]
    pub fn slot_at(&self, global: Point) -> Option<usize> {
        let rect = self.layout.container_box()?;
        let local = rect.to_local(global);
        geometry::slot_at(local.x, self.items.len(), self.config.item_width, self.config.spacing)
    }

    // --- Queries ---

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn keys(&self) -> &[ItemKey] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active drag, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn is_swap_animating(&self) -> bool {
        self.debouncer.is_animating()
    }

    #[must_use]
    pub fn config(&self) -> &TrayConfig {
        &self.config
    }
}
