//! Headless drag-to-reorder tray with proximity magnification.
//!
//! The crate owns the interaction logic of a horizontal row of items: which
//! item is being dragged, where the pointer is relative to the tray, how much
//! each neighbour grows as the pointer approaches it, and when a live hover
//! swap is allowed to reorder the row. Painting, easing curves and the host
//! shell live outside; the host feeds pointer events in and reads
//! [`tray::ItemView`]s back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tray`] | Reorder state machine [`tray::Tray`], sole owner of items and keys |
//! | [`session`] | Drag session lifecycle and pointer bookkeeping |
//! | [`debounce`] | Swap rate limiting and mutual exclusion |
//! | [`scale`] | Proximity-based magnification |
//! | [`geometry`] | Points, rects, slot positions and the outside test |
//! | [`clock`] | Injected time source and deferred callbacks |
//! | [`event`] | Pointer events fed in and actions handed back |
//! | [`keys`] | Stable per-item keys |
//! | [`config`] | Tunables, env/JSON loading and validation |
//! | [`consts`] | Default tunable values |

pub mod clock;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod event;
pub mod geometry;
pub mod keys;
pub mod scale;
pub mod session;
pub mod tray;

pub use clock::{Clock, ManualClock, TokioClock};
pub use config::{ConfigError, TrayConfig};
pub use event::{Action, PointerEvent, PointerEventSource};
pub use geometry::{Point, Rect};
pub use keys::ItemKey;
pub use tray::{ItemView, LayoutSource, Tray};
