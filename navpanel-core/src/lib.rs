//! Responsive navigation sidebar state machine.
//!
//! This crate is split into three layers:
//! - the state machine ([`SidebarController`]) that owns the [`ViewportMode`]
//!   and the panel's [`SidebarVisualState`];
//! - the view seam ([`PanelView`]) that receives every presentation change and
//!   answers hit-testing and focus queries;
//! - scheduling primitives ([`Delay`], [`Debounce`]) evaluated against an
//!   injected [`Clock`].
//!
//! Hosts translate platform events into [`SidebarEvent`] values and hand them
//! to [`SidebarController::dispatch`]. Delayed work (the closing settle, the
//! resize debounce and the press feedback) only completes when the host calls
//! [`SidebarController::tick`], so a [`ManualClock`] makes every transition
//! reproducible in tests.
//!
//! # Quick Example
//!
//! ```ignore
//! use navpanel_core::{
//!     ControllerConfig, NavEntry, SidebarController, SidebarVisualState,
//!     SystemClock,
//! };
//!
//! let entries = vec![NavEntry::new("Home"), NavEntry::new("Reports")];
//! let mut controller = SidebarController::new(
//!     ControllerConfig::default(),
//!     my_view,
//!     SystemClock::new(),
//!     entries,
//! );
//!
//! controller.initialize(1280.0);
//! controller.toggle();
//! assert_eq!(
//!     controller.visual_state(),
//!     SidebarVisualState::DesktopCollapsed,
//! );
//! ```

mod clock;
mod config;
mod controller;
mod event;
mod focus;
mod geometry;
mod gesture;
mod hover;
mod nav;
mod reveal;
mod state;
mod timeout;
mod view;
mod viewport;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ControllerConfig;
pub use controller::SidebarController;
pub use event::{EventSource, Key, Propagation, SidebarEvent};
pub use focus::{FocusableSet, TabDirection, wrap_target};
pub use geometry::{Point, Rect};
pub use gesture::{Swipe, SwipeTracker, classify_swipe};
pub use nav::NavEntry;
pub use reveal::RevealTracker;
pub use state::{
    PanelClasses, SidebarVisualState, TOGGLE_LABEL_CLOSE,
    TOGGLE_LABEL_COLLAPSE, TOGGLE_LABEL_EXPAND, TOGGLE_LABEL_OPEN,
};
pub use timeout::{Debounce, Delay};
pub use view::{ElementId, PanelView};
pub use viewport::{DEFAULT_MOBILE_BREAKPOINT, ViewportMode};
