use std::collections::VecDeque;

use crate::geometry::Point;

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab { shift: bool },
    Other,
}

/// Whether the host should still run its default handling for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The controller consumed the event.
    Stop,
    /// Default handling still applies.
    Continue,
}

impl Propagation {
    pub fn is_stopped(self) -> bool {
        matches!(self, Propagation::Stop)
    }
}

/// Platform-neutral input consumed by the sidebar controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEvent {
    Ready { width: f32 },
    ToggleActivated,
    EntryActivated(usize),
    EntryHovered(usize),
    Resized { width: f32 },
    PointerDown { position: Point },
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    KeyDown(Key),
    Tick,
}

/// Source of queued sidebar events, drained by
/// [`crate::SidebarController::wire`].
pub trait EventSource {
    fn next_event(&mut self) -> Option<SidebarEvent>;
}

impl EventSource for VecDeque<SidebarEvent> {
    fn next_event(&mut self) -> Option<SidebarEvent> {
        self.pop_front()
    }
}
