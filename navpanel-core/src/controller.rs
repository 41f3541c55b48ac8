use std::time::Duration;

use crate::clock::Clock;
use crate::config::ControllerConfig;
use crate::event::{EventSource, Key, Propagation, SidebarEvent};
use crate::focus::{TabDirection, wrap_target};
use crate::geometry::Point;
use crate::gesture::{Swipe, SwipeTracker, classify_swipe};
use crate::hover::HoverAffordance;
use crate::nav::NavEntry;
use crate::state::{SidebarVisualState, TOGGLE_LABEL_CLOSE, TOGGLE_LABEL_OPEN};
use crate::timeout::{Debounce, Delay};
use crate::view::PanelView;
use crate::viewport::ViewportMode;

const PANEL_ROLE: &str = "navigation";
const PANEL_LABEL: &str = "Main navigation";
const ENTRY_ROLE: &str = "menuitem";
const ENTRY_TAB_INDEX: &str = "0";

/// Responsive sidebar state machine.
///
/// Owns the viewport mode and the panel's visual state, and pushes every
/// change through the [`PanelView`] it was built with. Transitions that
/// complete later (closing settle, debounced resize, press feedback) are
/// deadlines evaluated on [`SidebarController::tick`].
pub struct SidebarController<V, C> {
    config: ControllerConfig,
    view: V,
    clock: C,
    mode: ViewportMode,
    state: SidebarVisualState,
    entries: Vec<NavEntry>,
    active_entry: Option<usize>,
    pressed_entry: Option<usize>,
    settle: Delay,
    press_release: Delay,
    resize: Debounce<f32>,
    hover: HoverAffordance,
    swipe: SwipeTracker,
}

impl<V: PanelView, C: Clock> SidebarController<V, C> {
    /// Build a controller. Nothing is pushed to `view` until
    /// [`SidebarController::initialize`] runs.
    pub fn new(
        config: ControllerConfig,
        view: V,
        clock: C,
        entries: Vec<NavEntry>,
    ) -> Self {
        let resize = Debounce::new(config.resize_debounce());
        Self {
            config,
            view,
            clock,
            mode: ViewportMode::Desktop,
            state: SidebarVisualState::DesktopExpanded,
            entries,
            active_entry: None,
            pressed_entry: None,
            settle: Delay::default(),
            press_release: Delay::default(),
            resize,
            hover: HoverAffordance::default(),
            swipe: SwipeTracker::default(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn visual_state(&self) -> SidebarVisualState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn active_entry(&self) -> Option<usize> {
        self.active_entry
    }

    pub fn pressed_entry(&self) -> Option<usize> {
        self.pressed_entry
    }

    /// Return whether hovering a collapsed entry currently shows a tooltip.
    pub fn is_hover_affordance_active(&self) -> bool {
        self.hover.is_active()
    }

    /// Earliest pending deadline, if any delayed work is scheduled.
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.settle.deadline(),
            self.resize.deadline(),
            self.press_release.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn has_pending_work(&self) -> bool {
        self.next_deadline().is_some()
    }
}

impl<V: PanelView, C: Clock> SidebarController<V, C> {
    /// Derive the mode from `width` and apply that mode's default state.
    pub fn initialize(&mut self, width: f32) {
        self.mode =
            ViewportMode::from_width(width, self.config.mobile_breakpoint);
        self.settle.cancel();
        self.resize.cancel();

        let state = SidebarVisualState::default_for(self.mode);
        self.set_state(state);
        self.view.set_toggle_label(state.toggle_label());
        self.apply_accessibility();

        match self.mode {
            ViewportMode::Desktop => self.apply_hover_affordance(),
            ViewportMode::Mobile => self.remove_hover_affordance(),
        }

        log::debug!(
            "sidebar initialized in {:?} mode at width {width}",
            self.mode
        );
    }

    /// Toggle-control activation: slide on mobile, collapse on desktop.
    pub fn toggle(&mut self) {
        match self.mode {
            ViewportMode::Mobile => {
                if self.state == SidebarVisualState::MobileOpen {
                    self.close_mobile();
                } else {
                    self.open_mobile();
                }
            },
            ViewportMode::Desktop => {
                let next = match self.state {
                    SidebarVisualState::DesktopCollapsed => {
                        SidebarVisualState::DesktopExpanded
                    },
                    _ => SidebarVisualState::DesktopCollapsed,
                };
                self.set_state(next);
                self.view.set_toggle_label(next.toggle_label());
                if next == SidebarVisualState::DesktopExpanded {
                    self.hover.clear(&mut self.view);
                }
            },
        }
    }

    /// Slide the mobile panel in and lock page scrolling.
    ///
    /// Reopening while a close is settling cancels the pending finalization.
    pub fn open_mobile(&mut self) {
        if !self.mode.is_mobile() {
            log::trace!("open_mobile ignored in {:?} mode", self.mode);
            return;
        }
        if self.state == SidebarVisualState::MobileOpen {
            return;
        }

        self.settle.cancel();
        self.set_state(SidebarVisualState::MobileOpen);
        self.view.lock_scroll();
        self.view.set_toggle_label(TOGGLE_LABEL_CLOSE);
    }

    /// Start sliding the mobile panel out.
    ///
    /// Scrolling is restored immediately. The panel reaches
    /// [`SidebarVisualState::MobileClosed`] on the first tick after the
    /// settle delay. Calling this while already closing keeps the first
    /// deadline.
    pub fn close_mobile(&mut self) {
        if !self.mode.is_mobile() {
            log::trace!("close_mobile ignored in {:?} mode", self.mode);
            return;
        }
        if self.state != SidebarVisualState::MobileOpen {
            log::trace!("close_mobile ignored in {:?}", self.state);
            return;
        }

        self.set_state(SidebarVisualState::MobileClosing);
        self.view.unlock_scroll();
        self.settle.arm(self.clock.now(), self.config.settle_delay());
    }

    /// Record a viewport resize. The mode is re-evaluated once resizing has
    /// been quiet for the debounce window.
    pub fn on_resize(&mut self, width: f32) {
        self.resize.trigger(width, self.clock.now());
    }

    /// Close the open mobile panel when `point` misses both the panel and
    /// the toggle control.
    pub fn on_outside_activation(&mut self, point: Point) {
        if !self.mode.is_mobile()
            || self.state != SidebarVisualState::MobileOpen
        {
            return;
        }
        if self.view.panel_contains(point) || self.view.toggle_contains(point) {
            return;
        }

        self.close_mobile();
    }

    pub fn on_escape(&mut self) {
        if self.mode.is_mobile() && self.state == SidebarVisualState::MobileOpen
        {
            self.close_mobile();
        }
    }

    /// Evaluate a completed horizontal touch from `start_x` to `end_x`.
    pub fn on_swipe(&mut self, start_x: f32, end_x: f32) {
        let swipe = classify_swipe(
            start_x,
            end_x,
            self.config.swipe_threshold,
            self.config.swipe_edge_zone,
        );

        match swipe {
            Some(Swipe::Right { from_edge: true }) => {
                if self.mode.is_mobile()
                    && self.state == SidebarVisualState::MobileClosed
                {
                    self.open_mobile();
                }
            },
            Some(Swipe::Left) => {
                if self.state == SidebarVisualState::MobileOpen {
                    self.close_mobile();
                }
            },
            Some(Swipe::Right { from_edge: false }) | None => {},
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    pub fn touch_end(&mut self, x: f32) {
        if let Some((start_x, end_x)) = self.swipe.finish(x) {
            self.on_swipe(start_x, end_x);
        }
    }

    /// Keep Tab cycling inside the open mobile panel.
    ///
    /// Returns [`Propagation::Stop`] when focus was moved and the host must
    /// skip its native tab handling.
    pub fn trap_focus(&mut self, key: Key) -> Propagation {
        let Key::Tab { shift } = key else {
            return Propagation::Continue;
        };
        if !self.mode.is_mobile() || self.state != SidebarVisualState::MobileOpen
        {
            return Propagation::Continue;
        }

        let direction = if shift {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        };
        let focusable = self.view.focusable();

        match wrap_target(&focusable, self.view.focused(), direction) {
            Some(target) => {
                self.view.focus(target);
                Propagation::Stop
            },
            None => Propagation::Continue,
        }
    }

    pub fn key_down(&mut self, key: Key) -> Propagation {
        match key {
            Key::Escape => {
                self.on_escape();
                Propagation::Continue
            },
            Key::Tab { .. } => self.trap_focus(key),
            Key::Other => Propagation::Continue,
        }
    }

    /// Pointer entered the navigation entry at `index`.
    pub fn hover_entry(&mut self, index: usize) {
        if self.state != SidebarVisualState::DesktopCollapsed {
            return;
        }
        let Some(entry) = self.entries.get(index) else {
            return;
        };

        self.hover.show(&mut self.view, index, entry.label());
    }

    /// Enable entry tooltips. Has no effect on mobile.
    pub fn apply_hover_affordance(&mut self) {
        if self.mode.is_mobile() {
            log::trace!("hover affordance ignored in mobile mode");
            return;
        }
        self.hover.activate();
    }

    /// Disable entry tooltips and clear every tooltip already shown.
    pub fn remove_hover_affordance(&mut self) {
        self.hover.deactivate(&mut self.view);
    }

    /// Navigate to the entry at `index`.
    ///
    /// Marks it active, shows press feedback, scrolls to its anchor and
    /// closes the mobile panel.
    pub fn activate_entry(&mut self, index: usize) {
        let Some(entry) = self.entries.get(index) else {
            log::trace!("activation of unknown entry {index} ignored");
            return;
        };
        let anchor = entry.anchor().map(str::to_owned);

        self.active_entry = Some(index);
        self.view.set_active_entry(Some(index));

        if self.mode.is_mobile() {
            self.close_mobile();
        }

        self.pressed_entry = Some(index);
        self.view.set_pressed_entry(Some(index));
        self.press_release
            .arm(self.clock.now(), self.config.press_feedback());

        if let Some(anchor) = anchor {
            self.view.scroll_to_anchor(&anchor);
        }
    }

    /// Complete every delayed transition whose deadline has passed.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        if self.settle.fire(now) {
            self.finish_closing();
        }
        if let Some(width) = self.resize.poll(now) {
            self.apply_resize(width);
        }
        if self.press_release.fire(now) {
            self.pressed_entry = None;
            self.view.set_pressed_entry(None);
        }
    }

    /// Route a single event to the matching operation.
    pub fn dispatch(&mut self, event: SidebarEvent) -> Propagation {
        match event {
            SidebarEvent::Ready { width } => self.initialize(width),
            SidebarEvent::ToggleActivated => self.toggle(),
            SidebarEvent::EntryActivated(index) => self.activate_entry(index),
            SidebarEvent::EntryHovered(index) => self.hover_entry(index),
            SidebarEvent::Resized { width } => self.on_resize(width),
            SidebarEvent::PointerDown { position } => {
                self.on_outside_activation(position)
            },
            SidebarEvent::TouchStart { x } => self.touch_start(x),
            SidebarEvent::TouchEnd { x } => self.touch_end(x),
            SidebarEvent::KeyDown(key) => return self.key_down(key),
            SidebarEvent::Tick => self.tick(),
        }

        Propagation::Continue
    }

    /// Drain every queued event from `source`.
    pub fn wire<S: EventSource>(&mut self, source: &mut S) {
        while let Some(event) = source.next_event() {
            let _ = self.dispatch(event);
        }
    }

    fn finish_closing(&mut self) {
        if self.state != SidebarVisualState::MobileClosing {
            return;
        }
        self.set_state(SidebarVisualState::MobileClosed);
        self.view.set_toggle_label(TOGGLE_LABEL_OPEN);
    }

    fn apply_resize(&mut self, width: f32) {
        let mode =
            ViewportMode::from_width(width, self.config.mobile_breakpoint);
        if mode != self.mode {
            log::debug!(
                "viewport mode {:?} -> {mode:?} at width {width}",
                self.mode
            );
            self.mode = mode;
            self.settle.cancel();
            self.view.unlock_scroll();

            let state = SidebarVisualState::default_for(mode);
            self.set_state(state);
            self.view.set_toggle_label(state.toggle_label());
        }

        // Tooltips follow the mode after the layout reset.
        match self.mode {
            ViewportMode::Desktop => self.apply_hover_affordance(),
            ViewportMode::Mobile => self.remove_hover_affordance(),
        }
    }

    fn apply_accessibility(&mut self) {
        self.view.set_panel_attribute("role", PANEL_ROLE);
        self.view.set_panel_attribute("aria-label", PANEL_LABEL);
        for index in 0..self.entries.len() {
            self.view.set_entry_attribute(index, "role", ENTRY_ROLE);
            self.view
                .set_entry_attribute(index, "tabindex", ENTRY_TAB_INDEX);
        }
    }

    fn set_state(&mut self, state: SidebarVisualState) {
        if self.state != state {
            log::debug!("sidebar state {:?} -> {state:?}", self.state);
        }
        self.state = state;
        self.view.set_visual_state(state);
    }
}
