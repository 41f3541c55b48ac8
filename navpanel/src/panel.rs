use std::collections::BTreeMap;

use iced::Size;
use navpanel_core::{
    ElementId, FocusableSet, PanelClasses, PanelView, Point,
    SidebarVisualState, TabDirection, TOGGLE_LABEL_COLLAPSE,
};

use crate::layout;

const TAB_INDEX_ATTRIBUTE: &str = "tabindex";

/// Presentation state of the panel as last pushed by the controller.
///
/// The iced view renders from this mirror, and hit testing uses the same
/// layout math the view lays the panel out with.
#[derive(Debug)]
pub(crate) struct PanelMirror {
    state: SidebarVisualState,
    toggle_label: String,
    scroll_locked: bool,
    panel_attributes: BTreeMap<String, String>,
    entry_attributes: BTreeMap<(usize, String), String>,
    titles: BTreeMap<usize, String>,
    active: Option<usize>,
    pressed: Option<usize>,
    pending_anchor: Option<String>,
    focused: Option<ElementId>,
    entry_count: usize,
    window_size: Size,
}

impl PanelMirror {
    pub(crate) fn new(entry_count: usize, window_size: Size) -> Self {
        Self {
            state: SidebarVisualState::DesktopExpanded,
            toggle_label: String::from(TOGGLE_LABEL_COLLAPSE),
            scroll_locked: false,
            panel_attributes: BTreeMap::new(),
            entry_attributes: BTreeMap::new(),
            titles: BTreeMap::new(),
            active: None,
            pressed: None,
            pending_anchor: None,
            focused: None,
            entry_count,
            window_size,
        }
    }

    pub(crate) fn state(&self) -> SidebarVisualState {
        self.state
    }

    pub(crate) fn classes(&self) -> PanelClasses {
        self.state.classes()
    }

    pub(crate) fn toggle_label(&self) -> &str {
        &self.toggle_label
    }

    pub(crate) fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub(crate) fn panel_attribute(&self, name: &str) -> Option<&str> {
        self.panel_attributes.get(name).map(String::as_str)
    }

    pub(crate) fn entry_attribute(
        &self,
        index: usize,
        name: &str,
    ) -> Option<&str> {
        self.entry_attributes
            .get(&(index, name.to_string()))
            .map(String::as_str)
    }

    pub(crate) fn entry_title(&self, index: usize) -> Option<&str> {
        self.titles.get(&index).map(String::as_str)
    }

    pub(crate) fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub(crate) fn is_pressed(&self, index: usize) -> bool {
        self.pressed == Some(index)
    }

    pub(crate) fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(entry_element(index))
    }

    /// Index of the entry holding keyboard focus.
    pub(crate) fn focused_entry(&self) -> Option<usize> {
        self.focused.map(|ElementId(id)| id as usize)
    }

    /// Take the anchor the controller asked to scroll to, if any.
    pub(crate) fn take_pending_anchor(&mut self) -> Option<String> {
        self.pending_anchor.take()
    }

    pub(crate) fn window_size(&self) -> Size {
        self.window_size
    }

    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }

    /// Move focus one step through the panel in native tab order.
    pub(crate) fn advance_focus(&mut self, direction: TabDirection) {
        let focusable = self.focusable();
        let ids: Vec<ElementId> = focusable.iter().collect();
        if ids.is_empty() {
            self.focused = None;
            return;
        }

        let current = self
            .focused
            .and_then(|focused| ids.iter().position(|id| *id == focused));
        let next = match (direction, current) {
            (TabDirection::Forward, None) => 0,
            (TabDirection::Backward, None) => ids.len() - 1,
            (TabDirection::Forward, Some(index)) => (index + 1) % ids.len(),
            (TabDirection::Backward, Some(index)) => {
                (index + ids.len() - 1) % ids.len()
            },
        };
        self.focused = Some(ids[next]);
    }

    pub(crate) fn clear_focus(&mut self) {
        self.focused = None;
    }
}

impl PanelView for PanelMirror {
    fn set_visual_state(&mut self, state: SidebarVisualState) {
        self.state = state;
        if state == SidebarVisualState::MobileClosed {
            self.focused = None;
        }
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }

    fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    fn set_panel_attribute(&mut self, name: &str, value: &str) {
        self.panel_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_entry_attribute(&mut self, index: usize, name: &str, value: &str) {
        self.entry_attributes
            .insert((index, name.to_string()), value.to_string());
    }

    fn set_entry_title(&mut self, index: usize, title: Option<&str>) {
        match title {
            Some(title) => {
                self.titles.insert(index, title.to_string());
            },
            None => {
                self.titles.remove(&index);
            },
        }
    }

    fn set_active_entry(&mut self, index: Option<usize>) {
        self.active = index;
    }

    fn set_pressed_entry(&mut self, index: Option<usize>) {
        self.pressed = index;
    }

    fn scroll_to_anchor(&mut self, anchor: &str) {
        self.pending_anchor = Some(anchor.to_string());
    }

    fn panel_contains(&self, point: Point) -> bool {
        layout::panel_bounds(self.state, self.window_size).contains(point)
    }

    fn toggle_contains(&self, point: Point) -> bool {
        layout::toggle_bounds(self.state).contains(point)
    }

    /// Entries made keyboard reachable by a tab index attribute.
    fn focusable(&self) -> FocusableSet {
        (0..self.entry_count)
            .filter(|index| {
                self.entry_attribute(*index, TAB_INDEX_ATTRIBUTE).is_some()
            })
            .map(entry_element)
            .collect()
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    fn focus(&mut self, element: ElementId) {
        self.focused = Some(element);
    }
}

fn entry_element(index: usize) -> ElementId {
    ElementId(index as u32)
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use navpanel_core::{
        ControllerConfig, ElementId, Key, ManualClock, NavEntry, PanelView,
        Point, Propagation, SidebarController, SidebarVisualState,
        TabDirection,
    };

    use super::PanelMirror;

    fn entries() -> Vec<NavEntry> {
        vec![
            NavEntry::new("Dashboard").with_anchor("dashboard"),
            NavEntry::new("Projects").with_anchor("projects"),
            NavEntry::new("Team").with_anchor("team"),
        ]
    }

    fn controller(
        window: Size,
    ) -> SidebarController<PanelMirror, ManualClock> {
        let entries = entries();
        let mirror = PanelMirror::new(entries.len(), window);
        let mut controller = SidebarController::new(
            ControllerConfig::default(),
            mirror,
            ManualClock::new(),
            entries,
        );
        controller.initialize(window.width);
        controller
    }

    #[test]
    fn given_uninitialized_entries_when_focusable_queried_then_set_is_empty() {
        let mirror = PanelMirror::new(3, Size::new(1280.0, 800.0));

        assert!(mirror.focusable().is_empty());
    }

    #[test]
    fn given_initialized_controller_when_focusable_queried_then_all_entries_listed()
     {
        let controller = controller(Size::new(1280.0, 800.0));
        let focusable = controller.view().focusable();

        assert_eq!(focusable.first(), Some(ElementId(0)));
        assert_eq!(focusable.last(), Some(ElementId(2)));
        assert_eq!(
            controller.view().panel_attribute("aria-label"),
            Some("Main navigation")
        );
    }

    #[test]
    fn given_no_focus_when_advanced_then_focus_wraps_through_entries() {
        let mut controller = controller(Size::new(1280.0, 800.0));
        let mirror = controller.view_mut();

        mirror.advance_focus(TabDirection::Backward);
        assert_eq!(mirror.focused_entry(), Some(2));
        mirror.advance_focus(TabDirection::Forward);
        assert_eq!(mirror.focused_entry(), Some(0));
        mirror.advance_focus(TabDirection::Forward);
        assert_eq!(mirror.focused_entry(), Some(1));
    }

    #[test]
    fn given_open_mobile_panel_when_clicked_beside_it_then_controller_closes() {
        let mut controller = controller(Size::new(480.0, 800.0));
        controller.toggle();
        assert!(controller.view().is_scroll_locked());

        controller.on_outside_activation(Point::new(420.0, 400.0));

        assert_eq!(
            controller.visual_state(),
            SidebarVisualState::MobileClosing
        );
        assert!(!controller.view().is_scroll_locked());
    }

    #[test]
    fn given_open_mobile_panel_when_header_toggle_clicked_then_stays_open() {
        let mut controller = controller(Size::new(480.0, 800.0));
        controller.toggle();

        controller.on_outside_activation(Point::new(20.0, 20.0));

        assert_eq!(controller.visual_state(), SidebarVisualState::MobileOpen);
    }

    #[test]
    fn given_focus_on_last_entry_when_tab_in_open_panel_then_wraps_to_first() {
        let mut controller = controller(Size::new(480.0, 800.0));
        controller.toggle();
        controller.view_mut().focus(ElementId(2));

        let propagation = controller.key_down(Key::Tab { shift: false });

        assert_eq!(propagation, Propagation::Stop);
        assert_eq!(controller.view().focused_entry(), Some(0));
    }

    #[test]
    fn given_entry_activated_when_anchor_taken_then_it_is_consumed_once() {
        let mut controller = controller(Size::new(1280.0, 800.0));

        controller.activate_entry(1);

        let mirror = controller.view_mut();
        assert!(mirror.is_active(1));
        assert!(mirror.is_pressed(1));
        assert_eq!(mirror.take_pending_anchor().as_deref(), Some("projects"));
        assert_eq!(mirror.take_pending_anchor(), None);
    }
}
