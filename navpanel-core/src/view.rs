use crate::focus::FocusableSet;
use crate::geometry::Point;
use crate::state::SidebarVisualState;

/// Identifier of an interactive element inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Presentation seam between the controller and whatever draws the panel.
///
/// The controller never touches a rendering tree directly. Mutating methods
/// apply presentation changes, and query methods answer hit-testing and
/// focus questions about the current layout.
pub trait PanelView {
    /// Apply the presentation tags of `state` to the panel.
    fn set_visual_state(&mut self, state: SidebarVisualState);
    /// Replace the toggle control's accessibility label.
    fn set_toggle_label(&mut self, label: &str);
    /// Suppress page-level scrolling while the mobile panel is open.
    fn lock_scroll(&mut self);
    /// Restore page-level scrolling.
    fn unlock_scroll(&mut self);
    /// Set an accessibility attribute on the panel itself.
    fn set_panel_attribute(&mut self, name: &str, value: &str);
    /// Set an accessibility attribute on the navigation entry at `index`.
    fn set_entry_attribute(&mut self, index: usize, name: &str, value: &str);
    /// Show or clear the hover tooltip of a navigation entry.
    fn set_entry_title(&mut self, index: usize, title: Option<&str>);
    /// Tag exactly one entry as active, or none.
    fn set_active_entry(&mut self, index: Option<usize>);
    /// Tag the entry showing press feedback, or none.
    fn set_pressed_entry(&mut self, index: Option<usize>);
    /// Bring the in-page section named `anchor` into view.
    fn scroll_to_anchor(&mut self, anchor: &str);
    fn panel_contains(&self, point: Point) -> bool;
    fn toggle_contains(&self, point: Point) -> bool;
    /// Interactive elements inside the panel, in tab order.
    fn focusable(&self) -> FocusableSet;
    fn focused(&self) -> Option<ElementId>;
    fn focus(&mut self, element: ElementId);
}
