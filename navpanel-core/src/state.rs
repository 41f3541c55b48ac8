use bitflags::bitflags;

use crate::viewport::ViewportMode;

pub const TOGGLE_LABEL_COLLAPSE: &str = "Collapse sidebar";
pub const TOGGLE_LABEL_EXPAND: &str = "Expand sidebar";
pub const TOGGLE_LABEL_OPEN: &str = "Open sidebar";
pub const TOGGLE_LABEL_CLOSE: &str = "Close sidebar";

bitflags! {
    /// Presentation tags applied to the panel element.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PanelClasses: u8 {
        const MOBILE    = 1;
        const COLLAPSED = 1 << 1;
        const OPEN      = 1 << 2;
        /// Slide-out in progress. Kept together with `OPEN` until the settle
        /// delay finalizes the close.
        const CLOSING   = 1 << 3;
    }
}

/// Visual state of the navigation panel.
///
/// Desktop variants only exist in [`ViewportMode::Desktop`] and mobile
/// variants only in [`ViewportMode::Mobile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarVisualState {
    DesktopExpanded,
    DesktopCollapsed,
    MobileClosed,
    MobileOpen,
    MobileClosing,
}

impl SidebarVisualState {
    /// State every mode starts from, and resets to on a mode change.
    pub fn default_for(mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Desktop => SidebarVisualState::DesktopExpanded,
            ViewportMode::Mobile => SidebarVisualState::MobileClosed,
        }
    }

    pub fn mode(self) -> ViewportMode {
        match self {
            SidebarVisualState::DesktopExpanded
            | SidebarVisualState::DesktopCollapsed => ViewportMode::Desktop,
            SidebarVisualState::MobileClosed
            | SidebarVisualState::MobileOpen
            | SidebarVisualState::MobileClosing => ViewportMode::Mobile,
        }
    }

    pub fn classes(self) -> PanelClasses {
        match self {
            SidebarVisualState::DesktopExpanded => PanelClasses::empty(),
            SidebarVisualState::DesktopCollapsed => PanelClasses::COLLAPSED,
            SidebarVisualState::MobileClosed => PanelClasses::MOBILE,
            SidebarVisualState::MobileOpen => {
                PanelClasses::MOBILE | PanelClasses::OPEN
            },
            SidebarVisualState::MobileClosing => {
                PanelClasses::MOBILE | PanelClasses::OPEN | PanelClasses::CLOSING
            },
        }
    }

    /// Accessibility label describing what activating the toggle will do.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SidebarVisualState::DesktopExpanded => TOGGLE_LABEL_COLLAPSE,
            SidebarVisualState::DesktopCollapsed => TOGGLE_LABEL_EXPAND,
            SidebarVisualState::MobileClosed => TOGGLE_LABEL_OPEN,
            SidebarVisualState::MobileOpen
            | SidebarVisualState::MobileClosing => TOGGLE_LABEL_CLOSE,
        }
    }

    /// Whether the panel currently covers content on a mobile layout.
    pub fn is_visible_overlay(self) -> bool {
        matches!(
            self,
            SidebarVisualState::MobileOpen | SidebarVisualState::MobileClosing
        )
    }
}
