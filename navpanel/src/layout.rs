use iced::Size;
use navpanel_core::{Rect, SidebarVisualState};

pub(crate) const EXPANDED_PANEL_WIDTH: f32 = 240.0;
pub(crate) const COLLAPSED_PANEL_WIDTH: f32 = 72.0;
pub(crate) const MOBILE_PANEL_WIDTH: f32 = 280.0;
pub(crate) const HEADER_HEIGHT: f32 = 56.0;
pub(crate) const TOGGLE_SIZE: f32 = 40.0;
pub(crate) const TOGGLE_MARGIN: f32 = 8.0;
pub(crate) const ENTRY_HEIGHT: f32 = 44.0;
pub(crate) const CARD_HEIGHT: f32 = 180.0;
pub(crate) const CARD_SPACING: f32 = 20.0;
pub(crate) const CONTENT_PADDING: f32 = 24.0;

pub(crate) fn panel_width(state: SidebarVisualState) -> f32 {
    match state {
        SidebarVisualState::DesktopExpanded => EXPANDED_PANEL_WIDTH,
        SidebarVisualState::DesktopCollapsed => COLLAPSED_PANEL_WIDTH,
        SidebarVisualState::MobileClosed
        | SidebarVisualState::MobileOpen
        | SidebarVisualState::MobileClosing => MOBILE_PANEL_WIDTH,
    }
}

/// Panel bounds in window coordinates.
///
/// The mobile panel sits below the header and is parked off-screen to the
/// left while closed.
pub(crate) fn panel_bounds(state: SidebarVisualState, window: Size) -> Rect {
    let width = panel_width(state);
    if !state.mode().is_mobile() {
        return Rect::new(0.0, 0.0, width, window.height);
    }

    let height = (window.height - HEADER_HEIGHT).max(0.0);
    let x = if state.is_visible_overlay() {
        0.0
    } else {
        -width
    };
    Rect::new(x, HEADER_HEIGHT, width, height)
}

/// Toggle control bounds in window coordinates.
pub(crate) fn toggle_bounds(state: SidebarVisualState) -> Rect {
    let x = if state.mode().is_mobile() {
        TOGGLE_MARGIN
    } else {
        panel_width(state) - TOGGLE_MARGIN - TOGGLE_SIZE
    };
    Rect::new(x, TOGGLE_MARGIN, TOGGLE_SIZE, TOGGLE_SIZE)
}

/// Size of the scrollable content area.
pub(crate) fn content_size(state: SidebarVisualState, window: Size) -> Size {
    if state.mode().is_mobile() {
        Size::new(window.width, (window.height - HEADER_HEIGHT).max(0.0))
    } else {
        Size::new((window.width - panel_width(state)).max(0.0), window.height)
    }
}

/// Card bounds in content coordinates.
pub(crate) fn card_bounds(index: usize, content_width: f32) -> Rect {
    Rect::new(
        CONTENT_PADDING,
        CONTENT_PADDING + card_offset(index),
        (content_width - 2.0 * CONTENT_PADDING).max(0.0),
        CARD_HEIGHT,
    )
}

/// Vertical scroll offset that brings card `index` to the top.
pub(crate) fn card_offset(index: usize) -> f32 {
    index as f32 * (CARD_HEIGHT + CARD_SPACING)
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use navpanel_core::{Point, SidebarVisualState};

    use super::{
        CARD_HEIGHT, COLLAPSED_PANEL_WIDTH, HEADER_HEIGHT, card_bounds,
        content_size, panel_bounds, toggle_bounds,
    };

    fn window() -> Size {
        Size::new(480.0, 800.0)
    }

    #[test]
    fn given_closed_mobile_panel_when_hit_tested_then_contains_nothing_on_screen()
     {
        let bounds = panel_bounds(SidebarVisualState::MobileClosed, window());

        assert!(!bounds.contains(Point::new(10.0, 300.0)));
        assert!(bounds.right() <= 0.0);
    }

    #[test]
    fn given_open_mobile_panel_when_hit_tested_then_covers_left_side_below_header()
     {
        let bounds = panel_bounds(SidebarVisualState::MobileOpen, window());

        assert!(bounds.contains(Point::new(10.0, HEADER_HEIGHT + 10.0)));
        assert!(!bounds.contains(Point::new(10.0, 10.0)));
        assert!(!bounds.contains(Point::new(400.0, 300.0)));
    }

    #[test]
    fn given_mobile_state_when_toggle_placed_then_sits_in_header() {
        let toggle = toggle_bounds(SidebarVisualState::MobileOpen);
        let panel = panel_bounds(SidebarVisualState::MobileOpen, window());

        assert!(toggle.bottom() <= HEADER_HEIGHT);
        assert!(toggle.intersection(&panel).is_none());
    }

    #[test]
    fn given_collapsed_desktop_when_toggle_placed_then_stays_inside_panel() {
        let toggle = toggle_bounds(SidebarVisualState::DesktopCollapsed);

        assert!(toggle.x >= 0.0);
        assert!(toggle.right() <= COLLAPSED_PANEL_WIDTH);
    }

    #[test]
    fn given_collapsed_desktop_when_content_sized_then_panel_width_is_subtracted()
     {
        let size = content_size(
            SidebarVisualState::DesktopCollapsed,
            Size::new(1280.0, 800.0),
        );

        assert_eq!(size.width, 1280.0 - COLLAPSED_PANEL_WIDTH);
        assert_eq!(size.height, 800.0);
    }

    #[test]
    fn given_consecutive_cards_when_laid_out_then_they_never_overlap() {
        let first = card_bounds(0, 600.0);
        let second = card_bounds(1, 600.0);

        assert_eq!(first.height, CARD_HEIGHT);
        assert!(first.bottom() < second.y);
        assert!(first.intersection(&second).is_none());
    }
}
