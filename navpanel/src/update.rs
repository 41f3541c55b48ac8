use iced::keyboard::key::Named;
use iced::widget::operation::scroll_to;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::{Size, Task, keyboard, window};
use navpanel_core::{Key, Point, SidebarEvent, TabDirection};

use super::{App, CONTENT_SCROLL_ID, Event};
use crate::layout;
use crate::settings;

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        IcedReady(size) => ready(app, size),
        ToggleSidebar => dispatch(app, SidebarEvent::ToggleActivated),
        EntryPressed(index) => {
            dispatch(app, SidebarEvent::EntryActivated(index))
        },
        EntryHovered(index) => {
            dispatch(app, SidebarEvent::EntryHovered(index))
        },
        ContentScrolled(viewport) => {
            content_scrolled(app, viewport);
            Task::none()
        },
        ScrollSuppressed => Task::none(),
        CursorMoved(position) => {
            app.cursor = Point::new(position.x, position.y);
            Task::none()
        },
        LeftPressed => {
            app.controller.view_mut().clear_focus();
            let position = app.cursor;
            dispatch(app, SidebarEvent::PointerDown { position })
        },
        TouchPressed(position) => {
            let point = Point::new(position.x, position.y);
            app.cursor = point;
            app.touch_origin = Some(point);
            dispatch(app, SidebarEvent::TouchStart { x: position.x })
        },
        TouchLifted(position) => {
            touch_lifted(app, Point::new(position.x, position.y))
        },
        Keyboard(event) => handle_keyboard(app, event),
        Window(window::Event::Resized(size)) => resized(app, size),
        Window(_) => Task::none(),
        Tick => {
            let task = dispatch(app, SidebarEvent::Tick);
            app.observe_cards();
            task
        },
    }
}

fn ready(app: &mut App, size: Size) -> Task<Event> {
    app.controller.view_mut().set_window_size(size);
    let task = dispatch(app, SidebarEvent::Ready { width: size.width });
    app.observe_cards();

    log::info!(
        "navpanel initialized: {:?} mode, {} entries",
        app.controller.mode(),
        app.controller.entries().len()
    );
    task
}

fn resized(app: &mut App, size: Size) -> Task<Event> {
    app.controller.view_mut().set_window_size(size);
    let task = dispatch(app, SidebarEvent::Resized { width: size.width });
    app.observe_cards();
    task
}

/// Route `event` through the controller and run any scroll it requested.
fn dispatch(app: &mut App, event: SidebarEvent) -> Task<Event> {
    let _ = app.controller.dispatch(event);

    match app.controller.view_mut().take_pending_anchor() {
        Some(anchor) => scroll_to_anchor(app, &anchor),
        None => Task::none(),
    }
}

fn scroll_to_anchor(app: &App, anchor: &str) -> Task<Event> {
    let Some(index) = settings::card_for_anchor(&app.cards, anchor) else {
        log::debug!("no card for anchor {anchor}");
        return Task::none();
    };

    scroll_to(
        iced::widget::Id::new(CONTENT_SCROLL_ID),
        AbsoluteOffset {
            x: 0.0,
            y: layout::card_offset(index),
        },
    )
}

/// Evaluate the swipe first, then treat a stationary touch as a tap
/// activation at the lift point.
fn touch_lifted(app: &mut App, point: Point) -> Task<Event> {
    app.cursor = point;
    let swipe = dispatch(app, SidebarEvent::TouchEnd { x: point.x });

    let Some(origin) = app.touch_origin.take() else {
        return swipe;
    };
    let tolerance = app.controller.config().swipe_threshold;
    let is_tap = (point.x - origin.x).abs() <= tolerance
        && (point.y - origin.y).abs() <= tolerance;
    if !is_tap {
        return swipe;
    }

    let tap = dispatch(app, SidebarEvent::PointerDown { position: point });
    Task::batch(vec![swipe, tap])
}

fn content_scrolled(app: &mut App, viewport: Viewport) {
    app.scroll_offset = viewport.absolute_offset().y;
    app.observe_cards();
}

fn handle_keyboard(app: &mut App, event: keyboard::Event) -> Task<Event> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match key {
        keyboard::Key::Named(Named::Escape) => {
            dispatch(app, SidebarEvent::KeyDown(Key::Escape))
        },
        keyboard::Key::Named(Named::Tab) => {
            tab_pressed(app, modifiers.shift());
            Task::none()
        },
        keyboard::Key::Named(Named::Enter | Named::Space) => {
            match app.controller.view().focused_entry() {
                Some(index) => {
                    dispatch(app, SidebarEvent::EntryActivated(index))
                },
                None => Task::none(),
            }
        },
        _ => dispatch(app, SidebarEvent::KeyDown(Key::Other)),
    }
}

/// Let the controller trap focus first; only an unhandled Tab moves the
/// host's own focus ring.
fn tab_pressed(app: &mut App, shift: bool) {
    let propagation = app
        .controller
        .dispatch(SidebarEvent::KeyDown(Key::Tab { shift }));
    if propagation.is_stopped() || !panel_is_visible(app) {
        return;
    }

    let direction = if shift {
        TabDirection::Backward
    } else {
        TabDirection::Forward
    };
    app.controller.view_mut().advance_focus(direction);
}

fn panel_is_visible(app: &App) -> bool {
    let state = app.controller.visual_state();
    !state.mode().is_mobile() || state.is_visible_overlay()
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use navpanel_core::{Point, SidebarVisualState, TabDirection};

    use super::{App, Event, tab_pressed, touch_lifted, update};
    use crate::settings::SettingsData;

    const MOBILE_WINDOW: Size = Size::new(480.0, 800.0);
    const DESKTOP_WINDOW: Size = Size::new(1280.0, 800.0);

    fn ready_app(window: Size) -> App {
        let mut app = App::from_settings(SettingsData::default(), window);
        let _ = update(&mut app, Event::IcedReady(window));
        app
    }

    fn open_mobile_app() -> App {
        let mut app = ready_app(MOBILE_WINDOW);
        let _ = update(&mut app, Event::ToggleSidebar);
        assert_eq!(
            app.controller.visual_state(),
            SidebarVisualState::MobileOpen
        );
        app
    }

    fn touch(app: &mut App, from: Point, to: Point) {
        let pressed = iced::Point::new(from.x, from.y);
        let _ = update(app, Event::TouchPressed(pressed));
        let _ = touch_lifted(app, to);
    }

    #[test]
    fn given_focus_on_last_entry_when_tab_trapped_then_host_does_not_advance_again()
     {
        let mut app = open_mobile_app();
        let last = app.controller.entries().len() - 1;
        app.controller.view_mut().advance_focus(TabDirection::Backward);
        assert_eq!(app.controller.view().focused_entry(), Some(last));

        tab_pressed(&mut app, false);

        assert_eq!(app.controller.view().focused_entry(), Some(0));
    }

    #[test]
    fn given_focus_on_first_entry_when_tab_not_trapped_then_host_advances() {
        let mut app = open_mobile_app();
        app.controller.view_mut().advance_focus(TabDirection::Forward);
        assert_eq!(app.controller.view().focused_entry(), Some(0));

        tab_pressed(&mut app, false);

        assert_eq!(app.controller.view().focused_entry(), Some(1));
    }

    #[test]
    fn given_desktop_panel_when_shift_tab_pressed_then_focus_moves_backward() {
        let mut app = ready_app(DESKTOP_WINDOW);
        let last = app.controller.entries().len() - 1;

        tab_pressed(&mut app, true);

        assert_eq!(app.controller.view().focused_entry(), Some(last));
    }

    #[test]
    fn given_closed_mobile_panel_when_tab_pressed_then_focus_stays_outside() {
        let mut app = ready_app(MOBILE_WINDOW);

        tab_pressed(&mut app, false);

        assert_eq!(app.controller.view().focused_entry(), None);
    }

    #[test]
    fn given_open_mobile_panel_when_tapped_beside_it_then_starts_closing() {
        let mut app = open_mobile_app();

        touch(&mut app, Point::new(400.0, 300.0), Point::new(402.0, 301.0));

        assert_eq!(
            app.controller.visual_state(),
            SidebarVisualState::MobileClosing
        );
    }

    #[test]
    fn given_open_mobile_panel_when_drag_starts_beside_it_then_stays_open() {
        let mut app = open_mobile_app();

        touch(&mut app, Point::new(400.0, 300.0), Point::new(470.0, 300.0));
        assert_eq!(
            app.controller.visual_state(),
            SidebarVisualState::MobileOpen
        );

        touch(&mut app, Point::new(400.0, 300.0), Point::new(400.0, 600.0));
        assert_eq!(
            app.controller.visual_state(),
            SidebarVisualState::MobileOpen
        );
    }

    #[test]
    fn given_closed_mobile_panel_when_swiped_from_edge_then_opens_and_stays_open()
     {
        let mut app = ready_app(MOBILE_WINDOW);

        touch(&mut app, Point::new(10.0, 300.0), Point::new(420.0, 300.0));

        assert_eq!(
            app.controller.visual_state(),
            SidebarVisualState::MobileOpen
        );
        assert!(app.touch_origin.is_none());
    }
}
