#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::widget::scrollable;
use iced::{Element, Size, Subscription, Task, Theme, keyboard, window};
use navpanel_core::{
    Point, Rect, RevealTracker, SidebarController, SystemClock,
};

use crate::layout;
use crate::panel::PanelMirror;
use crate::settings::{self, CardData, SettingsData};

pub(crate) const INITIAL_WINDOW_WIDTH: f32 = 1100.0;
pub(crate) const INITIAL_WINDOW_HEIGHT: f32 = 760.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const CONTENT_SCROLL_ID: &str = "navpanel-content";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    IcedReady(Size),
    ToggleSidebar,
    EntryPressed(usize),
    EntryHovered(usize),
    ContentScrolled(scrollable::Viewport),
    /// Wheel input swallowed while page scrolling is locked.
    ScrollSuppressed,
    CursorMoved(iced::Point),
    LeftPressed,
    TouchPressed(iced::Point),
    TouchLifted(iced::Point),
    Keyboard(keyboard::Event),
    Window(window::Event),
    Tick,
}

pub(crate) struct App {
    controller: SidebarController<PanelMirror, SystemClock>,
    cards: Vec<CardData>,
    reveal: RevealTracker,
    cursor: Point,
    touch_origin: Option<Point>,
    scroll_offset: f32,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let window_size = Size {
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
        };
        let app =
            App::from_settings(settings::load_initial_settings(), window_size);

        let ready = window::latest()
            .and_then(window::size)
            .map(Event::IcedReady);

        (app, ready)
    }

    fn from_settings(settings: SettingsData, window_size: Size) -> Self {
        let mirror = PanelMirror::new(settings.entries.len(), window_size);
        let controller = SidebarController::new(
            settings.controller,
            mirror,
            SystemClock::new(),
            settings.entries,
        );
        let reveal = RevealTracker::from_config(
            settings.cards.len(),
            controller.config(),
        );

        App {
            controller,
            cards: settings.cards,
            reveal,
            cursor: Point::ORIGIN,
            touch_origin: None,
            scroll_offset: 0.0,
        }
    }

    pub(crate) fn title(&self) -> String {
        String::from("navpanel")
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Run reveal observation for the content area scrolled to
    /// `self.scroll_offset`.
    fn observe_cards(&mut self) {
        let window_size = self.controller.view().window_size();
        let area = layout::content_size(
            self.controller.visual_state(),
            window_size,
        );
        let visible =
            Rect::new(0.0, self.scroll_offset, area.width, area.height);
        let bounds: Vec<Rect> = (0..self.cards.len())
            .map(|index| layout::card_bounds(index, area.width))
            .collect();

        let revealed = self.reveal.observe(visible, &bounds);
        if !revealed.is_empty() {
            log::debug!("cards revealed: {revealed:?}");
        }
    }
}
