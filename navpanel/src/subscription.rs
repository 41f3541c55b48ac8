use std::time::Duration;

use iced::{Subscription, event, mouse, touch, window};

use crate::app::{App, Event};

/// Tick period while the controller has delayed work pending.
const TICK_MS: u64 = 16;

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    let win_subs = window::events().map(|(_id, event)| Event::Window(event));
    let key_subs = iced::keyboard::listen().map(Event::Keyboard);
    let pointer_subs = event::listen_with(pointer_event);

    let mut subs = vec![win_subs, key_subs, pointer_subs];
    if app.controller.has_pending_work() {
        subs.push(
            iced::time::every(Duration::from_millis(TICK_MS))
                .map(|_| Event::Tick),
        );
    }

    Subscription::batch(subs)
}

/// Pointer and touch input observed regardless of which widget captured it.
fn pointer_event(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Event> {
    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Event::CursorMoved(position))
        },
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Event::LeftPressed)
        },
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Event::TouchPressed(position))
        },
        iced::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Event::TouchLifted(position))
        },
        _ => None,
    }
}
