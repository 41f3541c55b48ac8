use iced::widget::{
    Column, Space, button, column, container, mouse_area, row, scrollable,
    stack, text, tooltip,
};
use iced::{Alignment, Border, Color, Element, Length, Theme};
use navpanel_core::{PanelClasses, SidebarVisualState};

use super::{App, CONTENT_SCROLL_ID, Event};
use crate::layout;
use crate::panel::PanelMirror;
use crate::settings::CardData;

const CAPTION_SIZE: f32 = 13.0;
const ENTRY_LABEL_SIZE: f32 = 15.0;
const TOGGLE_GLYPH_SIZE: f32 = 18.0;
const CARD_TITLE_SIZE: f32 = 20.0;
const CARD_PADDING: f32 = 20.0;
const CORNER_RADIUS: f32 = 8.0;
const HIDDEN_CARD_ALPHA: f32 = 0.15;
const SCRIM_ALPHA: f32 = 0.45;
const FOCUS_BORDER_WIDTH: f32 = 2.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let mirror = app.controller.view();
    let content = content_view(app);

    if mirror.state().mode().is_mobile() {
        mobile_layout(app, content)
    } else {
        row![panel_view(app), content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Header with the toggle on top, content below with the panel sliding
/// over it.
fn mobile_layout<'a>(
    app: &'a App,
    content: Element<'a, Event>,
) -> Element<'a, Event> {
    let mirror = app.controller.view();
    let header = container(
        row![
            toggle_button(mirror),
            text("navpanel").size(ENTRY_LABEL_SIZE),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(layout::TOGGLE_MARGIN)
    .width(Length::Fill)
    .height(Length::Fixed(layout::HEADER_HEIGHT))
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.weak.color.into()),
            ..Default::default()
        }
    });

    let mut layers = vec![content];
    if mirror.state().is_visible_overlay() {
        let mut overlay = row![panel_view(app)];
        if mirror.is_scroll_locked() {
            overlay = overlay.push(scrim());
        }
        layers.push(overlay.width(Length::Fill).height(Length::Fill).into());
    }

    let body = stack(layers).width(Length::Fill).height(Length::Fill);

    column![header, body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Dimmed layer beside the open panel that swallows wheel scrolling.
fn scrim<'a>() -> Element<'a, Event> {
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(
                    Color::BLACK.scale_alpha(SCRIM_ALPHA).into(),
                ),
                ..Default::default()
            }),
    )
    .on_scroll(|_| Event::ScrollSuppressed)
    .into()
}

fn panel_view(app: &App) -> Element<'_, Event> {
    let mirror = app.controller.view();
    let state = mirror.state();
    let collapsed = state == SidebarVisualState::DesktopCollapsed;

    let caption: Element<'_, Event> = if collapsed {
        Space::new().width(Length::Fill).into()
    } else {
        text(mirror.panel_attribute("aria-label").unwrap_or_default())
            .size(CAPTION_SIZE)
            .width(Length::Fill)
            .into()
    };

    let header: Element<'_, Event> = if state.mode().is_mobile() {
        container(caption)
            .padding(layout::TOGGLE_MARGIN)
            .height(Length::Fixed(layout::HEADER_HEIGHT))
            .align_y(Alignment::Center)
            .into()
    } else {
        container(
            row![caption, toggle_button(mirror)].align_y(Alignment::Center),
        )
        .padding(layout::TOGGLE_MARGIN)
        .height(Length::Fixed(layout::HEADER_HEIGHT))
        .into()
    };

    let entries = app
        .controller
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry_view(mirror, index, entry.label(), collapsed)
        })
        .fold(Column::new(), |column, entry| column.push(entry))
        .spacing(4)
        .padding([0.0, layout::TOGGLE_MARGIN]);

    let closing = mirror.classes().contains(PanelClasses::CLOSING);

    container(
        column![header, scrollable(entries).height(Length::Fill)]
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(layout::panel_width(state)))
    .height(Length::Fill)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = if closing {
            palette.background.strong.color.scale_alpha(0.6)
        } else {
            palette.background.strong.color
        };

        container::Style {
            background: Some(background.into()),
            text_color: Some(palette.background.strong.text),
            ..Default::default()
        }
    })
    .into()
}

fn toggle_button(mirror: &PanelMirror) -> Element<'_, Event> {
    let glyph = match mirror.state() {
        SidebarVisualState::DesktopExpanded => "«",
        SidebarVisualState::DesktopCollapsed => "»",
        SidebarVisualState::MobileClosed => "☰",
        SidebarVisualState::MobileOpen
        | SidebarVisualState::MobileClosing => "✕",
    };

    let toggle = button(
        container(text(glyph).size(TOGGLE_GLYPH_SIZE))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(layout::TOGGLE_SIZE))
    .height(Length::Fixed(layout::TOGGLE_SIZE))
    .padding(0)
    .on_press(Event::ToggleSidebar)
    .style(|theme: &Theme, status| {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(palette.background.weak.color.into())
            },
            _ => None,
        };

        button::Style {
            background,
            text_color: palette.background.base.text,
            border: Border {
                radius: CORNER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    tooltip(
        toggle,
        label_bubble(mirror.toggle_label()),
        tooltip::Position::Bottom,
    )
    .into()
}

fn entry_view<'a>(
    mirror: &'a PanelMirror,
    index: usize,
    label: &'a str,
    collapsed: bool,
) -> Element<'a, Event> {
    let caption = if collapsed {
        label.chars().take(1).collect::<String>()
    } else {
        label.to_string()
    };

    let is_active = mirror.is_active(index);
    let is_pressed = mirror.is_pressed(index);
    let is_focused = mirror.is_focused(index);

    let entry = button(text(caption).size(ENTRY_LABEL_SIZE))
        .width(Length::Fill)
        .height(Length::Fixed(layout::ENTRY_HEIGHT))
        .on_press(Event::EntryPressed(index))
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = if is_pressed {
                Some(palette.primary.strong.color.into())
            } else if is_active {
                Some(palette.primary.weak.color.into())
            } else if matches!(status, button::Status::Hovered) {
                Some(palette.background.weak.color.into())
            } else {
                None
            };
            let text_color = if is_active || is_pressed {
                palette.primary.weak.text
            } else {
                palette.background.strong.text
            };
            let border_color = if is_focused {
                palette.primary.base.color
            } else {
                Color::TRANSPARENT
            };

            button::Style {
                background,
                text_color,
                border: Border {
                    color: border_color,
                    width: FOCUS_BORDER_WIDTH,
                    radius: CORNER_RADIUS.into(),
                },
                ..Default::default()
            }
        });

    let entry = mouse_area(entry).on_enter(Event::EntryHovered(index));

    match mirror.entry_title(index) {
        Some(title) => tooltip(
            entry,
            label_bubble(title),
            tooltip::Position::Right,
        )
        .into(),
        None => entry.into(),
    }
}

fn label_bubble(label: &str) -> Element<'_, Event> {
    container(text(label).size(CAPTION_SIZE))
        .padding([4.0, 8.0])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                text_color: Some(palette.background.base.text),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: CORNER_RADIUS.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

fn content_view(app: &App) -> Element<'_, Event> {
    let cards = app
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| card_view(card, app.reveal.is_revealed(index)))
        .fold(Column::new(), |column, card| column.push(card))
        .spacing(layout::CARD_SPACING)
        .padding(layout::CONTENT_PADDING)
        .width(Length::Fill);

    scrollable(cards)
        .id(iced::widget::Id::new(CONTENT_SCROLL_ID))
        .on_scroll(Event::ContentScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card_view(card: &CardData, revealed: bool) -> Element<'_, Event> {
    let alpha = if revealed { 1.0 } else { HIDDEN_CARD_ALPHA };

    container(
        column![
            text(&card.title).size(CARD_TITLE_SIZE),
            text(&card.body).size(ENTRY_LABEL_SIZE),
        ]
        .spacing(8),
    )
    .padding(CARD_PADDING)
    .width(Length::Fill)
    .height(Length::Fixed(layout::CARD_HEIGHT))
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(
                palette.background.weak.color.scale_alpha(alpha).into(),
            ),
            text_color: Some(palette.background.weak.text.scale_alpha(alpha)),
            border: Border {
                radius: CORNER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
