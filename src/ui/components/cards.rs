//! Shared building blocks for the content sections

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::{icons, theme};

/// Large centered section heading
pub fn section_title(title: &'static str) -> Element<'static, Message> {
    container(text(title).size(40).color(theme::TEXT_PRIMARY))
        .width(Fill)
        .align_x(Alignment::Center)
        .into()
}

/// Muted line under a section heading
pub fn section_subtitle(subtitle: &'static str) -> Element<'static, Message> {
    container(text(subtitle).size(18).color(theme::TEXT_SECONDARY))
        .width(Fill)
        .align_x(Alignment::Center)
        .into()
}

/// Small value-over-label tile, used under trivia cards and in the report
pub fn stat_tile(value: String, label: &'static str) -> Element<'static, Message> {
    container(
        column![
            text(value).size(22).color(theme::ACCENT_BLUE),
            text(label).size(12).color(theme::TEXT_MUTED),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .style(theme::stat_tile)
    .padding(12)
    .width(Fill)
    .align_x(Alignment::Center)
    .into()
}

/// Bullet line with a small accent dot, used in the fact lists
pub fn bullet(line: &'static str) -> Element<'static, Message> {
    row![
        container(Space::new().width(6).height(6)).style(|_theme| container::Style {
            background: Some(iced::Background::Color(theme::ACCENT_BLUE)),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }),
        Space::new().width(10),
        text(line).size(15).color(theme::TEXT_SECONDARY),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Corner buttons layered over a section diagram: an optional info toggle
/// next to a maximize/minimize toggle
pub fn diagram_controls(
    expanded: bool,
    expand_message: Message,
    info_message: Option<Message>,
) -> Element<'static, Message> {
    let mut controls = row![].spacing(8);

    if let Some(message) = info_message {
        controls = controls.push(diagram_button(icons::INFO, message));
    }

    let size_icon = if expanded {
        icons::MINIMIZE
    } else {
        icons::MAXIMIZE
    };
    controls = controls.push(diagram_button(size_icon, expand_message));

    controls.into()
}

fn diagram_button(icon: &'static str, message: Message) -> Element<'static, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(20)
            .height(20)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::TEXT_PRIMARY),
            }),
    )
    .style(theme::glass_icon_button)
    .padding(8)
    .on_press(message)
    .into()
}

/// Blue-tinted card with a heading and free-form body
pub fn blue_card(
    title: &'static str,
    body: Element<'static, Message>,
) -> Element<'static, Message> {
    container(
        column![
            text(title).size(22).color(theme::TEXT_PRIMARY),
            Space::new().height(12),
            body,
        ],
    )
    .style(theme::blue_card)
    .padding(24)
    .width(Fill)
    .into()
}

/// Purple-tinted variant
pub fn purple_card(
    title: &'static str,
    body: Element<'static, Message>,
) -> Element<'static, Message> {
    container(
        column![
            text(title).size(22).color(theme::TEXT_PRIMARY),
            Space::new().height(12),
            body,
        ],
    )
    .style(theme::purple_card)
    .padding(24)
    .width(Fill)
    .into()
}
