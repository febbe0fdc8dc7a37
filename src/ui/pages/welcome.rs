//! Welcome gate shown after loading
//! Nothing animates beyond the star layer and no audio plays until the
//! visitor clicks through

use iced::widget::{Space, button, column, container, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::{icons, theme};

pub fn view() -> Element<'static, Message> {
    let heart = svg(svg::Handle::from_memory(icons::HEART.as_bytes()))
        .width(64)
        .height(64)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::HEART_RED),
        });

    let content = column![
        heart,
        Space::new().height(32),
        text("Con mucho amor").size(56).color(theme::ACCENT_BLUE),
        Space::new().height(24),
        text("Att: Ismael").size(20).color(theme::TEXT_MUTED),
        Space::new().height(32),
        button(
            text("Dame click para comenzar")
                .size(18)
                .color(theme::TEXT_PRIMARY)
        )
        .style(theme::primary_button)
        .padding([16, 32])
        .on_press(Message::StartJourney),
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
