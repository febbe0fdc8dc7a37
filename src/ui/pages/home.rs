//! Hero section

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::components::navbar::NavItem;
use crate::ui::theme;

pub fn view() -> Element<'static, Message> {
    let content = column![
        text("Interstellar").size(64).color(theme::ACCENT_BLUE),
        Space::new().height(24),
        text("Dedicada a Ale Nicol")
            .size(26)
            .color(theme::TEXT_SECONDARY),
        Space::new().height(16),
        text("Explorando las maravillas del cosmos desde Interstellar")
            .size(20)
            .color(theme::TEXT_MUTED),
        Space::new().height(40),
        row![
            button(
                text("Explorar el Universo")
                    .size(17)
                    .color(theme::TEXT_PRIMARY)
            )
            .style(theme::primary_button)
            .padding([14, 32])
            .on_press(Message::Navigate(NavItem::Journey)),
            Space::new().width(24),
            button(text("Curiosidades").size(17).color(theme::TEXT_PRIMARY))
                .style(theme::outline_button)
                .padding([14, 32])
                .on_press(Message::Navigate(NavItem::Trivia)),
        ]
        .align_y(Alignment::Center),
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
