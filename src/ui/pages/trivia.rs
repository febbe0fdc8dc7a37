//! Curiosidades carousel
//! One card at a time with wrap-around arrows and direct dot selection

use iced::widget::{Space, button, column, container, image, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::trivia;
use crate::ui::components::cards;
use crate::ui::{icons, theme};

/// Gallery photo illustrating each card
const CARD_PHOTOS: [usize; 3] = [0, 2, 1];

pub fn view<'a>(index: usize, photos: &'a [Option<image::Handle>]) -> Element<'a, Message> {
    let card = &trivia::CARDS[index];

    let illustration: Element<'a, Message> = match photos.get(CARD_PHOTOS[index]).and_then(|slot| slot.as_ref()) {
        Some(handle) => container(
            image(handle.clone())
                .content_fit(iced::ContentFit::Cover)
                .width(Fill)
                .height(300),
        )
        .style(theme::placeholder_tile)
        .width(Fill)
        .into(),
        None => container(Space::new().height(300))
            .style(theme::placeholder_tile)
            .width(Fill)
            .into(),
    };

    let mut paragraphs = column![].spacing(14);
    for paragraph in card.paragraphs {
        paragraphs = paragraphs.push(text(paragraph).size(15).color(theme::TEXT_SECONDARY));
    }

    let mut stat_row = row![].spacing(12);
    for stat in card.stats {
        stat_row = stat_row.push(cards::stat_tile(stat.value.to_string(), stat.label));
    }

    let body = row![
        column![
            illustration,
            Space::new().height(12),
            text(card.subtitle.to_uppercase())
                .size(13)
                .color(theme::TEXT_MUTED),
        ]
        .width(Fill),
        Space::new().width(32),
        column![
            text(card.title).size(28).color(theme::TEXT_PRIMARY),
            Space::new().height(20),
            paragraphs,
            Space::new().height(24),
            stat_row,
        ]
        .width(Fill),
    ];

    let mut dots = row![].spacing(8);
    for i in 0..trivia::CARDS.len() {
        dots = dots.push(
            button(Space::new().width(8).height(8))
                .style(theme::dot_button(i == index))
                .padding(0)
                .on_press(Message::TriviaSelected(i)),
        );
    }

    let controls = row![
        arrow(icons::CHEVRON_LEFT, Message::TriviaPrevious),
        Space::new().width(Fill),
        dots,
        Space::new().width(Fill),
        arrow(icons::CHEVRON_RIGHT, Message::TriviaNext),
    ]
    .align_y(Alignment::Center);

    let content = column![
        cards::section_title("Curiosidades de Interstellar"),
        Space::new().height(40),
        container(body).style(theme::purple_card).padding(32),
        Space::new().height(24),
        controls,
    ]
    .max_width(1100)
    .width(Fill);

    scrollable(
        container(content)
            .width(Fill)
            .align_x(Alignment::Center)
            .padding(48),
    )
    .width(Fill)
    .height(Fill)
    .into()
}

fn arrow(icon: &'static str, message: Message) -> Element<'static, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(24)
            .height(24)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::TEXT_PRIMARY),
            }),
    )
    .style(theme::glass_icon_button)
    .padding(10)
    .on_press(message)
    .into()
}
