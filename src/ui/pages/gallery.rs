//! Galería Espacial
//! Four-wide grid of downloaded photos; a tile that has not loaded yet
//! stays a tinted placeholder with its title

use iced::widget::{Space, button, column, container, image, row, scrollable, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::gallery;
use crate::ui::components::cards;
use crate::ui::theme;

const COLUMNS: usize = 4;

pub fn view<'a>(photos: &'a [Option<image::Handle>]) -> Element<'a, Message> {
    let mut grid = column![].spacing(16);
    for (row_index, chunk) in photos.chunks(COLUMNS).enumerate() {
        let mut cells = row![].spacing(16);
        for (col_index, slot) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + col_index;
            cells = cells.push(tile(index, slot.as_ref()));
        }
        grid = grid.push(cells);
    }

    let content = column![
        cards::section_title("Galería Espacial"),
        Space::new().height(40),
        grid,
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

fn tile<'a>(index: usize, handle: Option<&'a image::Handle>) -> Element<'a, Message> {
    let photo = &gallery::PHOTOS[index];

    let face: Element<'a, Message> = match handle {
        Some(handle) => container(
            image(handle.clone())
                .content_fit(iced::ContentFit::Cover)
                .width(Fill)
                .height(220),
        )
        .style(theme::placeholder_tile)
        .width(Fill)
        .into(),
        None => container(
            text(photo.title).size(14).color(theme::TEXT_MUTED),
        )
        .style(theme::placeholder_tile)
        .width(Fill)
        .height(220)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into(),
    };

    button(
        column![
            face,
            Space::new().height(8),
            text(photo.title).size(14).color(theme::TEXT_SECONDARY),
        ]
        .width(Fill),
    )
    .style(theme::tile_button)
    .padding(0)
    .width(Fill)
    .on_press(Message::LightboxOpened(index))
    .into()
}
