//! Fullscreen photo viewer overlaid on the gallery
//! Near-opaque backdrop, previous/next arrows that wrap around the
//! collection, a close button and a caption pill

use iced::widget::{Space, button, column, container, image, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::gallery;
use crate::ui::{icons, theme};

/// Build the lightbox for the photo at `index`. `handle` is `None` while
/// the image is still downloading or failed to arrive.
pub fn view(index: usize, handle: Option<&image::Handle>) -> Element<'static, Message> {
    let photo = &gallery::PHOTOS[index];

    let picture: Element<'static, Message> = match handle {
        Some(handle) => image(handle.clone())
            .content_fit(iced::ContentFit::Contain)
            .width(Fill)
            .height(Fill)
            .into(),
        None => container(
            text("Cargando imagen...")
                .size(18)
                .color(theme::TEXT_MUTED),
        )
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into(),
    };

    let caption = container(
        text(format!(
            "{} ({} / {})",
            photo.title,
            index + 1,
            gallery::PHOTOS.len()
        ))
        .size(16)
        .color(theme::TEXT_PRIMARY),
    )
    .style(theme::caption_pill)
    .padding(Padding::new(10.0).left(20.0).right(20.0));

    let arrows = row![
        icon_button(icons::CHEVRON_LEFT, Message::LightboxPrevious),
        Space::new().width(Fill),
        icon_button(icons::CHEVRON_RIGHT, Message::LightboxNext),
    ]
    .align_y(Alignment::Center)
    .padding(16);

    let top_bar = row![
        Space::new().width(Fill),
        icon_button(icons::CLOSE, Message::LightboxClosed),
    ]
    .padding(16);

    let overlay = column![
        top_bar,
        container(arrows)
            .width(Fill)
            .height(Fill)
            .align_y(Alignment::Center),
        container(caption)
            .width(Fill)
            .align_x(Alignment::Center)
            .padding(Padding::new(0.0).bottom(24.0)),
    ];

    container(stack![container(picture).padding(48), overlay])
        .width(Fill)
        .height(Fill)
        .style(theme::lightbox_backdrop)
        .into()
}

fn icon_button(icon: &'static str, message: Message) -> Element<'static, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(28)
            .height(28)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::TEXT_PRIMARY),
            }),
    )
    .style(theme::glass_icon_button)
    .padding(10)
    .on_press(message)
    .into()
}
