//! Floating soundtrack controls, pinned to the bottom right corner
//! Shows a play affordance only while playback is stopped, mirroring the
//! mute toggle next to it

use iced::widget::{button, row, svg};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::audio::Controls;
use crate::ui::{icons, theme};

pub fn view(controls: &Controls) -> Element<'static, Message> {
    let mut bar = row![].spacing(8).align_y(Alignment::Center);

    if controls.shows_play_affordance() {
        bar = bar.push(icon_button(icons::PLAY, Message::PlayPressed));
    }

    let volume_icon = if controls.muted {
        icons::VOLUME_OFF
    } else {
        icons::VOLUME
    };
    bar = bar.push(icon_button(volume_icon, Message::MuteToggled));

    bar.into()
}

fn icon_button(icon: &'static str, message: Message) -> Element<'static, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(24)
            .height(24)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::TEXT_PRIMARY),
            }),
    )
    .style(theme::glass_icon_button)
    .padding(12)
    .on_press(message)
    .into()
}
