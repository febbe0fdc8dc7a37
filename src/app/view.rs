//! Application view rendering

use iced::widget::{canvas, column, container, stack};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use super::state::Phase;
use crate::ui::components::navbar::NavItem;
use crate::ui::components::{audio_bar, lightbox, navbar};
use crate::ui::{pages, theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.phase {
            Phase::Loading => self.loading(),
            Phase::Welcome => self.welcome(),
            Phase::Ready => self.ready(),
        };

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }

    fn loading(&self) -> Element<'_, Message> {
        canvas(&self.scenes.spinner).width(Fill).height(Fill).into()
    }

    fn welcome(&self) -> Element<'_, Message> {
        stack![
            canvas(&self.scenes.twinkle).width(Fill).height(Fill),
            pages::welcome::view(),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }

    fn ready(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self.active_nav {
            NavItem::Home => pages::home::view(),
            NavItem::Journey => pages::journey::view(&self.journey, &self.scenes.starfield),
            NavItem::Miller => pages::miller::view(self.now, &self.scenes.orbit, self.toggles),
            NavItem::System => pages::system::view(&self.scenes.solar_system, self.toggles),
            NavItem::Gargantua => {
                pages::gargantua::view(&self.scenes.gargantua, self.toggles)
            }
            NavItem::Trivia => pages::trivia::view(self.trivia_index, &self.gallery.photos),
            NavItem::Gallery => pages::gallery::view(&self.gallery.photos),
            NavItem::Dedication => pages::dedication::view(),
        };

        let chrome = column![
            navbar::view(self.active_nav),
            container(page).width(Fill).height(Fill),
        ];

        let controls = container(audio_bar::view(&self.controls))
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::End)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(Padding::new(16.0));

        let mut layers = stack![
            canvas(&self.scenes.twinkle).width(Fill).height(Fill),
            chrome,
            controls,
        ]
        .width(Fill)
        .height(Fill);

        // Reveal the chrome by fading out a black veil
        let veil_alpha = 1.0 - self.fade.progress();
        if veil_alpha > 0.01 {
            layers = layers.push(
                container(iced::widget::Space::new().width(Fill).height(Fill)).style(
                    move |_theme| container::Style {
                        background: Some(iced::Background::Color(iced::Color {
                            a: veil_alpha,
                            ..theme::SPACE_BLACK
                        })),
                        ..Default::default()
                    },
                ),
            );
        }

        if let Some(index) = self.gallery.lightbox {
            let handle = self.gallery.photos[index].as_ref();
            layers = layers.push(lightbox::view(index, handle));
        }

        layers.into()
    }
}
