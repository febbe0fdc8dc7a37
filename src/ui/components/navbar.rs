//! Fixed top navigation bar
//! Translucent black strip with the brand mark and one entry per section

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::{icons, theme};

/// Navigable sections of the tribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavItem {
    #[default]
    Home,
    Journey,
    Miller,
    System,
    Gargantua,
    Trivia,
    Gallery,
    Dedication,
}

impl NavItem {
    pub const ALL: [NavItem; 8] = [
        NavItem::Home,
        NavItem::Journey,
        NavItem::Miller,
        NavItem::System,
        NavItem::Gargantua,
        NavItem::Trivia,
        NavItem::Gallery,
        NavItem::Dedication,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Inicio",
            NavItem::Journey => "Viaje",
            NavItem::Miller => "Planeta Miller",
            NavItem::System => "Sistema Solar",
            NavItem::Gargantua => "Gargantúa",
            NavItem::Trivia => "Curiosidades",
            NavItem::Gallery => "Galería",
            NavItem::Dedication => "Ale Nicol",
        }
    }

    pub fn icon_svg(&self) -> &'static str {
        match self {
            NavItem::Home => icons::ROCKET,
            NavItem::Journey => icons::GLOBE,
            NavItem::Miller => icons::CLOCK,
            NavItem::System => icons::ORBIT,
            NavItem::Gargantua => icons::ORBIT,
            NavItem::Trivia => icons::BRAIN,
            NavItem::Gallery => icons::CAMERA,
            NavItem::Dedication => icons::HEART,
        }
    }
}

/// Build the navigation bar
pub fn view(active: NavItem) -> Element<'static, Message> {
    let brand = row![
        container(
            svg(svg::Handle::from_memory(icons::ROCKET.as_bytes()))
                .width(24)
                .height(24)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::TEXT_PRIMARY),
                })
        ),
        Space::new().width(8),
        text("Interstellar").size(20).color(theme::TEXT_PRIMARY),
    ]
    .align_y(Alignment::Center);

    let mut entries = row![].spacing(4).align_y(Alignment::Center);
    for item in NavItem::ALL {
        entries = entries.push(nav_link(item, item == active));
    }

    container(
        row![brand, Space::new().width(Fill), entries]
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).left(24.0).right(24.0)),
    )
    .width(Fill)
    .height(64)
    .align_y(Alignment::Center)
    .style(theme::nav_bar)
    .into()
}

fn nav_link(item: NavItem, active: bool) -> Element<'static, Message> {
    let color = if active {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_SECONDARY
    };

    button(
        row![
            svg(svg::Handle::from_memory(item.icon_svg().as_bytes()))
                .width(16)
                .height(16)
                .style(move |_theme, _status| svg::Style { color: Some(color) }),
            Space::new().width(6),
            text(item.label()).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .style(theme::nav_button(active))
    .padding(Padding::new(8.0).left(12.0).right(12.0))
    .on_press(Message::Navigate(item))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_distinct_label() {
        let labels: Vec<_> = NavItem::ALL.iter().map(|i| i.label()).collect();
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }
}
