//! Gargantúa section
//! Animated black hole with the scientific fact cards underneath

use iced::widget::{Space, canvas, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, SectionToggles};
use crate::ui::components::cards;
use crate::ui::components::navbar::NavItem;
use crate::ui::effects::{Gargantua, GargantuaScene};
use crate::ui::theme;

pub fn view<'a>(hole: &'a Gargantua, toggles: SectionToggles) -> Element<'a, Message> {
    let height = if toggles.gargantua_expanded { 700 } else { 520 };
    let corner = container(cards::diagram_controls(
        toggles.gargantua_expanded,
        Message::ExpandToggled(NavItem::Gargantua),
        None,
    ))
    .width(Fill)
    .align_x(Alignment::End)
    .padding(12);

    let visualization = container(
        stack![
            canvas(GargantuaScene { hole }).width(Fill).height(height),
            corner,
        ],
    )
    .style(theme::glass_panel)
    .padding(8)
    .width(Fill);

    let science = cards::blue_card(
        "Datos Científicos",
        column![
            cards::bullet("Masa: Aproximadamente 100 millones de veces la masa del Sol"),
            cards::bullet("Velocidad de rotación: Cerca del 99.8% de la velocidad de la luz"),
            cards::bullet("Radio del horizonte de eventos: 300 millones de kilómetros"),
        ]
        .spacing(14)
        .into(),
    );

    let relativity = cards::blue_card(
        "Efectos Relativistas",
        column![
            text(
                "La inmensa gravedad de Gargantúa distorsiona el espacio-tiempo, creando \
                 efectos visuales únicos como el lente gravitacional y la dilatación \
                 temporal."
            )
            .size(15)
            .color(theme::TEXT_SECONDARY),
            text(
                "Su disco de acreción gira a velocidades relativistas, creando patrones \
                 de luz y color espectaculares debido al efecto Doppler relativista."
            )
            .size(15)
            .color(theme::TEXT_SECONDARY),
        ]
        .spacing(14)
        .into(),
    );

    let content = column![
        cards::section_title("Gargantúa: El Agujero Negro"),
        Space::new().height(8),
        cards::section_subtitle("Explorando los límites del espacio-tiempo"),
        Space::new().height(40),
        visualization,
        Space::new().height(32),
        row![science, Space::new().width(24), relativity],
    ]
    .max_width(1000)
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
