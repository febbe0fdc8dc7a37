//! El Portal de Saturno
//! The animated solar system with the wormhole marker beside Saturn

use iced::widget::{Space, canvas, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, SectionToggles};
use crate::ui::components::cards;
use crate::ui::components::navbar::NavItem;
use crate::ui::effects::{SolarSystem, SolarSystemScene};
use crate::ui::theme;

pub fn view<'a>(system: &'a SolarSystem, toggles: SectionToggles) -> Element<'a, Message> {
    let height = if toggles.system_expanded { 820 } else { 640 };
    let corner = container(cards::diagram_controls(
        toggles.system_expanded,
        Message::ExpandToggled(NavItem::System),
        Some(Message::InfoToggled(NavItem::System)),
    ))
    .width(Fill)
    .align_x(Alignment::End)
    .padding(12);

    let diagram = container(
        stack![
            canvas(SolarSystemScene { system })
                .width(Fill)
                .height(height),
            corner,
        ],
    )
    .style(theme::glass_panel)
    .padding(8)
    .width(Fill);

    let lore = container(
        text(
            "En el universo de Interestelar, Saturno se convierte en un punto clave \
             para la exploración interestelar. Cerca del gigante gaseoso, un agujero \
             de gusano misteriosamente colocado por una civilización avanzada abre \
             una puerta a otra galaxia. Este portal cósmico permite a los \
             exploradores de la Tierra adentrarse en lo desconocido, enfrentando los \
             límites del espacio, el tiempo y la supervivencia humana.",
        )
        .size(16)
        .color(theme::TEXT_SECONDARY),
    )
    .width(Fill)
    .align_x(Alignment::Center)
    .padding([0, 48]);

    let mut content = column![
        cards::section_title("El Portal de Saturno"),
        Space::new().height(8),
        cards::section_subtitle(
            "El agujero de gusano apareció cerca de Saturno, a una hora del portal"
        ),
        Space::new().height(40),
        diagram,
        Space::new().height(32),
        lore,
    ]
    .max_width(1000)
    .width(Fill);

    if toggles.system_info {
        let info = row![
            cards::purple_card(
                "El Descubrimiento",
                text(
                    "En Interstellar, el agujero de gusano fue descubierto cerca de \
                     Saturno, proporcionando a la humanidad una ruta hacia otra \
                     galaxia y posibles planetas habitables. Esta anomalía \
                     gravitacional representa la esperanza de la humanidad para \
                     encontrar un nuevo hogar."
                )
                .size(15)
                .color(theme::TEXT_SECONDARY)
                .into(),
            ),
            Space::new().width(24),
            cards::purple_card(
                "La Anomalía",
                text(
                    "El agujero de gusano es una distorsión en el espacio-tiempo que \
                     permite viajar grandes distancias instantáneamente. Su ubicación \
                     cerca de Saturno no es coincidencia, ya que fue colocada \
                     estratégicamente por seres de dimensiones superiores."
                )
                .size(15)
                .color(theme::TEXT_SECONDARY)
                .into(),
            ),
        ];
        content = content.push(Space::new().height(32)).push(info);
    }

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
