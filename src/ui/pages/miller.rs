//! Planeta Miller section
//! Live dilation clocks over the orbital diagram. Both counters are
//! recomputed from the wall clock every second.

use chrono::{DateTime, Utc};
use iced::widget::{Space, canvas, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, SectionToggles};
use crate::features::dilation;
use crate::ui::components::cards;
use crate::ui::components::navbar::NavItem;
use crate::ui::effects::{Orbit, OrbitScene};
use crate::ui::theme;

pub fn view<'a>(
    now: DateTime<Utc>,
    orbit: &'a Orbit,
    toggles: SectionToggles,
) -> Element<'a, Message> {
    let elapsed = dilation::elapsed_since_release(now);
    let earth = dilation::format_earth(dilation::earth_seconds(elapsed));
    let miller = dilation::format_miller(dilation::miller_hours(elapsed));

    let header = column![
        cards::section_title("Planeta Miller"),
        Space::new().height(8),
        cards::section_subtitle("Donde el tiempo es relativo"),
    ];

    let clocks = row![
        clock_card(
            "Tiempo en la Tierra",
            earth,
            "Tiempo transcurrido desde el estreno de Interstellar",
        ),
        Space::new().width(24),
        clock_card("Tiempo en Miller", miller, "1 hora en Miller = 7 años en la Tierra"),
    ];

    let height = if toggles.miller_expanded { 600 } else { 420 };
    let corner = container(cards::diagram_controls(
        toggles.miller_expanded,
        Message::ExpandToggled(NavItem::Miller),
        Some(Message::InfoToggled(NavItem::Miller)),
    ))
    .width(Fill)
    .align_x(Alignment::End)
    .padding(12);

    let diagram = container(
        stack![
            canvas(OrbitScene { orbit }).width(Fill).height(height),
            corner,
        ],
    )
    .style(theme::glass_panel)
    .padding(8)
    .width(Fill);

    let facts = row![
        cards::blue_card(
            "Dilatación Temporal",
            text(
                "Debido a la intensa gravedad del agujero negro Gargantúa, el tiempo \
                 transcurre de manera diferente en el planeta Miller. Este fenómeno está \
                 predicho por la Teoría de la Relatividad de Einstein."
            )
            .size(15)
            .color(theme::TEXT_SECONDARY)
            .into(),
        ),
        Space::new().width(16),
        cards::blue_card(
            "Las Olas Gigantes",
            text(
                "Las enormes olas en el planeta Miller son causadas por la fuerza \
                 gravitacional del agujero negro cercano, creando mareas extremas que \
                 hacen el planeta casi inhabitable."
            )
            .size(15)
            .color(theme::TEXT_SECONDARY)
            .into(),
        ),
        Space::new().width(16),
        cards::blue_card(
            "Impacto en la Misión",
            text(
                "Cada minuto en la superficie del planeta equivale a años de tiempo en \
                 la Tierra, lo que hace que la exploración sea extremadamente arriesgada \
                 y requiera una precisión milimétrica en su ejecución."
            )
            .size(15)
            .color(theme::TEXT_SECONDARY)
            .into(),
        ),
    ];

    let mut content = column![
        header,
        Space::new().height(40),
        clocks,
        Space::new().height(32),
        diagram,
    ]
    .max_width(1100)
    .width(Fill);

    if toggles.miller_info {
        let orbit_info = row![
            cards::blue_card(
                "Dilatación Temporal",
                text(
                    "Cada hora en el planeta Miller equivale a 7 años en la Tierra \
                     debido a la intensa gravedad de Gargantúa. Este fenómeno es \
                     conocido como dilatación temporal gravitacional, predicho por la \
                     Teoría de la Relatividad de Einstein."
                )
                .size(15)
                .color(theme::TEXT_SECONDARY)
                .into(),
            ),
            Space::new().width(24),
            cards::blue_card(
                "La Endurance",
                text(
                    "La nave Endurance debe mantener una órbita precisa alrededor de \
                     Gargantúa para minimizar los efectos de la dilatación temporal \
                     mientras realiza misiones al planeta Miller. Su diseño modular le \
                     permite adaptarse a las extremas condiciones gravitacionales."
                )
                .size(15)
                .color(theme::TEXT_SECONDARY)
                .into(),
            ),
        ];
        content = content.push(Space::new().height(24)).push(orbit_info);
    }

    content = content.push(Space::new().height(32)).push(facts);

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

fn clock_card<'a>(
    title: &'static str,
    reading: String,
    footnote: &'static str,
) -> Element<'a, Message> {
    container(
        column![
            text(title).size(22).color(theme::TEXT_PRIMARY),
            Space::new().height(16),
            text(reading).size(26).color(theme::ACCENT_BLUE),
            Space::new().height(16),
            text(footnote).size(13).color(theme::TEXT_MUTED),
        ],
    )
    .style(theme::blue_card)
    .padding(32)
    .width(Fill)
    .into()
}
