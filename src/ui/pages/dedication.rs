//! Para Ale Nicol
//! The dedication letter the whole tribute is built around

use iced::widget::{Space, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::components::cards;
use crate::ui::{icons, theme};

pub fn view() -> Element<'static, Message> {
    let heart = svg(svg::Handle::from_memory(icons::HEART.as_bytes()))
        .width(56)
        .height(56)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::HEART_RED),
        });

    let letter = container(
        text(
            "Como el tiempo es relativo en Interstellar, así también lo es en nuestros \
             corazones. Cada momento que compartimos viendo esta película se convirtió en \
             una eternidad de recuerdos hermosos. Y aunque nuestros caminos se hayan \
             separado temporalmente, como Cooper nunca perdió la esperanza de volver a ver \
             a Murph, guardo en mi corazón la esperanza de que nuestras líneas temporales \
             vuelvan a cruzarse."
        )
        .size(18)
        .color(theme::TEXT_SECONDARY),
    )
    .style(theme::purple_card)
    .padding(32)
    .width(Fill);

    let moments = row![
        cards::purple_card(
            "El Tiempo",
            text(
                "\"El amor es la única fuerza que trasciende el tiempo y el espacio\". \
                 Como Brand dijo estas palabras, así siento que nuestro amor, aunque \
                 transformado, permanece en una dimensión más allá del tiempo."
            )
            .size(15)
            .color(theme::TEXT_SECONDARY)
            .into(),
        ),
        Space::new().width(24),
        cards::purple_card(
            "La Esperanza",
            text(
                "Como las estrellas que guían a los viajeros perdidos, mantengo la \
                 esperanza de que el universo, en su infinita sabiduría, nos ayude a \
                 encontrar el camino de regreso el uno al otro."
            )
            .size(15)
            .color(theme::TEXT_SECONDARY)
            .into(),
        ),
    ];

    let closing = container(
        column![
            text(
                "Esta página es un testimonio de lo que significas para mí, de los \
                 momentos que compartimos, y de la esperanza que guardo en mi corazón. \
                 Como el amor de Cooper atravesó galaxias enteras, el mío permanece, \
                 paciente y constante, esperando el momento correcto para volver a \
                 brillar juntos."
            )
            .size(17)
            .color(theme::TEXT_PRIMARY),
            Space::new().height(16),
            text("\"Maybe we've spent too long trying to figure all this out with theory...\"")
                .size(15)
                .color(theme::ACCENT_PURPLE),
        ]
        .align_x(Alignment::Center),
    )
    .style(theme::purple_card)
    .padding(32)
    .width(Fill);

    let content = column![
        container(heart).width(Fill).align_x(Alignment::Center),
        Space::new().height(24),
        cards::section_title("Para Ale Nicol"),
        Space::new().height(8),
        cards::section_subtitle("Porque algunos amores, como las estrellas, brillan eternamente"),
        Space::new().height(40),
        letter,
        Space::new().height(24),
        moments,
        Space::new().height(24),
        closing,
    ]
    .max_width(900)
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
