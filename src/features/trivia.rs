//! Trivia carousel content and cycling
//!
//! Three cards about the making of the film, cycled with wrap-around
//! next/previous navigation and direct dot selection.

/// A single stat tile shown under a trivia card
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// One card of the trivia carousel
#[derive(Debug, Clone, Copy)]
pub struct TriviaCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: [&'static str; 3],
    pub stats: [Stat; 3],
}

pub const CARDS: [TriviaCard; 3] = [
    TriviaCard {
        title: "Efectos Visuales Revolucionarios",
        subtitle: "La ciencia detrás de Gargantúa",
        paragraphs: [
            "El equipo de efectos visuales trabajó con el físico Kip Thorne para crear la \
             visualización más precisa de un agujero negro jamás vista en el cine.",
            "El renderizado de algunas escenas tomó hasta 100 horas por frame, generando más \
             de 800 terabytes de datos.",
            "El software DNGR (Double Negative Gravitational Renderer) fue desarrollado \
             específicamente para simular el comportamiento preciso de la luz alrededor de \
             un agujero negro supermasivo.",
        ],
        stats: [
            Stat { label: "Tiempo de render por frame", value: "100h" },
            Stat { label: "Datos generados", value: "800TB" },
            Stat { label: "Premios VFX", value: "Oscar" },
        ],
    },
    TriviaCard {
        title: "La Ciencia Real",
        subtitle: "Teorías y precisión científica",
        paragraphs: [
            "Kip Thorne, ganador del Premio Nobel, aseguró que toda la ciencia en la película \
             está basada en teorías reales o especulaciones científicas razonables.",
            "La representación de la dilatación temporal en el planeta Miller está basada en \
             cálculos precisos sobre los efectos gravitacionales cerca de un agujero negro \
             supermasivo.",
            "El concepto del agujero de gusano está basado en soluciones reales de las \
             ecuaciones de Einstein que permiten, teóricamente, crear atajos a través del \
             espacio-tiempo.",
        ],
        stats: [
            Stat { label: "Precisión científica", value: "95%" },
            Stat { label: "Ecuaciones usadas", value: "800+" },
            Stat { label: "Asesores científicos", value: "12" },
        ],
    },
    TriviaCard {
        title: "Detrás de Cámaras",
        subtitle: "La producción de Interstellar",
        paragraphs: [
            "Christopher Nolan utilizó mínimos efectos CGI, construyendo sets físicos enormes \
             incluyendo la nave Endurance completa.",
            "Las escenas en el planeta Miller fueron filmadas en Islandia, mientras que las \
             escenas del planeta Mann se rodaron en Glaciar Svínafellsjökull.",
            "La música de Hans Zimmer fue compuesta antes de que se filmara la película, algo \
             inusual en la industria del cine.",
        ],
        stats: [
            Stat { label: "Presupuesto", value: "$165M" },
            Stat { label: "Duración rodaje", value: "4 meses" },
            Stat { label: "Locaciones", value: "6 países" },
        ],
    },
];

/// Index of the card after `index`, wrapping past the end
pub fn next_index(index: usize) -> usize {
    (index + 1) % CARDS.len()
}

/// Index of the card before `index`, wrapping past the start
pub fn prev_index(index: usize) -> usize {
    (index + CARDS.len() - 1) % CARDS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_both_ways() {
        assert_eq!(next_index(CARDS.len() - 1), 0);
        assert_eq!(prev_index(0), CARDS.len() - 1);
        assert_eq!(next_index(0), 1);
        assert_eq!(prev_index(2), 1);
    }
}
