//! Theme system for the tribute
//! Deep-space dark palette with the original site's blue/purple accents

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette
// ============================================================================

/// Page background - pure black, like space
pub const SPACE_BLACK: Color = color!(0x000000);
/// Translucent panel surface over the canvases
pub const GLASS: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);
/// Navigation bar surface
pub const NAV_SURFACE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
/// Card surface tinted toward deep blue
pub const CARD_BLUE: Color = Color::from_rgba(0.106, 0.2, 0.4, 0.2);
/// Card surface tinted toward deep purple
pub const CARD_PURPLE: Color = Color::from_rgba(0.35, 0.1, 0.55, 0.2);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_SECONDARY: Color = color!(0xd1d5db);
pub const TEXT_MUTED: Color = color!(0x9ca3af);

/// Primary blue accent (Miller, orbit labels, hero gradient start)
pub const ACCENT_BLUE: Color = color!(0x4299e1);
/// Purple accent (wormhole, dedication)
pub const ACCENT_PURPLE: Color = color!(0x8a2be2);
/// Bright cyan-blue used for the planet and speed bar
pub const PLANET_BLUE: Color = color!(0x0095ff);
/// Warm accretion-disk orange
pub const ACCRETION_ORANGE: Color = color!(0xff6b00);
/// Heart red on the welcome gate
pub const HEART_RED: Color = color!(0xef4444);

/// Border color for glass panels
pub const PANEL_BORDER: Color = Color::from_rgba(0.54, 0.29, 0.89, 0.2);

// ============================================================================
// Container styles
// ============================================================================

/// Full-page black background
pub fn main_content(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SPACE_BLACK)),
        ..Default::default()
    }
}

/// Translucent glass panel floating over a canvas
pub fn glass_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GLASS)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: PANEL_BORDER,
        },
        ..Default::default()
    }
}

/// Blue-tinted info card
pub fn blue_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BLUE)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: Color::from_rgba(0.26, 0.6, 0.88, 0.2),
        },
        ..Default::default()
    }
}

/// Purple-tinted info card
pub fn purple_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_PURPLE)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: PANEL_BORDER,
        },
        ..Default::default()
    }
}

/// Subtle stat tile under the trivia cards
pub fn stat_tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Navigation bar surface
pub fn nav_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(NAV_SURFACE)),
        ..Default::default()
    }
}

/// Near-opaque backdrop behind the lightbox
pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.95))),
        ..Default::default()
    }
}

/// Rounded caption pill inside the lightbox
pub fn caption_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder tile for a photo that has not loaded (or failed to)
pub fn placeholder_tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BLUE)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Primary call-to-action button (blue, purple on hover)
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_PURPLE,
        _ => color!(0x2563eb),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.15, 0.39, 0.92, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Secondary outlined button (purple border)
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => color!(0xc084fc),
        _ => ACCENT_PURPLE,
    };
    button::Style {
        background: None,
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 24.0.into(),
            width: 2.0,
            color: border_color,
        },
        ..Default::default()
    }
}

/// Round translucent icon button (lightbox controls, audio bar)
pub fn glass_icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgba(0.0, 0.0, 0.0, 0.7)
        }
        _ => Color::from_rgba(0.0, 0.0, 0.0, 0.5),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Navigation bar entry; the active section is highlighted
pub fn nav_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = if active {
            TEXT_PRIMARY
        } else {
            match status {
                button::Status::Hovered => TEXT_PRIMARY,
                _ => TEXT_SECONDARY,
            }
        };
        button::Style {
            background: None,
            text_color,
            ..Default::default()
        }
    }
}

/// Carousel dot indicator
pub fn dot_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: Some(Background::Color(if active {
            ACCENT_PURPLE
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.2)
        })),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bare photo tile button around a gallery image
pub fn tile_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
