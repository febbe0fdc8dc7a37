//! Wormhole journey section
//! The starfield canvas fills the page; the control panel fades away for
//! the duration of the jump and a travel report takes its place afterwards

use iced::widget::{Space, button, canvas, column, container, row, stack, text};
use iced::{Alignment, Element, Fill, FillPortion};

use crate::app::Message;
use crate::features::journey::{Journey, JourneyPhase, MAX_SPEED};
use crate::features::report::TravelReport;
use crate::ui::components::cards;
use crate::ui::effects::{Starfield, StarfieldScene};
use crate::ui::theme;

pub fn view<'a>(journey: &'a Journey, starfield: &'a Starfield) -> Element<'a, Message> {
    let scene = canvas(StarfieldScene {
        field: starfield,
        speed: journey.speed,
    })
    .width(Fill)
    .height(Fill);

    let overlay: Element<'a, Message> = match &journey.phase {
        JourneyPhase::Idle => idle_panel(journey.speed),
        JourneyPhase::Accelerating | JourneyPhase::Settling => in_flight(journey.speed),
        JourneyPhase::Report(report) => report_panel(report),
    };

    stack![scene, overlay].width(Fill).height(Fill).into()
}

fn idle_panel<'a>(speed: f32) -> Element<'a, Message> {
    let header = column![
        cards::section_title("Viaje por el Agujero de Gusano"),
        Space::new().height(8),
        cards::section_subtitle("Experimenta el viaje interestelar a través del agujero de gusano"),
    ];

    let launch = button(
        text("Iniciar Viaje").size(20).color(theme::TEXT_PRIMARY),
    )
    .style(theme::primary_button)
    .padding([16, 32])
    .on_press(Message::JumpRequested);

    let status = row![
        container(
            column![
                text("Velocidad Actual").size(18).color(theme::TEXT_PRIMARY),
                Space::new().height(12),
                speed_bar(speed),
            ],
        )
        .style(theme::blue_card)
        .padding(24)
        .width(Fill),
        Space::new().width(24),
        container(
            column![
                text("Estado del Viaje").size(18).color(theme::TEXT_PRIMARY),
                Space::new().height(12),
                text("Listo para iniciar el viaje interestelar")
                    .size(15)
                    .color(theme::TEXT_SECONDARY),
            ],
        )
        .style(theme::blue_card)
        .padding(24)
        .width(Fill),
    ];

    let panel = container(
        column![
            header,
            Space::new().height(32),
            container(launch).width(Fill).align_x(Alignment::Center),
            Space::new().height(32),
            status,
        ],
    )
    .style(theme::glass_panel)
    .padding(32)
    .max_width(860);

    container(panel)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding(24)
        .into()
}

/// While jumping, only a small speed readout floats over the starfield
fn in_flight<'a>(speed: f32) -> Element<'a, Message> {
    let readout = container(
        column![
            text(format!("{speed:.1}x")).size(32).color(theme::PLANET_BLUE),
            Space::new().height(8),
            speed_bar(speed),
        ]
        .align_x(Alignment::Center)
        .width(260),
    )
    .style(theme::glass_panel)
    .padding(20);

    container(readout)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(48)
        .into()
}

fn speed_bar<'a>(speed: f32) -> Element<'a, Message> {
    let filled = ((speed / MAX_SPEED) * 100.0).round().clamp(1.0, 99.0) as u16;

    row![
        container(Space::new().height(8))
            .style(|_theme: &iced::Theme| container::Style {
                background: Some(iced::Background::Color(theme::PLANET_BLUE)),
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .width(FillPortion(filled)),
        container(Space::new().height(8))
            .style(|_theme: &iced::Theme| container::Style {
                background: Some(iced::Background::Color(iced::Color::from_rgba(
                    1.0, 1.0, 1.0, 0.15
                ))),
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .width(FillPortion(100 - filled)),
        Space::new().width(12),
        text(format!("{speed:.1}x")).size(13).color(theme::TEXT_SECONDARY),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn report_panel<'a>(report: &'a TravelReport) -> Element<'a, Message> {
    let speed_data = container(
        column![
            text("Datos de Velocidad").size(18).color(theme::ACCENT_BLUE),
            Space::new().height(12),
            stat_line("Velocidad Máxima", report.speed_display()),
            stat_line("Duración", report.duration_display()),
            stat_line("Distancia", format!("{} años luz", report.distance_display())),
        ]
        .spacing(8),
    )
    .style(theme::blue_card)
    .padding(24)
    .width(Fill);

    let time_data = container(
        column![
            text("Efectos Temporales").size(18).color(theme::ACCENT_BLUE),
            Space::new().height(12),
            stat_line("Factor de Dilatación", report.distortion_display()),
            stat_line("Energía Consumida", format!("{}%", report.energy)),
        ]
        .spacing(8),
    )
    .style(theme::blue_card)
    .padding(24)
    .width(Fill);

    let mut anomaly_lines = column![].spacing(8);
    for anomaly in &report.anomalies {
        anomaly_lines = anomaly_lines.push(
            row![
                container(Space::new().width(6).height(6)).style(|_theme: &iced::Theme| {
                    container::Style {
                        background: Some(iced::Background::Color(theme::ACCENT_PURPLE)),
                        border: iced::Border {
                            radius: 3.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                }),
                Space::new().width(10),
                text(*anomaly).size(15).color(theme::TEXT_SECONDARY),
            ]
            .align_y(Alignment::Center),
        );
    }
    let anomalies = container(
        column![
            text("Anomalías Detectadas").size(18).color(theme::ACCENT_BLUE),
            Space::new().height(12),
            anomaly_lines,
        ],
    )
    .style(theme::blue_card)
    .padding(24)
    .width(Fill);

    let panel = container(
        column![
            container(
                text("Reporte de Viaje Interestelar")
                    .size(28)
                    .color(theme::TEXT_PRIMARY)
            )
            .width(Fill)
            .align_x(Alignment::Center),
            Space::new().height(24),
            row![speed_data, Space::new().width(24), time_data],
            Space::new().height(24),
            anomalies,
            Space::new().height(24),
            container(
                button(
                    text("Realizar Otro Viaje")
                        .size(17)
                        .color(theme::TEXT_PRIMARY)
                )
                .style(theme::primary_button)
                .padding([14, 32])
                .on_press(Message::ReportDismissed)
            )
            .width(Fill)
            .align_x(Alignment::Center),
        ],
    )
    .style(theme::glass_panel)
    .padding(32)
    .max_width(860);

    container(panel)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding(24)
        .into()
}

fn stat_line<'a>(label: &'static str, value: String) -> Element<'a, Message> {
    row![
        text(format!("{label}: ")).size(15).color(theme::TEXT_SECONDARY),
        text(value).size(15).color(theme::TEXT_PRIMARY),
    ]
    .into()
}
