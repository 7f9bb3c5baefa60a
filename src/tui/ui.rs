//! Dashboard rendering with ratatui.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::auth::demo_users;
use crate::features::{FeatureId, FEATURES};
use crate::irrigation::WaterStatus;

use super::app::DashboardState;

/// Spinner frames for the header activity indicator.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the entire dashboard.
pub fn draw(f: &mut Frame, state: &DashboardState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Feature cards
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(f, main_chunks[0], state);
    draw_cards(f, main_chunks[1], state);
    draw_body(f, main_chunks[2], state);
    draw_footer(f, main_chunks[3], state);

    if state.dropdown_open {
        draw_dropdown(f, area, state);
    }
}

/// Draw the header bar: brand, spinner, session clock, login state.
fn draw_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];

    let elapsed = state.elapsed_secs();
    let mins = (elapsed / 60.0) as u32;
    let secs = (elapsed % 60.0) as u32;
    let time_str = format!("{:02}:{:02}", mins, secs);

    let who = match state.auth.current() {
        Some(user) => user.name.clone(),
        None => "not logged in".to_string(),
    };

    let spans = vec![
        Span::styled(
            " 🌾 kisan",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled("AI-Powered Farming Assistant", Style::default().fg(Color::White)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::styled(" ", Style::default()),
        Span::styled(time_str, Style::default().fg(Color::Blue)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(who, Style::default().fg(Color::Yellow)),
    ];

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .border_set(symbols::border::ROUNDED),
    );

    f.render_widget(header, area);
}

/// Draw the feature card strip as tabs.
fn draw_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let titles: Vec<Line> = FEATURES
        .iter()
        .map(|feature| {
            let style = if feature.id.is_live() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(feature.title, style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_feature)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)))
        .block(
            Block::default()
                .title(" Features ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .border_set(symbols::border::ROUNDED),
        );

    f.render_widget(tabs, area);
}

/// Draw the body for the active feature card.
fn draw_body(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.active_feature_id() == FeatureId::Iot {
        draw_irrigation(f, area, state);
    } else {
        draw_placeholder(f, area, state);
    }
}

/// Draw the placeholder body for a card without live behavior.
fn draw_placeholder(f: &mut Frame, area: Rect, state: &DashboardState) {
    let feature = &FEATURES[state.active_feature];

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            feature.description,
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            feature.id.placeholder(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let panel = Paragraph::new(lines).centered().block(
        Block::default()
            .title(format!(" {} ", feature.title))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .border_set(symbols::border::ROUNDED),
    );

    f.render_widget(panel, area);
}

/// Draw the irrigation panel: plot selector, water gauge, pump control.
fn draw_irrigation(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(" IoT System ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .border_set(symbols::border::ROUNDED);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Plot selector / rename input
            Constraint::Length(3), // Water gauge
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Pump line
            Constraint::Length(1), // Last irrigated
            Constraint::Min(1),    // Disclaimer
        ])
        .vertical_margin(1)
        .horizontal_margin(2)
        .split(inner);

    draw_plot_selector(f, chunks[0], state);
    draw_water_gauge(f, chunks[1], state);
    draw_status_line(f, chunks[2], state);
    draw_pump_line(f, chunks[3], state);
    draw_last_irrigated(f, chunks[4], state);

    let disclaimer = Paragraph::new(Span::styled(
        "(This is a demo. IoT controls and water level are mocked for now.)",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    ));
    f.render_widget(disclaimer, chunks[5]);
}

/// Draw the plot selector row, or the rename input while renaming.
fn draw_plot_selector(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.panel.is_renaming() {
        let spans = vec![
            Span::styled("Rename: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                state.panel.rename_buffer().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
            Span::styled(
                "  Enter save · Esc cancel",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        f.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    let mut spans = Vec::new();
    for (idx, plot) in state.panel.plots().iter().enumerate() {
        let style = if idx == state.panel.selected() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!(" [{}] {} ", idx + 1, plot.name), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(r to rename)", Style::default().fg(Color::DarkGray)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the water level gauge for the selected plot.
fn draw_water_gauge(f: &mut Frame, area: Rect, state: &DashboardState) {
    let plot = state.panel.selected_plot();
    let color = status_color(plot.status());

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Water Level ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .border_set(symbols::border::ROUNDED),
        )
        .gauge_style(Style::default().fg(color))
        .percent(plot.level_percent() as u16)
        .label(format!("{}%", plot.level_percent()));

    f.render_widget(gauge, area);
}

/// Draw the classification line under the gauge.
fn draw_status_line(f: &mut Frame, area: Rect, state: &DashboardState) {
    let status = state.panel.status();
    let color = status_color(status);
    let icon = match status {
        WaterStatus::Good => "✓",
        WaterStatus::NeedsWater => "⚠",
        WaterStatus::Dry => "⚠",
    };

    let spans = vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            status.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the pump state line.
fn draw_pump_line(f: &mut Frame, area: Rect, state: &DashboardState) {
    let plot = state.panel.selected_plot();
    let (label, color) = if plot.pump_on {
        ("Pump ON  — press p to turn off", Color::Green)
    } else {
        ("Pump OFF — press p to turn on", Color::Cyan)
    };

    let spans = vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::styled(label, Style::default().fg(color)),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the last-irrigated timestamp line.
fn draw_last_irrigated(f: &mut Frame, area: Rect, state: &DashboardState) {
    let plot = state.panel.selected_plot();
    let spans = vec![
        Span::styled("Last irrigated: ", Style::default().fg(Color::DarkGray)),
        Span::styled(plot.last_irrigated_label(), Style::default().fg(Color::White)),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the profile dropdown overlay in the top-right corner.
fn draw_dropdown(f: &mut Frame, area: Rect, state: &DashboardState) {
    let width = 36.min(area.width);
    let height = 8.min(area.height);
    let overlay = Rect {
        x: area.width.saturating_sub(width + 1),
        y: 1,
        width,
        height,
    };

    f.render_widget(Clear, overlay);

    let lines = match state.auth.current() {
        Some(user) => {
            let role = user
                .role
                .map(|r| r.label())
                .unwrap_or("Standard User");
            vec![
                Line::from(Span::styled(
                    user.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    user.mobile.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(role, Style::default().fg(Color::Green))),
                Line::from(""),
                Line::from(vec![
                    Span::styled("l", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::styled(" logout  ", Style::default().fg(Color::DarkGray)),
                    Span::styled("Esc", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::styled(" close", Style::default().fg(Color::DarkGray)),
                ]),
            ]
        }
        None => {
            let demo = &demo_users()[0];
            vec![
                Line::from(Span::styled(
                    "Not logged in",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Demo account: {}", demo.name),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("l", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::styled(" login  ", Style::default().fg(Color::DarkGray)),
                    Span::styled("Esc", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::styled(" close", Style::default().fg(Color::DarkGray)),
                ]),
            ]
        }
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Profile ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .border_set(symbols::border::ROUNDED),
    );

    f.render_widget(panel, overlay);
}

/// Draw the footer keymap.
fn draw_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut help = vec![
        Span::styled(" q", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(" quit  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(" feature  ", Style::default().fg(Color::DarkGray)),
        Span::styled("u", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(" profile", Style::default().fg(Color::DarkGray)),
    ];

    if state.active_feature_id() == FeatureId::Iot {
        help.extend([
            Span::styled("  1-3", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" plot  ", Style::default().fg(Color::DarkGray)),
            Span::styled("p", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" pump  ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" rename", Style::default().fg(Color::DarkGray)),
        ]);
    }

    let footer = Paragraph::new(Line::from(help)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .border_set(symbols::border::ROUNDED),
    );

    f.render_widget(footer, area);
}

/// Color for a water status.
fn status_color(status: WaterStatus) -> Color {
    match status {
        WaterStatus::Good => Color::Green,
        WaterStatus::NeedsWater => Color::Yellow,
        WaterStatus::Dry => Color::Red,
    }
}
