//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching feed logic.
//!
//! ## For contributors
//!
//! * The layout is a three-row split: the scrollable photo list, a detail
//!   pane for the selected photo, and a one-line status bar.
//! * An error notice, when present, is drawn last as a centred popup.
//! * Images are never decoded; the detail pane shows the image URL.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [list_area, detail_area, status_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(6),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_photo_list(app, frame, list_area);
    draw_detail(app, frame, detail_area);
    draw_status_bar(app, frame, status_area);

    if let Some(message) = &app.error {
        draw_error_notice(message, frame);
    }
}

/// Render the scrollable photo list.
fn draw_photo_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .feed
        .records()
        .iter()
        .map(|record| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<13}", record.display_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(record.display_title(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", record.display_attribution()),
                    Style::default().fg(Color::Cyan),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(" NASA Photos ")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render description and image URL of the selected photo.
fn draw_detail(app: &App, frame: &mut Frame, area: Rect) {
    let lines = match app.selected_record() {
        Some(record) => vec![
            Line::from(Span::styled(
                record.image_url.as_str(),
                Style::default().fg(Color::Blue),
            )),
            Line::from(record.description.as_deref().unwrap_or("")),
        ],
        None => vec![Line::from(Span::styled(
            "No photo selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let detail = Paragraph::new(lines)
        .block(Block::default().title(" Details ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} photos", app.records().len()),
            Style::default().fg(Color::Green),
        ),
    ];
    if app.is_loading() {
        spans.push(Span::styled("  loading…", Style::default().fg(Color::Magenta)));
    }
    spans.push(Span::raw("  q: quit  ↑/↓: scroll  r: refresh"));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the dismissible error popup.
fn draw_error_notice(message: &str, frame: &mut Frame) {
    let [area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);

    let notice = Paragraph::new(vec![
        Line::from(message),
        Line::from(Span::styled(
            "Enter: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .title(" Error Loading Photos ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(notice, area);
}
