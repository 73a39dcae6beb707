//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;
use crate::controller::{MediaBackend, PageRow, PageView};

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter", "play selected / load more"),
    ("space/p", "play/pause"),
    ("l", "next track"),
    ("m", "load more"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

fn status_text<B: MediaBackend>(app: &App<B>, view: &PageView) -> String {
    let controller = &app.controller;
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!("[{}]", view.button.label()));

    match controller.current_track() {
        Some(track) => parts.push(format!("Song: {}", track.name)),
        None => parts.push("Nothing selected".to_string()),
    }

    parts.push(format!(
        "Tracks: {}/{}",
        view.rows.len(),
        controller.playlist().len()
    ));
    parts.push(format!("Source: {}", controller.source_description()));

    parts.join(" • ")
}

fn row_item(row: &PageRow, name_width: usize) -> ListItem<'static> {
    let marker = if row.now_playing { "♪ " } else { "  " };
    let style = if row.now_playing {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("{:<name_width$}", row.name), style),
        Span::raw("  "),
        Span::styled(row.time.clone(), Style::default().add_modifier(Modifier::DIM)),
    ]))
}

fn draw_list<B: MediaBackend>(frame: &mut Frame, app: &App<B>, view: &PageView, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" tracks ");

    if view.rows.is_empty() {
        let empty = Paragraph::new("No tracks")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let name_width = view
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut items: Vec<ListItem> = view.rows.iter().map(|r| row_item(r, name_width)).collect();
    if view.load_more_visible {
        items.push(ListItem::new(Line::from(Span::styled(
            "  [ load more ]",
            Style::default().add_modifier(Modifier::ITALIC),
        ))));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<B: MediaBackend>(frame: &mut Frame, app: &App<B>, ui_settings: &UiSettings) {
    let view = app.controller.render();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" trackfeed ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(app, &view))
        .block(Block::bordered().padding(left_pad()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    draw_list(frame, app, &view, chunks[2]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
