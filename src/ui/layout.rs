//! Screen layout (list pane, index bar, status bar)

use crate::state::AlphabeticListState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Narrowest the index bar gets
pub const MIN_INDEX_BAR_WIDTH: u16 = 3;

/// Split the screen into (list, index bar, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(90),          // List
            Constraint::Min(MIN_INDEX_BAR_WIDTH), // Index bar
        ])
        .split(main_chunks[0]);

    (content_chunks[0], content_chunks[1], main_chunks[1])
}

/// Draw the status bar: selected letter, counts and key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AlphabeticListState) {
    let grouped = state.grouped();
    let selected = state
        .selected()
        .map(String::from)
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled(
            format!(" {selected} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(format!(
            " {} items in {} groups ",
            grouped.item_count(),
            grouped.groups().len()
        )),
        Span::styled(
            "| type a letter to jump, drag the index to scrub, Esc to quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
