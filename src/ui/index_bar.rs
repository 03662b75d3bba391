//! Vertical A-Z index bar

use super::renderer::ListRenderer;
use crate::index::{Alphabet, IndexGeometry};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Rows one index cell occupies on screen (at least 1)
pub fn cell_rows(geometry: &IndexGeometry) -> u16 {
    geometry.cell_extent().round().clamp(1.0, f32::from(u16::MAX)) as u16
}

/// Cell extent as drawn, in rows. Pointer mapping must use this rather than
/// the raw geometry so a click lands on the letter shown under it.
pub fn effective_extent(geometry: &IndexGeometry) -> f32 {
    f32::from(cell_rows(geometry))
}

/// Area of the letter stack, vertically centered in `bar` and cut to fit
pub fn letter_stack_area(bar: Rect, letters: usize, cell_rows: u16) -> Rect {
    let wanted = u16::try_from(letters)
        .unwrap_or(u16::MAX)
        .saturating_mul(cell_rows);
    let height = wanted.min(bar.height);
    let y = bar.y + (bar.height - height) / 2;
    Rect::new(bar.x, y, bar.width, height)
}

/// Style laid over the selected letter
fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Draw the index letters into `bar`. Returns the letter stack area, which
/// pointer offsets are measured from.
pub fn render_index_bar(
    frame: &mut Frame,
    bar: Rect,
    alphabet: &Alphabet,
    selected: Option<char>,
    renderer: &dyn ListRenderer,
    geometry: &IndexGeometry,
) -> Rect {
    let rows = cell_rows(geometry);
    let stack = letter_stack_area(bar, alphabet.len(), rows);

    let mut y = stack.y;
    for letter in alphabet.iter() {
        if y >= stack.bottom() {
            break;
        }

        let mut line = renderer.index_cell(letter);
        if selected == Some(letter) {
            line = line.patch_style(selected_style());
        }

        let cell = Rect::new(stack.x, y, stack.width, 1);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), cell);
        y = y.saturating_add(rows);
    }

    stack
}
