//! Grouped list pane

use super::renderer::ListRenderer;
use crate::index::FlatRow;
use crate::state::AlphabeticListState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the flattened (header, items...) list starting at the state's scroll
/// offset. Returns the inner area holding the rows.
pub fn render_grouped_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    state: &AlphabeticListState,
    renderer: &dyn ListRenderer,
) -> Rect {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    if state.grouped().is_empty() {
        draw_empty_state(frame, area, block);
        return inner;
    }

    let items: Vec<ListItem> = state
        .grouped()
        .rows()
        .map(|row| match row {
            FlatRow::Header(letter) => ListItem::new(renderer.header(letter)),
            FlatRow::Item(item) => ListItem::new(renderer.item(item)),
        })
        .collect();

    render_list_at_offset(frame, area, List::new(items).block(block), state.scroll_offset());
    inner
}

/// Render a list whose first visible row is `offset`.
///
/// Nothing is selected, so ratatui keeps the offset as given instead of
/// scrolling a selection into view.
pub fn render_list_at_offset(frame: &mut Frame, area: Rect, list: List, offset: usize) {
    let mut list_state = ListState::default().with_offset(offset);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Draw empty state when there is nothing to list
fn draw_empty_state(frame: &mut Frame, area: Rect, block: Block) {
    let paragraph = Paragraph::new("No items.")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Alphabet;
    use crate::ui::renderer::DefaultRenderer;
    use ratatui::{backend::TestBackend, buffer::Buffer, text::Line, Terminal};

    /// Decorated headers, still one row each
    struct FramedHeaders;

    impl ListRenderer for FramedHeaders {
        fn header(&self, letter: char) -> Line<'static> {
            Line::from(format!("-- {letter} --"))
        }

        fn item<'a>(&self, item: &'a str) -> Line<'a> {
            Line::from(item)
        }

        fn index_cell(&self, letter: char) -> Line<'static> {
            Line::from(letter.to_string())
        }
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        let text: String = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        text.trim_matches(|c| c == '│' || c == ' ').to_string()
    }

    fn render(state: &AlphabeticListState) -> (Buffer, Rect) {
        render_with(state, &DefaultRenderer::default())
    }

    fn render_with(state: &AlphabeticListState, renderer: &dyn ListRenderer) -> (Buffer, Rect) {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|frame| {
                inner = render_grouped_list(
                    frame,
                    frame.area(),
                    "Names",
                    state,
                    renderer,
                );
            })
            .unwrap();
        (terminal.backend().buffer().clone(), inner)
    }

    fn example() -> AlphabeticListState {
        AlphabeticListState::from_items(["Bob", "Alice", "Anna", "Charlie"], Alphabet::LATIN)
            .unwrap()
    }

    #[test]
    fn test_renders_headers_then_items() {
        let (buffer, inner) = render(&example());

        assert_eq!(inner, Rect::new(1, 1, 18, 4));
        assert_eq!(row_text(&buffer, 1), "A");
        assert_eq!(row_text(&buffer, 2), "Alice");
        assert_eq!(row_text(&buffer, 3), "Anna");
        assert_eq!(row_text(&buffer, 4), "B");
    }

    #[test]
    fn test_renders_from_scroll_offset() {
        let mut state = example();
        state.scroll_to(3);
        let (buffer, _) = render(&state);

        assert_eq!(row_text(&buffer, 1), "B");
        assert_eq!(row_text(&buffer, 2), "Bob");
        assert_eq!(row_text(&buffer, 3), "C");
        assert_eq!(row_text(&buffer, 4), "Charlie");
    }

    #[test]
    fn test_empty_state() {
        let state = AlphabeticListState::from_items(Vec::<String>::new(), Alphabet::LATIN).unwrap();
        let (buffer, _) = render(&state);
        assert_eq!(row_text(&buffer, 1), "No items.");
    }

    #[test]
    fn test_paging_with_custom_renderer_shows_every_entry() {
        // A: 0-2, B: 3-5, C: 6-7, D: 8-9, E: 10-11
        let mut state = AlphabeticListState::from_items(
            ["Alice", "Anna", "Bob", "Bill", "Cathy", "Dave", "Eve"],
            Alphabet::LATIN,
        )
        .unwrap();

        let (buffer, inner) = render_with(&state, &FramedHeaders);
        state.set_viewport_rows(usize::from(inner.height));
        let first_page: Vec<String> = (1..=4).map(|y| row_text(&buffer, y)).collect();
        assert_eq!(first_page, vec!["-- A --", "Alice", "Anna", "-- B --"]);

        assert!(state.scroll_page_down());
        let (buffer, _) = render_with(&state, &FramedHeaders);
        let second_page: Vec<String> = (1..=4).map(|y| row_text(&buffer, y)).collect();
        assert_eq!(second_page, vec!["Bill", "Bob", "-- C --", "Cathy"]);
    }
}
