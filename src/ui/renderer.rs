//! Pluggable row renderers
//!
//! Hosts customize how headers, items and index letters look by implementing
//! [`ListRenderer`]. [`DefaultRenderer`] draws plain text.
//!
//! Every header and item is exactly one [`Line`]: scroll offsets, paging and
//! the viewport size all count one screen row per list entry.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// How the rows of the alphabetic list are drawn
pub trait ListRenderer {
    /// Group header row for `letter`
    fn header(&self, letter: char) -> Line<'static>;

    /// Row for a single item
    fn item<'a>(&self, item: &'a str) -> Line<'a>;

    /// One cell of the index bar.
    /// The bar adds its own emphasis to the selected letter.
    fn index_cell(&self, letter: char) -> Line<'static>;
}

/// Plain text rendering: letter headers, padded items, bare index letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRenderer {
    pub header_style: Style,
    /// Columns of padding on each side of an item
    pub item_padding: u16,
}

impl DefaultRenderer {
    pub fn with_header_color(mut self, color: Color) -> Self {
        self.header_style = self.header_style.fg(color);
        self
    }
}

impl Default for DefaultRenderer {
    fn default() -> Self {
        Self {
            header_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            item_padding: 1,
        }
    }
}

impl ListRenderer for DefaultRenderer {
    fn header(&self, letter: char) -> Line<'static> {
        Line::from(Span::styled(letter.to_string(), self.header_style))
    }

    fn item<'a>(&self, item: &'a str) -> Line<'a> {
        let pad = " ".repeat(usize::from(self.item_padding));
        Line::from(vec![Span::raw(pad.clone()), Span::raw(item), Span::raw(pad)])
    }

    fn index_cell(&self, letter: char) -> Line<'static> {
        Line::from(letter.to_string())
    }
}
