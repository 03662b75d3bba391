//! Rendered screen areas for mouse hit-testing
//!
//! The draw pass records where the list and the index bar ended up; mouse
//! handling reads them back to decide what a click or drag refers to.

use ratatui::layout::{Position, Rect};

/// Screen rectangles from the most recent draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListAreas {
    /// Rows of the grouped list (inside any border)
    pub list: Rect,
    /// Whole index bar column
    pub index_bar: Rect,
    /// The stacked letters inside the index bar
    pub index_letters: Rect,
}

impl ListAreas {
    /// Check if a mouse position is over the list rows
    #[inline]
    pub fn in_list(&self, column: u16, row: u16) -> bool {
        self.list.contains(Position::new(column, row))
    }

    /// Check if a mouse position is over the index bar column
    #[inline]
    pub fn in_index_bar(&self, column: u16, row: u16) -> bool {
        self.index_bar.contains(Position::new(column, row))
    }

    /// Vertical offset of `row` from the top of the letter stack, in rows.
    /// Negative above the first letter.
    #[inline]
    pub fn index_offset(&self, row: u16) -> f32 {
        f32::from(row) - f32::from(self.index_letters.y)
    }

    /// Rows available to the list viewport
    #[inline]
    pub fn list_rows(&self) -> usize {
        usize::from(self.list.height)
    }
}
