//! Ratatui presentation of the alphabetic list
//!
//! Draws the grouped list next to the index bar and reports where things
//! landed so mouse input can be mapped back onto them.

mod index_bar;
mod layout;
mod list;
mod renderer;

pub use index_bar::{cell_rows, effective_extent, letter_stack_area, render_index_bar};
pub use layout::{create_layout, draw_status_bar};
pub use list::{render_grouped_list, render_list_at_offset};
pub use renderer::{DefaultRenderer, ListRenderer};

use crate::index::IndexGeometry;
use crate::state::{AlphabeticListState, ListAreas};
use ratatui::Frame;

/// Static presentation settings for one list
pub struct ListView<'a> {
    /// Title shown on the list border
    pub title: &'a str,
    pub renderer: &'a dyn ListRenderer,
    /// Index cell geometry, in terminal rows
    pub geometry: IndexGeometry,
}

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AlphabeticListState, view: &ListView<'_>) -> ListAreas {
    let (list_area, bar_area, status_area) = create_layout(frame.area());

    let list = render_grouped_list(frame, list_area, view.title, state, view.renderer);
    let index_letters = render_index_bar(
        frame,
        bar_area,
        state.alphabet(),
        state.selected(),
        view.renderer,
        &view.geometry,
    );
    draw_status_bar(frame, status_area, state);

    ListAreas {
        list,
        index_bar: bar_area,
        index_letters,
    }
}
