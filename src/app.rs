//! Application state and input handling

use crate::config::ListConfig;
use alphabetic_scroll_list::{
    letter_at,
    ui::{self, DefaultRenderer, ListView},
    AlphabeticListState, Alphabet, IndexGeometry, ListAreas, ScrollScheduler,
};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::watch;

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: isize = 3;

/// List title shown on the border
const TITLE: &str = "Contacts";

/// Main application struct
pub struct App {
    /// Grouped items, scroll offset and highlighted letter
    pub list: AlphabeticListState,
    /// Where the list and index bar were drawn last frame
    pub areas: ListAreas,
    renderer: DefaultRenderer,
    geometry: IndexGeometry,
    /// Scroll requests waiting for the next tick
    scroll: ScrollScheduler,
    /// Observes highlight changes published by the list
    selection: watch::Receiver<Option<char>>,
    /// Whether a drag started on the index bar
    scrubbing: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(items: Vec<String>, config: &ListConfig) -> Result<Self> {
        let list = AlphabeticListState::from_items(items, Alphabet::LATIN)
            .context("grouping list items")?;
        let selection = list.subscribe();

        let mut renderer = DefaultRenderer::default();
        if let Some(color) = config.header_color() {
            renderer = renderer.with_header_color(color);
        }

        tracing::info!(
            "Listing {} items in {} groups",
            list.grouped().item_count(),
            list.grouped().groups().len()
        );

        Ok(Self {
            list,
            areas: ListAreas::default(),
            renderer,
            geometry: config.index_geometry(),
            scroll: ScrollScheduler::new(),
            selection,
            scrubbing: false,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Presentation settings for drawing
    pub fn view(&self) -> ListView<'_> {
        ListView {
            title: TITLE,
            renderer: &self.renderer,
            geometry: self.geometry,
        }
    }

    /// Remember where the last draw put things
    pub fn record_areas(&mut self, areas: ListAreas) {
        self.areas = areas;
        self.list.set_viewport_rows(areas.list_rows());
    }

    /// Apply pending scroll requests and pick up highlight changes.
    /// Called once per loop iteration, before drawing.
    pub fn tick(&mut self) {
        self.scroll.apply_pending(&mut self.list);

        if self.selection.has_changed().unwrap_or(false) {
            let letter = *self.selection.borrow_and_update();
            tracing::debug!("Index highlight changed to {letter:?}");
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Up => {
                self.list.scroll_by(-1);
            }
            KeyCode::Down => {
                self.list.scroll_by(1);
            }
            KeyCode::PageUp => {
                self.list.scroll_page_up();
            }
            KeyCode::PageDown => {
                self.list.scroll_page_down();
            }
            KeyCode::Home => {
                self.list.scroll_to_top();
            }
            KeyCode::End => {
                self.list.scroll_to_bottom();
            }
            KeyCode::Char(c) => {
                let letter = c.to_ascii_uppercase();
                if self.list.alphabet().contains(letter) {
                    self.select_letter(letter);
                }
            }
            _ => {}
        }
    }

    /// Handle mouse input: scrubbing on the index bar, wheel on the list
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.areas.in_index_bar(mouse.column, mouse.row) {
                    self.scrubbing = true;
                    self.scrub(mouse.row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Keep scrubbing even when the pointer leaves the bar; the
                // mapper clamps to the first or last letter.
                if self.scrubbing {
                    self.scrub(mouse.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.scrubbing = false;
            }
            MouseEventKind::ScrollDown => {
                if self.areas.in_list(mouse.column, mouse.row) {
                    self.list.scroll_by(WHEEL_ROWS);
                }
            }
            MouseEventKind::ScrollUp => {
                if self.areas.in_list(mouse.column, mouse.row) {
                    self.list.scroll_by(-WHEEL_ROWS);
                }
            }
            _ => {}
        }
    }

    fn scrub(&mut self, row: u16) {
        let offset = self.areas.index_offset(row);
        let extent = ui::effective_extent(&self.geometry);
        let letter = letter_at(offset, extent, self.list.alphabet());
        self.select_letter(letter);
    }

    fn select_letter(&mut self, letter: char) {
        if let Some(request) = self.list.select_letter(letter) {
            self.scroll.schedule(request);
        }
    }
}
