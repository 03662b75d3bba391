//! Mutable state behind the alphabetic list widget

use super::scroll::{ScrollRequest, Scrollable};
use crate::index::{flat_index_of, group_at, Alphabet, GroupError, GroupedItems};
use tokio::sync::watch;

/// State owned by the presentation layer: the grouped items, the first
/// visible flat row and the highlighted index letter.
///
/// Scroll changes flow into the selection (the highlighted letter follows the
/// group at the top of the list). Selection flows back into scrolling only
/// through [`AlphabeticListState::select_letter`], which hands back a request
/// instead of scrolling directly.
#[derive(Debug)]
pub struct AlphabeticListState {
    alphabet: Alphabet,
    grouped: GroupedItems,
    /// First visible flat row
    scroll_offset: usize,
    /// Rows visible in the list viewport (0 until the first draw)
    viewport_rows: usize,
    /// Highlighted index letter, published to subscribers
    selection: watch::Sender<Option<char>>,
}

impl AlphabeticListState {
    pub fn new(grouped: GroupedItems, alphabet: Alphabet) -> Self {
        let (selection, _) = watch::channel(None);
        let mut state = Self {
            alphabet,
            grouped,
            scroll_offset: 0,
            viewport_rows: 0,
            selection,
        };
        state.sync_selection();
        state
    }

    /// Group `items` and build state around them
    pub fn from_items<I, S>(items: I, alphabet: Alphabet) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let grouped = GroupedItems::group(items, &alphabet)?;
        Ok(Self::new(grouped, alphabet))
    }

    /// Replace the list contents, keeping the scroll offset where possible
    pub fn set_items<I, S>(&mut self, items: I) -> Result<(), GroupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grouped = GroupedItems::group(items, &self.alphabet)?;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        self.sync_selection();
        Ok(())
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn grouped(&self) -> &GroupedItems {
        &self.grouped
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Currently highlighted index letter
    pub fn selected(&self) -> Option<char> {
        *self.selection.borrow()
    }

    /// Receive every change of the highlighted letter
    pub fn subscribe(&self) -> watch::Receiver<Option<char>> {
        self.selection.subscribe()
    }

    /// Largest offset that still fills the viewport
    pub fn max_scroll_offset(&self) -> usize {
        let len = self.grouped.flat_len();
        if self.viewport_rows == 0 {
            len.saturating_sub(1)
        } else {
            len.saturating_sub(self.viewport_rows)
        }
    }

    /// Record the viewport height after a draw or resize
    pub fn set_viewport_rows(&mut self, rows: usize) {
        if self.viewport_rows != rows {
            self.viewport_rows = rows;
            self.scroll_to(self.scroll_offset);
        }
    }

    /// Move the first visible row to `index` (clamped).
    /// Returns true if the offset changed.
    pub fn scroll_to(&mut self, index: usize) -> bool {
        let clamped = index.min(self.max_scroll_offset());
        if clamped == self.scroll_offset {
            return false;
        }
        self.scroll_offset = clamped;
        self.sync_selection();
        true
    }

    /// Scroll relative to the current offset
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.scroll_to(self.scroll_offset.saturating_add_signed(delta))
    }

    pub fn scroll_page_down(&mut self) -> bool {
        self.scroll_by(self.page_rows() as isize)
    }

    pub fn scroll_page_up(&mut self) -> bool {
        self.scroll_by(-(self.page_rows() as isize))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_to(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_to(self.max_scroll_offset())
    }

    /// Highlight `letter` and return where the list should scroll.
    ///
    /// Letters without items are still highlighted but produce no request.
    pub fn select_letter(&mut self, letter: char) -> Option<ScrollRequest> {
        self.set_selected(Some(letter));
        let request = flat_index_of(letter, &self.grouped).map(ScrollRequest::to);
        if request.is_none() {
            tracing::debug!("No items under '{letter}', not scrolling");
        }
        request
    }

    fn page_rows(&self) -> usize {
        self.viewport_rows.max(1)
    }

    fn set_selected(&mut self, letter: Option<char>) {
        let changed = self.selection.send_if_modified(|current| {
            if *current == letter {
                return false;
            }
            *current = letter;
            true
        });
        if changed {
            tracing::debug!("Selected letter is now {letter:?}");
        }
    }

    /// Follow the group at the top of the list; out of range leaves the
    /// selection as it was.
    fn sync_selection(&mut self) {
        if let Some(letter) = group_at(self.scroll_offset, &self.grouped) {
            self.set_selected(Some(letter));
        }
    }
}

impl Scrollable for AlphabeticListState {
    fn scroll_to_item(&mut self, index: usize) {
        self.scroll_to(index);
    }
}
