//! Alphabetically indexed scrolling list
//!
//! Groups strings by their uppercased initial, renders them as a scrollable
//! list of lettered sections and puts an A-Z index bar beside it that jumps
//! or scrubs to a letter.
//!
//! - [`index`] holds the pure logic: grouping, pointer-to-letter mapping and
//!   letter/row conversions. It has no UI dependencies.
//! - [`state`] holds the mutable pieces the UI owns: scroll offset, selected
//!   letter and deferred scroll requests.
//! - [`ui`] draws everything with ratatui.

pub mod index;
pub mod state;
pub mod ui;

pub use index::{
    flat_index_of, group_at, letter_at, Alphabet, FlatRow, Group, GroupError, GroupedItems,
    IndexGeometry,
};
pub use state::{AlphabeticListState, ListAreas, ScrollRequest, ScrollScheduler, Scrollable};
