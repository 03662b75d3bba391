//! Conversions between index letters and flat list positions
//!
//! The flattened list gives every group one header row followed by one row
//! per item. `flat_index_of` resolves a letter to its header row (scroll
//! target) and `group_at` goes the other way, finding the group a visible
//! row belongs to (selection sync).

use super::GroupedItems;

/// Flat index of the header row for `letter`.
///
/// Returns `None` when no item starts with `letter`; callers treat that as
/// "nothing to scroll to".
pub fn flat_index_of(letter: char, grouped: &GroupedItems) -> Option<usize> {
    let mut start = 0;
    for group in grouped.groups() {
        if group.letter() == letter {
            return Some(start);
        }
        start += group.row_count();
    }
    None
}

/// Letter of the group containing `flat_index`.
///
/// Returns `None` past the end of the flattened list; callers keep their
/// previous selection in that case.
pub fn group_at(flat_index: usize, grouped: &GroupedItems) -> Option<char> {
    let mut start = 0;
    grouped
        .groups()
        .iter()
        .find(|group| {
            let end = start + group.row_count();
            let within = (start..end).contains(&flat_index);
            start = end;
            within
        })
        .map(|group| group.letter())
}
