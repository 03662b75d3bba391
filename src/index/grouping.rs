//! Grouping items by their uppercased initial

use super::Alphabet;
use thiserror::Error;

/// Reasons an item cannot be placed under an index letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The item has no first character to group by
    #[error("item #{index} is empty and has no initial")]
    EmptyItem { index: usize },
    /// The item's uppercased initial is not one of the index letters
    #[error("item {item:?} starts with {initial:?}, which is not an index letter")]
    UnsupportedInitial { item: String, initial: char },
}

/// All items sharing one index letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    letter: char,
    items: Vec<String>,
}

impl Group {
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows this group occupies in the flattened list (header + items)
    pub fn row_count(&self) -> usize {
        1 + self.items.len()
    }
}

/// One row of the flattened list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatRow<'a> {
    Header(char),
    Item(&'a str),
}

/// Items partitioned by index letter, in alphabet order.
///
/// Items are sorted (natural, case-sensitive string order) before grouping,
/// so the order inside a group never depends on input order. Only letters
/// with at least one item get a group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedItems {
    groups: Vec<Group>,
}

/// Single-char uppercase of `c`.
///
/// Characters whose uppercase form is several chars ('ß' -> "SS") are left
/// as they are, so they never match an index letter by accident.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Uppercased initial of `item`, if it is one of the alphabet's letters
pub fn initial_of(item: &str, alphabet: &Alphabet) -> Option<char> {
    let initial = simple_uppercase(item.chars().next()?);
    alphabet.contains(initial).then_some(initial)
}

impl GroupedItems {
    /// Group `items` under the letters of `alphabet`.
    ///
    /// # Errors
    ///
    /// Fails on the first empty item or item whose initial is not a letter of
    /// `alphabet`. Callers that accept arbitrary input should filter with
    /// [`initial_of`] first.
    pub fn group<I, S>(items: I, alphabet: &Alphabet) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keyed: Vec<(usize, String)> = Vec::new();
        for (index, item) in items.into_iter().map(Into::into).enumerate() {
            let first = item.chars().next().ok_or(GroupError::EmptyItem { index })?;
            let initial = simple_uppercase(first);
            match alphabet.position(initial) {
                Some(slot) => keyed.push((slot, item)),
                None => return Err(GroupError::UnsupportedInitial { item, initial: first }),
            }
        }

        keyed.sort_by(|(_, a), (_, b)| a.cmp(b));

        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); alphabet.len()];
        for (slot, item) in keyed {
            buckets[slot].push(item);
        }

        let groups = buckets
            .into_iter()
            .enumerate()
            .filter(|(_, items)| !items.is_empty())
            .filter_map(|(slot, items)| {
                Some(Group {
                    letter: alphabet.get(slot)?,
                    items,
                })
            })
            .collect();

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group for `letter`, if any item starts with it
    pub fn get(&self, letter: char) -> Option<&Group> {
        self.groups.iter().find(|g| g.letter == letter)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.get(letter).is_some()
    }

    /// Letters that have a group, in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.groups.iter().map(Group::letter)
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Length of the flattened list (one header per group plus every item)
    pub fn flat_len(&self) -> usize {
        self.groups.iter().map(Group::row_count).sum()
    }

    /// Flattened rows in render order
    pub fn rows(&self) -> impl Iterator<Item = FlatRow<'_>> + '_ {
        self.groups.iter().flat_map(|group| {
            std::iter::once(FlatRow::Header(group.letter))
                .chain(group.items.iter().map(|item| FlatRow::Item(item.as_str())))
        })
    }

    /// Row at `flat_index`, if it exists
    pub fn row(&self, flat_index: usize) -> Option<FlatRow<'_>> {
        let mut start = 0;
        for group in &self.groups {
            let end = start + group.row_count();
            if flat_index < end {
                return Some(match flat_index - start {
                    0 => FlatRow::Header(group.letter),
                    offset => FlatRow::Item(&group.items[offset - 1]),
                });
            }
            start = end;
        }
        None
    }
}
