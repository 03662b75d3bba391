//! List contents for the demo

use alphabetic_scroll_list::{index::initial_of, Alphabet};
use anyhow::{Context, Result};
use std::path::Path;

/// Shown when no items file is configured
pub const SAMPLE_NAMES: &[&str] = &[
    "Alice", "Annie", "Anna", "Bob", "Bill", "Charlie", "Cathy", "David", "Eve", "Frank",
    "Francis", "Grace", "Hannah", "Isaac", "Jack", "Jill", "James", "Jenny", "Katie", "Liam",
    "Mia", "Nathan", "Olivia", "Peter", "Quinn", "Rachel", "Sam", "Tina", "Ulysses", "Victoria",
    "Wendy", "Xander", "Yvonne", "Zach",
];

/// Read newline separated items, trimming whitespace and skipping blank lines
pub async fn load_items(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading items from {}", path.display()))?;
    Ok(parse_items(&content))
}

fn parse_items(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Drop items that cannot be filed under an index letter
pub fn indexable(items: Vec<String>, alphabet: &Alphabet) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| {
            let keep = initial_of(item, alphabet).is_some();
            if !keep {
                tracing::warn!("Skipping {item:?}: no index letter for its initial");
            }
            keep
        })
        .collect()
}
