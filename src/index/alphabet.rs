//! Fixed index alphabet

/// Number of letters in the index bar
pub const ALPHABET_LEN: usize = 26;

/// Ordered set of index letters shown on the index bar.
///
/// The alphabet is immutable configuration handed to the grouping engine and
/// the mapper. Only [`Alphabet::LATIN`] exists today, but nothing below assumes
/// the letters are contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    letters: [char; ALPHABET_LEN],
}

impl Alphabet {
    /// Uppercase Latin letters 'A' through 'Z'
    pub const LATIN: Alphabet = Alphabet {
        letters: [
            'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
            'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
        ],
    };

    pub const fn len(&self) -> usize {
        ALPHABET_LEN
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Letter at `slot`, if the slot exists
    pub fn get(&self, slot: usize) -> Option<char> {
        self.letters.get(slot).copied()
    }

    /// Letter at `slot`, clamped into the valid slot range
    pub fn clamped(&self, slot: i64) -> char {
        let last = (ALPHABET_LEN - 1) as i64;
        self.letters[slot.clamp(0, last) as usize]
    }

    /// Slot of `letter` on the index bar
    pub fn position(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&c| c == letter)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.position(letter).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LATIN
    }
}
