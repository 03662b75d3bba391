//! Index bar pointer mapping

use super::Alphabet;

/// Default index cell size in layout units
pub const DEFAULT_CELL_SIZE: f32 = 20.0;
/// Default index cell padding in layout units
pub const DEFAULT_CELL_PADDING: f32 = 2.0;

/// Size of one index bar cell.
///
/// Every letter gets the same extent (`cell_size + cell_padding`), regardless
/// of how tall the bar actually is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexGeometry {
    pub cell_size: f32,
    pub cell_padding: f32,
}

impl IndexGeometry {
    pub const fn new(cell_size: f32, cell_padding: f32) -> Self {
        Self {
            cell_size,
            cell_padding,
        }
    }

    /// Distance between the tops of two neighbouring cells
    pub fn cell_extent(&self) -> f32 {
        self.cell_size + self.cell_padding
    }

    /// Letter under a pointer `pointer_offset` units below the top of the bar
    pub fn letter_at(&self, pointer_offset: f32, alphabet: &Alphabet) -> char {
        letter_at(pointer_offset, self.cell_extent(), alphabet)
    }
}

impl Default for IndexGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE, DEFAULT_CELL_PADDING)
    }
}

/// Raw slot index under `pointer_offset`, before clamping.
///
/// NaN maps to slot 0; infinities saturate.
pub fn slot_at(pointer_offset: f32, cell_extent: f32) -> i64 {
    // `as` saturates on overflow and maps NaN to 0.
    (pointer_offset / cell_extent).floor() as i64
}

/// Letter under `pointer_offset`, clamped to the first and last letters.
///
/// Total over every `f32`: offsets above the bar select the first letter and
/// offsets past the last cell select the last one.
pub fn letter_at(pointer_offset: f32, cell_extent: f32, alphabet: &Alphabet) -> char {
    alphabet.clamped(slot_at(pointer_offset, cell_extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: f32 = 22.0;

    #[test]
    fn test_default_geometry() {
        let geometry = IndexGeometry::default();
        assert_eq!(geometry.cell_size, 20.0);
        assert_eq!(geometry.cell_padding, 2.0);
        assert_eq!(geometry.cell_extent(), 22.0);
    }

    #[test]
    fn test_top_of_bar_is_first_letter() {
        assert_eq!(letter_at(0.0, EXTENT, &Alphabet::LATIN), 'A');
    }

    #[test]
    fn test_each_cell_maps_to_its_letter() {
        for (slot, letter) in Alphabet::LATIN.iter().enumerate() {
            let top = slot as f32 * EXTENT;
            assert_eq!(letter_at(top, EXTENT, &Alphabet::LATIN), letter);
            assert_eq!(letter_at(top + EXTENT - 0.5, EXTENT, &Alphabet::LATIN), letter);
        }
    }

    #[test]
    fn test_last_cell_and_beyond_is_last_letter() {
        assert_eq!(letter_at(25.0 * EXTENT + 0.1, EXTENT, &Alphabet::LATIN), 'Z');
        assert_eq!(letter_at(26.0 * EXTENT, EXTENT, &Alphabet::LATIN), 'Z');
        assert_eq!(letter_at(1.0e9, EXTENT, &Alphabet::LATIN), 'Z');
        assert_eq!(letter_at(f32::INFINITY, EXTENT, &Alphabet::LATIN), 'Z');
    }

    #[test]
    fn test_above_bar_is_first_letter() {
        assert_eq!(letter_at(-0.5, EXTENT, &Alphabet::LATIN), 'A');
        assert_eq!(letter_at(-1.0e9, EXTENT, &Alphabet::LATIN), 'A');
        assert_eq!(letter_at(f32::NEG_INFINITY, EXTENT, &Alphabet::LATIN), 'A');
    }

    #[test]
    fn test_nan_and_degenerate_extent_still_yield_letters() {
        assert_eq!(letter_at(f32::NAN, EXTENT, &Alphabet::LATIN), 'A');
        assert_eq!(letter_at(5.0, 0.0, &Alphabet::LATIN), 'Z');
        assert_eq!(letter_at(0.0, 0.0, &Alphabet::LATIN), 'A');
        assert_eq!(letter_at(5.0, -1.0, &Alphabet::LATIN), 'A');
    }

    #[test]
    fn test_slot_at_floors() {
        assert_eq!(slot_at(0.0, 1.0), 0);
        assert_eq!(slot_at(2.9, 1.0), 2);
        assert_eq!(slot_at(-0.1, 1.0), -1);
    }

    #[test]
    fn test_geometry_letter_at_uses_extent() {
        let geometry = IndexGeometry::new(1.0, 0.0);
        assert_eq!(geometry.letter_at(0.0, &Alphabet::LATIN), 'A');
        assert_eq!(geometry.letter_at(2.0, &Alphabet::LATIN), 'C');

        let spaced = IndexGeometry::new(1.0, 1.0);
        assert_eq!(spaced.letter_at(3.0, &Alphabet::LATIN), 'B');
    }
}
