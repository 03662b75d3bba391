//! Toolkit-agnostic core of the alphabetic list
//!
//! Everything in here is pure: grouping items by initial, mapping index bar
//! pointer offsets to letters, and converting between letters and flat
//! (header + item) row positions. The presentation layer owns all mutable
//! state and calls into these functions.

mod alphabet;
mod grouping;
mod mapper;
mod position;

pub use alphabet::*;
pub use grouping::*;
pub use mapper::*;
pub use position::*;
