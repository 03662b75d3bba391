//! Presentation state for the alphabetic list

mod list_state;
mod scroll;
mod ui_area;

pub use list_state::*;
pub use scroll::*;
pub use ui_area::*;
