//! Round rules: win lines and draw detection.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_win};
