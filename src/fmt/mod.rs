//! Line formatting: the header flags and the renderer that turns a level and
//! message arguments into one newline-terminated line.

mod flags;
mod line;

pub use flags::{Flags, ParseFlagsError};
pub use line::LineFormat;
