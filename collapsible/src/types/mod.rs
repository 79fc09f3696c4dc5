mod enums;
mod style;

pub use enums::*;
pub use style::*;
