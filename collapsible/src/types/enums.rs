use std::fmt;
use std::str::FromStr;

use crate::error::ParseOverflowError;

/// Layout height of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    /// Size to content. Cannot be animated from or to.
    Auto,
    /// A concrete measurement in host units (pixels, rows).
    Fixed(u16),
}

impl Default for Height {
    fn default() -> Self {
        Height::Fixed(0)
    }
}

impl Height {
    pub fn is_auto(self) -> bool {
        matches!(self, Height::Auto)
    }

    /// The concrete value, if any.
    pub fn fixed(self) -> Option<u16> {
        match self {
            Height::Fixed(h) => Some(h),
            Height::Auto => None,
        }
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Height::Auto => write!(f, "auto"),
            Height::Fixed(0) => write!(f, "0"),
            Height::Fixed(h) => write!(f, "{h}px"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Hidden,
    Visible,
    Auto,
    Scroll,
    Inherit,
    Initial,
    Unset,
}

impl Overflow {
    pub const ALL: [Overflow; 7] = [
        Overflow::Hidden,
        Overflow::Visible,
        Overflow::Auto,
        Overflow::Scroll,
        Overflow::Inherit,
        Overflow::Initial,
        Overflow::Unset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Overflow::Hidden => "hidden",
            Overflow::Visible => "visible",
            Overflow::Auto => "auto",
            Overflow::Scroll => "scroll",
            Overflow::Inherit => "inherit",
            Overflow::Initial => "initial",
            Overflow::Unset => "unset",
        }
    }

    /// Whether content beyond the element's height is clipped.
    pub fn clips(self) -> bool {
        matches!(self, Overflow::Hidden | Overflow::Auto | Overflow::Scroll)
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Overflow::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseOverflowError(trimmed.to_string()))
    }
}
