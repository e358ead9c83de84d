//! The recognised escape markers.

use std::fmt;

/// Every marker the lexer splits on, in matching priority order.
///
/// No marker is a prefix of another, so order only matters for
/// readability.
pub const ALL_MARKERS: &[Marker] = &[Marker::ColorOn, Marker::UnderlineOn, Marker::Reset];

/// One of the three SGR sequences emitted by the Radon error formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `ESC[31m`: red foreground.
    ColorOn,
    /// `ESC[4m`: underline.
    UnderlineOn,
    /// `ESC[0m`: clears every flag.
    Reset,
}

impl Marker {
    /// The exact byte sequence of this marker.
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::ColorOn => "\x1b[31m",
            Marker::UnderlineOn => "\x1b[4m",
            Marker::Reset => "\x1b[0m",
        }
    }

    /// Match a marker at the start of `input`.
    pub fn match_prefix(input: &str) -> Option<Marker> {
        ALL_MARKERS
            .iter()
            .copied()
            .find(|m| input.starts_with(m.as_str()))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::ColorOn => write!(f, "color-on"),
            Marker::UnderlineOn => write!(f, "underline-on"),
            Marker::Reset => write!(f, "reset"),
        }
    }
}
