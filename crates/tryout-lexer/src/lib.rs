//! Styled-run lexer for Radon compiler diagnostics.
//!
//! Diagnostics arrive as plain text carrying three inline escape markers
//! (color on, underline on, reset). [`decode`] turns such text into
//! [`StyledRun`](tryout_types::StyledRun)s and [`encode`] writes them back.

pub mod lexer;
pub mod marker;

pub use lexer::{decode, encode, Fragment, Lexer};
pub use marker::{Marker, ALL_MARKERS};
