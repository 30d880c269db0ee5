//! This module contains the parser for the geometries given on the command line, such as
//! `210mm x 297mm`.

pub mod combinators;
pub mod error;

#[cfg(test)]
mod tests;

use nom_locate::LocatedSpan;
use printpdf::Pt;

/// This type will allow us to know where we are while we're parsing the content.
pub type Span<'a> = LocatedSpan<&'a str>;

/// A position is a span but without the reference to the complete str.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// The line number of the position.
    pub line: u32,

    /// The column number of the position.
    pub column: usize,

    /// The offset from the beginning of the string.
    pub offset: usize,
}

/// Returns the position of a span.
pub fn position(span: &Span) -> Position {
    Position {
        line: span.location_line(),
        column: span.get_utf8_column(),
        offset: span.location_offset(),
    }
}

/// The size of a page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    /// The width of the page.
    pub width: Pt,

    /// The height of the page.
    pub height: Pt,
}

pub use combinators::parse_geometry;
pub use error::{Diagnostic, ErrorType};
