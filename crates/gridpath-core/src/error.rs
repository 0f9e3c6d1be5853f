use std::fmt;

use crate::geom::Point;

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero or negative.
    EmptyGrid { width: i32, height: i32 },
    /// The start or finish position lies outside the grid.
    OutOfBounds { what: &'static str, pos: Point },
    /// Lines of a text layout have inconsistent widths.
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A text layout contains a character outside `S`, `F`, `#`, `.`.
    InvalidChar { ch: char, pos: Point },
    /// A text layout has no start (`S`) or no finish (`F`).
    MissingMarker(char),
    /// A text layout has a second start or finish marker.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have a positive size, got {width}x{height}")
            }
            Self::OutOfBounds { what, pos } => write!(f, "{what} {pos} is outside the grid"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "layout has no \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout has a second \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
