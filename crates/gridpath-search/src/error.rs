use std::fmt;

use gridpath_core::Point;

/// Inputs a search refuses to run on.
///
/// An unreachable finish is not an error: it shows up as a search whose
/// [`reached`](crate::Search::reached) is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start or finish position lies outside the grid.
    OutOfBounds(Point),
    /// The start cell is a wall.
    StartIsWall(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "search endpoint {p} is outside the grid"),
            Self::StartIsWall(p) => write!(f, "search start {p} is a wall"),
        }
    }
}

impl std::error::Error for SearchError {}
