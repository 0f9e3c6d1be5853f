//! Grid construction parameters.

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

/// Default number of columns.
pub const DEFAULT_WIDTH: i32 = 50;
/// Default number of rows.
pub const DEFAULT_HEIGHT: i32 = 20;
/// Default start position (column 15, row 10).
pub const DEFAULT_START: Point = Point::new(15, 10);
/// Default finish position (column 35, row 10).
pub const DEFAULT_FINISH: Point = Point::new(35, 10);

/// Configuration for creating a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub finish: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: DEFAULT_START,
            finish: DEFAULT_FINISH,
        }
    }
}

impl GridConfig {
    /// Build an empty (wall-free) grid from this configuration.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::new(self.width, self.height, self.start, self.finish)
    }
}
