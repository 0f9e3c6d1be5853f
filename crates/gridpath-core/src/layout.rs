//! Text layouts for grids.
//!
//! A layout is one line per row, one character per cell:
//!
//! | char | meaning |
//! |---|---|
//! | `S` | start |
//! | `F` | finish |
//! | `#` | wall |
//! | `.` | open cell |
//!
//! Leading and trailing whitespace of the whole text is ignored, as is
//! trailing whitespace on each line. Every line must have the same width.

use std::fmt;

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

impl Grid {
    /// Build a grid from a text layout.
    ///
    /// The layout must contain exactly one `S` and exactly one `F`.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut width: i32 = -1;
        let mut height: i32 = 0;
        let mut start: Option<Point> = None;
        let mut finish: Option<Point> = None;
        let mut walls = Vec::new();

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let line = line.trim_end();
            let mut x: i32 = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    'S' => set_marker(&mut start, 'S', p)?,
                    'F' => set_marker(&mut finish, 'F', p)?,
                    '#' => walls.push(p),
                    '.' => {}
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                }
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(GridError::InconsistentSize {
                    line: y,
                    expected: width,
                    found: x,
                });
            }
            height += 1;
        }

        let start = start.ok_or(GridError::MissingMarker('S'))?;
        let finish = finish.ok_or(GridError::MissingMarker('F'))?;
        let mut grid = Grid::new(width.max(0), height, start, finish)?;
        for p in walls {
            grid.set_wall(p, true);
        }
        Ok(grid)
    }
}

fn set_marker(slot: &mut Option<Point>, ch: char, p: Point) -> Result<(), GridError> {
    if slot.is_some() {
        return Err(GridError::DuplicateMarker { ch, pos: p });
    }
    *slot = Some(p);
    Ok(())
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

/// Writes the grid in the layout format accepted by [`Grid::parse`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width() as usize;
        for (i, row) in self.all_cells().chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
