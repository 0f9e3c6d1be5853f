//! The [`Cell`] type: one position of a search grid.

use crate::geom::Point;

/// A grid cell: its fixed position, its start/finish role and whether it is
/// currently a wall.
///
/// Position and role are set when the owning [`Grid`](crate::Grid) is built
/// and never change. Only the wall flag is editable, and only through the
/// grid. Search bookkeeping (distance, visited flag, predecessor) is not
/// stored here; every search keeps its own state table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pos: Point,
    is_start: bool,
    is_finish: bool,
    pub(crate) is_wall: bool,
}

impl Cell {
    #[inline]
    pub(crate) const fn new(pos: Point, is_start: bool, is_finish: bool) -> Self {
        Self {
            pos,
            is_start,
            is_finish,
            is_wall: false,
        }
    }

    /// Position of the cell in its grid.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    /// Column index (x).
    #[inline]
    pub const fn column(&self) -> i32 {
        self.pos.x
    }

    /// Row index (y).
    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub const fn is_finish(&self) -> bool {
        self.is_finish
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.is_wall
    }

    /// The character used for this cell in text layouts.
    pub const fn glyph(&self) -> char {
        if self.is_start {
            'S'
        } else if self.is_finish {
            'F'
        } else if self.is_wall {
            '#'
        } else {
            '.'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let c = Cell::new(Point::new(4, 2), false, true);
        assert_eq!(c.pos(), Point::new(4, 2));
        assert_eq!(c.column(), 4);
        assert_eq!(c.row(), 2);
        assert!(!c.is_start());
        assert!(c.is_finish());
        assert!(!c.is_wall());
    }

    #[test]
    fn glyphs() {
        let mut c = Cell::new(Point::ZERO, false, false);
        assert_eq!(c.glyph(), '.');
        c.is_wall = true;
        assert_eq!(c.glyph(), '#');
        assert_eq!(Cell::new(Point::ZERO, true, false).glyph(), 'S');
        assert_eq!(Cell::new(Point::ZERO, false, true).glyph(), 'F');
    }
}
