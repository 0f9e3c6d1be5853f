//! The [`Grid`] type: a rectangular, row-major container of [`Cell`]s.
//!
//! A grid has exactly one start cell and one finish cell, fixed at
//! construction. Walls may be edited freely between searches; a search
//! borrows the grid immutably, so walls cannot change while one runs.

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A 2D grid of [`Cell`]s with origin `(0, 0)`.
///
/// Cells are stored row-major: the cell at `(x, y)` lives at index
/// `y * width + x` and always reports that position.
///
/// With the `serde` feature a grid is stored as its dimensions, markers and
/// wall positions, and deserializing rebuilds it through [`Grid::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    finish: Point,
}

impl Grid {
    /// Create a `width` × `height` grid without walls.
    ///
    /// `start` and `finish` must lie inside the grid; they may be the same
    /// cell.
    pub fn new(width: i32, height: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        if !bounds.contains(start) {
            return Err(GridError::OutOfBounds {
                what: "start",
                pos: start,
            });
        }
        if !bounds.contains(finish) {
            return Err(GridError::OutOfBounds {
                what: "finish",
                pos: finish,
            });
        }
        let cells = bounds
            .iter()
            .map(|p| Cell::new(p, p == start, p == finish))
            .collect();
        Ok(Self {
            cells,
            bounds,
            start,
            finish,
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point` (columns, rows).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.slot(p))
    }

    // Caller guarantees `p` is in bounds.
    #[inline]
    fn slot(&self, p: Point) -> usize {
        p.y as usize * self.width() as usize + p.x as usize
    }

    /// Position of the cell at row-major index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// All cells flattened in row-major order.
    #[inline]
    pub fn all_cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the finish cell.
    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    pub fn start_cell(&self) -> &Cell {
        &self.cells[self.slot(self.start)]
    }

    pub fn finish_cell(&self) -> &Cell {
        &self.cells[self.slot(self.finish)]
    }

    /// In-bounds orthogonal neighbours of `p`, in the order up, down, left,
    /// right. Directions falling outside the grid are skipped. Walls are
    /// included.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = &Cell> + '_ {
        p.neighbors_4().into_iter().filter_map(move |n| self.at(n))
    }

    /// Make `p` a wall or an open cell. Returns `false` if `p` is out of
    /// bounds.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i].is_wall = wall;
                true
            }
            None => false,
        }
    }

    /// Flip the wall flag of `p` and return its new value, or `None` if `p`
    /// is out of bounds.
    pub fn toggle_wall(&mut self, p: Point) -> Option<bool> {
        let i = self.index(p)?;
        let cell = &mut self.cells[i];
        cell.is_wall = !cell.is_wall;
        Some(cell.is_wall)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            cell.is_wall = false;
        }
    }

    /// Count the wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialized form of a [`Grid`]: dimensions, markers and wall positions.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    start: Point,
    finish: Point,
    #[serde(default)]
    walls: Vec<Point>,
}

#[cfg(feature = "serde")]
impl GridRepr {
    fn build(self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.width, self.height, self.start, self.finish)?;
        for pos in self.walls {
            if !grid.set_wall(pos, true) {
                return Err(GridError::OutOfBounds { what: "wall", pos });
            }
        }
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = GridRepr {
            width: self.width(),
            height: self.height(),
            start: self.start,
            finish: self.finish,
            walls: self.iter().filter(|c| c.is_wall()).map(|c| c.pos()).collect(),
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <GridRepr as serde::Deserialize>::deserialize(deserializer)?
            .build()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: i32, h: i32) -> Grid {
        Grid::new(w, h, Point::new(0, 0), Point::new(w - 1, h - 1)).unwrap()
    }

    #[test]
    fn new_and_size() {
        let g = grid(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn cells_report_their_position() {
        let g = grid(5, 4);
        for (i, c) in g.all_cells().iter().enumerate() {
            assert_eq!(g.index(c.pos()), Some(i));
            assert_eq!(g.point(i), c.pos());
            assert_eq!(c.column() as usize, i % 5);
            assert_eq!(c.row() as usize, i / 5);
        }
    }

    #[test]
    fn start_and_finish_flags() {
        let g = Grid::new(3, 3, Point::new(1, 0), Point::new(2, 2)).unwrap();
        assert_eq!(g.iter().filter(|c| c.is_start()).count(), 1);
        assert_eq!(g.iter().filter(|c| c.is_finish()).count(), 1);
        assert!(g.start_cell().is_start());
        assert_eq!(g.start_cell().pos(), Point::new(1, 0));
        assert!(g.finish_cell().is_finish());
        assert_eq!(g.finish_cell().pos(), Point::new(2, 2));
    }

    #[test]
    fn start_and_finish_cells_on_later_rows() {
        let g = Grid::new(4, 3, Point::new(3, 1), Point::new(0, 2)).unwrap();
        assert_eq!(g.start_cell().pos(), Point::new(3, 1));
        assert_eq!(g.finish_cell().pos(), Point::new(0, 2));
        assert_eq!(g.index(g.start_cell().pos()), Some(7));
        assert_eq!(g.index(g.finish_cell().pos()), Some(8));
    }

    #[test]
    fn single_cell_can_be_start_and_finish() {
        let g = Grid::new(1, 1, Point::ZERO, Point::ZERO).unwrap();
        let c = g.start_cell();
        assert!(c.is_start() && c.is_finish());
    }

    #[test]
    fn rejects_bad_construction() {
        assert_eq!(
            Grid::new(0, 3, Point::ZERO, Point::ZERO),
            Err(GridError::EmptyGrid {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            Grid::new(3, 3, Point::new(3, 0), Point::ZERO),
            Err(GridError::OutOfBounds {
                what: "start",
                pos: Point::new(3, 0)
            })
        );
        assert!(matches!(
            Grid::new(3, 3, Point::ZERO, Point::new(0, -1)),
            Err(GridError::OutOfBounds { what: "finish", .. })
        ));
    }

    #[test]
    fn at_out_of_bounds() {
        let g = grid(3, 3);
        assert!(g.at(Point::new(2, 2)).is_some());
        assert!(g.at(Point::new(3, 0)).is_none());
        assert!(g.at(Point::new(0, -1)).is_none());
        assert_eq!(g.index(Point::new(-1, 0)), None);
    }

    #[test]
    fn neighbors_interior_order() {
        let g = grid(3, 3);
        let n: Vec<Point> = g.neighbors(Point::new(1, 1)).map(|c| c.pos()).collect();
        assert_eq!(
            n,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_out_of_bounds() {
        let g = grid(3, 3);
        let corner: Vec<Point> = g.neighbors(Point::new(0, 0)).map(|c| c.pos()).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);

        let edge: Vec<Point> = g.neighbors(Point::new(2, 1)).map(|c| c.pos()).collect();
        assert_eq!(
            edge,
            vec![Point::new(2, 0), Point::new(2, 2), Point::new(1, 1)]
        );

        let single = Grid::new(1, 1, Point::ZERO, Point::ZERO).unwrap();
        assert_eq!(single.neighbors(Point::ZERO).count(), 0);
    }

    #[test]
    fn neighbors_include_walls() {
        let mut g = grid(3, 1);
        g.set_wall(Point::new(1, 0), true);
        let n: Vec<&Cell> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(n.len(), 1);
        assert!(n[0].is_wall());
    }

    #[test]
    fn wall_editing() {
        let mut g = grid(3, 3);
        let p = Point::new(1, 1);
        assert_eq!(g.toggle_wall(p), Some(true));
        assert!(g.at(p).unwrap().is_wall());
        assert_eq!(g.toggle_wall(p), Some(false));
        assert_eq!(g.toggle_wall(Point::new(9, 9)), None);

        assert!(g.set_wall(Point::new(0, 1), true));
        assert!(g.set_wall(Point::new(2, 1), true));
        assert!(!g.set_wall(Point::new(3, 1), true));
        assert_eq!(g.wall_count(), 2);

        g.clear_walls();
        assert_eq!(g.wall_count(), 0);
    }
}
