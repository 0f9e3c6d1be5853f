use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{Cell, Grid, Point};
use log::{debug, trace};

use crate::error::SearchError;
use crate::path::reconstruct_path;
use crate::state::{SearchState, UNREACHABLE};

/// Entry of the working set.
///
/// Pops in order of distance, then of the step at which that distance was
/// assigned, then of row-major index. This is the order a stable re-sort of
/// a row-major working set by distance would produce after every step.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    distance: i32,
    stamp: u32,
    idx: usize,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.stamp.cmp(&self.stamp))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run a shortest-path search over `grid` from `start` until `finish` is
/// settled or nothing reachable is left.
///
/// Every move to an orthogonal neighbour costs 1. Cells are settled in
/// nondecreasing distance order; walls are never settled nor expanded.
/// The search stops as soon as `finish` is settled.
///
/// # Errors
///
/// Returns [`SearchError::OutOfBounds`] if `start` or `finish` lies outside
/// the grid and [`SearchError::StartIsWall`] if the start cell is a wall. An
/// unreachable finish is reported through [`Search::reached`].
pub fn search(grid: &Grid, start: Point, finish: Point) -> Result<Search<'_>, SearchError> {
    let Some(si) = grid.index(start) else {
        debug!("search rejected: start {start} outside {}", grid.bounds());
        return Err(SearchError::OutOfBounds(start));
    };
    let Some(fi) = grid.index(finish) else {
        debug!("search rejected: finish {finish} outside {}", grid.bounds());
        return Err(SearchError::OutOfBounds(finish));
    };
    let cells = grid.all_cells();
    if cells[si].is_wall() {
        debug!("search rejected: start {start} is a wall");
        return Err(SearchError::StartIsWall(start));
    }

    let mut state = SearchState::new(grid.len());
    let mut order = Vec::new();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

    state.nodes[si].distance = 0;
    open.push(NodeRef {
        distance: 0,
        stamp: 0,
        idx: si,
    });

    // Cells still at UNREACHABLE are never queued: once the queue is empty
    // everything left is unreachable from the start.
    let mut step: u32 = 0;
    while let Some(current) = open.pop() {
        let ci = current.idx;
        let node = &state.nodes[ci];
        if node.visited || node.distance != current.distance {
            continue;
        }
        let cell = &cells[ci];
        if cell.is_wall() {
            continue;
        }

        state.nodes[ci].visited = true;
        order.push(ci);
        trace!("settled {} at distance {}", cell.pos(), current.distance);
        if ci == fi {
            break;
        }

        step += 1;
        let next = current.distance + 1;
        for neighbor in grid.neighbors(cell.pos()) {
            let Some(ni) = grid.index(neighbor.pos()) else {
                continue;
            };
            let n = &mut state.nodes[ni];
            if n.visited || next >= n.distance {
                continue;
            }
            n.distance = next;
            n.previous = Some(ci);
            open.push(NodeRef {
                distance: next,
                stamp: step,
                idx: ni,
            });
        }
    }

    let result = Search {
        grid,
        state,
        order,
        start: si,
        finish: fi,
    };
    if result.reached() {
        debug!(
            "search {start} -> {finish}: settled {} cells, path of {} cells",
            result.order.len(),
            result.state.distance(fi) + 1
        );
    } else {
        debug!(
            "search {start} -> {finish}: settled {} cells, finish unreachable",
            result.order.len()
        );
    }
    Ok(result)
}

/// Run [`search`] between the grid's own start and finish cells.
pub fn search_grid(grid: &Grid) -> Result<Search<'_>, SearchError> {
    search(grid, grid.start(), grid.finish())
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Outcome of one search: the visitation order and the state table it
/// produced.
///
/// The grid stays borrowed for as long as the result is alive, so walls
/// cannot change under it.
#[derive(Debug, Clone)]
pub struct Search<'g> {
    grid: &'g Grid,
    state: SearchState,
    order: Vec<usize>,
    start: usize,
    finish: usize,
}

impl<'g> Search<'g> {
    /// The searched grid.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn start(&self) -> Point {
        self.grid.point(self.start)
    }

    pub fn finish(&self) -> Point {
        self.grid.point(self.finish)
    }

    /// The state table left by the search.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }

    /// Cells in the order they were settled.
    pub fn visited(&self) -> impl Iterator<Item = &'g Cell> + '_ {
        let cells = self.grid.all_cells();
        self.order.iter().map(move |&i| &cells[i])
    }

    /// Row-major indices of the settled cells, in settling order.
    pub fn visited_indices(&self) -> &[usize] {
        &self.order
    }

    /// Positions of the settled cells, in settling order.
    pub fn visited_points(&self) -> Vec<Point> {
        self.order.iter().map(|&i| self.grid.point(i)).collect()
    }

    /// Number of settled cells.
    pub fn visited_len(&self) -> usize {
        self.order.len()
    }

    /// Whether the finish cell was settled.
    pub fn reached(&self) -> bool {
        self.state.is_visited(self.finish)
    }

    /// Recorded distance of `p` from the start.
    ///
    /// Exact for settled cells, tentative for cells that were only reached
    /// as neighbours, and [`UNREACHABLE`] for everything else, including
    /// points outside the grid.
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.grid.index(p) {
            Some(i) => self.state.distance(i),
            None => UNREACHABLE,
        }
    }

    /// Whether `p` was settled.
    pub fn is_visited(&self, p: Point) -> bool {
        self.grid
            .index(p)
            .is_some_and(|i| self.state.is_visited(i))
    }

    /// The cell `p`'s distance was reached from, if any.
    pub fn previous_of(&self, p: Point) -> Option<Point> {
        let i = self.grid.index(p)?;
        self.state.previous(i).map(|pi| self.grid.point(pi))
    }

    /// The shortest path from start to finish, both included.
    ///
    /// If the finish was not settled the result is the finish cell alone.
    /// A single-cell result therefore means "no path", unless start and
    /// finish are the same cell.
    pub fn path(&self) -> Vec<&'g Cell> {
        if !self.reached() {
            return vec![&self.grid.all_cells()[self.finish]];
        }
        self.cells(reconstruct_path(&self.state, self.finish))
    }

    /// Positions along [`path`](Self::path).
    pub fn path_points(&self) -> Vec<Point> {
        self.path().into_iter().map(Cell::pos).collect()
    }

    /// Follow the predecessor links back from `p`, or `None` if `p` is
    /// outside the grid.
    ///
    /// For a settled cell this is a shortest path from the start. For other
    /// cells it is whatever chain the search left behind.
    pub fn path_to(&self, p: Point) -> Option<Vec<&'g Cell>> {
        let i = self.grid.index(p)?;
        Some(self.cells(reconstruct_path(&self.state, i)))
    }

    fn cells(&self, indices: Vec<usize>) -> Vec<&'g Cell> {
        let cells = self.grid.all_cells();
        indices.into_iter().map(|i| &cells[i]).collect()
    }
}
