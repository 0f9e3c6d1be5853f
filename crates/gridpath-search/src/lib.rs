//! Shortest-path search over a [`Grid`](gridpath_core::Grid).
//!
//! [`search`] runs Dijkstra's algorithm specialised to unit-cost,
//! four-directional moves, stopping as soon as the finish cell is settled.
//! It returns a [`Search`] holding:
//!
//! - the cells in the order they were settled ([`Search::visited`]),
//! - a fresh [`SearchState`] table with distances and predecessor indices,
//! - the reconstructed shortest path ([`Search::path`], built with
//!   [`reconstruct_path`]).
//!
//! Ties between cells at equal distance are broken deterministically, so
//! the same grid always yields the same visitation order and path.
//!
//! ```
//! use gridpath_core::Grid;
//!
//! let grid = Grid::parse("S.#\n..#\n..F").unwrap();
//! let result = gridpath_search::search_grid(&grid).unwrap();
//! assert!(result.reached());
//! assert_eq!(result.path().len(), 5);
//! ```

mod dijkstra;
mod distance;
mod error;
mod path;
mod state;

pub use dijkstra::{Search, search, search_grid};
pub use distance::manhattan;
pub use error::SearchError;
pub use path::reconstruct_path;
pub use state::{NodeState, SearchState, UNREACHABLE};
