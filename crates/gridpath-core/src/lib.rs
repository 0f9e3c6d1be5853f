//! **gridpath-core**: the grid model used by the gridpath search engine.
//!
//! This crate provides geometry primitives, the [`Cell`] entity, the
//! rectangular [`Grid`] container with its wall-editing helpers, text
//! layouts, random wall scatter and the [`GridConfig`] used to build grids.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
mod layout;
mod scatter;

pub use cell::Cell;
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
