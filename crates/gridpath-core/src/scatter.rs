//! Random wall placement.

use rand::Rng;

use crate::grid::Grid;

impl Grid {
    /// Turn each open cell into a wall with probability `density`
    /// (clamped to `0.0..=1.0`). The start and finish cells are never
    /// walled.
    ///
    /// Returns the number of walls added.
    pub fn scatter_walls(&mut self, rng: &mut impl Rng, density: f64) -> usize {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        let mut added = 0;
        for i in 0..self.len() {
            let p = self.point(i);
            let Some(cell) = self.at(p) else {
                continue;
            };
            if cell.is_start() || cell.is_finish() || cell.is_wall() {
                continue;
            }
            if rng.random_bool(density) {
                self.set_wall(p, true);
                added += 1;
            }
        }
        added
    }
}
