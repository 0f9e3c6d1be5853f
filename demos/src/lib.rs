//! Shared helpers for the gridpath demos: loading a grid from the command
//! line and drawing a finished search as text.

use std::error::Error;
use std::fs;
use std::path::Path;

use gridpath_core::{Grid, GridConfig};
use gridpath_search::Search;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed used for wall scatter when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Glyph of a settled cell that is not on the path.
pub const VISITED: char = 'o';
/// Glyph of a cell on the shortest path.
pub const PATH: char = '*';

/// Load a grid from `path`: a `.json` file is read as a [`GridConfig`],
/// anything else as a text layout. With no path the default configuration
/// is used.
pub fn load_grid(path: Option<&Path>) -> Result<Grid, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(GridConfig::default().build()?);
    };
    let text = fs::read_to_string(path)?;
    let grid = if path.extension().is_some_and(|e| e == "json") {
        let cfg: GridConfig = serde_json::from_str(&text)?;
        log::info!("loaded config {}", path.display());
        cfg.build()?
    } else {
        log::info!("loaded layout {}", path.display());
        Grid::parse(&text)?
    };
    Ok(grid)
}

/// Scatter walls over `grid` with a seeded RNG.
pub fn scatter(grid: &mut Grid, density: f64, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let added = grid.scatter_walls(&mut rng, density);
    log::info!("scattered {added} walls (density {density}, seed {seed})");
    added
}

/// Draw the grid with the settled cells and the shortest path overlaid.
///
/// Start, finish and walls keep their layout glyphs; path cells are drawn
/// as [`PATH`] and other settled cells as [`VISITED`].
pub fn render(search: &Search<'_>) -> String {
    let grid = search.grid();
    let mut glyphs: Vec<char> = grid.iter().map(|c| c.glyph()).collect();
    for &i in search.visited_indices() {
        if glyphs[i] == '.' {
            glyphs[i] = VISITED;
        }
    }
    if search.reached() {
        for cell in search.path() {
            if let Some(i) = grid.index(cell.pos()) {
                if glyphs[i] == VISITED {
                    glyphs[i] = PATH;
                }
            }
        }
    }
    glyphs
        .chunks(grid.width() as usize)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of a search.
pub fn summary(search: &Search<'_>) -> String {
    if search.reached() {
        format!(
            "{} -> {}: {} cells visited, shortest path {} steps",
            search.start(),
            search.finish(),
            search.visited_len(),
            search.path().len() - 1
        )
    } else {
        format!(
            "{} -> {}: {} cells visited, no path",
            search.start(),
            search.finish(),
            search.visited_len()
        )
    }
}
