//! Run one search and print the grid with the visited cells and the
//! shortest path drawn in.
//!
//! Run: cargo run --bin visualize -- [LAYOUT.txt | CONFIG.json] [DENSITY] [SEED]
//!
//! With no arguments the default 50x20 grid is searched. `RUST_LOG=debug`
//! shows the engine's own logging.

use std::error::Error;
use std::path::PathBuf;

use gridpath_demos::{DEFAULT_SEED, load_grid, render, scatter, summary};
use gridpath_search::search_grid;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from);
    let density: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0.0);
    let seed: u64 = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(DEFAULT_SEED);

    let mut grid = load_grid(path.as_deref())?;
    if density > 0.0 {
        scatter(&mut grid, density, seed);
    }

    let result = search_grid(&grid)?;
    println!("{}", render(&result));
    println!("{}", summary(&result));
    Ok(())
}
