//! Command-line harness around `tilepath-core` and `tilepath-paths`.
//!
//! Builds a grid from the arguments, runs one search and renders the grid
//! with the path and visited cells, followed by the run summary.

pub mod config;
pub mod error;
pub mod render;

use std::fmt::Write as _;

use log::LevelFilter;
use tilepath_core::Point;

pub use config::{Args, DemoConfig, Paint};
pub use error::{DemoError, DemoResult};
pub use render::{Glyph, Renderer};

/// Install the global logger at `level`. `RUST_LOG` is not consulted.
pub fn init_logging(level: LevelFilter) -> DemoResult<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}

/// Run the configured search and return the text to print.
pub fn run(config: &DemoConfig) -> String {
    let mut grid = config.build_grid();
    let mut pathfinder = config.pathfinder();

    log::info!(
        "{}x{} grid, {} from {} to {}",
        grid.width(),
        grid.height(),
        config.algorithm,
        grid.start(),
        grid.finish()
    );
    let result = pathfinder.find_path(&mut grid, config.algorithm);
    let summary = result.summary(&grid);
    log::info!("Visited tiles count: {}", summary.visited_count);
    log::info!("Path tiles count: {}", summary.path_len);
    log::info!("Found path cost: {}", summary.total_cost);

    let mut out = Renderer::new(config.show_costs).render(&grid, Some(&result));
    let _ = write!(out, "\n\n{}: ", config.algorithm);
    if result.found {
        out.push_str("path found\n");
    } else if result.exhausted {
        out.push_str("step budget exhausted\n");
    } else {
        out.push_str("no path\n");
    }
    let _ = write!(out, "{summary}");

    if config.trace {
        let _ = write!(out, "\nvisit order: {}", join(&result.visit_order));
        let _ = write!(out, "\npath: {}", join(&result.path));
    }
    out
}

fn join(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(argv: &[&str]) -> String {
        let args = Args::try_parse_from(std::iter::once("tilepath").chain(argv.iter().copied()))
            .expect("arguments parse");
        run(&DemoConfig::try_from(args).expect("valid config"))
    }

    #[test]
    fn prints_grid_and_summary() {
        let out = run_args(&["--size", "3"]);
        assert_eq!(
            out,
            "0 * E\n* * 0\nS 0 0\n\nA*: path found\n\
             Visited tiles count: 4\nPath tiles count: 5\nFound path cost: 0"
        );
    }

    #[test]
    fn reports_missing_path() {
        let out = run_args(&["--size", "3", "--wall", "2,2", "-a", "Djikstra"]);
        assert!(out.contains("Djikstra: no path"));
        assert!(out.contains("Path tiles count: 0"));
    }

    #[test]
    fn reports_exhausted_budget() {
        let out = run_args(&["--size", "8", "--step-budget", "2"]);
        assert!(out.contains("step budget exhausted"));
    }

    #[test]
    fn trace_lists_coordinates() {
        let out = run_args(&["--size", "2", "--trace"]);
        assert!(out.ends_with("path: (0, 0) (0, 1) (1, 1)"), "{out}");
        assert!(out.contains("visit order: (0, 0) (0, 1)\n"));
    }
}
