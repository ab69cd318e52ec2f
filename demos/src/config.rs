//! Command-line arguments and the validated run configuration built from
//! them.

use clap::Parser;
use log::LevelFilter;
use tilepath_core::{Grid, Point};
use tilepath_paths::{Algorithm, Pathfinder};

use crate::error::{DemoError, DemoResult};

/// Paint weighted grids and watch A* or Dijkstra find a way through.
#[derive(Parser, Debug, Clone)]
#[command(name = "tilepath")]
#[command(about = "Grid pathfinding demo: paint costs, run A* or Dijkstra, print the result")]
#[command(version)]
pub struct Args {
    /// Side length of a square grid
    #[arg(long, default_value_t = 10)]
    pub size: i32,

    /// Grid width (defaults to --size)
    #[arg(long)]
    pub width: Option<i32>,

    /// Grid height (defaults to --size)
    #[arg(long)]
    pub height: Option<i32>,

    /// World units per cell side
    #[arg(long, default_value_t = 6.0)]
    pub cell_size: f32,

    /// Start cell as X,Y (clamped into the grid)
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    pub start: Point,

    /// Finish cell as X,Y (defaults to the top-right cell)
    #[arg(long, value_parser = parse_point)]
    pub finish: Option<Point>,

    /// Search algorithm: "A*" or "Djikstra"; anything else runs A*
    #[arg(short, long, default_value = "A*")]
    pub algorithm: String,

    /// Add DELTA to the cost of cell X,Y (repeatable)
    #[arg(long = "paint", value_name = "X,Y,DELTA", value_parser = parse_paint)]
    pub paints: Vec<Paint>,

    /// Make cell X,Y impassable (repeatable)
    #[arg(long = "wall", value_name = "X,Y", value_parser = parse_point)]
    pub walls: Vec<Point>,

    /// Give up after this many open-set removals
    #[arg(long)]
    pub step_budget: Option<usize>,

    /// Show Dijkstra accumulated costs over visited cells
    #[arg(long)]
    pub show_costs: bool,

    /// Print the visit order and path coordinates
    #[arg(long)]
    pub trace: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// A cost change: add `delta` to the cost at `at`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Paint {
    pub at: Point,
    pub delta: i32,
}

/// Parse `X,Y`.
pub fn parse_point(s: &str) -> DemoResult<Point> {
    match parse_ints(s).as_deref() {
        Some(&[x, y]) => Ok(Point::new(x, y)),
        _ => Err(DemoError::Coordinate(s.to_string())),
    }
}

/// Parse `X,Y,DELTA`.
pub fn parse_paint(s: &str) -> DemoResult<Paint> {
    match parse_ints(s).as_deref() {
        Some(&[x, y, delta]) => Ok(Paint {
            at: Point::new(x, y),
            delta,
        }),
        _ => Err(DemoError::Paint(s.to_string())),
    }
}

fn parse_ints(s: &str) -> Option<Vec<i32>> {
    s.split(',').map(|part| part.trim().parse().ok()).collect()
}

/// A validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
    pub start: Point,
    pub finish: Option<Point>,
    pub algorithm: Algorithm,
    pub paints: Vec<Paint>,
    pub walls: Vec<Point>,
    pub step_budget: Option<usize>,
    pub show_costs: bool,
    pub trace: bool,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for DemoConfig {
    type Error = DemoError;

    fn try_from(args: Args) -> DemoResult<Self> {
        let width = args.width.unwrap_or(args.size);
        let height = args.height.unwrap_or(args.size);
        if width <= 0 || height <= 0 {
            return Err(DemoError::Dimensions(width, height));
        }
        if !(args.cell_size.is_finite() && args.cell_size > 0.0) {
            return Err(DemoError::CellSize(args.cell_size));
        }
        let log_level = args
            .log_level
            .parse()
            .map_err(|_| DemoError::LogLevel(args.log_level.clone()))?;

        Ok(Self {
            width,
            height,
            cell_size: args.cell_size,
            start: args.start,
            finish: args.finish,
            algorithm: Algorithm::from_name(&args.algorithm),
            paints: args.paints,
            walls: args.walls,
            step_budget: args.step_budget,
            show_costs: args.show_costs,
            trace: args.trace,
            log_level,
        })
    }
}

impl DemoConfig {
    /// Build the grid: paints first, then walls, then endpoints.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height, self.cell_size);
        for paint in &self.paints {
            grid.paint(paint.at, paint.delta);
        }
        for &wall in &self.walls {
            grid.block(wall);
        }
        grid.set_start(self.start);
        if let Some(finish) = self.finish {
            grid.set_finish(finish);
        }
        grid
    }

    /// A pathfinder honouring the configured step budget.
    pub fn pathfinder(&self) -> Pathfinder {
        match self.step_budget {
            Some(steps) => Pathfinder::new().with_step_budget(steps),
            None => Pathfinder::new(),
        }
    }
}
