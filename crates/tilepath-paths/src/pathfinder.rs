use std::collections::VecDeque;

use tilepath_core::{Grid, Point};

use crate::Algorithm;
use crate::report::Summary;

/// Outcome of one search run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Whether the finish was reached.
    pub found: bool,
    /// Cells from start to finish inclusive; empty when not found.
    pub path: Vec<Point>,
    /// Cells in the order the search visited them.
    pub visit_order: Vec<Point>,
    /// The run was cut short by the step budget.
    pub exhausted: bool,
}

impl PathResult {
    pub(crate) fn not_found(visit_order: Vec<Point>) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            visit_order,
            exhausted: false,
        }
    }

    pub(crate) fn found(path: Vec<Point>, visit_order: Vec<Point>) -> Self {
        Self {
            found: true,
            path,
            visit_order,
            exhausted: false,
        }
    }

    pub(crate) fn out_of_budget(visit_order: Vec<Point>) -> Self {
        Self {
            exhausted: true,
            ..Self::not_found(visit_order)
        }
    }

    /// Visited count, path length and path cost, read from `grid`.
    pub fn summary(&self, grid: &Grid) -> Summary {
        Summary::new(grid, self)
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`].
///
/// `Pathfinder` owns the open list, FIFO queue and neighbour scratch buffer
/// so repeated runs reuse their allocations. The per-cell search state lives
/// on the grid itself, which is why a search needs `&mut Grid`.
#[derive(Debug, Default)]
pub struct Pathfinder {
    pub(crate) step_budget: Option<usize>,
    pub(crate) open: Vec<Point>,
    pub(crate) queue: VecDeque<Point>,
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a pathfinder without a step budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit every run to `steps` open-set removals.
    pub fn with_step_budget(mut self, steps: usize) -> Self {
        self.step_budget = Some(steps);
        self
    }

    #[inline]
    pub fn step_budget(&self) -> Option<usize> {
        self.step_budget
    }

    /// Search from the grid's start to its finish.
    pub fn find_path(&mut self, grid: &mut Grid, algorithm: Algorithm) -> PathResult {
        let (start, finish) = (grid.start(), grid.finish());
        self.find_path_between(grid, start, finish, algorithm)
    }

    /// Search between explicit endpoints, clamped into the grid.
    ///
    /// Rebuilds the grid's adjacency and clears its search state first, so
    /// costs painted since the last run are honoured.
    pub fn find_path_between(
        &mut self,
        grid: &mut Grid,
        start: Point,
        finish: Point,
        algorithm: Algorithm,
    ) -> PathResult {
        let start = grid.bounds().clamp(start);
        let finish = grid.bounds().clamp(finish);
        grid.rebuild_adjacency();
        grid.reset_transient_state();

        log::debug!("{algorithm} search from {start} to {finish}");

        let result = if !grid.is_passable(start) || !grid.is_passable(finish) {
            PathResult::not_found(Vec::new())
        } else if start == finish {
            PathResult::found(vec![start], Vec::new())
        } else {
            match algorithm {
                Algorithm::AStar => self.astar(grid, start, finish),
                Algorithm::Dijkstra => self.dijkstra(grid, start, finish),
            }
        };

        if result.exhausted {
            log::warn!(
                "{algorithm} search gave up after {} steps",
                self.step_budget.unwrap_or_default()
            );
        }
        log::debug!(
            "{algorithm} search {}: {} visits, path of {} cells",
            if result.found { "succeeded" } else { "failed" },
            result.visit_order.len(),
            result.path.len()
        );
        result
    }

    /// Whether `steps` completed removals leave no budget for another one.
    /// Checked only after the next removal, so a run that empties its open
    /// set on the last allowed removal is not exhausted.
    #[inline]
    pub(crate) fn out_of_steps(&self, steps: usize) -> bool {
        self.step_budget.is_some_and(|max| steps >= max)
    }
}

/// Follow `parent` links from `finish` back to `start` and return the path in
/// start-to-finish order.
///
/// Returns an empty path if the chain breaks or loops before reaching
/// `start`.
pub(crate) fn trace_back(grid: &Grid, start: Point, finish: Point) -> Vec<Point> {
    let mut path = vec![finish];
    let mut p = finish;
    while p != start {
        let Some(parent) = grid.cell(p).and_then(|c| c.parent) else {
            return Vec::new();
        };
        if path.len() > grid.len() {
            return Vec::new();
        }
        path.push(parent);
        p = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_path_uses_grid_endpoints() {
        let mut grid = Grid::new(4, 1, 1.0);
        let mut pf = Pathfinder::new();
        let r = pf.find_path(&mut grid, Algorithm::AStar);
        assert!(r.found);
        assert_eq!(r.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(r.path.last(), Some(&Point::new(3, 0)));
    }

    #[test]
    fn endpoints_are_clamped() {
        let mut grid = Grid::new(3, 3, 1.0);
        let mut pf = Pathfinder::new();
        let r = pf.find_path_between(
            &mut grid,
            Point::new(-4, -4),
            Point::new(9, 9),
            Algorithm::Dijkstra,
        );
        assert!(r.found);
        assert_eq!(r.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(r.path.last(), Some(&Point::new(2, 2)));
    }

    #[test]
    fn same_start_and_finish() {
        let mut grid = Grid::new(3, 3, 1.0);
        let p = Point::new(1, 1);
        for algorithm in Algorithm::ALL {
            let r = Pathfinder::new().find_path_between(&mut grid, p, p, algorithm);
            assert!(r.found);
            assert_eq!(r.path, vec![p]);
            assert!(r.visit_order.is_empty());
        }
    }

    #[test]
    fn impassable_start_is_never_expanded() {
        let mut grid = Grid::new(3, 3, 1.0);
        grid.block(Point::ZERO);
        for algorithm in Algorithm::ALL {
            let r = Pathfinder::new().find_path(&mut grid, algorithm);
            assert!(!r.found);
            assert!(r.path.is_empty());
            assert!(r.visit_order.is_empty());
        }
    }

    #[test]
    fn empty_grid_finds_nothing() {
        let mut grid = Grid::new(0, 0, 1.0);
        let r = Pathfinder::new().find_path(&mut grid, Algorithm::AStar);
        assert_eq!(r, PathResult::default());
    }

    #[test]
    fn painting_between_runs_is_honoured() {
        let mut grid = Grid::new(3, 1, 1.0);
        let mut pf = Pathfinder::new();
        assert!(pf.find_path(&mut grid, Algorithm::AStar).found);
        grid.block(Point::new(1, 0));
        assert!(!pf.find_path(&mut grid, Algorithm::AStar).found);
        grid.paint(Point::new(1, 0), 1);
        assert!(pf.find_path(&mut grid, Algorithm::AStar).found);
    }

    #[test]
    fn step_budget_stops_the_run() {
        let mut grid = Grid::new(10, 10, 1.0);
        for algorithm in Algorithm::ALL {
            let mut pf = Pathfinder::new().with_step_budget(3);
            let r = pf.find_path(&mut grid, algorithm);
            assert!(r.exhausted);
            assert!(!r.found);
            assert!(r.path.is_empty());
        }
        let r = Pathfinder::new()
            .with_step_budget(1000)
            .find_path(&mut grid, Algorithm::AStar);
        assert!(r.found && !r.exhausted);
    }

    #[test]
    fn trace_back_stops_on_broken_chain() {
        let mut grid = Grid::new(3, 1, 1.0);
        assert!(trace_back(&grid, Point::new(0, 0), Point::new(2, 0)).is_empty());
        if let Some(c) = grid.cell_mut(Point::new(2, 0)) {
            c.parent = Some(Point::new(1, 0));
        }
        if let Some(c) = grid.cell_mut(Point::new(1, 0)) {
            c.parent = Some(Point::new(0, 0));
        }
        assert_eq!(
            trace_back(&grid, Point::new(0, 0), Point::new(2, 0)),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }
}
