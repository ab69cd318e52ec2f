use tilepath_core::{Grid, Point};

use crate::pathfinder::{PathResult, Pathfinder, trace_back};

impl Pathfinder {
    /// A* from `start` to `finish`. Both endpoints are passable and distinct.
    ///
    /// The open list is scanned linearly for the smallest
    /// `heuristic + cost`; the earliest entry wins ties. A neighbour's
    /// parent is replaced only when its straight-line distance to the finish
    /// improves, so accumulated path cost never enters the comparison and
    /// the path is not guaranteed to be the cheapest one.
    ///
    /// The finish itself is not part of the visit order.
    pub(crate) fn astar(&mut self, grid: &mut Grid, start: Point, finish: Point) -> PathResult {
        let mut open = std::mem::take(&mut self.open);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        open.clear();
        open.push(start);

        let mut visit_order = Vec::new();
        let mut steps = 0usize;

        let found = 'search: loop {
            let Some(current) = remove_best(grid, &mut open) else {
                break 'search Some(false);
            };
            if self.out_of_steps(steps) {
                break 'search None;
            }
            steps += 1;
            log::trace!("A* expanding {current}");

            if current == finish {
                break 'search Some(true);
            }

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(current));

            for &np in nbuf.iter() {
                let Some(n) = grid.cell_mut(np) else {
                    continue;
                };
                if n.visited {
                    continue;
                }
                let h = np.euclidean(finish);
                let in_open = open.contains(&np);
                if !in_open {
                    open.push(np);
                }
                if !in_open || h < n.heuristic {
                    n.parent = Some(current);
                    n.heuristic = h;
                }
            }

            if let Some(c) = grid.cell_mut(current) {
                c.visited = true;
            }
            visit_order.push(current);
        };

        self.open = open;
        self.nbuf = nbuf;

        match found {
            Some(true) => PathResult::found(trace_back(grid, start, finish), visit_order),
            Some(false) => PathResult::not_found(visit_order),
            None => PathResult::out_of_budget(visit_order),
        }
    }
}

/// Remove and return the open entry with the lowest `heuristic + cost`.
fn remove_best(grid: &Grid, open: &mut Vec<Point>) -> Option<Point> {
    let score = |p: Point| {
        grid.cell(p)
            .map_or(f64::INFINITY, |c| c.heuristic + f64::from(c.cost()))
    };
    let mut best = 0;
    let mut best_score = score(*open.first()?);
    for (i, &p) in open.iter().enumerate().skip(1) {
        let s = score(p);
        if s < best_score {
            best = i;
            best_score = s;
        }
    }
    Some(open.remove(best))
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Pathfinder};
    use tilepath_core::{Grid, Point};

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn grid3() -> Grid {
        let mut g = Grid::new(3, 3, 1.0);
        g.set_start(Point::new(0, 0));
        g.set_finish(Point::new(2, 2));
        g
    }

    #[test]
    fn open_grid_staircase() {
        let mut g = grid3();
        let r = Pathfinder::new().find_path(&mut g, Algorithm::AStar);
        assert!(r.found);
        assert_eq!(r.path, pts(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]));
        assert_eq!(r.visit_order, pts(&[(0, 0), (0, 1), (1, 1), (1, 2)]));
        assert_eq!(r.summary(&g).total_cost, 0);
    }

    #[test]
    fn routes_around_centre_wall() {
        let mut g = grid3();
        g.block(Point::new(1, 1));
        let r = Pathfinder::new().find_path(&mut g, Algorithm::AStar);
        assert!(r.found);
        assert_eq!(r.path, pts(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]));
        assert!(!r.path.contains(&Point::new(1, 1)));
    }

    #[test]
    fn blocked_finish_fails() {
        let mut g = grid3();
        g.block(Point::new(2, 2));
        let r = Pathfinder::new().find_path(&mut g, Algorithm::AStar);
        assert!(!r.found);
        assert!(r.path.is_empty());
    }

    #[test]
    fn walled_off_finish_reports_visits() {
        let mut g = grid3();
        g.block(Point::new(1, 2));
        g.block(Point::new(2, 1));
        let r = Pathfinder::new().find_path(&mut g, Algorithm::AStar);
        assert!(!r.found);
        // Every reachable cell is finalized once.
        assert_eq!(r.visit_order.len(), 6);
    }

    #[test]
    fn cost_steers_selection() {
        // Two equally long routes; the expensive first step is avoided.
        let mut g = Grid::new(2, 2, 1.0);
        g.set_finish(Point::new(1, 1));
        g.set_cost(Point::new(0, 1), 9);
        let r = Pathfinder::new().find_path(&mut g, Algorithm::AStar);
        assert_eq!(r.path, pts(&[(0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn heuristic_is_recorded_on_cells() {
        let mut g = grid3();
        Pathfinder::new().find_path(&mut g, Algorithm::AStar);
        let h = g.cell(Point::new(1, 0)).map(|c| c.heuristic);
        assert_eq!(h, Some(Point::new(1, 0).euclidean(Point::new(2, 2))));
    }

    #[test]
    fn budget_matching_removals_is_not_exhausted() {
        // Two removals empty the open list before the wall at (2,0).
        let mut g = Grid::new(4, 1, 1.0);
        g.block(Point::new(2, 0));
        let r = Pathfinder::new()
            .with_step_budget(2)
            .find_path(&mut g, Algorithm::AStar);
        assert!(!r.found);
        assert!(!r.exhausted);
        assert_eq!(r.visit_order, pts(&[(0, 0), (1, 0)]));

        let r = Pathfinder::new()
            .with_step_budget(1)
            .find_path(&mut g, Algorithm::AStar);
        assert!(r.exhausted);
    }

    #[test]
    fn budget_matching_removals_reaches_finish() {
        let mut g = Grid::new(4, 1, 1.0);
        let mut pf = Pathfinder::new().with_step_budget(4);
        let r = pf.find_path(&mut g, Algorithm::AStar);
        assert!(r.found && !r.exhausted);
        assert_eq!(r.path, pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]));

        let r = Pathfinder::new()
            .with_step_budget(3)
            .find_path(&mut g, Algorithm::AStar);
        assert!(!r.found && r.exhausted);
    }
}
