use tilepath_core::{Grid, Point, UNKNOWN_COST};

use crate::pathfinder::{PathResult, Pathfinder, trace_back};

impl Pathfinder {
    /// Dijkstra-style cost flood from `start`. Both endpoints are passable and
    /// distinct.
    ///
    /// The open set is a plain FIFO queue rather than a priority queue, and
    /// the search drains every reachable cell instead of stopping at the
    /// finish. Each unvisited neighbour is pushed onto the visit order every
    /// time it is scanned, so cells appear once per edge through which they
    /// were reached first. After the run each reached cell holds its
    /// accumulated cost in [`best_known_cost`](tilepath_core::Cell::best_known_cost).
    pub(crate) fn dijkstra(&mut self, grid: &mut Grid, start: Point, finish: Point) -> PathResult {
        let mut queue = std::mem::take(&mut self.queue);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        queue.clear();
        queue.push_back(start);
        if let Some(c) = grid.cell_mut(start) {
            c.best_known_cost = 0;
        }

        let mut visit_order = Vec::new();
        let mut found = false;
        let mut exhausted = false;
        let mut steps = 0usize;

        loop {
            let Some(current) = queue.pop_front() else {
                break;
            };
            if self.out_of_steps(steps) {
                exhausted = true;
                break;
            }
            steps += 1;

            let current_cost = match grid.cell_mut(current) {
                Some(c) => {
                    c.visited = true;
                    c.best_known_cost
                }
                None => continue,
            };
            log::trace!("Dijkstra expanding {current} at cost {current_cost}");

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(current));

            for &np in nbuf.iter() {
                let Some(n) = grid.cell_mut(np) else {
                    continue;
                };
                if n.visited {
                    continue;
                }
                if np == finish {
                    found = true;
                }
                if !queue.contains(&np) {
                    queue.push_back(np);
                }
                let tentative = accumulate(current_cost, n.cost());
                if n.best_known_cost == UNKNOWN_COST || tentative < n.best_known_cost {
                    n.best_known_cost = tentative;
                    n.parent = Some(current);
                }
                visit_order.push(np);
            }
        }

        self.queue = queue;
        self.nbuf = nbuf;

        if exhausted {
            return PathResult::out_of_budget(visit_order);
        }
        if !found {
            return PathResult::not_found(visit_order);
        }
        PathResult::found(trace_back(grid, start, finish), visit_order)
    }
}

/// Add a step cost to an accumulated cost, saturating at `i32::MAX`.
#[inline]
fn accumulate(total: i32, step: i32) -> i32 {
    total.saturating_add(step)
}
