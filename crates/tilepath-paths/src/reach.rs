//! Reachability flood fill over a grid's adjacency.

use tilepath_core::{Grid, Point};

/// Every cell reachable from `from`, including `from` itself, in discovery
/// order.
///
/// Walks the adjacency built by the last
/// [`Grid::rebuild_adjacency`]; rebuild first if costs changed. Returns an
/// empty list if `from` is outside the grid or impassable.
pub fn reachable(grid: &Grid, from: Point) -> Vec<Point> {
    let mut result = Vec::new();
    let Some(si) = grid.index(from) else {
        return result;
    };
    if !grid.is_passable(from) {
        return result;
    }

    let mut seen = vec![false; grid.len()];
    let mut stack = vec![from];
    seen[si] = true;
    result.push(from);

    while let Some(cp) = stack.pop() {
        for &np in grid.neighbors(cp) {
            if let Some(ni) = grid.index(np) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(np);
                    result.push(np);
                }
            }
        }
    }

    result
}

/// Whether `to` can be reached from `from` under the current adjacency.
pub fn connected(grid: &Grid, from: Point, to: Point) -> bool {
    grid.is_passable(to) && reachable(grid, from).contains(&to)
}
