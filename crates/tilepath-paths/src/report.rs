use std::fmt;

use tilepath_core::Grid;

use crate::PathResult;

/// Condensed figures for one search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Length of the visit order, duplicates included.
    pub visited_count: usize,
    /// Number of cells on the path.
    pub path_len: usize,
    /// Sum of the costs of the path cells, start included.
    pub total_cost: i64,
}

impl Summary {
    /// Summarize `result` using the current costs of `grid`.
    pub fn new(grid: &Grid, result: &PathResult) -> Self {
        Self {
            visited_count: result.visit_order.len(),
            path_len: result.path.len(),
            total_cost: result.path.iter().map(|&p| i64::from(grid.cost(p))).sum(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visited tiles count: {}", self.visited_count)?;
        writeln!(f, "Path tiles count: {}", self.path_len)?;
        write!(f, "Found path cost: {}", self.total_cost)
    }
}
