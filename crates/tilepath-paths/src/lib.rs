//! Pathfinding over a weighted tile grid.
//!
//! Two searches run over a [`tilepath_core::Grid`]:
//!
//! - **A\*** guided by straight-line distance to the finish
//!   ([`Algorithm::AStar`])
//! - **Dijkstra** accumulating cell costs from the start
//!   ([`Algorithm::Dijkstra`])
//!
//! Both go through [`Pathfinder`], which owns the scratch buffers so repeated
//! runs do not reallocate, and both return a [`PathResult`]: whether the
//! finish was reached, the path from start to finish, and the order in which
//! cells were visited. [`Summary`] condenses a result for reporting.
//!
//! A search never fails: an unreachable or impassable finish is an ordinary
//! `found == false` result.

mod algorithm;
mod astar;
mod dijkstra;
mod pathfinder;
mod reach;
mod report;

pub use algorithm::Algorithm;
pub use pathfinder::{PathResult, Pathfinder};
pub use reach::{connected, reachable};
pub use report::Summary;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use tilepath_core::Grid;

    #[test]
    fn algorithm_uses_selector_names() {
        let json = serde_json::to_string(&Algorithm::Dijkstra).unwrap();
        assert_eq!(json, "\"Djikstra\"");
        let back: Algorithm = serde_json::from_str("\"A*\"").unwrap();
        assert_eq!(back, Algorithm::AStar);
    }

    #[test]
    fn result_and_summary_round_trip() {
        let mut grid = Grid::new(3, 3, 1.0);
        let result = Pathfinder::new().find_path(&mut grid, Algorithm::AStar);
        let json = serde_json::to_string(&result).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);

        let summary = result.summary(&grid);
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(serde_json::from_str::<Summary>(&json).unwrap(), summary);
    }
}
