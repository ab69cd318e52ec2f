//! The [`Cell`] type: one grid position with a traversal cost and
//! search-transient state.

use crate::geom::Point;

/// Cost marking a cell as impassable.
pub const IMPASSABLE: i32 = -1;

/// Highest cost a cell can be painted with.
pub const MAX_COST: i32 = 10;

/// Sentinel for [`Cell::best_known_cost`] before a search reaches the cell.
pub const UNKNOWN_COST: i32 = -1;

/// A grid cell.
///
/// The position is fixed at creation. `cost` is always within
/// [`IMPASSABLE`]`..=`[`MAX_COST`]; the remaining fields are scratch state
/// written by the searches and cleared by
/// [`Grid::reset_transient_state`](crate::Grid::reset_transient_state).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    cost: i32,
    pub(crate) neighbors: Vec<Point>,
    /// Finalized by the current search.
    pub visited: bool,
    /// A* score: straight-line distance to the finish when last relaxed.
    pub heuristic: f64,
    /// Dijkstra accumulated cost from the start, [`UNKNOWN_COST`] if unset.
    pub best_known_cost: i32,
    /// Cell this one was reached from, used to rebuild the path.
    pub parent: Option<Point>,
}

impl Cell {
    /// Create a fresh cell with the given cost (clamped) and no adjacency.
    pub fn new(pos: Point, cost: i32) -> Self {
        Self {
            pos,
            cost: clamp_cost(cost),
            neighbors: Vec::new(),
            visited: false,
            heuristic: 0.0,
            best_known_cost: UNKNOWN_COST,
            parent: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Traversal cost, or [`IMPASSABLE`].
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Whether the cell can be entered.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.cost != IMPASSABLE
    }

    /// Passable cardinal neighbours as of the last adjacency rebuild.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    pub(crate) fn set_cost(&mut self, cost: i32) {
        self.cost = clamp_cost(cost);
    }

    pub(crate) fn clear_search_state(&mut self) {
        self.visited = false;
        self.heuristic = 0.0;
        self.best_known_cost = UNKNOWN_COST;
        self.parent = None;
    }
}

/// Clamp a painted cost into the legal range.
#[inline]
pub fn clamp_cost(cost: i32) -> i32 {
    cost.clamp(IMPASSABLE, MAX_COST)
}
