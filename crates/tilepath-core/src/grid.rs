//! The [`Grid`] type: a fixed-size weighted graph of [`Cell`]s with
//! 4-neighbour adjacency.
//!
//! Cells are stored row-major in a flat vector. Adjacency is not kept up to
//! date automatically: call [`Grid::rebuild_adjacency`] after painting costs
//! and before searching.

use crate::cell::{Cell, IMPASSABLE, UNKNOWN_COST};
use crate::geom::{Point, Range, WorldPos};

/// Cell size used when a non-positive one is requested.
pub const DEFAULT_CELL_SIZE: f32 = 1.0;

/// A width×height grid of weighted cells with designated start and finish.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    cell_size: f32,
    start: Point,
    finish: Point,
}

impl Grid {
    /// Create a grid of the given dimensions with every cost at 0.
    ///
    /// Negative dimensions are treated as 0. The start is the bottom-left
    /// cell and the finish the top-right one.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            log::warn!("cell size {cell_size} is not positive, using {DEFAULT_CELL_SIZE}");
            DEFAULT_CELL_SIZE
        };
        let cells = bounds.iter().map(|p| Cell::new(p, 0)).collect();
        let finish = bounds.clamp(bounds.max.shift(-1, -1));
        Self {
            cells,
            bounds,
            cell_size,
            start: Point::ZERO,
            finish,
        }
    }

    /// The bounding range, `(0,0)` to `(width,height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// World units covered by one cell side.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Row-major flat index of `p`, `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width() as usize) + p.x as usize)
    }

    /// The cell at `p`, if in bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    ///
    /// Only the search-transient fields are public on [`Cell`]; cost and
    /// adjacency go through the grid.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Traversal cost at `p`. Out-of-range coordinates read as 0.
    #[inline]
    pub fn cost(&self, p: Point) -> i32 {
        self.cell(p).map_or(0, Cell::cost)
    }

    /// Whether `p` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_valid)
    }

    /// Set the cost at `p`, clamped to `-1..=10`. No-op outside the grid.
    pub fn set_cost(&mut self, p: Point, cost: i32) {
        if let Some(c) = self.cell_mut(p) {
            c.set_cost(cost);
        }
    }

    /// Add `delta` to the cost at `p`, clamping the result.
    pub fn paint(&mut self, p: Point, delta: i32) {
        let cost = self.cost(p).saturating_add(delta);
        self.set_cost(p, cost);
    }

    /// Mark `p` impassable.
    pub fn block(&mut self, p: Point) {
        self.set_cost(p, IMPASSABLE);
    }

    /// Passable cardinal neighbours of `p` as of the last rebuild.
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.cell(p) {
            Some(c) => c.neighbors(),
            None => &[],
        }
    }

    /// Recompute every cell's neighbour set from the current costs.
    ///
    /// Only in-bounds, passable neighbours are linked. Impassable cells still
    /// get a neighbour list of their own; they are simply never linked to.
    /// Also forgets any Dijkstra cost left over from a previous run.
    pub fn rebuild_adjacency(&mut self) {
        let mut links = 0usize;
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let mut neighbors = std::mem::take(&mut self.cells[i].neighbors);
            neighbors.clear();
            neighbors.extend(
                p.cardinal()
                    .into_iter()
                    .filter(|&n| self.is_passable(n)),
            );
            links += neighbors.len();
            let cell = &mut self.cells[i];
            cell.neighbors = neighbors;
            cell.best_known_cost = UNKNOWN_COST;
        }
        log::debug!(
            "rebuilt adjacency for {}x{} grid: {links} directed links",
            self.width(),
            self.height()
        );
    }

    /// Clear the search scratch state of every cell. Costs are untouched.
    pub fn reset_transient_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear_search_state();
        }
    }

    /// Replace every cell with a fresh zero-cost one without adjacency.
    ///
    /// Dimensions, start and finish are kept.
    pub fn reset_costs(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::new(c.pos(), 0);
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Point the start at `p`, clamped into the grid.
    pub fn set_start(&mut self, p: Point) {
        self.start = self.bounds.clamp(p);
    }

    /// Point the finish at `p`, clamped into the grid.
    pub fn set_finish(&mut self, p: Point) {
        self.finish = self.bounds.clamp(p);
    }

    // -----------------------------------------------------------------------
    // World mapping
    // -----------------------------------------------------------------------

    /// The cell containing a world position. May lie outside the grid.
    pub fn world_to_cell(&self, pos: WorldPos) -> Point {
        Point::new(
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// Lower-left corner of cell `p` in world units.
    pub fn cell_to_world(&self, p: Point) -> WorldPos {
        WorldPos::new(p.x as f32 * self.cell_size, p.y as f32 * self.cell_size)
    }

    /// Centre of cell `p` in world units.
    pub fn cell_center(&self, p: Point) -> WorldPos {
        let corner = self.cell_to_world(p);
        let half = self.cell_size * 0.5;
        WorldPos::new(corner.x + half, corner.y + half)
    }

    /// Centre of the whole grid in world units.
    pub fn center(&self) -> WorldPos {
        WorldPos::new(
            self.width() as f32 / 2.0 * self.cell_size,
            self.height() as f32 / 2.0 * self.cell_size,
        )
    }

    /// Horizontal world extent (width × truncated cell size), saturating at
    /// `i32::MAX`.
    pub fn extent(&self) -> i32 {
        self.width().saturating_mul(self.cell_size as i32)
    }

    /// Cost of the cell under a world position, 0 outside the grid.
    pub fn cost_at(&self, pos: WorldPos) -> i32 {
        self.cost(self.world_to_cell(pos))
    }

    /// [`paint`](Self::paint) the cell under a world position.
    pub fn paint_at(&mut self, pos: WorldPos, delta: i32) {
        let p = self.world_to_cell(pos);
        self.paint(p, delta);
    }
}
