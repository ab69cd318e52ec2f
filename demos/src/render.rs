//! Plain-text rendering of a grid and a search result.
//!
//! One glyph per cell, top row first (Y grows up):
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `S` / `E` | start / finish |
//! | `#` | impassable cell |
//! | `*` | path cell |
//! | `.` | visited cell (or its Dijkstra cost with `show_costs`) |
//! | digit | untouched cell, showing its cost |

use std::fmt;
use std::fmt::Write as _;

use tilepath_core::{Grid, Point};
use tilepath_paths::PathResult;

/// What a single cell is drawn as.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Start,
    Finish,
    Wall,
    Path,
    Visited,
    /// A number: the painted cost, or the accumulated cost of a visited cell.
    Cost(i32),
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Start => f.pad("S"),
            Glyph::Finish => f.pad("E"),
            Glyph::Wall => f.pad("#"),
            Glyph::Path => f.pad("*"),
            Glyph::Visited => f.pad("."),
            Glyph::Cost(c) => f.pad(&c.to_string()),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    None,
    Visited,
    Path,
}

/// Renders grids, optionally overlaid with a search result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer {
    /// Draw visited cells as their `best_known_cost` instead of `.`.
    pub show_costs: bool,
}

impl Renderer {
    pub fn new(show_costs: bool) -> Self {
        Self { show_costs }
    }

    /// Glyphs for every cell, row-major from the bottom row.
    fn glyphs(&self, grid: &Grid, result: Option<&PathResult>) -> Vec<Glyph> {
        let mut marks = vec![Mark::None; grid.len()];
        if let Some(r) = result {
            for &p in &r.visit_order {
                if let Some(i) = grid.index(p) {
                    marks[i] = Mark::Visited;
                }
            }
            for &p in &r.path {
                if let Some(i) = grid.index(p) {
                    marks[i] = Mark::Path;
                }
            }
        }

        grid.cells()
            .zip(marks)
            .map(|(cell, mark)| {
                let p = cell.pos();
                if p == grid.start() {
                    Glyph::Start
                } else if p == grid.finish() {
                    Glyph::Finish
                } else if !cell.is_valid() {
                    Glyph::Wall
                } else {
                    match mark {
                        Mark::Path => Glyph::Path,
                        Mark::Visited if self.show_costs && cell.best_known_cost >= 0 => {
                            Glyph::Cost(cell.best_known_cost)
                        }
                        Mark::Visited => Glyph::Visited,
                        Mark::None => Glyph::Cost(cell.cost()),
                    }
                }
            })
            .collect()
    }

    /// The glyph drawn for `p`, `None` outside the grid.
    pub fn glyph_at(&self, grid: &Grid, result: Option<&PathResult>, p: Point) -> Option<Glyph> {
        let i = grid.index(p)?;
        self.glyphs(grid, result).get(i).copied()
    }

    /// Render the whole grid, top row first, cells right-aligned in columns
    /// wide enough for the widest glyph.
    pub fn render(&self, grid: &Grid, result: Option<&PathResult>) -> String {
        let glyphs = self.glyphs(grid, result);
        let col = glyphs
            .iter()
            .map(|g| g.to_string().chars().count())
            .max()
            .unwrap_or(1);
        let width = grid.width().max(0) as usize;

        let mut out = String::new();
        if width == 0 {
            return out;
        }
        for row in glyphs.chunks(width).rev() {
            let line = row
                .iter()
                .map(|g| format!("{g:>col$}"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "{line}");
        }
        out.pop();
        out
    }
}
