//! **tilepath-core**: weighted tile grid graph (core types).
//!
//! This crate provides the types the searches in `tilepath-paths` run over:
//! geometry primitives, cost-carrying [`Cell`]s and the [`Grid`] that owns
//! them together with the start and finish designations.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, IMPASSABLE, MAX_COST, UNKNOWN_COST, clamp_cost};
pub use geom::{Point, Range, RangeIter, WorldPos};
pub use grid::Grid;
