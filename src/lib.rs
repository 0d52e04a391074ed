//! Incremental marching-squares contour extraction over a binary grid.
//!
//! A [`SampleGrid`] holds one bit per lattice vertex; a [`ContourEngine`]
//! caches the contour segments of every cell between those vertices and
//! recomputes only the cells touching a vertex that changed:
//! - [`ContourEngine::rebuild_all`] once after the grid is created,
//! - [`ContourEngine::on_sample_changed`] after each single-sample edit,
//! - [`ContourEngine::segments_of`] to read geometry out.
//!
//! [`ContourMap`] pairs the two and routes every mutation through the
//! update path. The fill and world modules supply initial-fill policies and
//! world-space picking for interactive hosts; the core never depends on
//! them.

mod contour_map;
mod error;
mod fill;
mod marching;
mod sample_grid;
mod world;

pub use contour_map::ContourMap;
pub use error::{GridError, Result};
pub use fill::{NoiseFill, RandomFill, SampleFill};
pub use marching::{crossings, CaseCode, ContourEngine, EdgePoint, Segment};
pub use sample_grid::SampleGrid;
pub use world::{Boundary, WorldLayout};
