//! Per-cell contour geometry with incremental recomputation.
//!
//! The engine caches one segment list per cell and keeps it consistent with
//! a [`SampleGrid`] through explicit invalidation: `recompute_cell` for one
//! cell, `on_sample_changed` for the cells around a flipped vertex,
//! `rebuild_all` after the grid is created or replaced. A cell's list is
//! always replaced wholesale, never patched.

use glam::Vec2;
use log::{debug, trace};

use crate::error::{GridError, Result};
use crate::sample_grid::SampleGrid;

use super::cases::{crossings, CaseCode};
use super::types::Segment;

/// Cached contour geometry for every cell of a sample grid.
///
/// Cells are addressed by (x, y) with x in [0, width) and y in [0, height);
/// cell (x, y) is bounded by the lattice vertices (x, y), (x+1, y),
/// (x+1, y+1) and (x, y+1). Segment lists live in a flat array
/// (`y * width + x`).
///
/// The engine borrows the grid per call instead of owning it: data flows
/// from grid to engine only. Both must share dimensions; a mismatched grid
/// surfaces as `OutOfRange` from the corner reads.
#[derive(Clone, Debug)]
pub struct ContourEngine {
    width: usize,
    height: usize,
    /// World units per cell, applied to every emitted endpoint.
    cell_size: f32,
    cells: Vec<Vec<Segment>>,
}

impl ContourEngine {
    /// Engine emitting unit-cell coordinates (cell size 1).
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_cell_size(width, height, 1.0)
    }

    /// Engine whose output is scaled by `cell_size` world units per cell.
    pub fn with_cell_size(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            cells: vec![Vec::new(); width * height],
        }
    }

    /// Number of cells along X.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along Y.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn cell_index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfRange {
                x,
                y,
                max_x: self.width.saturating_sub(1),
                max_y: self.height.saturating_sub(1),
            });
        }
        Ok(y * self.width + x)
    }

    /// Case code of cell (x, y) read straight from the grid.
    ///
    /// Rendering collaborators should consume [`ContourEngine::segments_of`]
    /// instead; this accessor exists for tests and diagnostics.
    pub fn case_of(&self, samples: &SampleGrid, x: usize, y: usize) -> Result<CaseCode> {
        self.cell_index(x, y)?;
        Ok(CaseCode::from_corners(
            samples.get(x, y)?,
            samples.get(x + 1, y)?,
            samples.get(x + 1, y + 1)?,
            samples.get(x, y + 1)?,
        ))
    }

    /// Recompute the segment list of cell (x, y) from its four corner samples.
    ///
    /// Idempotent: repeat calls without an intervening sample change produce
    /// the identical segment sequence.
    pub fn recompute_cell(&mut self, samples: &SampleGrid, x: usize, y: usize) -> Result<()> {
        let code = self.case_of(samples, x, y)?;
        let index = y * self.width + x;
        let origin = Vec2::new(x as f32, y as f32) * self.cell_size;

        let lines = &mut self.cells[index];
        lines.clear();
        for &(a, b) in crossings(code) {
            lines.push(Segment::new(
                origin + a.unit_offset() * self.cell_size,
                origin + b.unit_offset() * self.cell_size,
            ));
        }
        Ok(())
    }

    /// Recompute every cell that has lattice vertex (x, y) as a corner.
    ///
    /// At most four cells share a vertex; neighbors falling off the grid
    /// edge are skipped. This is the only update path needed after a
    /// mutation. Call it once per changed vertex, after the corresponding
    /// `set`/`toggle`; batched toggles may run their updates in any order.
    ///
    /// Errors only when the vertex itself is off the lattice.
    pub fn on_sample_changed(&mut self, samples: &SampleGrid, x: usize, y: usize) -> Result<()> {
        // Validate against the vertex lattice before touching neighbors.
        samples.get(x, y)?;

        let neighbors = [
            (x.checked_sub(1), y.checked_sub(1)),
            (Some(x), y.checked_sub(1)),
            (Some(x), Some(y)),
            (x.checked_sub(1), Some(y)),
        ];
        for neighbor in neighbors {
            if let (Some(cx), Some(cy)) = neighbor {
                if cx < self.width && cy < self.height {
                    self.recompute_cell(samples, cx, cy)?;
                }
            }
        }
        trace!("sample ({x}, {y}) changed, neighboring cells recomputed");
        Ok(())
    }

    /// Recompute every cell. Used once after the grid is (re)created or
    /// fully replaced; incremental edits go through
    /// [`ContourEngine::on_sample_changed`].
    pub fn rebuild_all(&mut self, samples: &SampleGrid) -> Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.recompute_cell(samples, x, y)?;
            }
        }
        debug!(
            "rebuilt {}x{} cells, {} segments",
            self.width,
            self.height,
            self.segment_count()
        );
        Ok(())
    }

    /// Current segments of cell (x, y).
    ///
    /// Reflects the most recent recomputation touching the cell, or the
    /// empty slice if the cell was never computed.
    pub fn segments_of(&self, x: usize, y: usize) -> Result<&[Segment]> {
        let index = self.cell_index(x, y)?;
        Ok(&self.cells[index])
    }

    /// All stored segments, row-major across cells.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.cells.iter().flat_map(|lines| lines.iter().copied())
    }

    /// Total stored segment count across all cells.
    pub fn segment_count(&self) -> usize {
        self.cells.iter().map(|lines| lines.len()).sum()
    }
}
