//! Paired sample grid and contour engine.
//!
//! Callers that own the grid and engine separately must remember to follow
//! every mutation with the matching `on_sample_changed` call. `ContourMap`
//! owns both and routes mutation through that pair in one place, so the
//! cached geometry cannot go stale.

use crate::error::Result;
use crate::fill::SampleFill;
use crate::marching::{CaseCode, ContourEngine, Segment};
use crate::sample_grid::SampleGrid;

/// A sample grid and the engine tracking it, kept consistent by
/// construction.
#[derive(Clone, Debug)]
pub struct ContourMap {
    samples: SampleGrid,
    engine: ContourEngine,
}

impl ContourMap {
    /// Map over a zeroed grid. Every cell is case 0, so no rebuild is
    /// needed.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            samples: SampleGrid::new(width, height),
            engine: ContourEngine::new(width, height),
        }
    }

    /// Map over a zeroed grid emitting world units (`cell_size` per cell).
    pub fn with_cell_size(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            samples: SampleGrid::new(width, height),
            engine: ContourEngine::with_cell_size(width, height, cell_size),
        }
    }

    /// Map over a grid filled by `rule`, with all cells computed.
    pub fn from_fn(width: usize, height: usize, rule: impl FnMut(usize, usize) -> bool) -> Self {
        Self::from_grid(SampleGrid::from_fn(width, height, rule), 1.0)
    }

    /// Map over a grid filled by a fill policy, with all cells computed.
    pub fn from_fill(width: usize, height: usize, fill: &mut impl SampleFill) -> Self {
        Self::from_fn(width, height, |x, y| fill.bit(x, y))
    }

    /// Take ownership of an existing grid and compute every cell.
    pub fn from_grid(samples: SampleGrid, cell_size: f32) -> Self {
        let mut engine =
            ContourEngine::with_cell_size(samples.width(), samples.height(), cell_size);
        engine
            .rebuild_all(&samples)
            .expect("engine sized to match the grid");
        Self { samples, engine }
    }

    /// Flip the sample at vertex (x, y) and refresh the cells around it.
    /// Returns the new sample value.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let bit = self.samples.toggle(x, y)?;
        self.engine.on_sample_changed(&self.samples, x, y)?;
        Ok(bit)
    }

    /// Overwrite the sample at vertex (x, y) and refresh the cells around it.
    pub fn set(&mut self, x: usize, y: usize, bit: bool) -> Result<()> {
        self.samples.set(x, y, bit)?;
        self.engine.on_sample_changed(&self.samples, x, y)
    }

    /// Number of cells along X.
    pub fn width(&self) -> usize {
        self.samples.width()
    }

    /// Number of cells along Y.
    pub fn height(&self) -> usize {
        self.samples.height()
    }

    pub fn samples(&self) -> &SampleGrid {
        &self.samples
    }

    pub fn engine(&self) -> &ContourEngine {
        &self.engine
    }

    /// Current segments of cell (x, y).
    pub fn segments_of(&self, x: usize, y: usize) -> Result<&[Segment]> {
        self.engine.segments_of(x, y)
    }

    /// Current case code of cell (x, y).
    pub fn case_of(&self, x: usize, y: usize) -> Result<CaseCode> {
        self.engine.case_of(&self.samples, x, y)
    }

    /// All stored segments, row-major across cells.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.engine.iter_segments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::RandomFill;

    #[test]
    fn test_new_map_has_no_segments() {
        let map = ContourMap::new(3, 3);
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 3);
        assert_eq!(map.iter_segments().count(), 0);
    }

    #[test]
    fn test_from_fn_computes_cells() {
        // Single set vertex at (1, 1) on a 2x2-cell grid: 4 segments
        let map = ContourMap::from_fn(2, 2, |x, y| (x, y) == (1, 1));
        assert_eq!(map.iter_segments().count(), 4);
        assert_eq!(map.case_of(0, 0).unwrap(), CaseCode(4));
        assert_eq!(map.case_of(1, 1).unwrap(), CaseCode(1));
    }

    #[test]
    fn test_toggle_keeps_map_consistent() {
        let mut map = ContourMap::from_fn(3, 2, |x, y| (x + y) % 3 == 1);

        assert!(map.toggle(1, 1).is_ok());
        assert!(map.toggle(3, 2).is_ok());
        assert!(map.toggle(0, 0).is_ok());

        // Every cell's stored segments match a fresh recomputation
        let fresh = ContourMap::from_fn(3, 2, |x, y| {
            let toggled = [(1, 1), (3, 2), (0, 0)].contains(&(x, y));
            ((x + y) % 3 == 1) != toggled
        });
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(
                    map.segments_of(x, y).unwrap(),
                    fresh.segments_of(x, y).unwrap(),
                    "cell ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_interior_toggle_two_by_two() {
        // Toggling the single shared interior vertex re-applies every
        // surrounding cell; the far corner vertices stay clear.
        let mut map = ContourMap::new(2, 2);
        map.toggle(1, 1).unwrap();

        for (x, y, code) in [(0, 0, 4), (1, 0, 8), (1, 1, 1), (0, 1, 2)] {
            assert_eq!(map.case_of(x, y).unwrap(), CaseCode(code));
            assert_eq!(map.segments_of(x, y).unwrap().len(), 1);
        }
        assert_eq!(map.samples().count_set(), 1);
    }

    #[test]
    fn test_set_routes_update() {
        let mut map = ContourMap::new(1, 1);
        map.set(0, 0, true).unwrap();
        assert_eq!(map.case_of(0, 0).unwrap(), CaseCode(1));
        assert_eq!(map.segments_of(0, 0).unwrap().len(), 1);

        // Setting the same value again is harmless
        map.set(0, 0, true).unwrap();
        assert_eq!(map.segments_of(0, 0).unwrap().len(), 1);
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut map = ContourMap::new(2, 2);
        assert!(map.toggle(1, 1).unwrap());
        assert!(!map.toggle(1, 1).unwrap());
    }

    #[test]
    fn test_out_of_range_toggle() {
        let mut map = ContourMap::new(2, 2);
        assert!(map.toggle(3, 0).is_err());
        assert_eq!(map.iter_segments().count(), 0);
    }

    #[test]
    fn test_from_fill_is_deterministic() {
        let first = ContourMap::from_fill(8, 8, &mut RandomFill::new(7));
        let second = ContourMap::from_fill(8, 8, &mut RandomFill::new(7));

        for y in 0..=8 {
            for x in 0..=8 {
                assert_eq!(
                    first.samples().get(x, y).unwrap(),
                    second.samples().get(x, y).unwrap()
                );
            }
        }
        assert_eq!(
            first.iter_segments().count(),
            second.iter_segments().count()
        );
    }

    #[test]
    fn test_cell_size_flows_through() {
        let mut map = ContourMap::with_cell_size(2, 2, 20.0);
        map.toggle(1, 1).unwrap();

        // Cell (1, 1) is case 1: bottom-mid (30, 20) to left-mid (20, 30)
        let segments = map.segments_of(1, 1).unwrap();
        assert_eq!(segments[0].start, glam::Vec2::new(30.0, 20.0));
        assert_eq!(segments[0].end, glam::Vec2::new(20.0, 30.0));
    }
}
