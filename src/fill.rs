//! Initial-fill policies for sample grids.
//!
//! A fill supplies the starting bit for every lattice vertex. The grid
//! itself stays agnostic of where its initial values come from; these types
//! plug into `SampleGrid::from_fn` or `ContourMap::from_fill`.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of initial sample bits, evaluated once per lattice vertex.
pub trait SampleFill {
    fn bit(&mut self, x: usize, y: usize) -> bool;
}

impl<F: FnMut(usize, usize) -> bool> SampleFill for F {
    fn bit(&mut self, x: usize, y: usize) -> bool {
        self(x, y)
    }
}

/// Seeded uniform random fill: each vertex is set with probability
/// `density`, independently of its coordinate.
pub struct RandomFill {
    rng: ChaCha8Rng,
    density: f64,
}

impl RandomFill {
    /// Fair coin per vertex.
    pub fn new(seed: u64) -> Self {
        Self::with_density(seed, 0.5)
    }

    pub fn with_density(seed: u64, density: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            density: density.clamp(0.0, 1.0),
        }
    }
}

impl SampleFill for RandomFill {
    fn bit(&mut self, _x: usize, _y: usize) -> bool {
        self.rng.gen_bool(self.density)
    }
}

/// Fractal-noise fill: a vertex is set where the noise field rises above
/// `threshold`. Produces blobby connected regions instead of speckle.
pub struct NoiseFill {
    fbm: Fbm<Perlin>,
    threshold: f64,
}

impl NoiseFill {
    /// Noise field sampled at vertex coordinates scaled by `frequency`.
    /// Fbm output lives in roughly [-1, 1]; `threshold` 0.0 splits the
    /// lattice about evenly. `frequency` must not be a whole number, or
    /// every octave lands on the Perlin lattice and reads 0.
    pub fn new(seed: u32, frequency: f64, threshold: f64) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(3)
            .set_frequency(frequency);
        Self { fbm, threshold }
    }
}

impl SampleFill for NoiseFill {
    fn bit(&mut self, x: usize, y: usize) -> bool {
        self.fbm.get([x as f64, y as f64]) > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_grid::SampleGrid;

    fn fill_grid(fill: &mut impl SampleFill, width: usize, height: usize) -> SampleGrid {
        SampleGrid::from_fn(width, height, |x, y| fill.bit(x, y))
    }

    #[test]
    fn test_random_fill_deterministic() {
        let a = fill_grid(&mut RandomFill::new(42), 8, 8);
        let b = fill_grid(&mut RandomFill::new(42), 8, 8);
        for y in 0..=8 {
            for x in 0..=8 {
                assert_eq!(a.get(x, y).unwrap(), b.get(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_random_fill_density_extremes() {
        let empty = fill_grid(&mut RandomFill::with_density(1, 0.0), 5, 5);
        assert_eq!(empty.count_set(), 0);

        let full = fill_grid(&mut RandomFill::with_density(1, 1.0), 5, 5);
        assert_eq!(full.count_set(), 6 * 6);
    }

    #[test]
    fn test_random_fill_seed_changes_output() {
        let a = fill_grid(&mut RandomFill::new(1), 16, 16);
        let b = fill_grid(&mut RandomFill::new(2), 16, 16);
        let differs = (0..=16)
            .flat_map(|y| (0..=16).map(move |x| (x, y)))
            .any(|(x, y)| a.get(x, y).unwrap() != b.get(x, y).unwrap());
        assert!(differs);
    }

    #[test]
    fn test_noise_fill_deterministic() {
        let a = fill_grid(&mut NoiseFill::new(3, 0.13, 0.0), 10, 10);
        let b = fill_grid(&mut NoiseFill::new(3, 0.13, 0.0), 10, 10);
        for y in 0..=10 {
            for x in 0..=10 {
                assert_eq!(a.get(x, y).unwrap(), b.get(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_noise_fill_threshold_extremes() {
        // Fbm output stays well inside [-2, 2]
        let empty = fill_grid(&mut NoiseFill::new(3, 0.13, 2.0), 6, 6);
        assert_eq!(empty.count_set(), 0);

        let full = fill_grid(&mut NoiseFill::new(3, 0.13, -2.0), 6, 6);
        assert_eq!(full.count_set(), 7 * 7);
    }

    #[test]
    fn test_closure_fill() {
        let grid = fill_grid(&mut |x: usize, _y: usize| x == 0, 3, 3);
        assert_eq!(grid.count_set(), 4);
    }
}
