//! World-space layout for a contour grid.
//!
//! Converts between world positions and lattice vertices for pointer-driven
//! editing, and computes the world rectangle that contains the whole grid.
//! The core engine never depends on this module; hosts that do their own
//! coordinate handling can ignore it.

use glam::Vec2;

/// World-space layout: world units per cell plus the pick radius around
/// each vertex that accepts pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldLayout {
    pub cell_size: f32,
    pub pick_radius: f32,
}

impl WorldLayout {
    pub fn new(cell_size: f32, pick_radius: f32) -> Self {
        Self {
            cell_size,
            pick_radius,
        }
    }

    /// World position of lattice vertex (x, y).
    pub fn vertex_to_world(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(x as f32, y as f32) * self.cell_size
    }

    /// Nearest lattice vertex to a world position, for a grid of
    /// `width` x `height` cells.
    ///
    /// Rounds each axis to the nearest vertex, then requires the position to
    /// lie inside that vertex's pick circle. Returns `None` when the nearest
    /// vertex is off the lattice or the position misses the circle.
    pub fn pick_vertex(&self, position: Vec2, width: usize, height: usize) -> Option<(usize, usize)> {
        let gx = (position.x / self.cell_size + 0.5).floor();
        let gy = (position.y / self.cell_size + 0.5).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }

        let (x, y) = (gx as usize, gy as usize);
        if x > width || y > height {
            return None;
        }

        let center = self.vertex_to_world(x, y);
        if position.distance_squared(center) < self.pick_radius * self.pick_radius {
            Some((x, y))
        } else {
            None
        }
    }

    /// World rectangle containing the grid, inflated by the pick radius on
    /// every side so edge vertices stay reachable.
    pub fn boundary(&self, width: usize, height: usize) -> Boundary {
        let extent = Vec2::new(width as f32, height as f32) * self.cell_size;
        let size = extent + Vec2::splat(self.pick_radius) * 2.0;
        let min = extent * 0.5 - size * 0.5;
        Boundary {
            min,
            max: min + size,
        }
    }
}

/// Axis-aligned rectangle in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub min: Vec2,
    pub max: Vec2,
}

impl Boundary {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Corners in drawing order: min, bottom-right, max, top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}
