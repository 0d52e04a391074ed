//! The 16-case marching squares table.
//!
//! A cell's four corner samples form a 4-bit code; each code maps to zero,
//! one, or two edge crossings. Complementary codes (c and 15 - c) place the
//! same segments, except the two saddle codes 5 and 10 where diagonal
//! corners disagree in both directions. Those are resolved to the fixed
//! non-crossing pair of separating segments; there is no value-based
//! disambiguation.
//!
//! This table is the single authority: geometry computation and any drawing
//! layer both consume it, so the two cannot drift.

use glam::Vec2;

/// 4-bit marching squares configuration.
///
/// Bit layout: bottom-left = bit 0, bottom-right = bit 1,
/// top-right = bit 2, top-left = bit 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CaseCode(pub u8); // 0-15

impl CaseCode {
    #[must_use]
    pub fn from_corners(
        bottom_left: bool,
        bottom_right: bool,
        top_right: bool,
        top_left: bool,
    ) -> Self {
        let mut code = 0u8;
        if bottom_left {
            code |= 1;
        }
        if bottom_right {
            code |= 1 << 1;
        }
        if top_right {
            code |= 1 << 2;
        }
        if top_left {
            code |= 1 << 3;
        }
        Self(code)
    }

    /// Code with every corner sample flipped.
    #[must_use]
    pub fn complement(self) -> Self {
        Self(15 - self.0)
    }

    /// True for the two ambiguous diagonal configurations (5 and 10).
    #[must_use]
    pub fn is_saddle(self) -> bool {
        matches!(self.0, 5 | 10)
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The four edge midpoints of a cell, usable as segment endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgePoint {
    Bottom,
    Left,
    Right,
    Top,
}

impl EdgePoint {
    /// Midpoint position within a unit cell, origin at the bottom-left corner.
    #[must_use]
    pub fn unit_offset(self) -> Vec2 {
        match self {
            EdgePoint::Bottom => Vec2::new(0.5, 0.0),
            EdgePoint::Left => Vec2::new(0.0, 0.5),
            EdgePoint::Right => Vec2::new(1.0, 0.5),
            EdgePoint::Top => Vec2::new(0.5, 1.0),
        }
    }
}

use EdgePoint::{Bottom, Left, Right, Top};

/// Edge crossings per case code, in emit order.
const CROSSINGS: [&[(EdgePoint, EdgePoint)]; 16] = [
    &[],                             // 0: all clear
    &[(Bottom, Left)],               // 1
    &[(Bottom, Right)],              // 2
    &[(Left, Right)],                // 3
    &[(Right, Top)],                 // 4
    &[(Right, Top), (Bottom, Left)], // 5: saddle
    &[(Bottom, Top)],                // 6
    &[(Left, Top)],                  // 7
    &[(Left, Top)],                  // 8
    &[(Bottom, Top)],                // 9
    &[(Bottom, Right), (Left, Top)], // 10: saddle
    &[(Right, Top)],                 // 11
    &[(Left, Right)],                // 12
    &[(Bottom, Right)],              // 13
    &[(Bottom, Left)],               // 14
    &[],                             // 15: all set
];

/// The edge crossings a case code produces, as ordered endpoint pairs.
#[must_use]
pub fn crossings(code: CaseCode) -> &'static [(EdgePoint, EdgePoint)] {
    CROSSINGS[code.as_usize()]
}
