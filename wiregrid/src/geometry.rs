//! Grid geometry primitives.
//!
//! Everything the editor places lives on an integer pixel grid. Node
//! positions and wire waypoints are quantized to the active cell size at
//! every write, so downstream consumers can rely on grid alignment
//! without re-checking it.

use serde::{Deserialize, Serialize};

/// Grid cell size used when no explicit configuration is supplied (px).
pub const DEFAULT_CELL_SIZE: i32 = 20;

/// A point in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Sentinel returned when a geometry lookup cannot be resolved.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Quantize both coordinates to the nearest multiple of `cell_size`.
    pub fn snapped(self, cell_size: i32) -> Self {
        Self {
            x: snap(self.x, cell_size),
            y: snap(self.y, cell_size),
        }
    }

    /// True when both coordinates are multiples of `cell_size`.
    pub fn is_aligned(self, cell_size: i32) -> bool {
        self.x % cell_size == 0 && self.y % cell_size == 0
    }
}

/// Round `raw` to the nearest multiple of `cell_size`.
///
/// Halfway values round away from zero, matching `f64::round`.
pub fn snap(raw: i32, cell_size: i32) -> i32 {
    debug_assert!(cell_size > 0);
    ((raw as f64 / cell_size as f64).round() as i32) * cell_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_cell() {
        assert_eq!(snap(0, 20), 0);
        assert_eq!(snap(9, 20), 0);
        assert_eq!(snap(10, 20), 20);
        assert_eq!(snap(29, 20), 20);
        assert_eq!(snap(31, 20), 40);
        assert_eq!(snap(40, 20), 40);
    }

    #[test]
    fn snap_handles_negative_coordinates() {
        assert_eq!(snap(-9, 20), 0);
        assert_eq!(snap(-11, 20), -20);
        assert_eq!(snap(-20, 20), -20);
    }

    #[test]
    fn snapped_point_is_aligned() {
        let p = Point::new(133, -47).snapped(20);
        assert_eq!(p, Point::new(140, -40));
        assert!(p.is_aligned(20));
    }

    #[test]
    fn already_aligned_point_is_unchanged() {
        let p = Point::new(240, 80);
        assert_eq!(p.snapped(20), p);
    }
}
