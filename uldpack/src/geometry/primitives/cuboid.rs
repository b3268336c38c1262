use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Dims, Point};

/// Geometric primitive representing an axis-aligned cuboid.
/// Occupies the half-open box `[x_min, x_max) × [y_min, y_max) × [z_min, z_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cuboid {
    pub x_min: u32,
    pub y_min: u32,
    pub z_min: u32,
    pub x_max: u32,
    pub y_max: u32,
    pub z_max: u32,
}

impl Cuboid {
    pub fn try_new(
        x_min: u32,
        y_min: u32,
        z_min: u32,
        x_max: u32,
        y_max: u32,
        z_max: u32,
    ) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max && z_min < z_max,
            "invalid cuboid, x: [{x_min}, {x_max}), y: [{y_min}, {y_max}), z: [{z_min}, {z_max})"
        );
        Ok(Cuboid {
            x_min,
            y_min,
            z_min,
            x_max,
            y_max,
            z_max,
        })
    }

    pub fn new(x_min: u32, y_min: u32, z_min: u32, x_max: u32, y_max: u32, z_max: u32) -> Self {
        debug_assert!(
            x_min < x_max && y_min < y_max && z_min < z_max,
            "invalid cuboid, x: [{x_min}, {x_max}), y: [{y_min}, {y_max}), z: [{z_min}, {z_max})"
        );
        Cuboid {
            x_min,
            y_min,
            z_min,
            x_max,
            y_max,
            z_max,
        }
    }

    /// Cuboid with its origin corner at `origin`, extending `dims` along the positive axes
    pub fn from_origin(origin: Point, dims: Dims) -> Self {
        let Point(x, y, z) = origin;
        Cuboid::new(
            x,
            y,
            z,
            x + dims.length,
            y + dims.width,
            z + dims.height,
        )
    }

    pub fn dims(&self) -> Dims {
        Dims {
            length: self.x_max - self.x_min,
            width: self.y_max - self.y_min,
            height: self.z_max - self.z_min,
        }
    }

    /// True if `other` lies completely inside `self` (shared faces allowed)
    pub fn encloses(&self, other: &Cuboid) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.z_min <= other.z_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
            && self.z_max >= other.z_max
    }

    /// True if the projections of both cuboids on the xy-plane overlap.
    pub fn footprint_overlaps(&self, other: &Cuboid) -> bool {
        self.x_min < other.x_max
            && other.x_min < self.x_max
            && self.y_min < other.y_max
            && other.y_min < self.y_max
    }

    /// Origin and far corner as `[x0, y0, z0, x1, y1, z1]`
    pub fn corners(&self) -> [u32; 6] {
        [
            self.x_min, self.y_min, self.z_min, self.x_max, self.y_max, self.z_max,
        ]
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        self.footprint_overlaps(other) && self.z_min < other.z_max && other.z_min < self.z_max
    }
}

impl Shape for Cuboid {
    fn volume(&self) -> u64 {
        self.dims().volume()
    }
}

impl Display for Cuboid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({}, {}, {}) - ({}, {}, {})]",
            self.x_min, self.y_min, self.z_min, self.x_max, self.y_max, self.z_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_faces_do_not_collide() {
        let a = Cuboid::new(0, 0, 0, 10, 10, 10);
        let b = Cuboid::new(10, 0, 0, 20, 10, 10);
        let c = Cuboid::new(0, 0, 10, 10, 10, 20);
        assert!(!a.collides_with(&b));
        assert!(!b.collides_with(&a));
        assert!(!a.collides_with(&c));
    }

    #[test]
    fn partial_intersection_collides() {
        let a = Cuboid::new(0, 0, 0, 10, 10, 10);
        let b = Cuboid::new(9, 9, 9, 12, 12, 12);
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn overlap_on_two_axes_only() {
        let a = Cuboid::new(0, 0, 0, 10, 10, 10);
        let b = Cuboid::new(5, 5, 15, 8, 8, 20);
        assert!(a.footprint_overlaps(&b));
        assert!(!a.collides_with(&b));
    }

    #[test]
    fn try_new_rejects_degenerate() {
        assert!(Cuboid::try_new(0, 0, 0, 0, 1, 1).is_err());
        assert!(Cuboid::try_new(0, 0, 0, 1, 1, 1).is_ok());
    }
}
