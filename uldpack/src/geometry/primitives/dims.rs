use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Extents of a cuboid along the x (length), y (width) and z (height) axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl Dims {
    pub fn new(length: u32, width: u32, height: u32) -> Self {
        assert!(
            length > 0 && width > 0 && height > 0,
            "extents must be positive: {length}x{width}x{height}"
        );
        Dims {
            length,
            width,
            height,
        }
    }

    /// True if a cuboid with these extents fits in one with `other`'s extents, axis by axis (no rotation)
    pub fn fits_within(&self, other: &Dims) -> bool {
        self.length <= other.length && self.width <= other.width && self.height <= other.height
    }

    pub fn volume(&self) -> u64 {
        self.length as u64 * self.width as u64 * self.height as u64
    }
}

impl Display for Dims {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}
