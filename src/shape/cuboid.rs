//! Axis-aligned rectangular box.

use crate::math::{Real, Vector};

/// A rectangular box centered on the origin.
///
/// Also the resolved form of the `cube`, `bracket` and `plate` part
/// types.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The full extents along x, y and z, in millimeters.
    pub extents: Vector,
}

impl Cuboid {
    /// Creates a new box from its full extents.
    #[inline]
    pub fn new(width: Real, height: Real, depth: Real) -> Cuboid {
        Cuboid {
            extents: Vector::new(width, height, depth),
        }
    }

    /// The enclosed volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// The surface area, in mm².
    #[inline]
    pub fn surface_area(&self) -> Real {
        let e = &self.extents;
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }
}
