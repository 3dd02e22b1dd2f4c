//! Circular cone.

use std::f64::consts::PI;

use crate::math::Real;

/// A circular cone along the z axis, apex up.
///
/// The geometric frame is the renderer's: the shape spans
/// `-height/2 ..= height/2` along z, so the centroid sits a quarter
/// height below the frame origin.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// The base radius, in millimeters.
    pub radius: Real,
    /// The full height along z, in millimeters.
    pub height: Real,
}

impl Cone {
    /// Creates a new cone from its base radius and full height.
    #[inline]
    pub fn new(radius: Real, height: Real) -> Cone {
        Cone { radius, height }
    }

    /// The slant height of the lateral surface, in millimeters.
    #[inline]
    pub fn slant_height(&self) -> Real {
        (self.radius * self.radius + self.height * self.height).sqrt()
    }

    /// The enclosed volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        PI * self.radius * self.radius * self.height / 3.0
    }

    /// The surface area (base disk plus lateral surface), in mm².
    #[inline]
    pub fn surface_area(&self) -> Real {
        PI * self.radius * (self.radius + self.slant_height())
    }
}
