//! Sphere.

use std::f64::consts::PI;

use crate::math::Real;

/// A sphere centered on the origin.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The radius, in millimeters.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere from its radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere { radius }
    }

    /// The enclosed volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        4.0 / 3.0 * PI * self.radius * self.radius * self.radius
    }

    /// The surface area, in mm².
    #[inline]
    pub fn surface_area(&self) -> Real {
        4.0 * PI * self.radius * self.radius
    }
}
