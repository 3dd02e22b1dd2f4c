//! Bolt: cylindrical head and shank stacked along the z axis.

use std::f64::consts::PI;

use crate::math::Real;
use crate::shape::Cylinder;

/// A bolt approximated as two coaxial cylinders: a wider head below a
/// narrower shank, matching the mesh generator's silhouette. The
/// combined part is centered on its overall mid-height, head down.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Bolt {
    /// The shank radius, in millimeters.
    pub radius: Real,
    /// The shank length, in millimeters.
    pub length: Real,
    /// The head radius, in millimeters.
    pub head_radius: Real,
    /// The head height, in millimeters.
    pub head_height: Real,
}

impl Bolt {
    /// Creates a new bolt.
    #[inline]
    pub fn new(radius: Real, length: Real, head_radius: Real, head_height: Real) -> Bolt {
        Bolt {
            radius,
            length,
            head_radius,
            head_height,
        }
    }

    /// The shank component.
    #[inline]
    pub fn shank(&self) -> Cylinder {
        Cylinder::new(self.radius, self.length)
    }

    /// The head component.
    #[inline]
    pub fn head(&self) -> Cylinder {
        Cylinder::new(self.head_radius, self.head_height)
    }

    /// The overall height of head plus shank, in millimeters.
    #[inline]
    pub fn total_height(&self) -> Real {
        self.length + self.head_height
    }

    /// The enclosed volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        self.shank().volume() + self.head().volume()
    }

    /// The exposed surface area, in mm².
    ///
    /// Counts both lateral walls, the head's bottom cap, the shank's
    /// top cap, and the annular shoulder where the shank meets the
    /// head. The interface disk itself is interior and not counted.
    pub fn surface_area(&self) -> Real {
        let r = self.radius;
        let rh = self.head_radius;
        let lateral = 2.0 * PI * (r * self.length + rh * self.head_height);
        let caps = PI * (rh * rh + r * r);
        let shoulder = PI * (rh * rh - r * r).abs();
        lateral + caps + shoulder
    }
}
