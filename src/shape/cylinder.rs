//! Solid and hollow circular cylinders.

use std::f64::consts::PI;

use crate::math::Real;

/// A solid cylinder along the z axis, centered on the origin.
///
/// Also the resolved form of the `shaft` part type and of gears with
/// no bore.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The radius, in millimeters.
    pub radius: Real,
    /// The full height along z, in millimeters.
    pub height: Real,
}

impl Cylinder {
    /// Creates a new cylinder from its radius and full height.
    #[inline]
    pub fn new(radius: Real, height: Real) -> Cylinder {
        Cylinder { radius, height }
    }

    /// The enclosed volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        PI * self.radius * self.radius * self.height
    }

    /// The surface area (lateral wall plus both caps), in mm².
    #[inline]
    pub fn surface_area(&self) -> Real {
        2.0 * PI * self.radius * (self.radius + self.height)
    }
}

/// A cylinder with a concentric cylindrical cavity removed.
///
/// The hollow variant is a primitive of its own: its volume and
/// inertia come from closed forms for the annular solid, never from
/// subtracting two independently massed cylinders (which is invalid
/// for inertia).
///
/// Also the resolved form of the `bearing` part type and of gears with
/// a bore.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct HollowCylinder {
    /// The outer radius, in millimeters.
    pub outer_radius: Real,
    /// The cavity radius, in millimeters. Strictly less than
    /// `outer_radius`.
    pub inner_radius: Real,
    /// The full height along z, in millimeters.
    pub height: Real,
}

impl HollowCylinder {
    /// Creates a new hollow cylinder.
    #[inline]
    pub fn new(outer_radius: Real, inner_radius: Real, height: Real) -> HollowCylinder {
        HollowCylinder {
            outer_radius,
            inner_radius,
            height,
        }
    }

    /// The enclosed (annular) volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        let ro = self.outer_radius;
        let ri = self.inner_radius;
        PI * (ro * ro - ri * ri) * self.height
    }

    /// The surface area: both annular ends plus the outer and inner
    /// walls, in mm².
    #[inline]
    pub fn surface_area(&self) -> Real {
        let ro = self.outer_radius;
        let ri = self.inner_radius;
        2.0 * PI * (ro * ro - ri * ri) + 2.0 * PI * self.height * (ro + ri)
    }
}
