//! Rectangular-base pyramid.

use crate::math::Real;

/// A rectangular-base pyramid along the z axis, apex up.
///
/// Like the cone, the frame spans `-height/2 ..= height/2` along z,
/// matching the renderer; the centroid is a quarter height below the
/// frame origin.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Pyramid {
    /// The base extent along x, in millimeters.
    pub base_width: Real,
    /// The base extent along y, in millimeters.
    pub base_depth: Real,
    /// The full height along z, in millimeters.
    pub height: Real,
}

impl Pyramid {
    /// Creates a new pyramid from its base extents and full height.
    #[inline]
    pub fn new(base_width: Real, base_depth: Real, height: Real) -> Pyramid {
        Pyramid {
            base_width,
            base_depth,
            height,
        }
    }

    /// The enclosed volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        self.base_width * self.base_depth * self.height / 3.0
    }

    /// The surface area (base rectangle plus four triangular faces),
    /// in mm².
    pub fn surface_area(&self) -> Real {
        let (w, d, h) = (self.base_width, self.base_depth, self.height);
        // Slant heights of the two face pairs.
        let sw = (h * h + d * d / 4.0).sqrt();
        let sd = (h * h + w * w / 4.0).sqrt();
        w * d + w * sw + d * sd
    }
}
