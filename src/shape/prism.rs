//! Triangular prism.

use crate::math::Real;

/// A prism with an isoceles-triangle cross-section, extruded along z.
///
/// The cross-section sits in the renderer's triangle frame: apex at
/// `+base_height/2`, base corners at `-base_height/2`. In that frame
/// the centroid of the triangle is at `-base_height/6` along y.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Prism {
    /// The triangle base width along x, in millimeters.
    pub base_width: Real,
    /// The triangle height along y, in millimeters.
    pub base_height: Real,
    /// The extrusion length along z, in millimeters.
    pub length: Real,
}

impl Prism {
    /// Creates a new prism from its cross-section and length.
    #[inline]
    pub fn new(base_width: Real, base_height: Real, length: Real) -> Prism {
        Prism {
            base_width,
            base_height,
            length,
        }
    }

    /// The cross-section area, in mm².
    #[inline]
    pub fn cross_section_area(&self) -> Real {
        self.base_width * self.base_height / 2.0
    }

    /// The enclosed volume, in mm³.
    #[inline]
    pub fn volume(&self) -> Real {
        self.cross_section_area() * self.length
    }

    /// The surface area (two triangular ends plus three rectangular
    /// walls), in mm².
    pub fn surface_area(&self) -> Real {
        let (w, b, l) = (self.base_width, self.base_height, self.length);
        let slant = (w * w / 4.0 + b * b).sqrt();
        w * b + (w + 2.0 * slant) * l
    }
}
