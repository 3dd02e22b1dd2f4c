use crate::mass_properties::{MassProperties, DENSITY_KG_M3_TO_KG_MM3};
use crate::math::{Point, PrincipalInertia, Real};
use crate::shape::Prism;

impl MassProperties {
    pub(crate) fn prism_unit_inertia(
        base_width: Real,
        base_height: Real,
        length: Real,
    ) -> PrincipalInertia {
        // Radii of gyration of the isoceles cross-section about its
        // centroid: b²/18 across the triangle height, w²/24 across the
        // base; the extrusion contributes the usual L²/12.
        let sq_w = base_width * base_width;
        let sq_b = base_height * base_height;
        let sq_l = length * length;
        PrincipalInertia::new(
            sq_b / 18.0 + sq_l / 12.0,
            sq_w / 24.0 + sq_l / 12.0,
            sq_b / 18.0 + sq_w / 24.0,
        )
    }

    /// Computes the mass properties of a triangular prism extruded
    /// along z.
    ///
    /// The cross-section's centroid is a sixth of the triangle height
    /// below the renderer's triangle frame origin.
    pub fn from_prism(density: Real, prism: &Prism) -> Self {
        let mass = prism.volume() * density * DENSITY_KG_M3_TO_KG_MM3;
        let unit_i = Self::prism_unit_inertia(prism.base_width, prism.base_height, prism.length);
        Self::new(
            Point::new(0.0, -prism.base_height / 6.0, 0.0),
            mass,
            unit_i * mass,
        )
    }
}
