use crate::mass_properties::{MassProperties, DENSITY_KG_M3_TO_KG_MM3};
use crate::math::{Point, PrincipalInertia, Real};
use crate::shape::Pyramid;

impl MassProperties {
    pub(crate) fn pyramid_unit_inertia(
        base_width: Real,
        base_depth: Real,
        height: Real,
    ) -> PrincipalInertia {
        let sq_w = base_width * base_width;
        let sq_d = base_depth * base_depth;
        let sq_h = height * height;
        PrincipalInertia::new(
            sq_d / 20.0 + sq_h * 3.0 / 80.0,
            sq_w / 20.0 + sq_h * 3.0 / 80.0,
            (sq_w + sq_d) / 20.0,
        )
    }

    /// Computes the mass properties of a rectangular-base pyramid
    /// along z, apex up.
    ///
    /// Same frame convention as the cone: the centroid sits at `-h/4`
    /// and the inertia diagonal is about the centroidal axes.
    pub fn from_pyramid(density: Real, pyramid: &Pyramid) -> Self {
        let mass = pyramid.volume() * density * DENSITY_KG_M3_TO_KG_MM3;
        let unit_i =
            Self::pyramid_unit_inertia(pyramid.base_width, pyramid.base_depth, pyramid.height);
        Self::new(
            Point::new(0.0, 0.0, -pyramid.height / 4.0),
            mass,
            unit_i * mass,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_pyramid_spin_inertia_is_m_a2_over_10() {
        let density = 7850.0;
        let props = MassProperties::from_pyramid(density, &Pyramid::new(30.0, 30.0, 40.0));
        assert_relative_eq!(
            props.principal_inertia.z,
            props.mass * 30.0 * 30.0 / 10.0,
            max_relative = 1.0e-12
        );
    }
}
