use crate::mass_properties::{MassProperties, DENSITY_KG_M3_TO_KG_MM3};
use crate::math::{Point, PrincipalInertia, Real};
use crate::shape::Sphere;

impl MassProperties {
    pub(crate) fn sphere_unit_inertia(radius: Real) -> PrincipalInertia {
        PrincipalInertia::repeat(radius * radius * 2.0 / 5.0)
    }

    /// Computes the mass properties of a sphere.
    pub fn from_sphere(density: Real, sphere: &Sphere) -> Self {
        let mass = sphere.volume() * density * DENSITY_KG_M3_TO_KG_MM3;
        let unit_i = Self::sphere_unit_inertia(sphere.radius);
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
