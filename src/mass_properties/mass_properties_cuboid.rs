use crate::mass_properties::{MassProperties, DENSITY_KG_M3_TO_KG_MM3};
use crate::math::{Point, PrincipalInertia, Real, Vector};
use crate::shape::Cuboid;

impl MassProperties {
    pub(crate) fn cuboid_unit_inertia(extents: &Vector) -> PrincipalInertia {
        let sq = extents.component_mul(extents);
        PrincipalInertia::new(
            (sq.y + sq.z) / 12.0,
            (sq.x + sq.z) / 12.0,
            (sq.x + sq.y) / 12.0,
        )
    }

    /// Computes the mass properties of a cuboid.
    pub fn from_cuboid(density: Real, cuboid: &Cuboid) -> Self {
        let mass = cuboid.volume() * density * DENSITY_KG_M3_TO_KG_MM3;
        let unit_i = Self::cuboid_unit_inertia(&cuboid.extents);
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
