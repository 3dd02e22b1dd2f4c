use crate::mass_properties::{MassProperties, DENSITY_KG_M3_TO_KG_MM3};
use crate::math::{Point, PrincipalInertia, Real};
use crate::shape::Cone;

impl MassProperties {
    pub(crate) fn cone_unit_inertia(radius: Real, height: Real) -> PrincipalInertia {
        let sq_radius = radius * radius;
        let sq_height = height * height;
        let off_principal = sq_radius * 3.0 / 20.0 + sq_height * 3.0 / 80.0;
        let principal = sq_radius * 3.0 / 10.0;
        PrincipalInertia::new(off_principal, off_principal, principal)
    }

    /// Computes the mass properties of a cone along z, apex up.
    ///
    /// The frame spans `-h/2 ..= h/2` along z; the centroid, a quarter
    /// height up from the base, therefore sits at `-h/4`. The inertia
    /// diagonal is about the centroidal axes.
    pub fn from_cone(density: Real, cone: &Cone) -> Self {
        let mass = cone.volume() * density * DENSITY_KG_M3_TO_KG_MM3;
        let unit_i = Self::cone_unit_inertia(cone.radius, cone.height);
        Self::new(
            Point::new(0.0, 0.0, -cone.height / 4.0),
            mass,
            unit_i * mass,
        )
    }
}
