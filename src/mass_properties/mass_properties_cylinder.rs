use crate::mass_properties::{MassProperties, DENSITY_KG_M3_TO_KG_MM3};
use crate::math::{Point, PrincipalInertia, Real};
use crate::shape::{Cylinder, HollowCylinder};

impl MassProperties {
    pub(crate) fn cylinder_unit_inertia(radius: Real, height: Real) -> PrincipalInertia {
        let sq_radius = radius * radius;
        let sq_height = height * height;
        let off_principal = (3.0 * sq_radius + sq_height) / 12.0;
        PrincipalInertia::new(off_principal, off_principal, sq_radius / 2.0)
    }

    /// Computes the mass properties of a solid cylinder along z.
    pub fn from_cylinder(density: Real, cylinder: &Cylinder) -> Self {
        let mass = cylinder.volume() * density * DENSITY_KG_M3_TO_KG_MM3;
        let unit_i = Self::cylinder_unit_inertia(cylinder.radius, cylinder.height);
        Self::new(Point::origin(), mass, unit_i * mass)
    }

    /// Computes the mass properties of a hollow cylinder along z.
    ///
    /// The annulus is its own primitive with its own closed form:
    /// `Izz/m = (r² + rᵢ²)/2` and
    /// `Ixx/m = Iyy/m = (3(r² + rᵢ²) + h²)/12`. Subtracting the
    /// finished inertias of an outer and an inner cylinder computed
    /// from their own masses would not give this result and is not
    /// what happens here.
    pub fn from_hollow_cylinder(density: Real, cylinder: &HollowCylinder) -> Self {
        let mass = cylinder.volume() * density * DENSITY_KG_M3_TO_KG_MM3;
        let sq_sum = cylinder.outer_radius * cylinder.outer_radius
            + cylinder.inner_radius * cylinder.inner_radius;
        let sq_height = cylinder.height * cylinder.height;
        let off_principal = (3.0 * sq_sum + sq_height) / 12.0;
        let unit_i = PrincipalInertia::new(off_principal, off_principal, sq_sum / 2.0);
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
