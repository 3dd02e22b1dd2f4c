use crate::mass_properties::MassProperties;
use crate::math::{Real, Vector};
use crate::shape::Bolt;

impl MassProperties {
    /// Computes the mass properties of a bolt.
    ///
    /// The bolt is a composite of two coaxial cylinders, head below
    /// shank, centered on the combined mid-height. Each component's
    /// properties are computed with the shared density, then combined
    /// about the mass-weighted center of mass with parallel-axis
    /// transfer of the transverse terms.
    pub fn from_bolt(density: Real, bolt: &Bolt) -> Self {
        let half_total = bolt.total_height() / 2.0;
        let head_center = -half_total + bolt.head_height / 2.0;
        let shank_center = half_total - bolt.length / 2.0;

        let head = MassProperties::from_cylinder(density, &bolt.head())
            .translated(Vector::new(0.0, 0.0, head_center));
        let shank = MassProperties::from_cylinder(density, &bolt.shank())
            .translated(Vector::new(0.0, 0.0, shank_center));

        head + shank
    }
}
