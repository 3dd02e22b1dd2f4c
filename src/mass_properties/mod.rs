//! Mass properties (mass, inertia, center-of-mass) of the primitive
//! solids.

pub use self::mass_properties::{MassProperties, DENSITY_KG_M3_TO_KG_MM3};

mod mass_properties;
mod mass_properties_bolt;
mod mass_properties_cone;
mod mass_properties_cuboid;
mod mass_properties_cylinder;
mod mass_properties_prism;
mod mass_properties_pyramid;
mod mass_properties_sphere;
