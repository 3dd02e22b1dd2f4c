//! Aliases for the mathematical types used throughout this crate.

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The point type, in millimeters.
pub type Point = na::Point3<Real>;

/// The vector type.
pub type Vector = na::Vector3<Real>;

/// The diagonal of a principal angular inertia tensor, in kg·mm².
pub type PrincipalInertia = na::Vector3<Real>;
