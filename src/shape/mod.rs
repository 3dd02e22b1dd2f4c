//! Shape specifications and the parametric primitives they resolve to.

pub use self::bolt::Bolt;
pub use self::cone::Cone;
pub use self::cuboid::Cuboid;
pub use self::cylinder::{Cylinder, HollowCylinder};
pub use self::defaults::{defaults, ResolvedParams};
pub use self::prism::Prism;
pub use self::pyramid::Pyramid;
pub use self::solid::Solid;
pub use self::spec::{ShapeError, ShapeKind, ShapeSpec};
pub use self::sphere::Sphere;

mod bolt;
mod cone;
mod cuboid;
mod cylinder;
mod defaults;
mod prism;
mod pyramid;
mod solid;
mod spec;
mod sphere;
