/*!
massprops
=========

**massprops** turns a parametric description of a mechanical part
(shape type + dimensions + material) into its physical properties:
volume, surface area, mass, center of mass, and the diagonal of the
moment-of-inertia tensor about the part's local axes.

All dimensional inputs are millimeters. Results are reported in the
units the downstream analysis and visualization layers expect:
cm³ for volume, cm² for surface area, kg for mass, mm for the center
of mass, and kg·mm² for the inertia diagonal.

```
use massprops::shape::{ShapeKind, ShapeSpec};
use massprops::compute_properties;

let spec = ShapeSpec::new(ShapeKind::Cylinder)
    .with_param("radius", 25.0)
    .with_param("height", 100.0);
let props = compute_properties(&spec, "Aluminum").unwrap();
assert!((props.volume_cm3 - 196.35).abs() < 0.01);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

extern crate nalgebra as na;
extern crate num_traits as num;

pub mod engine;
pub mod mass_properties;
pub mod material;
pub mod math;
pub mod shape;

pub use crate::engine::{
    compute_properties, EngineOptions, MaterialMode, PartProperties, PropertiesEngine,
};
pub use crate::mass_properties::MassProperties;
pub use crate::material::{Material, MaterialCatalog};
pub use crate::shape::{ShapeError, ShapeKind, ShapeSpec};
