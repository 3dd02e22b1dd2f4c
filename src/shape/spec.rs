//! The raw shape specification handed to the engine by the input layer.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::math::Real;

/// The closed catalog of supported part types.
///
/// The legacy rendering pipeline silently rendered unknown types as a
/// box; here an unknown type is an explicit
/// [`ShapeError::UnsupportedShape`] instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ShapeKind {
    /// An axis-aligned cube.
    Cube,
    /// An axis-aligned rectangular box.
    Cuboid,
    /// A circular cylinder along the z axis, optionally hollow.
    Cylinder,
    /// A sphere.
    Sphere,
    /// A circular cone along the z axis, apex up.
    Cone,
    /// A rectangular-base pyramid along the z axis, apex up.
    Pyramid,
    /// A triangular prism extruded along the z axis.
    Prism,
    /// A spur gear blank (ring with a central bore).
    Gear,
    /// A bearing race (ring).
    Bearing,
    /// A bolt: cylindrical head and shank stacked along the z axis.
    Bolt,
    /// A cylindrical shaft.
    Shaft,
    /// A rectangular mounting bracket.
    Bracket,
    /// A rectangular plate.
    Plate,
}

impl ShapeKind {
    /// All supported part types.
    pub const ALL: [ShapeKind; 13] = [
        ShapeKind::Cube,
        ShapeKind::Cuboid,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
        ShapeKind::Prism,
        ShapeKind::Gear,
        ShapeKind::Bearing,
        ShapeKind::Bolt,
        ShapeKind::Shaft,
        ShapeKind::Bracket,
        ShapeKind::Plate,
    ];

    /// The wire name of this shape type (also accepted by [`FromStr`]).
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cuboid => "cuboid",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cone => "cone",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Prism => "prism",
            ShapeKind::Gear => "gear",
            ShapeKind::Bearing => "bearing",
            ShapeKind::Bolt => "bolt",
            ShapeKind::Shaft => "shaft",
            ShapeKind::Bracket => "bracket",
            ShapeKind::Plate => "plate",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, ShapeError> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| ShapeError::UnsupportedShape(s.to_owned()))
    }
}

/// A parametric description of a solid, independent of material.
///
/// Parameters are named dimensions in millimeters. Missing parameters
/// are substituted from the per-shape defaults shared with the mesh
/// generation collaborator (see [`crate::shape::defaults`]), so a
/// partially specified record still resolves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ShapeSpec {
    /// The part type.
    #[cfg_attr(feature = "serde-serialize", serde(rename = "type"))]
    pub kind: ShapeKind,
    /// Named dimensions in millimeters.
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub parameters: HashMap<String, Real>,
    /// Requests the hollow variant of the shape (cylinders only).
    #[cfg_attr(
        feature = "serde-serialize",
        serde(rename = "isHollow", default)
    )]
    pub hollow: bool,
}

impl ShapeSpec {
    /// Creates a spec with no explicit parameters; everything resolves
    /// from defaults.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            parameters: HashMap::new(),
            hollow: false,
        }
    }

    /// Sets a named dimension (millimeters).
    pub fn with_param(mut self, name: impl Into<String>, value: Real) -> Self {
        let _ = self.parameters.insert(name.into(), value);
        self
    }

    /// Marks the spec as hollow.
    pub fn hollow(mut self) -> Self {
        self.hollow = true;
        self
    }
}

/// Failure modes of spec resolution and property computation.
///
/// Every failure is deterministic for a given input; nothing here is
/// retryable.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The shape type string is not in the supported catalog.
    #[error("unsupported shape type `{0}`")]
    UnsupportedShape(String),

    /// A dimension is missing with no default, out of range, or
    /// inconsistent with another dimension.
    #[error("invalid parameter `{name}` for shape `{kind}`: {reason}")]
    InvalidParameter {
        /// The shape being resolved.
        kind: ShapeKind,
        /// The offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The material name is not in the catalog (strict mode only; the
    /// default lenient mode substitutes structural steel instead).
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),
}

impl ShapeError {
    pub(crate) fn non_positive(kind: ShapeKind, name: &'static str, value: Real) -> Self {
        ShapeError::InvalidParameter {
            kind,
            name,
            reason: format!("{value} must be strictly positive"),
        }
    }

    pub(crate) fn missing(kind: ShapeKind, name: &'static str) -> Self {
        ShapeError::InvalidParameter {
            kind,
            name,
            reason: "missing and no default is defined".to_owned(),
        }
    }
}
