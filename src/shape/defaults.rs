//! Default substitution for partially specified shapes.
//!
//! The defaults are the ones the external mesh generator uses for the
//! same part types. Keeping the two tables identical is part of the
//! geometry contract: reported mass properties must describe the same
//! solid the viewer displays.
//!
//! Defaulting is a step of its own, separate from validation, so that
//! each can be audited independently: [`ResolvedParams::resolve`]
//! produces the fully substituted record, and only then does
//! [`crate::shape::Solid::from_spec`] range-check it.

use std::collections::HashMap;

use crate::math::Real;
use crate::shape::{ShapeError, ShapeKind, ShapeSpec};

/// The static default dimensions (mm, except `teeth`) for a part type.
pub fn defaults(kind: ShapeKind) -> &'static [(&'static str, Real)] {
    match kind {
        ShapeKind::Cube => &[("size", 50.0)],
        ShapeKind::Cuboid => &[("width", 50.0), ("height", 30.0), ("depth", 10.0)],
        ShapeKind::Cylinder => &[("radius", 12.5), ("height", 100.0)],
        ShapeKind::Sphere => &[("radius", 25.0)],
        ShapeKind::Cone => &[("radius", 25.0), ("height", 50.0)],
        ShapeKind::Pyramid => &[
            ("baseWidth", 30.0),
            ("baseDepth", 30.0),
            ("height", 40.0),
        ],
        ShapeKind::Prism => &[
            ("baseWidth", 30.0),
            ("baseHeight", 30.0),
            ("length", 50.0),
        ],
        ShapeKind::Gear => &[("radius", 25.0), ("thickness", 10.0), ("teeth", 20.0)],
        ShapeKind::Bearing => &[
            ("outerRadius", 30.0),
            ("innerRadius", 15.0),
            ("thickness", 15.0),
        ],
        ShapeKind::Bolt => &[
            ("radius", 4.0),
            ("length", 30.0),
            ("headRadius", 6.0),
            ("headHeight", 3.0),
        ],
        ShapeKind::Shaft => &[("radius", 12.5), ("length", 100.0)],
        ShapeKind::Bracket => &[("width", 50.0), ("height", 50.0), ("thickness", 10.0)],
        ShapeKind::Plate => &[("width", 100.0), ("height", 100.0), ("thickness", 5.0)],
    }
}

/// A shape's parameter record after default substitution.
///
/// Parameters the caller supplied win over defaults; parameter names
/// not used by the shape are ignored.
#[derive(Clone, Debug)]
pub struct ResolvedParams {
    kind: ShapeKind,
    values: HashMap<&'static str, Real>,
}

impl ResolvedParams {
    /// Applies the defaults table (and the derived defaults below) to
    /// `spec`, producing the record validation runs against.
    ///
    /// Derived defaults, resolved after the static table:
    /// - hollow cylinder `innerRadius` defaults to half the resolved
    ///   outer radius;
    /// - gear `boreRadius` defaults to 0.2 × the resolved blank radius
    ///   (the bore the mesh generator cuts).
    pub fn resolve(spec: &ShapeSpec) -> Self {
        let mut values = HashMap::new();

        for &(name, default) in defaults(spec.kind) {
            let value = spec.parameters.get(name).copied().unwrap_or(default);
            let _ = values.insert(name, value);
        }

        match spec.kind {
            ShapeKind::Cylinder if spec.hollow => {
                let inner = spec
                    .parameters
                    .get("innerRadius")
                    .copied()
                    .unwrap_or_else(|| values["radius"] / 2.0);
                let _ = values.insert("innerRadius", inner);
            }
            ShapeKind::Gear => {
                let bore = spec
                    .parameters
                    .get("boreRadius")
                    .copied()
                    .unwrap_or_else(|| values["radius"] * 0.2);
                let _ = values.insert("boreRadius", bore);
            }
            _ => {}
        }

        Self {
            kind: spec.kind,
            values,
        }
    }

    /// The shape type this record was resolved for.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Fetches a required, strictly positive dimension.
    pub fn positive(&self, name: &'static str) -> Result<Real, ShapeError> {
        let value = self
            .values
            .get(name)
            .copied()
            .ok_or_else(|| ShapeError::missing(self.kind, name))?;
        // NaN fails the comparison and is rejected alongside <= 0.
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(ShapeError::non_positive(self.kind, name, value))
        }
    }

    /// Fetches a dimension that may be zero but not negative
    /// (currently only the gear bore).
    pub fn non_negative(&self, name: &'static str) -> Result<Real, ShapeError> {
        let value = self
            .values
            .get(name)
            .copied()
            .ok_or_else(|| ShapeError::missing(self.kind, name))?;
        if value >= 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(ShapeError::InvalidParameter {
                kind: self.kind,
                name,
                reason: format!("{value} must not be negative"),
            })
        }
    }
}
