//! Resolution of a raw [`ShapeSpec`] into a validated primitive solid.

use crate::mass_properties::MassProperties;
use crate::math::Real;
use crate::shape::{
    Bolt, Cone, Cuboid, Cylinder, HollowCylinder, Prism, Pyramid, ResolvedParams, ShapeError,
    ShapeKind, ShapeSpec, Sphere,
};

/// A fully validated solid, ready for property computation.
///
/// Every part type of the catalog resolves onto one of these
/// primitives: `cube`, `bracket` and `plate` are cuboids, `shaft` is a
/// cylinder, `bearing` and bored gears are hollow cylinders. The enum
/// is closed and dispatch over it is exhaustive, so an unsupported
/// type can only fail loudly at resolution, never fall through to a
/// default shape.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Solid {
    /// A rectangular box.
    Cuboid(Cuboid),
    /// A solid cylinder.
    Cylinder(Cylinder),
    /// An annular cylinder.
    HollowCylinder(HollowCylinder),
    /// A sphere.
    Sphere(Sphere),
    /// A circular cone.
    Cone(Cone),
    /// A rectangular-base pyramid.
    Pyramid(Pyramid),
    /// A triangular prism.
    Prism(Prism),
    /// A two-cylinder bolt.
    Bolt(Bolt),
}

impl Solid {
    /// Resolves and validates a shape specification.
    ///
    /// Defaults are substituted first (see
    /// [`crate::shape::defaults`]), then every dimension the resolved
    /// primitive requires is checked to be strictly positive, and
    /// cavity radii are checked against their outer radii. The first
    /// violation is reported as [`ShapeError::InvalidParameter`]
    /// naming the offending field.
    pub fn from_spec(spec: &ShapeSpec) -> Result<Solid, ShapeError> {
        if spec.hollow && spec.kind != ShapeKind::Cylinder {
            return Err(ShapeError::InvalidParameter {
                kind: spec.kind,
                name: "isHollow",
                reason: "hollow variants are only supported for cylinders".to_owned(),
            });
        }

        let p = ResolvedParams::resolve(spec);

        let solid = match spec.kind {
            ShapeKind::Cube => {
                let size = p.positive("size")?;
                Solid::Cuboid(Cuboid::new(size, size, size))
            }
            ShapeKind::Cuboid => Solid::Cuboid(Cuboid::new(
                p.positive("width")?,
                p.positive("height")?,
                p.positive("depth")?,
            )),
            ShapeKind::Cylinder => {
                let radius = p.positive("radius")?;
                let height = p.positive("height")?;
                if spec.hollow {
                    let inner = p.positive("innerRadius")?;
                    check_cavity(spec.kind, "innerRadius", inner, radius)?;
                    Solid::HollowCylinder(HollowCylinder::new(radius, inner, height))
                } else {
                    Solid::Cylinder(Cylinder::new(radius, height))
                }
            }
            ShapeKind::Sphere => Solid::Sphere(Sphere::new(p.positive("radius")?)),
            ShapeKind::Cone => {
                Solid::Cone(Cone::new(p.positive("radius")?, p.positive("height")?))
            }
            ShapeKind::Pyramid => Solid::Pyramid(Pyramid::new(
                p.positive("baseWidth")?,
                p.positive("baseDepth")?,
                p.positive("height")?,
            )),
            ShapeKind::Prism => Solid::Prism(Prism::new(
                p.positive("baseWidth")?,
                p.positive("baseHeight")?,
                p.positive("length")?,
            )),
            ShapeKind::Gear => {
                let radius = p.positive("radius")?;
                let thickness = p.positive("thickness")?;
                let _teeth = p.positive("teeth")?;
                let bore = p.non_negative("boreRadius")?;
                if bore > 0.0 {
                    check_cavity(spec.kind, "boreRadius", bore, radius)?;
                    Solid::HollowCylinder(HollowCylinder::new(radius, bore, thickness))
                } else {
                    Solid::Cylinder(Cylinder::new(radius, thickness))
                }
            }
            ShapeKind::Bearing => {
                let outer = p.positive("outerRadius")?;
                let inner = p.positive("innerRadius")?;
                let thickness = p.positive("thickness")?;
                check_cavity(spec.kind, "innerRadius", inner, outer)?;
                Solid::HollowCylinder(HollowCylinder::new(outer, inner, thickness))
            }
            ShapeKind::Bolt => Solid::Bolt(Bolt::new(
                p.positive("radius")?,
                p.positive("length")?,
                p.positive("headRadius")?,
                p.positive("headHeight")?,
            )),
            ShapeKind::Shaft => Solid::Cylinder(Cylinder::new(
                p.positive("radius")?,
                p.positive("length")?,
            )),
            ShapeKind::Bracket | ShapeKind::Plate => Solid::Cuboid(Cuboid::new(
                p.positive("width")?,
                p.positive("height")?,
                p.positive("thickness")?,
            )),
        };

        Ok(solid)
    }

    /// The enclosed volume, in mm³.
    pub fn volume(&self) -> Real {
        match self {
            Solid::Cuboid(s) => s.volume(),
            Solid::Cylinder(s) => s.volume(),
            Solid::HollowCylinder(s) => s.volume(),
            Solid::Sphere(s) => s.volume(),
            Solid::Cone(s) => s.volume(),
            Solid::Pyramid(s) => s.volume(),
            Solid::Prism(s) => s.volume(),
            Solid::Bolt(s) => s.volume(),
        }
    }

    /// The surface area, in mm².
    pub fn surface_area(&self) -> Real {
        match self {
            Solid::Cuboid(s) => s.surface_area(),
            Solid::Cylinder(s) => s.surface_area(),
            Solid::HollowCylinder(s) => s.surface_area(),
            Solid::Sphere(s) => s.surface_area(),
            Solid::Cone(s) => s.surface_area(),
            Solid::Pyramid(s) => s.surface_area(),
            Solid::Prism(s) => s.surface_area(),
            Solid::Bolt(s) => s.surface_area(),
        }
    }

    /// The mass properties of the solid for the given density (kg/m³).
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        match self {
            Solid::Cuboid(s) => MassProperties::from_cuboid(density, s),
            Solid::Cylinder(s) => MassProperties::from_cylinder(density, s),
            Solid::HollowCylinder(s) => MassProperties::from_hollow_cylinder(density, s),
            Solid::Sphere(s) => MassProperties::from_sphere(density, s),
            Solid::Cone(s) => MassProperties::from_cone(density, s),
            Solid::Pyramid(s) => MassProperties::from_pyramid(density, s),
            Solid::Prism(s) => MassProperties::from_prism(density, s),
            Solid::Bolt(s) => MassProperties::from_bolt(density, s),
        }
    }
}

fn check_cavity(
    kind: ShapeKind,
    name: &'static str,
    inner: Real,
    outer: Real,
) -> Result<(), ShapeError> {
    if inner < outer {
        Ok(())
    } else {
        Err(ShapeError::InvalidParameter {
            kind,
            name,
            reason: format!("{inner} must be strictly less than the outer radius {outer}"),
        })
    }
}

#[cfg(test)]
mod test {
    use super::Solid;
    use crate::shape::{ShapeError, ShapeKind, ShapeSpec};

    #[test]
    fn every_kind_resolves_from_defaults_alone() {
        for kind in ShapeKind::ALL {
            let spec = ShapeSpec::new(kind);
            assert!(
                Solid::from_spec(&spec).is_ok(),
                "kind {kind} did not resolve from defaults"
            );
        }
    }

    #[test]
    fn cube_and_shaft_resolve_to_primitives() {
        let cube = Solid::from_spec(&ShapeSpec::new(ShapeKind::Cube)).unwrap();
        assert!(matches!(cube, Solid::Cuboid(c) if c.extents.x == 50.0));

        let shaft = Solid::from_spec(&ShapeSpec::new(ShapeKind::Shaft)).unwrap();
        assert!(matches!(shaft, Solid::Cylinder(c) if c.radius == 12.5 && c.height == 100.0));
    }

    #[test]
    fn hollow_rejects_inner_not_below_outer() {
        let spec = ShapeSpec::new(ShapeKind::Cylinder)
            .with_param("radius", 10.0)
            .with_param("innerRadius", 10.0)
            .hollow();
        let err = Solid::from_spec(&spec).unwrap_err();
        assert!(
            matches!(err, ShapeError::InvalidParameter { name, .. } if name == "innerRadius")
        );
    }

    #[test]
    fn hollow_flag_is_cylinder_only() {
        let spec = ShapeSpec::new(ShapeKind::Sphere).hollow();
        let err = Solid::from_spec(&spec).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { name, .. } if name == "isHollow"));
    }

    #[test]
    fn gear_resolves_to_its_bored_blank() {
        let gear = Solid::from_spec(&ShapeSpec::new(ShapeKind::Gear)).unwrap();
        assert!(matches!(
            gear,
            Solid::HollowCylinder(c)
                if c.outer_radius == 25.0 && c.inner_radius == 5.0 && c.height == 10.0
        ));

        let solid_gear =
            Solid::from_spec(&ShapeSpec::new(ShapeKind::Gear).with_param("boreRadius", 0.0))
                .unwrap();
        assert!(matches!(solid_gear, Solid::Cylinder(_)));
    }

    #[test]
    fn negative_dimension_names_the_field() {
        let spec = ShapeSpec::new(ShapeKind::Cone).with_param("height", -1.0);
        match Solid::from_spec(&spec) {
            Err(ShapeError::InvalidParameter { kind, name, .. }) => {
                assert_eq!(kind, ShapeKind::Cone);
                assert_eq!(name, "height");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
