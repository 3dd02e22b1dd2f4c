//! Properties that must hold across the whole shape catalog.

use approx::assert_relative_eq;
use massprops::compute_properties;
use massprops::shape::{ShapeKind, ShapeSpec};

/// mm³→m³ applied to a cm³ figure.
const CM3_TO_M3: f64 = 1.0e-6;

#[test]
fn mass_is_density_times_volume_for_every_kind() {
    for kind in ShapeKind::ALL {
        let p = compute_properties(&ShapeSpec::new(kind), "Titanium").unwrap();
        assert_relative_eq!(
            p.mass_kg,
            p.volume_cm3 * CM3_TO_M3 * 4500.0,
            max_relative = 1.0e-12
        );
    }
}

#[test]
fn properties_are_positive_for_every_kind() {
    for kind in ShapeKind::ALL {
        let p = compute_properties(&ShapeSpec::new(kind), "Steel").unwrap();
        assert!(p.volume_cm3 > 0.0, "{kind}: volume");
        assert!(p.surface_area_cm2 > 0.0, "{kind}: area");
        assert!(p.mass_kg > 0.0, "{kind}: mass");
        assert!(
            p.ixx >= 0.0 && p.iyy >= 0.0 && p.izz >= 0.0,
            "{kind}: inertia"
        );
    }
}

#[test]
fn axisymmetric_shapes_have_equal_transverse_inertia() {
    for kind in [
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Gear,
        ShapeKind::Bearing,
        ShapeKind::Bolt,
        ShapeKind::Shaft,
    ] {
        let p = compute_properties(&ShapeSpec::new(kind), "Steel").unwrap();
        assert_eq!(p.ixx, p.iyy, "{kind}");
    }
}

#[test]
fn volume_scales_cubically_and_area_quadratically() {
    let base = ShapeSpec::new(ShapeKind::Cone)
        .with_param("radius", 10.0)
        .with_param("height", 24.0);
    let scaled = ShapeSpec::new(ShapeKind::Cone)
        .with_param("radius", 30.0)
        .with_param("height", 72.0);

    let p1 = compute_properties(&base, "Steel").unwrap();
    let p3 = compute_properties(&scaled, "Steel").unwrap();

    assert_relative_eq!(p3.volume_cm3, p1.volume_cm3 * 27.0, max_relative = 1.0e-9);
    assert_relative_eq!(
        p3.surface_area_cm2,
        p1.surface_area_cm2 * 9.0,
        max_relative = 1.0e-9
    );

    let base = ShapeSpec::new(ShapeKind::Cuboid)
        .with_param("width", 3.0)
        .with_param("height", 5.0)
        .with_param("depth", 7.0);
    let scaled = ShapeSpec::new(ShapeKind::Cuboid)
        .with_param("width", 6.0)
        .with_param("height", 10.0)
        .with_param("depth", 14.0);

    let p1 = compute_properties(&base, "Steel").unwrap();
    let p2 = compute_properties(&scaled, "Steel").unwrap();

    assert_relative_eq!(p2.volume_cm3, p1.volume_cm3 * 8.0, max_relative = 1.0e-9);
    assert_relative_eq!(
        p2.surface_area_cm2,
        p1.surface_area_cm2 * 4.0,
        max_relative = 1.0e-9
    );
}

#[test]
fn hollow_cylinder_stays_below_its_solid_envelope() {
    let solid = compute_properties(
        &ShapeSpec::new(ShapeKind::Cylinder)
            .with_param("radius", 15.0)
            .with_param("height", 100.0),
        "Steel",
    )
    .unwrap();
    let hollow = compute_properties(
        &ShapeSpec::new(ShapeKind::Cylinder)
            .with_param("radius", 15.0)
            .with_param("innerRadius", 13.0)
            .with_param("height", 100.0)
            .hollow(),
        "Steel",
    )
    .unwrap();

    assert!(hollow.volume_cm3 < solid.volume_cm3);
    assert!(hollow.mass_kg < solid.mass_kg);
    assert!(hollow.izz < solid.izz);
}

#[test]
fn centered_shapes_report_the_origin_as_center_of_mass() {
    for kind in [
        ShapeKind::Cube,
        ShapeKind::Cuboid,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Gear,
        ShapeKind::Bearing,
        ShapeKind::Shaft,
        ShapeKind::Bracket,
        ShapeKind::Plate,
    ] {
        let p = compute_properties(&ShapeSpec::new(kind), "Steel").unwrap();
        assert_eq!(p.center_of_mass.coords.norm(), 0.0, "{kind}");
    }
}

#[test]
fn tapered_shapes_report_off_center_centroids() {
    let cone = compute_properties(
        &ShapeSpec::new(ShapeKind::Cone).with_param("height", 60.0),
        "Steel",
    )
    .unwrap();
    assert_relative_eq!(cone.center_of_mass.z, -15.0, max_relative = 1.0e-12);

    let pyramid = compute_properties(
        &ShapeSpec::new(ShapeKind::Pyramid).with_param("height", 60.0),
        "Steel",
    )
    .unwrap();
    assert_relative_eq!(pyramid.center_of_mass.z, -15.0, max_relative = 1.0e-12);

    let prism = compute_properties(
        &ShapeSpec::new(ShapeKind::Prism).with_param("baseHeight", 36.0),
        "Steel",
    )
    .unwrap();
    assert_relative_eq!(prism.center_of_mass.y, -6.0, max_relative = 1.0e-12);
}

#[test]
fn aliases_share_their_primitive_formula_set() {
    let cube = compute_properties(&ShapeSpec::new(ShapeKind::Cube), "Steel").unwrap();
    let cuboid = compute_properties(
        &ShapeSpec::new(ShapeKind::Cuboid)
            .with_param("width", 50.0)
            .with_param("height", 50.0)
            .with_param("depth", 50.0),
        "Steel",
    )
    .unwrap();
    assert_eq!(cube, cuboid);

    let bracket = compute_properties(&ShapeSpec::new(ShapeKind::Bracket), "Steel").unwrap();
    let slab = compute_properties(
        &ShapeSpec::new(ShapeKind::Cuboid)
            .with_param("width", 50.0)
            .with_param("height", 50.0)
            .with_param("depth", 10.0),
        "Steel",
    )
    .unwrap();
    assert_eq!(bracket, slab);
}

#[test]
fn prism_volume_is_half_the_bounding_box() {
    let prism = compute_properties(
        &ShapeSpec::new(ShapeKind::Prism)
            .with_param("baseWidth", 30.0)
            .with_param("baseHeight", 30.0)
            .with_param("length", 50.0),
        "Steel",
    )
    .unwrap();
    let block = compute_properties(
        &ShapeSpec::new(ShapeKind::Cuboid)
            .with_param("width", 30.0)
            .with_param("height", 30.0)
            .with_param("depth", 50.0),
        "Steel",
    )
    .unwrap();
    assert_relative_eq!(
        prism.volume_cm3,
        block.volume_cm3 / 2.0,
        max_relative = 1.0e-12
    );
}
