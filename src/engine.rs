//! The properties engine: from a shape spec and a material name to the
//! part's physical properties.

use log::{debug, warn};

use crate::material::MaterialCatalog;
use crate::math::{Point, Real};
use crate::shape::{ShapeError, ShapeSpec, Solid};

/// Volume conversion from mm³ to cm³.
const MM3_TO_CM3: Real = 1.0e-3;
/// Area conversion from mm² to cm².
const MM2_TO_CM2: Real = 1.0e-2;

/// How material lookups treat names that are not in the catalog.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MaterialMode {
    /// Unknown names fall back to structural steel. This keeps the
    /// engine usable from partially specified, chat-derived input and
    /// is the historical behavior of the surrounding system.
    #[default]
    Lenient,
    /// Unknown names fail with [`ShapeError::UnknownMaterial`].
    Strict,
}

/// Engine configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Unknown-material policy.
    pub material_mode: MaterialMode,
}

/// The physical properties of a part.
///
/// Units follow the downstream contract: cm³, cm², kg, millimeters for
/// the center of mass and kg·mm² for the inertia diagonal, which is
/// expressed about the part's own centroidal axes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PartProperties {
    /// Volume in cm³.
    pub volume_cm3: Real,
    /// Surface area in cm².
    pub surface_area_cm2: Real,
    /// Mass in kg.
    pub mass_kg: Real,
    /// Center of mass in the part's local frame, in mm.
    #[cfg_attr(feature = "serde-serialize", serde(rename = "centerOfMass"))]
    pub center_of_mass: Point,
    /// Moment of inertia about the centroidal x axis, in kg·mm².
    #[cfg_attr(feature = "serde-serialize", serde(rename = "Ixx"))]
    pub ixx: Real,
    /// Moment of inertia about the centroidal y axis, in kg·mm².
    #[cfg_attr(feature = "serde-serialize", serde(rename = "Iyy"))]
    pub iyy: Real,
    /// Moment of inertia about the centroidal z axis, in kg·mm².
    #[cfg_attr(feature = "serde-serialize", serde(rename = "Izz"))]
    pub izz: Real,
}

/// Computes part properties from shape specs.
///
/// The engine is stateless apart from its read-only catalog and
/// options: every call is an independent pure computation, safe to run
/// concurrently from any number of request handlers.
#[derive(Clone, Debug, Default)]
pub struct PropertiesEngine {
    catalog: MaterialCatalog,
    options: EngineOptions,
}

impl PropertiesEngine {
    /// Creates an engine with the built-in material catalog and
    /// lenient material lookups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom catalog and options.
    pub fn with_catalog(catalog: MaterialCatalog, options: EngineOptions) -> Self {
        Self { catalog, options }
    }

    /// The engine's material catalog.
    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// Computes the physical properties of `spec` made of `material`.
    ///
    /// Fails with [`ShapeError::InvalidParameter`] when a dimension is
    /// out of range after default substitution, and with
    /// [`ShapeError::UnknownMaterial`] in strict mode only.
    pub fn compute(&self, spec: &ShapeSpec, material: &str) -> Result<PartProperties, ShapeError> {
        let solid = Solid::from_spec(spec)?;
        let density = self.resolve_density(material)?;

        let volume_mm3 = solid.volume();
        let area_mm2 = solid.surface_area();
        let mprops = solid.mass_properties(density);

        debug!(
            "{} ({material}, {density} kg/m³): volume {volume_mm3:.3} mm³, mass {:.6} kg",
            spec.kind, mprops.mass
        );

        Ok(PartProperties {
            volume_cm3: volume_mm3 * MM3_TO_CM3,
            surface_area_cm2: area_mm2 * MM2_TO_CM2,
            mass_kg: mprops.mass,
            center_of_mass: mprops.local_com,
            ixx: mprops.principal_inertia.x,
            iyy: mprops.principal_inertia.y,
            izz: mprops.principal_inertia.z,
        })
    }

    fn resolve_density(&self, material: &str) -> Result<Real, ShapeError> {
        match self.catalog.try_lookup(material) {
            Some(m) => Ok(m.density_kg_m3),
            None => match self.options.material_mode {
                MaterialMode::Lenient => {
                    warn!("unknown material `{material}`, substituting structural steel");
                    Ok(crate::material::DEFAULT_DENSITY)
                }
                MaterialMode::Strict => Err(ShapeError::UnknownMaterial(material.to_owned())),
            },
        }
    }
}

/// Computes the properties of `spec` made of `material` with a
/// default-configured engine (built-in catalog, lenient materials).
pub fn compute_properties(spec: &ShapeSpec, material: &str) -> Result<PartProperties, ShapeError> {
    PropertiesEngine::new().compute(spec, material)
}
