//! Material catalog mapping material names to mass density.
//!
//! The built-in entries mirror the density table used by the geometry
//! backend, so mass figures agree with what the rendering side reports.

use std::collections::HashMap;

use crate::math::Real;

/// Density of the default material (structural steel), in kg/m³.
pub const DEFAULT_DENSITY: Real = 7850.0;

/// A named engineering material.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Material {
    /// Human-readable name (e.g. "Structural Steel").
    pub name: String,
    /// Mass density in kg/m³.
    pub density_kg_m3: Real,
}

impl Material {
    /// Creates a new material from its name and density (kg/m³).
    pub fn new(name: impl Into<String>, density_kg_m3: Real) -> Self {
        Self {
            name: name.into(),
            density_kg_m3,
        }
    }
}

/// A read-only table of materials, looked up by case-insensitive name.
///
/// Unknown names fall back to structural steel rather than failing; the
/// engine exposes a strict mode for callers that want the lookup to be
/// an error instead (see [`crate::engine::MaterialMode`]).
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    materials: HashMap<String, Material>,
}

impl MaterialCatalog {
    /// Creates a catalog with the built-in engineering materials.
    ///
    /// Densities in kg/m³: Steel and Structural Steel 7850, Aluminum
    /// 2700, Titanium 4500, Brass 8500, Copper 8960.
    pub fn with_defaults() -> Self {
        let mut catalog = Self {
            materials: HashMap::new(),
        };

        catalog.register(Material::new("Steel", 7850.0));
        catalog.register(Material::new("Structural Steel", 7850.0));
        catalog.register(Material::new("Aluminum", 2700.0));
        catalog.register(Material::new("Titanium", 4500.0));
        catalog.register(Material::new("Brass", 8500.0));
        catalog.register(Material::new("Copper", 8960.0));

        catalog
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites an existing entry with the same
    /// (case-insensitive) name.
    pub fn register(&mut self, material: Material) {
        let _ = self
            .materials
            .insert(material.name.to_ascii_lowercase(), material);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn try_lookup(&self, name: &str) -> Option<&Material> {
        self.materials.get(&name.to_ascii_lowercase())
    }

    /// Looks up the density for `name`, falling back to structural
    /// steel for unknown names.
    pub fn lookup_density(&self, name: &str) -> Real {
        self.try_lookup(name)
            .map(|m| m.density_kg_m3)
            .unwrap_or(DEFAULT_DENSITY)
    }

    /// Returns all registered material names.
    pub fn names(&self) -> Vec<&str> {
        self.materials.values().map(|m| m.name.as_str()).collect()
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod test {
    use super::{MaterialCatalog, DEFAULT_DENSITY};

    #[test]
    fn builtin_densities() {
        let catalog = MaterialCatalog::with_defaults();
        assert_eq!(catalog.lookup_density("Steel"), 7850.0);
        assert_eq!(catalog.lookup_density("Structural Steel"), 7850.0);
        assert_eq!(catalog.lookup_density("Aluminum"), 2700.0);
        assert_eq!(catalog.lookup_density("Titanium"), 4500.0);
        assert_eq!(catalog.lookup_density("Brass"), 8500.0);
        assert_eq!(catalog.lookup_density("Copper"), 8960.0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = MaterialCatalog::with_defaults();
        assert_eq!(catalog.lookup_density("aluminum"), 2700.0);
        assert_eq!(catalog.lookup_density("TITANIUM"), 4500.0);
    }

    #[test]
    fn unknown_material_falls_back_to_steel() {
        let catalog = MaterialCatalog::with_defaults();
        assert_eq!(catalog.lookup_density("Unobtainium"), DEFAULT_DENSITY);
        assert_eq!(catalog.lookup_density(""), DEFAULT_DENSITY);
        assert!(catalog.try_lookup("Unobtainium").is_none());
    }

    #[test]
    fn custom_material_registration() {
        let mut catalog = MaterialCatalog::with_defaults();
        catalog.register(super::Material::new("Magnesium", 1740.0));
        assert_eq!(catalog.lookup_density("magnesium"), 1740.0);
    }
}
