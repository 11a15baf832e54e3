//! Region catalog: region -> location -> ordered scheme list.
//!
//! The catalog is embedded in the page as a JSON object whose key order is the
//! display order, so it is parsed through `serde_json::Value` with
//! `preserve_order` and copied into plain vectors. Validation happens once at
//! load time and any problem is a configuration error.

use serde_json::Value;
use std::collections::HashSet;
use tracing::{error, info};

use crate::services::errors::CatalogError;

/// Separator between region and location in location option values.
pub const LOCATION_SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub schemes: Vec<String>,
}

impl Location {
    pub fn offers(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s == scheme)
    }

    pub fn has_single_scheme(&self) -> bool {
        self.schemes.len() == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub locations: Vec<Location>,
}

impl Region {
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|l| l.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Parse and validate a catalog from its page-embedded JSON form
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            error!("Region catalog JSON is invalid: {}", e);
            CatalogError::Parse {
                message: e.to_string(),
            }
        })?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let root = value.as_object().ok_or(CatalogError::Shape {
            path: "$".to_string(),
            expected: "an object of regions",
        })?;

        let mut regions = Vec::with_capacity(root.len());
        for (region_name, locations_value) in root {
            let locations_map = locations_value.as_object().ok_or_else(|| CatalogError::Shape {
                path: region_name.clone(),
                expected: "an object of locations",
            })?;

            let mut locations = Vec::with_capacity(locations_map.len());
            for (location_name, schemes_value) in locations_map {
                let path = format!("{}{}{}", region_name, LOCATION_SEPARATOR, location_name);
                let schemes = schemes_value
                    .as_array()
                    .ok_or_else(|| CatalogError::Shape {
                        path: path.clone(),
                        expected: "an array of scheme names",
                    })?
                    .iter()
                    .map(|scheme| {
                        scheme.as_str().map(str::to_string).ok_or_else(|| CatalogError::Shape {
                            path: path.clone(),
                            expected: "scheme names to be strings",
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                locations.push(Location {
                    name: location_name.clone(),
                    schemes,
                });
            }

            regions.push(Region {
                name: region_name.clone(),
                locations,
            });
        }

        Self::new(regions)
    }

    /// Build a catalog from already-structured regions, applying the same checks
    pub fn new(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let catalog = Self { regions };
        if let Err(e) = catalog.validate() {
            error!("Region catalog rejected: {}", e);
            return Err(e);
        }

        info!(
            "Region catalog loaded: {} regions, {} locations",
            catalog.regions.len(),
            catalog.location_count()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.regions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut region_names = HashSet::new();
        for region in &self.regions {
            check_name("region", &region.name)?;
            if !region_names.insert(region.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    kind: "region",
                    name: region.name.clone(),
                });
            }
            if region.locations.is_empty() {
                return Err(CatalogError::RegionWithoutLocations {
                    region: region.name.clone(),
                });
            }

            let mut location_names = HashSet::new();
            for location in &region.locations {
                check_name("location", &location.name)?;
                if !location_names.insert(location.name.as_str()) {
                    return Err(CatalogError::DuplicateName {
                        kind: "location",
                        name: format!("{}{}{}", region.name, LOCATION_SEPARATOR, location.name),
                    });
                }
                if location.schemes.is_empty() {
                    return Err(CatalogError::LocationWithoutSchemes {
                        region: region.name.clone(),
                        location: location.name.clone(),
                    });
                }

                let mut seen = HashSet::new();
                for scheme in &location.schemes {
                    if scheme.trim().is_empty() {
                        return Err(CatalogError::BlankName { kind: "scheme" });
                    }
                    if !seen.insert(scheme.as_str()) {
                        return Err(CatalogError::DuplicateScheme {
                            region: region.name.clone(),
                            location: location.name.clone(),
                            scheme: scheme.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn location(&self, region: &str, location: &str) -> Option<&Location> {
        self.region(region)?.location(location)
    }

    pub fn schemes(&self, region: &str, location: &str) -> Option<&[String]> {
        self.location(region, location).map(|l| l.schemes.as_slice())
    }

    pub fn location_count(&self) -> usize {
        self.regions.iter().map(|r| r.locations.len()).sum()
    }
}

fn check_name(kind: &'static str, name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::BlankName { kind });
    }
    if name.contains(LOCATION_SEPARATOR) {
        return Err(CatalogError::ReservedSeparator {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}
