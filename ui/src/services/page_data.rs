//! Page-embedded data: the region catalog, server-rendered preselections and
//! optional selector configuration, each in its own JSON script block.

use std::rc::Rc;
use tracing::{error, info, warn};

use crate::preferences::{InitialSelection, PreferenceSelector, RegionCatalog};
use crate::services::browser::element_text;
use crate::services::config::SelectorConfig;
use crate::services::errors::{ErrorSeverity, PreferenceError, PreferenceResult};

pub const CATALOG_ELEMENT_ID: &str = "preference-catalog";
pub const INITIAL_ELEMENT_ID: &str = "preference-initial";
pub const CONFIG_ELEMENT_ID: &str = "preference-config";

#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    pub selector: PreferenceSelector,
    pub config: SelectorConfig,
}

impl PageData {
    /// Assemble page data from raw JSON sources.
    ///
    /// The catalog must be valid. A bad preselection or configuration is
    /// logged and replaced with an empty selection or the defaults.
    pub fn from_sources(
        catalog_json: &str,
        initial_json: Option<&str>,
        config_json: Option<&str>,
    ) -> PreferenceResult<Self> {
        let catalog = Rc::new(RegionCatalog::from_json(catalog_json)?);

        let config = match config_json.map(SelectorConfig::from_json).transpose() {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                fall_back("page selector configuration", e)?;
                SelectorConfig::default()
            }
        };

        let initial = match initial_json.map(InitialSelection::from_json).transpose() {
            Ok(initial) => initial.unwrap_or_default(),
            Err(e) => {
                fall_back("page preselection", e)?;
                InitialSelection::default()
            }
        };

        let selector = match PreferenceSelector::restore(catalog.clone(), &initial) {
            Ok(selector) => selector,
            Err(e) => {
                fall_back("preselection that does not match the catalog", e)?;
                PreferenceSelector::new(catalog)
            }
        };

        Ok(Self { selector, config })
    }

    /// Read the data blocks from the current document, falling back to the
    /// bundled catalog when the page does not embed one
    pub fn load(bundled_catalog: &str) -> PreferenceResult<Self> {
        let catalog = element_text(CATALOG_ELEMENT_ID);
        if catalog.is_none() {
            info!("No page-embedded catalog, using the bundled one");
        }

        Self::from_sources(
            catalog.as_deref().unwrap_or(bundled_catalog),
            element_text(INITIAL_ELEMENT_ID).as_deref(),
            element_text(CONFIG_ELEMENT_ID).as_deref(),
        )
        .inspect_err(|e: &PreferenceError| error!("Preference page data rejected: {}", e))
    }
}

/// Log a rejected page block at its severity; unrecoverable errors propagate
fn fall_back(what: &str, e: PreferenceError) -> PreferenceResult<()> {
    if !e.is_recoverable() {
        return Err(e);
    }

    match e.severity() {
        ErrorSeverity::Critical | ErrorSeverity::High => error!("Ignoring {}: {}", what, e),
        ErrorSeverity::Medium => warn!("Ignoring {}: {}", what, e),
        ErrorSeverity::Low => info!("Ignoring {}: {}", what, e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::PreferenceStep;
    use crate::services::errors::CatalogError;

    const CATALOG: &str = r#"{ "North": { "Leeds": ["SchemeA", "SchemeB"] } }"#;

    #[test]
    fn test_page_data_with_preselection() {
        let data = PageData::from_sources(
            CATALOG,
            Some(r#"{ "region": "North", "location": "Leeds", "schemePref1": "SchemeA" }"#),
            Some(r#"{ "reload_on_clear": false }"#),
        )
        .unwrap();

        assert_eq!(data.selector.state().step, PreferenceStep::ChooseSchemes);
        assert!(!data.config.reload_on_clear);
    }

    #[test]
    fn test_bad_catalog_fails_loudly() {
        assert_eq!(
            PageData::from_sources("{}", None, None),
            Err(PreferenceError::Catalog(CatalogError::Empty))
        );
    }

    #[test]
    fn test_bad_preselection_and_config_fall_back() {
        let data = PageData::from_sources(
            CATALOG,
            Some(r#"{ "region": "South" }"#),
            Some(r#"{ "timing": { "intro_hint_end_ms": 1 } }"#),
        )
        .unwrap();
        assert_eq!(data.selector.state().step, PreferenceStep::ChooseRegion);
        assert_eq!(data.config, SelectorConfig::default());

        let data = PageData::from_sources(CATALOG, Some("not json"), None).unwrap();
        assert_eq!(data.selector.state().selected_region, None);
    }

    #[test]
    fn test_fall_back_only_for_recoverable_errors() {
        let config_error = PreferenceError::Configuration {
            message: "bad timing".to_string(),
        };
        assert_eq!(fall_back("config", config_error), Ok(()));

        let catalog_error = PreferenceError::Catalog(CatalogError::Empty);
        assert_eq!(
            fall_back("catalog", catalog_error.clone()),
            Err(catalog_error)
        );
    }

    #[test]
    fn test_load_uses_bundled_catalog_off_wasm() {
        let data = PageData::load(CATALOG).unwrap();
        assert_eq!(data.selector.catalog().regions().len(), 1);
    }
}
