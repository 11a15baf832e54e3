//! Restoring a selector from values the server rendered into the page
//! (the "edit your answers" flow).

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::preferences::catalog::RegionCatalog;
use crate::preferences::logic::PreferenceSelector;
use crate::preferences::types::*;
use crate::services::errors::{PreferenceError, PreferenceResult};
use crate::console_warn;

/// Preselected values embedded in the page alongside the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialSelection {
    pub region: Option<String>,
    pub location: Option<String>,
    pub scheme_pref1: Option<String>,
    pub scheme_pref2: Option<String>,
    /// Option value (`Region;Location`) of a location that may not be chosen
    pub disabled_location: Option<String>,
    pub map_disabled: bool,
}

impl InitialSelection {
    pub fn from_json(json: &str) -> PreferenceResult<Self> {
        serde_json::from_str(json).map_err(|e| PreferenceError::InitialSelection {
            message: e.to_string(),
        })
    }

    fn non_blank(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

impl PreferenceSelector {
    /// Build the selector a page starts with.
    ///
    /// A preselected region or location missing from the catalog is a
    /// configuration error. Preselected schemes the location does not offer
    /// are dropped, the same way a location change drops them.
    pub fn restore(
        catalog: Rc<RegionCatalog>,
        initial: &InitialSelection,
    ) -> PreferenceResult<Self> {
        let disabled_location = InitialSelection::non_blank(&initial.disabled_location)
            .map(str::parse::<LocationKey>)
            .transpose()?;

        let mut selector = PreferenceSelector::new(catalog).with_disabled_location(disabled_location);
        let mut state = SelectionState::default();
        state.map.disabled = initial.map_disabled;
        selector = selector.with_state(state);

        let region = InitialSelection::non_blank(&initial.region);
        let location = InitialSelection::non_blank(&initial.location);

        let region = match (region, location) {
            (None, None) => return Ok(selector),
            (None, Some(location)) => {
                return Err(PreferenceError::LocationWithoutRegion {
                    location: location.to_string(),
                })
            }
            (Some(region), _) => region,
        };

        if selector.catalog().region(region).is_none() {
            return Err(PreferenceError::UnknownRegion {
                region: region.to_string(),
            });
        }
        selector.select_region(region);

        let Some(location) = location else {
            return Ok(selector);
        };

        let Some(offered) = selector.catalog().schemes(region, location) else {
            return Err(PreferenceError::UnknownLocation {
                region: region.to_string(),
                location: location.to_string(),
            });
        };
        let offered = offered.to_vec();

        selector.select_location(LocationChoice::Location(LocationKey::new(region, location)));
        if selector.state().selected_location.is_none() {
            // preselected the disabled location; leave the user to pick again
            return Ok(selector);
        }

        if let Some(pref1) = InitialSelection::non_blank(&initial.scheme_pref1) {
            if offered.iter().any(|s| s == pref1) {
                selector.select_scheme(SchemeSlot::First, pref1);
            } else {
                console_warn!(
                    "[Preferences] Dropping preselected first scheme {} not offered at {}",
                    pref1,
                    location
                );
            }
        }

        if selector.state().scheme_pref1.is_some() {
            match initial.scheme_pref2.as_deref() {
                // a rendered empty value is the explicit "no second preference"
                Some(value) if value.trim().is_empty() => {
                    selector.select_scheme(SchemeSlot::Second, NO_SECOND_PREFERENCE_VALUE)
                }
                Some(value) if offered.iter().any(|s| s == value.trim()) => {
                    selector.select_scheme(SchemeSlot::Second, value.trim())
                }
                Some(value) => console_warn!(
                    "[Preferences] Dropping preselected second scheme {} not offered at {}",
                    value,
                    location
                ),
                None => {}
            }
        }

        Ok(selector)
    }
}
