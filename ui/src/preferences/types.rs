// Core types for the preference selector - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::preferences::catalog::LOCATION_SEPARATOR;
use crate::services::errors::PreferenceError;

/// Option value of the location dropdown placeholder.
pub const UNSELECTED_LOCATION_VALUE: &str = "null";

/// Option value of the "no second preference" entry in slot 2.
pub const NO_SECOND_PREFERENCE_VALUE: &str = "";

// Form step management
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PreferenceStep {
    #[default]
    ChooseRegion,
    ChooseLocation,
    ChooseSchemes,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SchemeSlot {
    First,
    Second,
}

impl SchemeSlot {
    pub fn other(self) -> Self {
        match self {
            SchemeSlot::First => SchemeSlot::Second,
            SchemeSlot::Second => SchemeSlot::First,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            SchemeSlot::First => 1,
            SchemeSlot::Second => 2,
        }
    }
}

/// Value held by the second preference dropdown
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SecondPreference {
    #[default]
    Unanswered,
    NoPreference,
    Scheme(String),
}

impl SecondPreference {
    pub fn from_option_value(value: &str) -> Self {
        if value == NO_SECOND_PREFERENCE_VALUE {
            SecondPreference::NoPreference
        } else {
            SecondPreference::Scheme(value.to_string())
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        match self {
            SecondPreference::Scheme(name) => Some(name),
            _ => None,
        }
    }
}

/// A (region, location) pair, written as `Region;Location` in option values
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    pub region: String,
    pub location: String,
}

impl LocationKey {
    pub fn new(region: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.region, LOCATION_SEPARATOR, self.location)
    }
}

impl FromStr for LocationKey {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once(LOCATION_SEPARATOR) {
            Some((region, location))
                if !region.is_empty()
                    && !location.is_empty()
                    && !location.contains(LOCATION_SEPARATOR) =>
            {
                Ok(LocationKey::new(region, location))
            }
            _ => Err(PreferenceError::MalformedLocationValue {
                value: value.to_string(),
            }),
        }
    }
}

/// What the location dropdown currently says
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LocationChoice {
    Unselected,
    Location(LocationKey),
}

impl LocationChoice {
    /// Parse a location option value; the placeholder maps to `Unselected`
    pub fn from_option_value(value: &str) -> Result<Self, PreferenceError> {
        if value == UNSELECTED_LOCATION_VALUE {
            Ok(LocationChoice::Unselected)
        } else {
            value.parse().map(LocationChoice::Location)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LegendState {
    #[default]
    Hidden,
    Active,
    Dimmed,
}

/// Interactive map state: hover label, legend and the intro hint
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MapState {
    pub hovered_region: Option<String>,
    pub legend: LegendState,
    pub hint_active: bool,
    pub pulsing: bool,
    pub region_chooser_visible: bool,
    pub disabled: bool,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SelectionState {
    pub step: PreferenceStep,
    pub selected_region: Option<String>,
    pub selected_location: Option<String>,
    pub scheme_pref1: Option<String>,
    pub scheme_pref2: SecondPreference,
    pub save_revealed: bool,
    pub location_list_open: bool,
    pub map: MapState,
}

impl SelectionState {
    pub fn location_key(&self) -> Option<LocationKey> {
        match (&self.selected_region, &self.selected_location) {
            (Some(region), Some(location)) => Some(LocationKey::new(region, location)),
            _ => None,
        }
    }

    pub fn scheme_in(&self, slot: SchemeSlot) -> Option<&str> {
        match slot {
            SchemeSlot::First => self.scheme_pref1.as_deref(),
            SchemeSlot::Second => self.scheme_pref2.scheme(),
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum PreferenceAction {
    SelectRegion(String),
    SelectLocation(LocationChoice),
    SelectScheme(SchemeSlot, String),
    HoverRegion(String),
    UnhoverRegion,
    LeaveMap,
    StartIntroHint,
    EndIntroHint,
    ShowLocationList,
    Clear,
}
