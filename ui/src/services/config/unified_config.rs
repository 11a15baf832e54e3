//! Selector Configuration
//!
//! Display strings, timings and layout thresholds for the preference step.
//! Every section falls back to its defaults, so a page only needs to embed
//! the values it wants to change.

use serde::{Deserialize, Serialize};

use crate::services::errors::{PreferenceError, PreferenceResult};

/// Placeholder token replaced with the region name in location prompts
pub const REGION_TOKEN: &str = "{region}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// User-facing labels
    pub labels: LabelConfig,

    /// Delays for the intro hint and focus handling
    pub timing: TimingConfig,

    /// Viewport thresholds
    pub layout: LayoutConfig,

    /// Reload the page on "clear", so server-rendered answers come back
    pub reload_on_clear: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Location dropdown placeholder; `{region}` is substituted
    pub location_placeholder: String,

    /// Placeholder for both scheme dropdowns
    pub scheme_placeholder: String,

    /// Extra slot 2 entry meaning "no second preference"
    pub no_second_preference: String,

    /// Map label while the intro hint runs
    pub intro_hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay before the map starts pulsing on an untouched page
    pub intro_hint_start_ms: u32,

    /// Delay before the pulse stops and the legend fades
    pub intro_hint_end_ms: u32,

    /// Delay before focusing the location dropdown after a region click
    pub focus_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widths at or below this scroll the form into view after a region click
    pub mobile_breakpoint_px: f64,

    /// Gap left above the form when scrolling
    pub scroll_offset_px: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            labels: LabelConfig::default(),
            timing: TimingConfig::default(),
            layout: LayoutConfig::default(),
            reload_on_clear: true,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            location_placeholder: "-- Choose a location in {region} --".to_string(),
            scheme_placeholder: "Choose a scheme".to_string(),
            no_second_preference: "No second preference".to_string(),
            intro_hint: "Choose a region to filter the locations".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            intro_hint_start_ms: 1000,
            intro_hint_end_ms: 3000,
            focus_delay_ms: 200,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 650.0,
            scroll_offset_px: 20.0,
        }
    }
}

impl LabelConfig {
    pub fn location_placeholder_for(&self, region: &str) -> String {
        self.location_placeholder.replace(REGION_TOKEN, region)
    }
}

impl SelectorConfig {
    /// Parse page-embedded overrides and validate the result
    pub fn from_json(json: &str) -> PreferenceResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PreferenceError::Configuration {
                message: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|errors| PreferenceError::Configuration {
                message: errors.join("; "),
            })?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.labels.scheme_placeholder.trim().is_empty() {
            errors.push("Labels scheme_placeholder must not be empty".to_string());
        }

        if self.labels.no_second_preference.trim().is_empty() {
            errors.push("Labels no_second_preference must not be empty".to_string());
        }

        if self.timing.intro_hint_end_ms <= self.timing.intro_hint_start_ms {
            errors.push("Timing intro_hint_end_ms must be after intro_hint_start_ms".to_string());
        }

        if self.layout.mobile_breakpoint_px < 0.0 || self.layout.scroll_offset_px < 0.0 {
            errors.push("Layout values must not be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.layout.mobile_breakpoint_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = SelectorConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.reload_on_clear);
        assert!(SelectorConfig::from_json("{}").unwrap().reload_on_clear);
    }

    #[test]
    fn test_invalid_config() {
        let mut config = SelectorConfig::default();
        config.labels.scheme_placeholder = " ".to_string();
        config.timing.intro_hint_end_ms = 500;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = SelectorConfig::from_json(
            r#"{ "labels": { "no_second_preference": "None" }, "reload_on_clear": false }"#,
        )
        .unwrap();

        assert_eq!(config.labels.no_second_preference, "None");
        assert_eq!(config.labels.scheme_placeholder, "Choose a scheme");
        assert_eq!(config.timing, TimingConfig::default());
        assert!(!config.reload_on_clear);
    }

    #[test]
    fn test_rejected_json() {
        assert!(matches!(
            SelectorConfig::from_json(r#"{ "timing": { "intro_hint_end_ms": 10 } }"#),
            Err(PreferenceError::Configuration { .. })
        ));
        assert!(matches!(
            SelectorConfig::from_json("{ not json"),
            Err(PreferenceError::Configuration { .. })
        ));
    }

    #[test]
    fn test_location_placeholder_and_breakpoint() {
        let config = SelectorConfig::default();
        assert_eq!(
            config.labels.location_placeholder_for("North"),
            "-- Choose a location in North --"
        );
        assert!(config.is_mobile_width(650.0));
        assert!(!config.is_mobile_width(651.0));
    }
}
