//! Rendering as a pure function of selector state.
//!
//! Components never inspect the catalog or the selection directly; they draw
//! whatever `render_view` returns.

use crate::preferences::logic::PreferenceSelector;
use crate::preferences::types::*;
use crate::services::config::SelectorConfig;

#[derive(Clone, PartialEq, Debug)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RegionItemView {
    pub name: String,
    pub selected: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LocationSelectView {
    pub placeholder: String,
    pub group_label: String,
    pub options: Vec<OptionView>,
    pub value: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SchemeSelectView {
    pub slot: SchemeSlot,
    pub placeholder: String,
    pub options: Vec<OptionView>,
    pub disabled: bool,
    pub value: String,
}

impl SchemeSelectView {
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    pub fn disabled_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.value.as_str())
            .collect()
    }
}

/// Which parts of the step are on screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PanelVisibility {
    pub choose_region_prompt: bool,
    pub region_blurb: bool,
    pub location_list: bool,
    pub location_summary: bool,
    pub save_control: bool,
    pub map_controls: bool,
    pub clear_control: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct MapView {
    pub label: Option<String>,
    pub legend: LegendState,
    pub pulsing: bool,
    pub region_chooser_visible: bool,
    pub disabled: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PreferenceView {
    pub regions: Vec<RegionItemView>,
    pub location_select: Option<LocationSelectView>,
    pub scheme1: Option<SchemeSelectView>,
    pub scheme2: Option<SchemeSelectView>,
    pub panels: PanelVisibility,
    pub map: MapView,
    pub selected_region: Option<String>,
    pub selected_location: Option<String>,
}

pub fn render_view(selector: &PreferenceSelector, config: &SelectorConfig) -> PreferenceView {
    let state = selector.state();

    let regions = selector
        .catalog()
        .regions()
        .iter()
        .map(|region| RegionItemView {
            name: region.name.clone(),
            selected: state.selected_region.as_deref() == Some(region.name.as_str()),
        })
        .collect();

    let location_select = state
        .selected_region
        .as_deref()
        .and_then(|name| selector.catalog().region(name))
        .map(|region| {
            let options = region
                .locations
                .iter()
                .map(|location| {
                    let key = LocationKey::new(&region.name, &location.name);
                    OptionView {
                        value: key.to_string(),
                        label: location.name.clone(),
                        selected: state.selected_location.as_deref() == Some(location.name.as_str()),
                        disabled: selector.disabled_location() == Some(&key),
                    }
                })
                .collect();

            LocationSelectView {
                placeholder: config.labels.location_placeholder_for(&region.name),
                group_label: region.name.clone(),
                options,
                value: state
                    .location_key()
                    .map(|key| key.to_string())
                    .unwrap_or_else(|| UNSELECTED_LOCATION_VALUE.to_string()),
            }
        });

    let (scheme1, scheme2) = match selector.current_location() {
        Some(location) if state.step == PreferenceStep::ChooseSchemes => {
            let pref1 = state.scheme_in(SchemeSlot::First);
            let pref2 = state.scheme_in(SchemeSlot::Second);

            let scheme_options = |chosen: Option<&str>, blocked: Option<&str>| -> Vec<OptionView> {
                location
                    .schemes
                    .iter()
                    .map(|scheme| OptionView {
                        value: scheme.clone(),
                        label: scheme.clone(),
                        selected: chosen == Some(scheme.as_str()),
                        disabled: blocked == Some(scheme.as_str()),
                    })
                    .collect()
            };

            let first = SchemeSelectView {
                slot: SchemeSlot::First,
                placeholder: config.labels.scheme_placeholder.clone(),
                options: scheme_options(pref1, pref2),
                disabled: false,
                value: pref1.unwrap_or_default().to_string(),
            };

            let mut second_options = scheme_options(pref2, pref1);
            second_options.push(OptionView {
                value: NO_SECOND_PREFERENCE_VALUE.to_string(),
                label: config.labels.no_second_preference.clone(),
                selected: state.scheme_pref2 == SecondPreference::NoPreference,
                disabled: false,
            });
            let second = SchemeSelectView {
                slot: SchemeSlot::Second,
                placeholder: config.labels.scheme_placeholder.clone(),
                options: second_options,
                disabled: location.has_single_scheme(),
                value: pref2.unwrap_or_default().to_string(),
            };

            (Some(first), Some(second))
        }
        _ => (None, None),
    };

    let choosing_schemes = state.step == PreferenceStep::ChooseSchemes;
    let panels = PanelVisibility {
        choose_region_prompt: state.selected_region.is_none(),
        region_blurb: state.step == PreferenceStep::ChooseLocation,
        location_list: state.location_list_open,
        location_summary: choosing_schemes,
        save_control: state.save_revealed,
        map_controls: !choosing_schemes,
        clear_control: state.selected_region.is_some(),
    };

    let label = match &state.map.hovered_region {
        Some(region) => Some(region.clone()),
        None if state.map.hint_active => Some(config.labels.intro_hint.clone()),
        None => None,
    };
    let map = MapView {
        label,
        legend: state.map.legend,
        pulsing: state.map.pulsing,
        region_chooser_visible: state.map.region_chooser_visible || state.selected_region.is_some(),
        disabled: state.map.disabled,
    };

    PreferenceView {
        regions,
        location_select,
        scheme1,
        scheme2,
        panels,
        map,
        selected_region: state.selected_region.clone(),
        selected_location: state.selected_location.clone(),
    }
}
