use std::rc::Rc;

use crate::preferences::catalog::{Location, RegionCatalog};
use crate::preferences::types::*;
use crate::{console_debug, console_info, console_warn};

/// State container for the location and scheme preference step.
///
/// Owns the immutable catalog and the current [`SelectionState`]. Every
/// operation runs to completion synchronously; lookups that miss the catalog
/// are logged and leave the state untouched.
#[derive(Clone, PartialEq, Debug)]
pub struct PreferenceSelector {
    catalog: Rc<RegionCatalog>,
    disabled_location: Option<LocationKey>,
    state: SelectionState,
}

impl PreferenceSelector {
    pub fn new(catalog: Rc<RegionCatalog>) -> Self {
        Self {
            catalog,
            disabled_location: None,
            state: SelectionState::default(),
        }
    }

    /// Mark one location as not selectable (rendered disabled, rejected on select)
    pub fn with_disabled_location(mut self, location: Option<LocationKey>) -> Self {
        self.disabled_location = location;
        self
    }

    pub(crate) fn with_state(mut self, state: SelectionState) -> Self {
        self.state = state;
        self
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn disabled_location(&self) -> Option<&LocationKey> {
        self.disabled_location.as_ref()
    }

    pub fn current_location(&self) -> Option<&Location> {
        let region = self.state.selected_region.as_deref()?;
        let location = self.state.selected_location.as_deref()?;
        self.catalog.location(region, location)
    }

    /// Slot 2 is disabled when the selected location offers a single scheme
    pub fn second_slot_disabled(&self) -> bool {
        self.current_location()
            .map(Location::has_single_scheme)
            .unwrap_or(false)
    }

    /// Both preferences answered for the selected location
    pub fn preferences_complete(&self) -> bool {
        self.current_location().is_some()
            && self.state.scheme_pref1.is_some()
            && (self.state.scheme_pref2 != SecondPreference::Unanswered
                || self.second_slot_disabled())
    }

    pub fn select_region(&mut self, region: &str) {
        if self.catalog.region(region).is_none() {
            console_warn!("[Preferences] Ignoring unknown region: {}", region);
            return;
        }

        console_info!("[Preferences] Region selected: {}", region);

        let state = &mut self.state;
        state.step = PreferenceStep::ChooseLocation;
        state.selected_region = Some(region.to_string());
        state.selected_location = None;
        state.scheme_pref1 = None;
        state.scheme_pref2 = SecondPreference::Unanswered;
        state.save_revealed = false;
        state.location_list_open = true;

        state.map.hovered_region = Some(region.to_string());
        state.map.legend = LegendState::Active;
        state.map.hint_active = false;
        state.map.pulsing = false;
    }

    pub fn select_location(&mut self, choice: LocationChoice) {
        let key = match choice {
            LocationChoice::Unselected => {
                console_debug!("[Preferences] Location selection cleared");
                self.state.selected_location = None;
                self.state.save_revealed = false;
                if self.state.selected_region.is_some() {
                    self.state.step = PreferenceStep::ChooseLocation;
                }
                return;
            }
            LocationChoice::Location(key) => key,
        };

        if self.disabled_location.as_ref() == Some(&key) {
            console_warn!("[Preferences] Ignoring disabled location: {}", key);
            return;
        }

        let Some(location) = self.catalog.location(&key.region, &key.location) else {
            console_warn!("[Preferences] Ignoring location missing from catalog: {}", key);
            return;
        };
        let location = location.clone();

        let state = &mut self.state;
        let pref1_kept = state
            .scheme_pref1
            .as_deref()
            .is_some_and(|scheme| location.offers(scheme));

        if !pref1_kept {
            state.scheme_pref1 = None;
            state.scheme_pref2 = SecondPreference::Unanswered;
        } else if let Some(scheme) = state.scheme_pref2.scheme() {
            if !location.offers(scheme) {
                state.scheme_pref2 = SecondPreference::Unanswered;
            }
        }

        if location.has_single_scheme() {
            state.scheme_pref2 = SecondPreference::Unanswered;
        }

        console_info!(
            "[Preferences] Location selected: {} ({} schemes, first preference {})",
            key,
            location.schemes.len(),
            if pref1_kept { "kept" } else { "reset" }
        );

        state.selected_region = Some(key.region);
        state.selected_location = Some(key.location);
        state.step = PreferenceStep::ChooseSchemes;
        state.location_list_open = true;
        state.save_revealed = true;
    }

    pub fn select_scheme(&mut self, slot: SchemeSlot, value: &str) {
        let Some(location) = self.current_location() else {
            console_warn!(
                "[Preferences] Scheme chosen in slot {} before a location: {}",
                slot.number(),
                value
            );
            return;
        };

        let is_empty = value.is_empty();
        if !is_empty {
            if !location.offers(value) {
                console_warn!(
                    "[Preferences] Scheme {} is not offered at {}",
                    value,
                    location.name
                );
                return;
            }
            if self.state.scheme_in(slot.other()) == Some(value) {
                console_warn!(
                    "[Preferences] Scheme {} is disabled in slot {}",
                    value,
                    slot.number()
                );
                return;
            }
        }
        if slot == SchemeSlot::Second && self.second_slot_disabled() {
            console_warn!("[Preferences] Second preference is disabled for a single-scheme location");
            return;
        }

        let reveal = match slot {
            SchemeSlot::First => {
                self.state.scheme_pref1 = (!is_empty).then(|| value.to_string());
                self.state.scheme_pref2.scheme().is_some() || self.second_slot_disabled()
            }
            SchemeSlot::Second => {
                self.state.scheme_pref2 = SecondPreference::from_option_value(value);
                self.state.scheme_pref1.is_some()
            }
        };

        console_debug!(
            "[Preferences] Slot {} set to '{}' (reveal save: {})",
            slot.number(),
            value,
            reveal
        );

        if reveal {
            self.state.save_revealed = true;
        }
    }

    /// Reset every selection; the catalog and disabled location stay
    pub fn clear(&mut self) {
        console_info!("[Preferences] Selection cleared");
        let map_disabled = self.state.map.disabled;
        self.state = SelectionState::default();
        self.state.map.disabled = map_disabled;
        self.state.map.region_chooser_visible = true;
    }

    pub fn hover_region(&mut self, region: &str) {
        let map = &mut self.state.map;
        map.hovered_region = Some(region.to_string());
        map.legend = LegendState::Active;
        map.pulsing = false;
        map.hint_active = false;
        map.region_chooser_visible = true;
    }

    pub fn unhover_region(&mut self) {
        if let Some(selected) = &self.state.selected_region {
            self.state.map.hovered_region = Some(selected.clone());
        }
    }

    pub fn leave_map(&mut self) {
        self.state.map.legend = if self.state.selected_region.is_some() {
            LegendState::Dimmed
        } else {
            LegendState::Hidden
        };
    }

    /// Pulse the map and show the hint, unless the page already has a choice
    pub fn start_intro_hint(&mut self) {
        let state = &mut self.state;
        if state.map.disabled || state.selected_region.is_some() || state.selected_location.is_some()
        {
            return;
        }
        state.map.pulsing = true;
        state.map.hint_active = true;
        state.map.legend = LegendState::Active;
    }

    pub fn end_intro_hint(&mut self) {
        let map = &mut self.state.map;
        if !map.hint_active && !map.pulsing {
            return;
        }
        map.pulsing = false;
        map.hint_active = false;
        if map.hovered_region.is_none() {
            map.legend = LegendState::Hidden;
        }
        map.region_chooser_visible = true;
    }

    pub fn show_location_list(&mut self) {
        self.state.location_list_open = true;
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: PreferenceAction) {
        match action {
            PreferenceAction::SelectRegion(region) => self.select_region(&region),
            PreferenceAction::SelectLocation(choice) => self.select_location(choice),
            PreferenceAction::SelectScheme(slot, value) => self.select_scheme(slot, &value),
            PreferenceAction::HoverRegion(region) => self.hover_region(&region),
            PreferenceAction::UnhoverRegion => self.unhover_region(),
            PreferenceAction::LeaveMap => self.leave_map(),
            PreferenceAction::StartIntroHint => self.start_intro_hint(),
            PreferenceAction::EndIntroHint => self.end_intro_hint(),
            PreferenceAction::ShowLocationList => self.show_location_list(),
            PreferenceAction::Clear => self.clear(),
        }
    }

    /// Reduces the state based on an action
    pub fn reduce(mut self, action: PreferenceAction) -> Self {
        self.reduce_in_place(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn selector() -> PreferenceSelector {
        let catalog = RegionCatalog::from_value(&json!({
            "North": {
                "Leeds": ["SchemeA", "SchemeB"],
                "York": ["SchemeB", "SchemeC"],
                "Hull": ["SchemeC"]
            },
            "South": {
                "Bristol": ["SchemeA", "SchemeB", "SchemeC"]
            }
        }))
        .unwrap();
        PreferenceSelector::new(Rc::new(catalog))
    }

    fn at(region: &str, location: &str) -> LocationChoice {
        LocationChoice::Location(LocationKey::new(region, location))
    }

    #[test]
    fn test_select_region_moves_to_location_step() {
        let mut selector = selector();
        selector.select_region("North");

        let state = selector.state();
        assert_eq!(state.step, PreferenceStep::ChooseLocation);
        assert_eq!(state.selected_region.as_deref(), Some("North"));
        assert!(state.location_list_open);
        assert!(!state.save_revealed);
        assert_eq!(state.map.hovered_region.as_deref(), Some("North"));
    }

    #[test]
    fn test_select_region_clears_previous_choices() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(at("North", "Leeds"));
        selector.select_scheme(SchemeSlot::First, "SchemeA");
        selector.select_scheme(SchemeSlot::Second, "SchemeB");
        assert!(selector.state().save_revealed);

        selector.select_region("South");
        let state = selector.state();
        assert_eq!(state.selected_location, None);
        assert_eq!(state.scheme_pref1, None);
        assert_eq!(state.scheme_pref2, SecondPreference::Unanswered);
        assert!(!state.save_revealed);
    }

    #[test]
    fn test_unknown_region_is_ignored() {
        let mut selector = selector();
        selector.select_region("North");
        let before = selector.clone();

        selector.select_region("Atlantis");
        assert_eq!(selector, before);
    }

    #[test]
    fn test_select_location_moves_to_scheme_step() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(at("North", "Leeds"));

        let state = selector.state();
        assert_eq!(state.step, PreferenceStep::ChooseSchemes);
        assert_eq!(state.selected_location.as_deref(), Some("Leeds"));
        assert!(!selector.second_slot_disabled());
    }

    #[test]
    fn test_location_change_without_first_scheme_clears_both_slots() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(at("North", "Leeds"));
        selector.select_scheme(SchemeSlot::First, "SchemeA");
        selector.select_scheme(SchemeSlot::Second, "SchemeB");

        // York has SchemeB but not SchemeA
        selector.select_location(at("North", "York"));
        let state = selector.state();
        assert_eq!(state.scheme_pref1, None);
        assert_eq!(state.scheme_pref2, SecondPreference::Unanswered);
        assert!(state.save_revealed);
        assert!(!selector.preferences_complete());
    }

    #[test]
    fn test_location_change_keeps_offered_schemes() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(at("North", "York"));
        selector.select_scheme(SchemeSlot::First, "SchemeB");
        selector.select_scheme(SchemeSlot::Second, "SchemeC");

        // Leeds offers SchemeB but not SchemeC
        selector.select_location(at("North", "Leeds"));
        let state = selector.state();
        assert_eq!(state.scheme_pref1.as_deref(), Some("SchemeB"));
        assert_eq!(state.scheme_pref2, SecondPreference::Unanswered);
        assert!(state.save_revealed);

        selector.select_location(at("North", "York"));
        selector.select_scheme(SchemeSlot::Second, "SchemeC");
        assert!(selector.preferences_complete());
    }

    #[test]
    fn test_single_scheme_location_disables_second_slot() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(at("North", "Hull"));
        assert!(selector.second_slot_disabled());

        selector.select_scheme(SchemeSlot::Second, "SchemeC");
        assert_eq!(selector.state().scheme_pref2, SecondPreference::Unanswered);

        selector.select_scheme(SchemeSlot::First, "SchemeC");
        assert_eq!(selector.state().scheme_pref1.as_deref(), Some("SchemeC"));
        assert!(selector.state().save_revealed);
        assert!(selector.preferences_complete());
    }

    #[test]
    fn test_scheme_slots_are_mutually_exclusive() {
        let mut selector = selector();
        selector.select_region("South");
        selector.select_location(at("South", "Bristol"));
        selector.select_scheme(SchemeSlot::First, "SchemeA");

        selector.select_scheme(SchemeSlot::Second, "SchemeA");
        assert_eq!(selector.state().scheme_pref2, SecondPreference::Unanswered);

        selector.select_scheme(SchemeSlot::Second, "SchemeB");
        selector.select_scheme(SchemeSlot::First, "SchemeB");
        assert_eq!(selector.state().scheme_pref1.as_deref(), Some("SchemeA"));

        selector.select_scheme(SchemeSlot::First, "SchemeC");
        assert_eq!(selector.state().scheme_pref1.as_deref(), Some("SchemeC"));
        assert_eq!(selector.state().scheme_pref2.scheme(), Some("SchemeB"));
    }

    #[test]
    fn test_choosing_a_location_reveals_save() {
        let mut selector = selector();
        selector.select_region("South");
        assert!(!selector.state().save_revealed);

        selector.select_location(at("South", "Bristol"));
        assert!(selector.state().save_revealed);
        assert!(!selector.preferences_complete());

        // the placeholder hides it again, a fresh pick brings it back
        selector.select_location(LocationChoice::Unselected);
        assert!(!selector.state().save_revealed);
        selector.select_location(at("South", "Bristol"));
        assert!(selector.state().save_revealed);
    }

    #[test]
    fn test_reselecting_a_restored_location_keeps_save() {
        let initial = crate::preferences::InitialSelection {
            region: Some("North".to_string()),
            location: Some("Leeds".to_string()),
            ..Default::default()
        };
        let mut selector = PreferenceSelector::restore(Rc::new(selector().catalog().clone()), &initial)
            .unwrap();
        assert!(selector.state().save_revealed);

        selector.select_location(at("North", "Leeds"));
        assert!(selector.state().save_revealed);
    }

    #[test]
    fn test_scheme_choices_keep_save_revealed() {
        let mut selector = selector();
        selector.select_region("South");
        selector.select_location(at("South", "Bristol"));

        selector.select_scheme(SchemeSlot::First, "SchemeA");
        assert!(selector.state().save_revealed);

        // explicit "no second preference" completes the answer
        selector.select_scheme(SchemeSlot::Second, "");
        assert_eq!(selector.state().scheme_pref2, SecondPreference::NoPreference);
        assert!(selector.state().save_revealed);
        assert!(selector.preferences_complete());
    }

    #[test]
    fn test_scheme_rejected_without_location_or_outside_list() {
        let mut selector = selector();
        selector.select_scheme(SchemeSlot::First, "SchemeA");
        assert_eq!(selector.state().scheme_pref1, None);

        selector.select_region("North");
        selector.select_location(at("North", "Leeds"));
        selector.select_scheme(SchemeSlot::First, "SchemeC");
        assert_eq!(selector.state().scheme_pref1, None);
    }

    #[test]
    fn test_unselected_location_returns_to_location_step() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(at("North", "Leeds"));
        selector.select_location(LocationChoice::Unselected);

        let state = selector.state();
        assert_eq!(state.step, PreferenceStep::ChooseLocation);
        assert_eq!(state.selected_location, None);
        assert_eq!(state.selected_region.as_deref(), Some("North"));
    }

    #[test]
    fn test_missing_and_disabled_locations_are_ignored() {
        let mut selector = selector()
            .with_disabled_location(Some(LocationKey::new("North", "York")));
        selector.select_region("North");
        let before = selector.clone();

        selector.select_location(at("North", "Whitby"));
        assert_eq!(selector, before);

        selector.select_location(at("North", "York"));
        assert_eq!(selector, before);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(at("North", "Leeds"));
        selector.select_scheme(SchemeSlot::First, "SchemeA");

        let selector = selector.reduce(PreferenceAction::Clear);
        let state = selector.state();
        assert_eq!(state.step, PreferenceStep::ChooseRegion);
        assert_eq!(state.selected_region, None);
        assert_eq!(state.scheme_pref1, None);
        assert!(state.map.region_chooser_visible);
    }

    #[test]
    fn test_map_hover_and_legend() {
        let mut selector = selector();
        selector.start_intro_hint();
        assert!(selector.state().map.pulsing);
        assert_eq!(selector.state().map.legend, LegendState::Active);

        selector.hover_region("South");
        assert!(!selector.state().map.pulsing);
        assert_eq!(selector.state().map.hovered_region.as_deref(), Some("South"));

        selector.leave_map();
        assert_eq!(selector.state().map.legend, LegendState::Hidden);

        selector.select_region("North");
        selector.hover_region("South");
        selector.unhover_region();
        assert_eq!(selector.state().map.hovered_region.as_deref(), Some("North"));
        selector.leave_map();
        assert_eq!(selector.state().map.legend, LegendState::Dimmed);
    }

    #[test]
    fn test_intro_hint_lifecycle() {
        let mut selector = selector();
        selector.reduce_in_place(PreferenceAction::StartIntroHint);
        assert!(selector.state().map.hint_active);

        selector.reduce_in_place(PreferenceAction::EndIntroHint);
        let map = &selector.state().map;
        assert!(!map.pulsing);
        assert!(!map.hint_active);
        assert_eq!(map.legend, LegendState::Hidden);
        assert!(map.region_chooser_visible);

        // No hint once a region has been picked
        let mut selector = self::selector();
        selector.select_region("North");
        selector.start_intro_hint();
        assert!(!selector.state().map.pulsing);
    }
}
