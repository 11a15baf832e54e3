use crate::preferences::logic::PreferenceSelector;
use crate::preferences::types::*;

/// Gets user-friendly validation message for the current selection
pub fn get_selection_validation_message(selector: &PreferenceSelector) -> Option<String> {
    let state = selector.state();

    if state.selected_region.is_none() {
        return Some("Please choose a region".to_string());
    }

    if state.selected_location.is_none() {
        return Some("Please choose a location".to_string());
    }

    if state.scheme_pref1.is_none() {
        return Some("Please choose your first scheme preference".to_string());
    }

    match state.scheme_pref2 {
        SecondPreference::Unanswered if !selector.second_slot_disabled() => Some(
            "Please choose a second scheme preference, or no second preference".to_string(),
        ),
        _ => None,
    }
}

/// Short text for the location summary panel
pub fn get_choice_summary(selector: &PreferenceSelector) -> Option<String> {
    let state = selector.state();
    let location = state.selected_location.as_deref()?;
    let region = state.selected_region.as_deref()?;

    let summary = match (&state.scheme_pref1, &state.scheme_pref2) {
        (Some(first), SecondPreference::Scheme(second)) => {
            format!("{} ({}): {}, then {}", location, region, first, second)
        }
        (Some(first), _) => format!("{} ({}): {}", location, region, first),
        (None, _) => format!("{} ({})", location, region),
    };
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::catalog::RegionCatalog;
    use serde_json::json;
    use std::rc::Rc;

    fn selector() -> PreferenceSelector {
        let catalog = RegionCatalog::from_value(&json!({
            "North": { "Leeds": ["SchemeA", "SchemeB"], "Hull": ["SchemeC"] }
        }))
        .unwrap();
        PreferenceSelector::new(Rc::new(catalog))
    }

    #[test]
    fn test_validation_messages_follow_progress() {
        let mut selector = selector();
        assert_eq!(
            get_selection_validation_message(&selector).as_deref(),
            Some("Please choose a region")
        );

        selector.select_region("North");
        assert_eq!(
            get_selection_validation_message(&selector).as_deref(),
            Some("Please choose a location")
        );

        selector.select_location(LocationChoice::Location(LocationKey::new("North", "Leeds")));
        assert_eq!(
            get_selection_validation_message(&selector).as_deref(),
            Some("Please choose your first scheme preference")
        );

        selector.select_scheme(SchemeSlot::First, "SchemeA");
        assert!(get_selection_validation_message(&selector).is_some());
        assert!(!selector.preferences_complete());

        selector.select_scheme(SchemeSlot::Second, "");
        assert_eq!(get_selection_validation_message(&selector), None);
        assert!(selector.preferences_complete());
    }

    #[test]
    fn test_single_scheme_location_needs_one_answer() {
        let mut selector = selector();
        selector.select_region("North");
        selector.select_location(LocationChoice::Location(LocationKey::new("North", "Hull")));
        selector.select_scheme(SchemeSlot::First, "SchemeC");

        assert_eq!(get_selection_validation_message(&selector), None);
        assert!(selector.preferences_complete());
    }

    #[test]
    fn test_choice_summary() {
        let mut selector = selector();
        assert_eq!(get_choice_summary(&selector), None);

        selector.select_region("North");
        selector.select_location(LocationChoice::Location(LocationKey::new("North", "Leeds")));
        assert_eq!(get_choice_summary(&selector).as_deref(), Some("Leeds (North)"));

        selector.select_scheme(SchemeSlot::First, "SchemeB");
        selector.select_scheme(SchemeSlot::Second, "SchemeA");
        assert_eq!(
            get_choice_summary(&selector).as_deref(),
            Some("Leeds (North): SchemeB, then SchemeA")
        );
    }
}
