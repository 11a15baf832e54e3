use dioxus::prelude::*;

use crate::console_warn;
use crate::preferences::{LocationChoice, LocationSelectView, PreferenceAction, UNSELECTED_LOCATION_VALUE};

/// Element id of the location dropdown, focused after a region click
pub const LOCATION_SELECT_ID: &str = "regionSelect";

#[derive(Props, PartialEq, Clone)]
pub struct LocationSelectProps {
    pub view: LocationSelectView,
    pub dispatch: EventHandler<PreferenceAction>,
}

#[component]
pub fn LocationSelect(props: LocationSelectProps) -> Element {
    let dispatch = props.dispatch;
    let view = props.view;
    let nothing_selected = !view.options.iter().any(|o| o.selected);

    rsx! {
        div {
            class: "form-group",
            label {
                r#for: LOCATION_SELECT_ID,
                class: "form-label",
                "Location"
            }
            select {
                id: LOCATION_SELECT_ID,
                name: "location",
                class: "form-control",
                onchange: move |evt| match LocationChoice::from_option_value(&evt.value()) {
                    Ok(choice) => dispatch.call(PreferenceAction::SelectLocation(choice)),
                    Err(e) => console_warn!("[Preferences] Location change ignored: {}", e),
                },
                option {
                    value: UNSELECTED_LOCATION_VALUE,
                    selected: nothing_selected,
                    "{view.placeholder}"
                }
                optgroup {
                    label: "{view.group_label}",
                    for opt in view.options.iter() {
                        option {
                            key: "{opt.value}",
                            value: "{opt.value}",
                            selected: opt.selected,
                            disabled: opt.disabled,
                            "{opt.label}"
                        }
                    }
                }
            }
        }
    }
}
