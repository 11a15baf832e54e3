use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::display::{ChoiceSummary, RegionBlurb};
use crate::components::forms::{LocationSelect, RegionMap, SchemeSelect, LOCATION_SELECT_ID};
use crate::preferences::{
    get_choice_summary, get_selection_validation_message, render_view, PreferenceAction,
};
use crate::services::browser::{focus_element, reload_page, scroll_to_element, viewport_width};
use crate::services::page_data::PageData;
use crate::{console_debug, console_info, console_log};

const PREFERENCE_SELECTOR_CSS: Asset = asset!("/assets/styling/preference_selector.css");

/// Anchor scrolled into view when a region is picked on a narrow screen
const PREFERENCE_GRID_ID: &str = "containingGridPreference";

#[component]
pub fn PreferenceService(data: PageData) -> Element {
    let config = data.config;
    let initial = data.selector;

    let mut selector = use_signal(move || initial);

    // In-place reduction keeps the Signal subscription intact
    let dispatch = EventHandler::new(move |action: PreferenceAction| {
        console_debug!("[Preferences] {:?}", action);
        selector.with_mut(|s| s.reduce_in_place(action));
    });

    // Pulse the map once on arrival; the reducer skips it when something is preselected
    let timing = config.timing.clone();
    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(timing.intro_hint_start_ms).await;
            console_log!("[Preferences] Intro hint started");
            dispatch.call(PreferenceAction::StartIntroHint);
            TimeoutFuture::new(timing.intro_hint_end_ms.saturating_sub(timing.intro_hint_start_ms))
                .await;
            dispatch.call(PreferenceAction::EndIntroHint);
        });
    });

    let select_config = config.clone();
    let on_region_selected = EventHandler::new(move |region: String| {
        dispatch.call(PreferenceAction::SelectRegion(region));

        if viewport_width().is_some_and(|width| select_config.is_mobile_width(width)) {
            scroll_to_element(PREFERENCE_GRID_ID, select_config.layout.scroll_offset_px);
        }

        let delay = select_config.timing.focus_delay_ms;
        spawn(async move {
            TimeoutFuture::new(delay).await;
            focus_element(LOCATION_SELECT_ID);
        });
    });

    let reload_on_clear = config.reload_on_clear;
    let on_clear = move |evt: Event<MouseData>| {
        evt.prevent_default();
        if reload_on_clear {
            console_info!("[Preferences] Clearing by reloading the page");
            reload_page();
        } else {
            dispatch.call(PreferenceAction::Clear);
        }
    };

    let current = selector.read();
    let view = render_view(&current, &config);
    let summary = get_choice_summary(&current).unwrap_or_default();
    let validation_message = get_selection_validation_message(&current);
    drop(current);

    let panels = view.panels;

    rsx! {
        document::Link { rel: "stylesheet", href: PREFERENCE_SELECTOR_CSS }

        form {
            id: PREFERENCE_GRID_ID,
            class: "preference-selector",
            method: "post",

            if panels.map_controls {
                RegionMap {
                    regions: view.regions.clone(),
                    map: view.map.clone(),
                    show_choose_prompt: panels.choose_region_prompt,
                    on_select: on_region_selected,
                    dispatch: dispatch
                }
            }

            div {
                class: "preference-panel",

                if let Some(region) = view.selected_region.clone().filter(|_| panels.region_blurb) {
                    RegionBlurb { region: region }
                }

                if panels.location_list {
                    if let Some(location_view) = view.location_select.clone() {
                        LocationSelect { view: location_view, dispatch: dispatch }
                    }
                } else if view.selected_region.is_some() {
                    button {
                        r#type: "button",
                        id: "viewListOfLocations",
                        class: "link-button",
                        onclick: move |_| dispatch.call(PreferenceAction::ShowLocationList),
                        "View list of locations"
                    }
                }

                if panels.location_summary {
                    ChoiceSummary {
                        summary: summary,
                        validation_message: validation_message
                    }
                }

                if let Some(scheme1) = view.scheme1.clone() {
                    SchemeSelect { view: scheme1, dispatch: dispatch }
                }
                if let Some(scheme2) = view.scheme2.clone() {
                    SchemeSelect { view: scheme2, dispatch: dispatch }
                }

                div {
                    class: "preference-actions",
                    if panels.save_control {
                        button {
                            r#type: "submit",
                            id: "choiceSave",
                            class: "btn btn-primary",
                            "Save and continue"
                        }
                    }
                    if panels.clear_control {
                        button {
                            r#type: "button",
                            id: "clearChoice",
                            class: "btn btn-secondary",
                            onclick: on_clear,
                            "Clear choice"
                        }
                    }
                }
            }
        }
    }
}
