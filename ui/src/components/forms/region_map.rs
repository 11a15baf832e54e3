use dioxus::prelude::*;

use crate::components::display::MapLegend;
use crate::preferences::{MapView, PreferenceAction, RegionItemView};

#[derive(Props, PartialEq, Clone)]
pub struct RegionMapProps {
    pub regions: Vec<RegionItemView>,
    pub map: MapView,
    pub show_choose_prompt: bool,
    pub on_select: EventHandler<String>,
    pub dispatch: EventHandler<PreferenceAction>,
}

#[component]
pub fn RegionMap(props: RegionMapProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: if props.map.disabled { "map-legend-container disabled" } else { "map-legend-container" },

            MapLegend { map: props.map.clone() }

            div {
                class: if props.map.pulsing { "svg-map-container hvr-back-pulse" } else { "svg-map-container" },
                div {
                    class: "svg-map",
                    onmouseleave: move |_| dispatch.call(PreferenceAction::LeaveMap),

                    for item in props.regions.iter().cloned() {
                        RegionLink {
                            key: "{item.name}",
                            item: item,
                            on_select: props.on_select,
                            dispatch: dispatch
                        }
                    }
                }
            }

            if props.map.region_chooser_visible && props.show_choose_prompt {
                p {
                    id: "chooseRegionContainer",
                    class: "choose-region-text",
                    "Select a region on the map to see its locations"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct RegionLinkProps {
    item: RegionItemView,
    on_select: EventHandler<String>,
    dispatch: EventHandler<PreferenceAction>,
}

#[component]
fn RegionLink(props: RegionLinkProps) -> Element {
    let dispatch = props.dispatch;
    let on_select = props.on_select;
    let click_name = props.item.name.clone();
    let hover_name = props.item.name.clone();

    rsx! {
        a {
            id: "{props.item.name}",
            href: "#",
            class: if props.item.selected { "region-container selected-region" } else { "region-container" },
            "aria-pressed": "{props.item.selected}",
            onclick: move |evt| {
                evt.prevent_default();
                on_select.call(click_name.clone());
            },
            onmouseenter: move |_| dispatch.call(PreferenceAction::HoverRegion(hover_name.clone())),
            onmouseleave: move |_| dispatch.call(PreferenceAction::UnhoverRegion),
            span { class: "region-name", "{props.item.name}" }
        }
    }
}
