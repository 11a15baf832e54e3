use dioxus::prelude::*;

use crate::preferences::{LegendState, MapView};

#[derive(Props, PartialEq, Clone)]
pub struct MapLegendProps {
    pub map: MapView,
}

#[component]
pub fn MapLegend(props: MapLegendProps) -> Element {
    let class = match props.map.legend {
        LegendState::Hidden => return rsx! {},
        LegendState::Active => "map-legend",
        LegendState::Dimmed => "map-legend disabled",
    };
    let label = props.map.label.clone().unwrap_or_default();

    rsx! {
        div {
            class: "{class}",
            span {
                id: "hoveredRegionName",
                "aria-live": "polite",
                "{label}"
            }
        }
    }
}
