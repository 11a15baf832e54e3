use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct RegionBlurbProps {
    pub region: String,
}

#[component]
pub fn RegionBlurb(props: RegionBlurbProps) -> Element {
    rsx! {
        p {
            id: "chosenRegionBlurb",
            class: "region-blurb",
            "You've chosen "
            b { "{props.region}" }
            ". Now choose a location from the list."
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ChoiceSummaryProps {
    pub summary: String,
    pub validation_message: Option<String>,
}

#[component]
pub fn ChoiceSummary(props: ChoiceSummaryProps) -> Element {
    rsx! {
        div {
            id: "locationSelectedContainer",
            class: "location-selected",
            p {
                id: "locationSelectedText",
                "Your choice: "
                b { "{props.summary}" }
            }
            if let Some(message) = &props.validation_message {
                p {
                    class: "form-hint",
                    "aria-live": "polite",
                    "{message}"
                }
            }
        }
    }
}
