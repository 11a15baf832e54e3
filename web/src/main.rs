use dioxus::prelude::*;
use prefs_ui::services::page_data::PageData;
use prefs_ui::PreferenceService;

const MAIN_CSS: Asset = asset!("/assets/main.css");
// Used when the page does not embed its own catalog block
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let page_data = use_hook(|| PageData::load(BUNDLED_CATALOG));

    match page_data {
        Ok(data) => rsx! {
            div {
                PreferenceService { data: data }
            }
        },
        Err(e) => rsx! {
            div {
                class: "preference-error",
                role: "alert",
                h2 { "Location choices are unavailable" }
                p { "{e}" }
            }
        },
    }
}
