use dioxus::prelude::*;

use crate::preferences::{PreferenceAction, SchemeSelectView, SchemeSlot};

#[derive(Props, PartialEq, Clone)]
pub struct SchemeSelectProps {
    pub view: SchemeSelectView,
    pub dispatch: EventHandler<PreferenceAction>,
}

#[component]
pub fn SchemeSelect(props: SchemeSelectProps) -> Element {
    let dispatch = props.dispatch;
    let view = props.view;
    let slot = view.slot;
    let id = format!("schemePref{}", slot.number());
    let nothing_selected = !view.options.iter().any(|o| o.selected);
    let label = match slot {
        SchemeSlot::First => "First preference",
        SchemeSlot::Second => "Second preference",
    };

    rsx! {
        div {
            class: if view.disabled { "form-group disabled" } else { "form-group" },
            label {
                r#for: "{id}",
                class: "form-label",
                "{label}"
            }
            select {
                id: "{id}",
                name: "{id}",
                class: "form-control",
                disabled: view.disabled,
                onchange: move |evt| dispatch.call(PreferenceAction::SelectScheme(slot, evt.value())),
                option {
                    value: "",
                    class: "placeholder-option",
                    selected: nothing_selected,
                    "{view.placeholder}"
                }
                for opt in view.options.iter() {
                    option {
                        key: "{opt.label}",
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
