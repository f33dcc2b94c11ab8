//! Agency group dropdown that narrows the agency picker.

use djbr_api::models::AgencyGroup;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AgencyTypeSelectorProps {
    pub selected: Option<AgencyGroup>,
    pub on_change: EventHandler<Option<AgencyGroup>>,
}

#[component]
pub fn AgencyTypeSelector(props: AgencyTypeSelectorProps) -> Element {
    let on_change = move |evt: Event<FormData>| {
        props.on_change.call(AgencyGroup::from_slug(&evt.value()));
    };

    rsx! {
        label {
            style: "font-weight: bold; display: flex; flex-direction: column; gap: 4px;",
            "Tipo de órgão"
            select {
                id: "agency-type-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: props.selected.is_none(),
                    "Todos"
                }
                for group in AgencyGroup::ALL {
                    option {
                        key: "{group.slug()}",
                        value: "{group.slug()}",
                        selected: props.selected == Some(group),
                        "{group.label()}"
                    }
                }
            }
        }
    }
}
