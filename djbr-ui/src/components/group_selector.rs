//! "Explore by group" dropdown of the home page.

use djbr_api::models::AgencyGroup;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GroupSelectorProps {
    /// Called with the chosen group; the page navigates to its path.
    pub on_select: EventHandler<AgencyGroup>,
}

#[component]
pub fn GroupSelector(props: GroupSelectorProps) -> Element {
    let on_change = move |evt: Event<FormData>| {
        if let Some(group) = AgencyGroup::from_slug(&evt.value()) {
            props.on_select.call(group);
        }
    };

    rsx! {
        select {
            id: "group-select",
            style: "padding: 8px; font-size: 16px;",
            onchange: on_change,
            option { value: "", selected: true, disabled: true, "Selecione um grupo de órgãos" }
            for group in AgencyGroup::ALL {
                option {
                    key: "{group.slug()}",
                    value: "{group.slug()}",
                    "{group.label()}"
                }
            }
        }
    }
}
