//! Year dropdown, newest first.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct YearSelectorProps {
    pub years: Vec<i32>,
    pub selected: i32,
    pub on_change: EventHandler<i32>,
}

#[component]
pub fn YearSelector(props: YearSelectorProps) -> Element {
    let on_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            props.on_change.call(year);
        }
    };

    rsx! {
        label {
            style: "font-weight: bold; display: flex; flex-direction: column; gap: 4px;",
            "Ano"
            select {
                id: "year-select",
                onchange: on_change,
                for year in props.years.iter() {
                    option {
                        key: "{year}",
                        value: "{year}",
                        selected: *year == props.selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
