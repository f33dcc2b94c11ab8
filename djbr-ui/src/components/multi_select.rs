//! Checkbox list with an optional selection limit.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MultiSelectProps {
    pub label: String,
    pub options: Vec<SelectOption>,
    pub selected: Vec<String>,
    /// Called with the value of the clicked option.
    pub on_toggle: EventHandler<String>,
    /// Unselected options are disabled once this many are selected.
    #[props(default)]
    pub limit: Option<usize>,
}

#[component]
pub fn MultiSelect(props: MultiSelectProps) -> Element {
    let full = props
        .limit
        .is_some_and(|limit| props.selected.len() >= limit);
    let on_toggle = props.on_toggle;

    rsx! {
        fieldset {
            style: "border: 1px solid #ccc; border-radius: 4px; padding: 8px; max-height: 220px; overflow-y: auto;",
            legend { style: "font-weight: bold;", "{props.label}" }
            if let Some(limit) = props.limit {
                p {
                    style: "margin: 0 0 4px 0; font-size: 12px; color: #666;",
                    "Selecione até {limit}"
                }
            }
            {props.options.iter().map(|option| {
                let checked = props.selected.contains(&option.value);
                let value = option.value.clone();
                rsx! {
                    label {
                        key: "{option.value}",
                        style: "display: block; font-size: 14px;",
                        input {
                            r#type: "checkbox",
                            checked: checked,
                            disabled: full && !checked,
                            onchange: move |_| on_toggle.call(value.clone()),
                        }
                        " {option.label}"
                    }
                }
            })}
        }
    }
}
