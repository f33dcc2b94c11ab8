use dioxus::prelude::*;

/// Placeholder shown while a fetch is in flight.
#[component]
pub fn LoadingSpinner(#[props(default = "Aguarde...".to_string())] message: String) -> Element {
    rsx! {
        div {
            role: "status",
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 32px; color: #3e5363;",
            div {
                style: "width: 28px; height: 28px; border: 3px solid #d5dde3; border-top-color: #3e5363; border-radius: 50%;",
            }
            "{message}"
        }
    }
}
