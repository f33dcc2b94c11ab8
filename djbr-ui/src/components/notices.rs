//! Explicit empty-data states.

use djbr_api::models::Agency;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NotCollectingProps {
    pub agency: Agency,
}

/// Shown instead of the charts while an agency's data is not collected.
#[component]
pub fn NotCollecting(props: NotCollectingProps) -> Element {
    let reasons = props.agency.collecting_reasons().to_vec();
    rsx! {
        div {
            style: "padding: 16px; margin: 12px 0; background: #ECEFF1; border-radius: 4px;",
            h4 { style: "margin-top: 0;", "Não coletamos os dados deste órgão" }
            if reasons.is_empty() {
                p { "O órgão não disponibiliza dados de remuneração em formato coletável." }
            }
            ul {
                for reason in reasons.iter() {
                    li { key: "{reason}", "{reason}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoDataNoticeProps {
    #[props(default = "Não há dados para esse período.".to_string())]
    pub message: String,
}

#[component]
pub fn NoDataNotice(props: NoDataNoticeProps) -> Element {
    rsx! {
        p {
            style: "padding: 16px 0; text-align: center; color: #555;",
            "{props.message}"
        }
    }
}
