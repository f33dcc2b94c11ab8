use dioxus::prelude::*;

/// Explains the two dimensions of the transparency index.
#[component]
pub fn IndexChartLegend() -> Element {
    rsx! {
        div {
            style: "font-size: 13px; color: #444; margin: 8px 0; display: flex; flex-wrap: wrap; gap: 16px;",
            span {
                span { style: "display: inline-block; width: 12px; height: 12px; background: #3E5363; margin-right: 6px;" }
                "Índice de transparência (média harmônica das dimensões)"
            }
            span {
                span { style: "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: #7C95A8; margin-right: 6px;" }
                "Completude"
            }
            span {
                span { style: "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: #B361C6; margin-right: 6px;" }
                "Facilidade"
            }
        }
    }
}
