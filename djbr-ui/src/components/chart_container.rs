//! Figure wrapper the D3.js charts draw into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id handed to the `render_*` bridge functions
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 450)]
    pub min_height: u32,
    /// Show the data source line under the chart
    #[props(default = true)]
    pub source: bool,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let min_height = props.min_height;
    let opacity = if props.loading { "0.3" } else { "1" };

    rsx! {
        figure {
            style: "margin: 0; position: relative; width: 100%;",
            div {
                id: "{props.id}",
                style: "min-height: {min_height}px; width: 100%; opacity: {opacity};",
            }
            if props.loading {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #3e5363;",
                    "Carregando gráfico..."
                }
            }
            if props.source {
                figcaption {
                    style: "text-align: right; font-size: 11px; color: #888;",
                    "Fonte: DadosJusBr | dadosjusbr.org"
                }
            }
        }
    }
}
