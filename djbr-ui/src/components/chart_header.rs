use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default)]
    pub subtitle: String,
}

/// Section title above a chart, with an optional explanatory line.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        header {
            style: "margin: 24px 0 8px; text-align: center;",
            h3 {
                style: "margin: 0; font-size: 20px; color: #3e5363;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                small {
                    style: "display: block; margin-top: 4px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
