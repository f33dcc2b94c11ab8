//! Legend of the remuneration charts with the series toggles and, on the
//! agency page, the graph type switch.

use djbr_data::remuneration::{
    GraphType, HiddenSeries, BASE_COLOR, BASE_LABEL, DISCOUNTS_COLOR, DISCOUNTS_LABEL,
    NO_DATA_COLOR, NO_DATA_LABEL, OTHER_COLOR, OTHER_LABEL,
};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RemunerationLegendProps {
    pub hidden: HiddenSeries,
    pub on_hidden: EventHandler<HiddenSeries>,
    /// Shown only when the chart has a graph type switch.
    #[props(default)]
    pub graph_type: Option<GraphType>,
    #[props(default)]
    pub on_graph_type: Option<EventHandler<GraphType>>,
    #[props(default = true)]
    pub show_discounts: bool,
    #[props(default)]
    pub warning: Option<String>,
}

#[derive(Props, Clone, PartialEq)]
struct ToggleProps {
    label: &'static str,
    color: &'static str,
    hidden: bool,
    on_toggle: EventHandler<()>,
}

#[component]
fn SeriesToggle(props: ToggleProps) -> Element {
    let opacity = if props.hidden { "0.35" } else { "1" };
    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 6px; margin-right: 16px; cursor: pointer; opacity: {opacity};",
            input {
                r#type: "checkbox",
                checked: !props.hidden,
                onchange: move |_| props.on_toggle.call(()),
            }
            span { style: "display: inline-block; width: 12px; height: 12px; background: {props.color};" }
            "{props.label}"
        }
    }
}

#[component]
pub fn RemunerationLegend(props: RemunerationLegendProps) -> Element {
    let hidden = props.hidden;
    let on_hidden = props.on_hidden;

    rsx! {
        div {
            style: "margin: 8px 0;",
            if let (Some(current), Some(on_graph_type)) = (props.graph_type, props.on_graph_type) {
                div {
                    style: "display: flex; gap: 8px; margin-bottom: 8px;",
                    {GraphType::ALL.into_iter().map(|graph| {
                        let style = if graph == current {
                            "font-weight: bold; border-bottom: 2px solid #3e5363;"
                        } else {
                            ""
                        };
                        rsx! {
                            button {
                                key: "{graph.slug()}",
                                style: "{style}",
                                onclick: move |_| on_graph_type.call(graph),
                                "{graph.label()}"
                            }
                        }
                    })}
                }
            }
            div {
                SeriesToggle {
                    label: BASE_LABEL,
                    color: BASE_COLOR,
                    hidden: hidden.wage,
                    on_toggle: move |_| on_hidden.call(HiddenSeries { wage: !hidden.wage, ..hidden }),
                }
                SeriesToggle {
                    label: OTHER_LABEL,
                    color: OTHER_COLOR,
                    hidden: hidden.benefits,
                    on_toggle: move |_| on_hidden.call(HiddenSeries { benefits: !hidden.benefits, ..hidden }),
                }
                if props.show_discounts {
                    SeriesToggle {
                        label: DISCOUNTS_LABEL,
                        color: DISCOUNTS_COLOR,
                        hidden: hidden.discounts,
                        on_toggle: move |_| on_hidden.call(HiddenSeries { discounts: !hidden.discounts, ..hidden }),
                    }
                }
                SeriesToggle {
                    label: NO_DATA_LABEL,
                    color: NO_DATA_COLOR,
                    hidden: hidden.no_data,
                    on_toggle: move |_| on_hidden.call(HiddenSeries { no_data: !hidden.no_data, ..hidden }),
                }
            }
            if let Some(warning) = props.warning.as_ref() {
                p {
                    style: "margin: 8px 0 0 0; padding: 8px; background: #FFF8E1; border: 1px solid #FFE082; border-radius: 4px; font-size: 13px;",
                    "{warning}"
                }
            }
        }
    }
}
