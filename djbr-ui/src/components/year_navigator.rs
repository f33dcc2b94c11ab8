//! Previous/next year buttons around the displayed year.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct YearNavigatorProps {
    pub year: i32,
    pub has_previous: bool,
    pub has_next: bool,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

#[component]
pub fn YearNavigator(props: YearNavigatorProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; gap: 16px; margin: 12px 0;",
            button {
                disabled: !props.has_previous,
                title: "Ano anterior",
                onclick: move |_| props.on_previous.call(()),
                "‹"
            }
            span {
                style: "font-size: 20px; font-weight: bold;",
                "{props.year}"
            }
            button {
                disabled: !props.has_next,
                title: "Próximo ano",
                onclick: move |_| props.on_next.call(()),
                "›"
            }
        }
    }
}
