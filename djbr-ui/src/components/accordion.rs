use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AccordionProps {
    pub title: String,
    pub open: bool,
    pub on_toggle: EventHandler<()>,
    pub children: Element,
}

/// Collapsible section; children are only rendered while open.
#[component]
pub fn Accordion(props: AccordionProps) -> Element {
    let marker = if props.open { "▾" } else { "▸" };
    rsx! {
        section {
            style: "border: 1px solid #ddd; border-radius: 4px; margin-top: 12px;",
            button {
                style: "width: 100%; text-align: left; padding: 12px; font-size: 16px; background: #fafafa; border: none; cursor: pointer;",
                onclick: move |_| props.on_toggle.call(()),
                "{marker} {props.title}"
            }
            if props.open {
                div { style: "padding: 12px;", {props.children} }
            }
        }
    }
}
