//! Modal with a shareable link and a copy button.

use dioxus::prelude::*;

use crate::js_bridge;

#[derive(Props, Clone, PartialEq)]
pub struct ShareModalProps {
    pub open: bool,
    pub url: String,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn ShareModal(props: ShareModalProps) -> Element {
    let mut copied = use_signal(|| false);
    if !props.open {
        return rsx! {};
    }
    let url = props.url.clone();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.45); display: flex; align-items: center; justify-content: center; z-index: 10;",
            onclick: move |_| {
                copied.set(false);
                props.on_close.call(());
            },
            div {
                style: "background: #fff; border-radius: 6px; padding: 20px; min-width: 320px; max-width: 90vw;",
                onclick: move |evt| evt.stop_propagation(),
                h3 { style: "margin-top: 0;", "Compartilhar" }
                input {
                    r#type: "text",
                    readonly: true,
                    value: "{props.url}",
                    style: "width: 100%; padding: 6px; box-sizing: border-box;",
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 12px;",
                    button {
                        onclick: move |_| {
                            js_bridge::copy_to_clipboard(&url);
                            copied.set(true);
                        },
                        if copied() { "Copiado!" } else { "Copiar link" }
                    }
                    button {
                        onclick: move |_| {
                            copied.set(false);
                            props.on_close.call(());
                        },
                        "Fechar"
                    }
                }
            }
        }
    }
}
