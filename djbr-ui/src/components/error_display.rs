use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Renders a close button when set
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Inline alert for failures the page can keep working around.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let on_dismiss = props.on_dismiss;
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; gap: 8px; padding: 10px 14px; margin: 8px 0; background: #FDECEA; color: #B71C1C; border-left: 4px solid #B71C1C;",
            span { "{props.message}" }
            if let Some(handler) = on_dismiss {
                button {
                    style: "border: none; background: none; color: inherit; cursor: pointer;",
                    title: "Fechar",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
