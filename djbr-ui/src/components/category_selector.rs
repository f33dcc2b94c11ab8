//! Remuneration category radio group.

use djbr_search::Category;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CategorySelectorProps {
    pub selected: Category,
    pub on_change: EventHandler<Category>,
}

#[component]
pub fn CategorySelector(props: CategorySelectorProps) -> Element {
    let on_change = props.on_change;
    rsx! {
        fieldset {
            style: "border: 1px solid #ccc; border-radius: 4px; padding: 8px;",
            legend { style: "font-weight: bold;", "Categorias" }
            for category in Category::ALL {
                label {
                    key: "{category.label()}",
                    style: "display: block; font-size: 14px;",
                    input {
                        r#type: "radio",
                        name: "category",
                        checked: category == props.selected,
                        onchange: move |_| on_change.call(category),
                    }
                    " {category.label()}"
                }
            }
        }
    }
}
