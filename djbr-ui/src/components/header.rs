//! Site navigation bar.

use djbr_api::links::SEARCH_PATH;
use dioxus::prelude::*;

const LINKS: [(&str, &str); 4] = [
    ("Início", "/"),
    ("Pesquisar", SEARCH_PATH),
    ("Índice de transparência", "/indice"),
    ("Sobre", "/sobre"),
];

#[component]
pub fn Header() -> Element {
    rsx! {
        nav {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: #3e5363; color: #fff;",
            a {
                href: "/",
                style: "color: #fff; font-weight: bold; font-size: 20px; text-decoration: none;",
                "DadosJusBr"
            }
            div {
                style: "display: flex; gap: 16px;",
                for (label, href) in LINKS {
                    a {
                        key: "{href}",
                        href: "{href}",
                        style: "color: #fff; text-decoration: none;",
                        "{label}"
                    }
                }
            }
        }
    }
}
