//! Result table, one page of rows at a time.

use djbr_search::{Pagination, ResultRow, RESULT_COLUMNS};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PaginatedTableProps {
    /// Rows of the current page.
    pub rows: Vec<ResultRow>,
    pub pagination: Pagination,
    /// Rows across all pages.
    pub total: usize,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

const VALUE_COLUMN: usize = RESULT_COLUMNS.len() - 1;

fn cell_style(column: usize) -> &'static str {
    if column == VALUE_COLUMN {
        "padding: 6px; text-align: right;"
    } else {
        "padding: 6px;"
    }
}

#[component]
pub fn PaginatedTable(props: PaginatedTableProps) -> Element {
    let range = props.pagination.range_label(props.total);
    rsx! {
        div {
            style: "overflow-x: auto; margin-top: 12px;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for column in RESULT_COLUMNS {
                            th {
                                key: "{column}",
                                style: "text-align: left; padding: 6px; border-bottom: 2px solid #3e5363;",
                                "{column}"
                            }
                        }
                    }
                }
                tbody {
                    for item in props.rows.iter() {
                        tr {
                            key: "{item.id}",
                            style: "border-bottom: 1px solid #eee;",
                            for (i, cell) in item.cells().into_iter().enumerate() {
                                td {
                                    key: "{i}",
                                    style: cell_style(i),
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "display: flex; justify-content: flex-end; align-items: center; gap: 12px; margin-top: 8px;",
                span { style: "font-size: 13px; color: #666;", "{range}" }
                button {
                    disabled: !props.pagination.has_previous(),
                    onclick: move |_| props.on_previous.call(()),
                    "Anterior"
                }
                button {
                    disabled: !props.pagination.has_next(props.total),
                    onclick: move |_| props.on_next.call(()),
                    "Próxima"
                }
            }
        }
    }
}
