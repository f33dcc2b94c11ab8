//! Search page
//!
//! Filters (year, months, agency type, agencies, category) are mirrored in
//! the address bar so a search can be shared by link. Results are shown a
//! page of ten rows at a time, with a download link when the backend allows
//! the whole result to be downloaded.
//!
//! Data flow:
//! 1. On mount: fetch the agency list, parse the URL into filters and run
//!    the search right away only when the URL carried parameters.
//! 2. On any filter change: replace the query string (no reload, no new
//!    history entry).
//! 3. On submit: one search per click; responses of superseded or cleared
//!    searches are dropped.

use djbr_api::models::Agency;
use djbr_api::ApiClient;
use djbr_data::loaders::search::{fetch_search, load_search_agencies, SearchSession};
use djbr_search::{QuerySync, SearchFilters, MAX_SELECTED_AGENCIES};
use djbr_ui::components::{
    AgencyTypeSelector, CategorySelector, ErrorDisplay, Header, LoadingSpinner, MultiSelect,
    NoDataNotice, PaginatedTable, SelectOption, ShareModal, YearSelector,
};
use djbr_ui::location::BrowserLocation;
use djbr_ui::state::AppState;
use djbr_utils::{dates, format};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("search-root"))
        .launch(App);
}

fn run_search(client: ApiClient, session: Signal<SearchSession>, filters: &SearchFilters) {
    run_query(client, session, &filters.to_query());
}

fn run_query(client: ApiClient, mut session: Signal<SearchSession>, query: &str) {
    let request = session.write().submit_query(query);
    spawn(async move {
        let result = fetch_search(&client, &request).await;
        session.write().apply(&request, result);
    });
}

fn month_options() -> Vec<SelectOption> {
    (1..=12)
        .map(|m| SelectOption::new(m.to_string(), format::month_name(m)))
        .collect()
}

fn agency_options(filters: &SearchFilters, agencies: &[Agency]) -> Vec<SelectOption> {
    filters
        .agency_options(agencies)
        .into_iter()
        .map(|a| SelectOption::new(a.id.clone(), format!("{} ({})", a.name, format::agency_code(&a.id))))
        .collect()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(|| state.client());
    let current_year = *state.current_year.peek();
    let mut sync = use_signal(|| QuerySync::new(BrowserLocation));
    let mut filters = use_signal(|| SearchFilters::new(current_year));
    let mut session = use_signal(SearchSession::new);
    let mut share_open = use_signal(|| false);

    // ─── Effect 1: agencies, URL filters and the optional first search ───
    let mount_client = client.clone();
    use_effect(move || {
        let client = mount_client.clone();
        spawn(async move {
            let agencies = load_search_agencies(&client).await;
            if agencies.is_empty() {
                state
                    .error_msg
                    .set(Some("Não foi possível carregar a lista de órgãos.".to_string()));
            }
            let initial = sync.write().load(&agencies, current_year);
            state.agencies.set(agencies);
            filters.set(initial.filters.clone());
            state.loading.set(false);
            if initial.auto_search {
                run_query(client, session, &initial.query);
            }
        });
    });

    // ─── Effect 2: mirror every filter change into the address bar ───
    use_effect(move || {
        let current = filters.read().clone();
        sync.write().publish(&current);
    });

    let current = filters.read().clone();
    let agencies = state.agencies.read().clone();
    let selected_months: Vec<String> = current.months.months().iter().map(u32::to_string).collect();
    let selected_agencies: Vec<String> = current.agencies().to_vec();
    let config = state.config.read().clone();
    let share_url = config.search_share_url(&current.to_location_query());
    let submit_client = client.clone();

    let (loading, results, page_rows, pagination) = {
        let s = session.read();
        (
            s.is_loading(),
            s.results().cloned(),
            s.page_rows().to_vec(),
            s.pagination(),
        )
    };

    // ─── Render ───
    rsx! {
        Header {}
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            h2 { "Pesquisar remunerações" }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 12px;",
                    YearSelector {
                        years: dates::available_years(current_year),
                        selected: current.year,
                        on_change: move |year| filters.write().year = year,
                    }
                    AgencyTypeSelector {
                        selected: current.agency_type,
                        on_change: move |group| filters.write().agency_type = group,
                    }
                    MultiSelect {
                        label: "Meses".to_string(),
                        options: month_options(),
                        selected: selected_months,
                        on_toggle: move |value: String| {
                            if let Ok(month) = value.parse::<u32>() {
                                filters.write().months.toggle(month);
                            }
                        },
                    }
                    MultiSelect {
                        label: "Órgãos".to_string(),
                        options: agency_options(&current, &agencies),
                        selected: selected_agencies,
                        limit: Some(MAX_SELECTED_AGENCIES),
                        on_toggle: move |id: String| {
                            filters.write().toggle_agency(&id);
                        },
                    }
                    CategorySelector {
                        selected: current.category,
                        on_change: move |category| filters.write().category = category,
                    }
                }
                div {
                    style: "display: flex; gap: 8px; margin: 12px 0;",
                    button {
                        onclick: move |_| {
                            let snapshot = filters.read().clone();
                            run_search(submit_client.clone(), session, &snapshot);
                        },
                        "Pesquisar"
                    }
                    button {
                        onclick: move |_| {
                            filters.write().clear(current_year);
                            session.write().clear();
                        },
                        "Limpar"
                    }
                }
            }

            if loading {
                LoadingSpinner { message: "Pesquisando...".to_string() }
            } else if let Some(results) = results {
                section {
                    style: "margin-top: 16px;",
                    if results.shows_sample_warning() {
                        p {
                            style: "padding: 8px; background: #FFF8E1; border: 1px solid #FFE082; border-radius: 4px;",
                            "{results.message()}"
                        }
                    } else if results.shows_rows() {
                        p { "{results.message()}" }
                    } else {
                        NoDataNotice { message: results.message() }
                    }
                    div {
                        style: "display: flex; gap: 8px;",
                        button { onclick: move |_| share_open.set(true), "Compartilhar" }
                        if results.download_enabled() {
                            a {
                                href: "{config.search_download_url(&results.query)}",
                                "Baixar"
                            }
                        } else {
                            button { disabled: true, "Baixar" }
                        }
                    }
                    if results.shows_rows() {
                        PaginatedTable {
                            rows: page_rows,
                            pagination,
                            total: results.rows.len(),
                            on_previous: move |_| session.write().previous_page(),
                            on_next: move |_| session.write().next_page(),
                        }
                    }
                }
            }

            ShareModal {
                open: share_open(),
                url: share_url,
                on_close: move |_| share_open.set(false),
            }
        }
    }
}
