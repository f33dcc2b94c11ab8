//! Agency page (`/orgao/{id}` and `/orgao/{id}/{year}`)
//!
//! Title, contact details and last collection date, the per-year
//! remuneration chart (or the per-month chart of one year), the data
//! package download, the share modal and the transparency index.
//!
//! Data flow:
//! 1. On mount: fetch the agency, its annual summaries and the totals of the
//!    requested (or latest) year. Any failure redirects to `/404`.
//! 2. Graph type and series toggles redraw from the data already held.
//! 3. The index is fetched the first time its accordion opens.

use djbr_api::links::agency_year_path;
use djbr_data::index::IndexPoint;
use djbr_data::loaders::agency::{open_agency_index, open_agency_page, AgencyPage};
use djbr_data::remuneration::{
    agency_month_chart, annual_chart, incomplete_year_warning, GraphType, HiddenSeries,
};
use djbr_search::Location;
use djbr_ui::components::{
    Accordion, ChartContainer, ChartHeader, Header, IndexChartLegend, LoadingSpinner,
    NoDataNotice, NotCollecting, RemunerationLegend, ShareModal,
};
use djbr_ui::js_bridge;
use djbr_ui::location::BrowserLocation;
use djbr_ui::state::AppState;
use dioxus::prelude::*;

const REMUNERATION_CHART_ID: &str = "agency-remuneration-chart";
const INDEX_CHART_ID: &str = "agency-index-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("agency-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(|| state.client());
    let current_year = *state.current_year.peek();
    let mut page: Signal<Option<AgencyPage>> = use_signal(|| None);
    let mut graph_type = use_signal(GraphType::default);
    let mut hidden = use_signal(HiddenSeries::default);
    let mut info_open = use_signal(|| false);
    let mut index_open = use_signal(|| false);
    let mut index_points: Signal<Option<Vec<IndexPoint>>> = use_signal(|| None);
    let mut index_requested = use_signal(|| false);
    let mut share_open = use_signal(|| false);

    // ─── Effect 1: page data, once on mount ───
    let mount_client = client.clone();
    use_effect(move || {
        js_bridge::init_charts();
        let client = mount_client.clone();
        spawn(async move {
            let path = BrowserLocation.path();
            if let Some(loaded) = open_agency_page(&client, &BrowserLocation, &path).await {
                page.set(Some(loaded));
                state.loading.set(false);
            }
        });
    });

    // ─── Effect 2: remuneration chart ───
    use_effect(move || {
        let current = page.read();
        let Some(current) = current.as_ref() else {
            return;
        };
        let config = serde_json::json!({ "moneyAxis": true }).to_string();
        match (current.year, current.totals.as_ref()) {
            (Some(_), Some(totals)) => {
                let bars = agency_month_chart(totals, hidden());
                js_bridge::render_bar_chart(REMUNERATION_CHART_ID, &bars, &config);
            }
            _ if !current.annual.is_empty() => {
                let bars = annual_chart(&current.annual, graph_type(), hidden(), current_year);
                js_bridge::render_bar_chart(REMUNERATION_CHART_ID, &bars, &config);
            }
            _ => js_bridge::destroy_chart(REMUNERATION_CHART_ID),
        }
    });

    // ─── Effect 3: index chart once its points arrive ───
    use_effect(move || {
        if !index_open() {
            return;
        }
        if let Some(points) = index_points.read().as_ref() {
            js_bridge::render_index_chart(INDEX_CHART_ID, points, "{}");
        }
    });

    let index_client = client.clone();
    let config = state.config.read().clone();
    let loaded = page.read().clone();
    let agency_id = loaded.as_ref().map(|p| p.agency.id.clone()).unwrap_or_default();

    // ─── Render ───
    rsx! {
        Header {}
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if *state.loading.read() {
                LoadingSpinner {}
            }

            if let Some(loaded) = loaded {
                h2 { style: "text-align: center;", "{loaded.title()}" }
                if let Some(label) = loaded.last_collected_label() {
                    p { style: "text-align: center; color: #666; font-size: 13px;", "{label}" }
                }
                Accordion {
                    title: "Mais informações".to_string(),
                    open: info_open(),
                    on_toggle: move |_| info_open.toggle(),
                    ul {
                        if let Some(ombudsman) = loaded.agency.ombudsman.as_ref() {
                            li { "Ouvidoria: " a { href: "{ombudsman}", "{ombudsman}" } }
                        }
                        if let Some(handle) = loaded.agency.twitter_handle.as_ref() {
                            li { "Twitter: " a { href: "https://twitter.com/{handle}", "@{handle}" } }
                        }
                        li { "Entidade: {loaded.agency.entity}" }
                    }
                }

                if !loaded.shows_details() {
                    NotCollecting { agency: loaded.agency.clone() }
                } else {
                    div {
                        style: "display: flex; justify-content: space-between; margin: 16px 0;",
                        if loaded.year.is_some() {
                            a { href: "/orgao/{loaded.agency.id}", "Voltar" }
                        } else if let Some(latest) = loaded.annual.last() {
                            a { href: "{agency_year_path(&loaded.agency.id, latest.year)}", "Explorar {latest.year}" }
                        } else {
                            span {}
                        }
                        div {
                            style: "display: flex; gap: 8px;",
                            button { onclick: move |_| share_open.set(true), "Compartilhar" }
                            if let Some((url, size)) = loaded.download(&config) {
                                a { href: "{url}", "Baixar ({size})" }
                            }
                        }
                    }

                    section {
                        if let Some(year) = loaded.year {
                            ChartHeader {
                                title: format!("Remunerações em {year}"),
                                subtitle: "Total mensal de remuneração base, outras remunerações e descontos".to_string(),
                            }
                            RemunerationLegend {
                                hidden: hidden(),
                                on_hidden: move |value| hidden.set(value),
                            }
                        } else {
                            ChartHeader {
                                title: "Remunerações por ano".to_string(),
                                subtitle: "Anos sem dados aparecem em cinza".to_string(),
                            }
                            RemunerationLegend {
                                hidden: hidden(),
                                on_hidden: move |value| hidden.set(value),
                                graph_type: Some(graph_type()),
                                on_graph_type: move |value| graph_type.set(value),
                                warning: incomplete_year_warning(&loaded.annual, current_year),
                            }
                        }
                        if loaded.annual.is_empty() {
                            NoDataNotice { message: "Não há dados para esse órgão.".to_string() }
                        } else {
                            ChartContainer {
                                id: REMUNERATION_CHART_ID.to_string(),
                                min_height: 450,
                            }
                        }
                    }

                    Accordion {
                        title: "Índice de transparência".to_string(),
                        open: index_open(),
                        on_toggle: move |_| {
                            index_open.toggle();
                            if index_open() && !index_requested() {
                                index_requested.set(true);
                                let client = index_client.clone();
                                let id = agency_id.clone();
                                spawn(async move {
                                    let points = open_agency_index(&client, &BrowserLocation, &id).await;
                                    index_points.set(points);
                                });
                            }
                        },
                        IndexChartLegend {}
                        if index_points.read().is_none() {
                            LoadingSpinner {}
                        }
                        ChartContainer {
                            id: INDEX_CHART_ID.to_string(),
                            min_height: 160,
                        }
                    }

                    ShareModal {
                        open: share_open(),
                        url: config.agency_share_url(&loaded.agency.id),
                        on_close: move |_| share_open.set(false),
                    }
                }
            }
        }
    }
}
