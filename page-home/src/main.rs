//! Home page
//!
//! Headline figures, the monthly remuneration of all agencies for one year
//! with previous/next navigation, the group drop-down and the transparency
//! index tabs.
//!
//! Data flow:
//! 1. On mount: load D3.js, fetch the headline, the current year and the
//!    first index tab.
//! 2. On year change: exactly one fetch for the new year; the dataset is
//!    replaced wholesale once it arrives, unless a newer year was requested.
//! 3. On tab change: fetch the group once, then serve it from the cache.
//! 4. Series toggles re-render the chart from the data already held.

use djbr_api::links::group_path;
use djbr_api::models::AgencyGroup;
use djbr_api::ApiClient;
use djbr_data::loaders::home::{
    fetch_group_points, fetch_year, load_headline, HomeChart, IndexTabs, YearRequest,
};
use djbr_data::remuneration::{general_monthly_chart, HiddenSeries};
use djbr_data::summary::Headline;
use djbr_search::Location;
use djbr_ui::components::{
    ChartContainer, ChartHeader, GroupSelector, Header, IndexChartLegend, LoadingSpinner,
    NoDataNotice, RemunerationLegend, YearNavigator,
};
use djbr_ui::js_bridge;
use djbr_ui::location::BrowserLocation;
use djbr_ui::state::AppState;
use dioxus::prelude::*;

/// DOM id for the remuneration chart container div.
const REMUNERATION_CHART_ID: &str = "home-remuneration-chart";
const INDEX_CHART_ID: &str = "home-index-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("home-root"))
        .launch(App);
}

fn load_year(client: ApiClient, mut chart: Signal<HomeChart>, request: YearRequest) {
    spawn(async move {
        let result = fetch_year(&client, request).await;
        chart.write().apply(request, result);
    });
}

fn load_group(client: ApiClient, mut tabs: Signal<IndexTabs>, group: Option<AgencyGroup>) {
    let Some(group) = group else {
        return;
    };
    spawn(async move {
        let result = fetch_group_points(&client, group).await;
        tabs.write().store(group, result);
    });
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(|| state.client());
    let current_year = *state.current_year.peek();
    let mut headline: Signal<Option<Headline>> = use_signal(|| None);
    let mut chart = use_signal(|| HomeChart::new(current_year));
    let mut tabs = use_signal(IndexTabs::new);
    let mut hidden = use_signal(HiddenSeries::default);

    // ─── Effect 1: initial fetches, once on mount ───
    let mount_client = client.clone();
    use_effect(move || {
        js_bridge::init_charts();
        let request = chart.write().reload();
        load_year(mount_client.clone(), chart, request);
        let group = tabs.write().select(AgencyGroup::StateJustice);
        load_group(mount_client.clone(), tabs, group);

        let client = mount_client.clone();
        spawn(async move {
            headline.set(load_headline(&client).await);
            state.loading.set(false);
        });
    });

    // ─── Effect 2: redraw the remuneration chart on data or toggle change ───
    use_effect(move || {
        let current = chart.read();
        if current.is_loading() || current.data().is_empty() {
            return;
        }
        let bars = general_monthly_chart(current.data(), hidden());
        let config = serde_json::json!({ "moneyAxis": false }).to_string();
        js_bridge::render_bar_chart(REMUNERATION_CHART_ID, &bars, &config);
    });

    // ─── Effect 3: redraw the index chart for the selected tab ───
    use_effect(move || {
        let current = tabs.read();
        if let Some(points) = current.points(current.selected()) {
            if points.is_empty() {
                js_bridge::destroy_chart(INDEX_CHART_ID);
            } else {
                js_bridge::render_group_index_chart(INDEX_CHART_ID, &points, "{}");
            }
        }
    });

    let (year, has_previous, has_next, chart_loading, chart_empty) = {
        let current = chart.read();
        (
            current.year(),
            current.has_previous(),
            current.has_next(),
            current.is_loading(),
            current.data().is_empty(),
        )
    };
    let (selected_group, tab_loading, tab_failed) = {
        let current = tabs.read();
        (
            current.selected(),
            current.is_loading(),
            current.has_failed(current.selected()),
        )
    };
    let previous_client = client.clone();
    let next_client = client.clone();

    // ─── Render ───
    rsx! {
        Header {}
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            section {
                style: "padding: 48px 16px; background: #3e5363; color: #fff; border-radius: 4px; margin: 12px 0;",
                h1 { style: "margin-top: 0;", "A Justiça brasileira é transparente?" }
                if let Some(h) = headline() {
                    p {
                        style: "font-size: 18px;",
                        "{h.sentence()}"
                    }
                } else if *state.loading.read() {
                    LoadingSpinner {}
                }
                GroupSelector {
                    on_select: move |group| BrowserLocation.redirect(&group_path(group)),
                }
            }

            section {
                ChartHeader {
                    title: "Índice de transparência".to_string(),
                    subtitle: "Média harmônica de completude e facilidade de cada órgão".to_string(),
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 4px; border-bottom: 1px solid #ddd;",
                    {AgencyGroup::ALL.into_iter().map(|group| {
                        let client = client.clone();
                        let style = if group == selected_group {
                            "padding: 8px; border: none; border-bottom: 3px solid #3e5363; background: none; font-weight: bold;"
                        } else {
                            "padding: 8px; border: none; background: none;"
                        };
                        rsx! {
                            button {
                                key: "{group.slug()}",
                                style: "{style}",
                                onclick: move |_| {
                                    let pending = tabs.write().select(group);
                                    load_group(client.clone(), tabs, pending);
                                },
                                "{group.label()}"
                            }
                        }
                    })}
                }
                IndexChartLegend {}
                if tab_failed {
                    NoDataNotice { message: "Não foi possível carregar o índice deste grupo.".to_string() }
                } else if tab_loading {
                    LoadingSpinner {}
                }
                ChartContainer {
                    id: INDEX_CHART_ID.to_string(),
                    loading: tab_loading,
                    min_height: 200,
                }
            }

            section {
                ChartHeader {
                    title: format!("Total de remunerações de órgãos em {year}"),
                    subtitle: "Remuneração base e outras remunerações de todos os órgãos, mês a mês".to_string(),
                }
                YearNavigator {
                    year,
                    has_previous,
                    has_next,
                    on_previous: move |_| {
                        let request = chart.write().previous();
                        if let Some(request) = request {
                            load_year(previous_client.clone(), chart, request);
                        }
                    },
                    on_next: move |_| {
                        let request = chart.write().next();
                        if let Some(request) = request {
                            load_year(next_client.clone(), chart, request);
                        }
                    },
                }
                RemunerationLegend {
                    hidden: hidden(),
                    on_hidden: move |value| hidden.set(value),
                    show_discounts: false,
                }
                if !chart_loading && chart_empty {
                    NoDataNotice { message: "Não há dados para esse ano.".to_string() }
                } else {
                    ChartContainer {
                        id: REMUNERATION_CHART_ID.to_string(),
                        loading: chart_loading,
                        min_height: 450,
                    }
                }
            }
        }
    }
}
