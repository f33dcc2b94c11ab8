//! Parametric search from the command line.

use anyhow::{bail, Context};
use clap::Args;
use djbr_api::{ApiClient, ApiConfig};
use djbr_data::loaders::search::SearchSession;
use djbr_search::{Category, MonthSet, Pagination, SearchFilters, SearchResults, MAX_SELECTED_AGENCIES};
use djbr_utils::{dates, format};
use log::{info, warn};

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Year to search (defaults to the current collection year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Comma-separated months, 1-12 (defaults to every month)
    #[arg(short, long, value_delimiter = ',')]
    pub months: Vec<u32>,

    /// Comma-separated agency ids, at most three
    #[arg(short, long, value_delimiter = ',')]
    pub agencies: Vec<String>,

    /// Remuneration category: base, outras or descontos
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,
}

fn parse_category(value: &str) -> Result<Category, String> {
    match value.trim() {
        "tudo" => Ok(Category::All),
        other => match Category::from_param(other) {
            Category::All => Err(format!(
                "unknown category '{other}' (expected base, outras or descontos)"
            )),
            category => Ok(category),
        },
    }
}

/// Build the filters a search page would hold for these arguments.
///
/// Unlike the address bar, bad arguments are reported instead of being
/// replaced by defaults.
pub fn build_filters(args: &SearchArgs, current_year: i32) -> anyhow::Result<SearchFilters> {
    let mut filters = SearchFilters::new(current_year);
    if let Some(year) = args.year {
        if dates::clamp_year(year, current_year) != year {
            bail!(
                "year {} is outside {}..={}",
                year,
                dates::FIRST_YEAR,
                current_year
            );
        }
        filters.year = year;
    }
    if !args.months.is_empty() {
        if let Some(bad) = args.months.iter().find(|m| !(1..=12).contains(*m)) {
            bail!("month {} is not in 1-12", bad);
        }
        filters.months = MonthSet::from_months(args.months.iter().copied())
            .context("no month selected")?;
    }
    if args.agencies.len() > MAX_SELECTED_AGENCIES {
        bail!(
            "at most {} agencies can be searched at once, got {}",
            MAX_SELECTED_AGENCIES,
            args.agencies.len()
        );
    }
    filters.set_agencies(&args.agencies);
    if let Some(category) = args.category {
        filters.category = category;
    }
    Ok(filters)
}

/// Text report of a finished search: message, first page and links.
pub fn render_results(results: &SearchResults, config: &ApiConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Consulta: {}\n", results.query));
    out.push_str(&results.message());
    out.push('\n');
    if results.shows_rows() {
        let pagination = Pagination::default();
        for row in pagination.slice(&results.rows) {
            let r = &row.row;
            out.push_str(&format!(
                "{:>4}  {:<8} {:02}/{}  {:<30} {:<24} {:<10} {:<24} {}\n",
                row.id,
                format::agency_code(&r.agency),
                r.month,
                r.year,
                r.name,
                r.role,
                r.category,
                r.detail,
                format::currency(r.value)
            ));
        }
        out.push_str(&format!("{}\n", pagination.range_label(results.rows.len())));
    }
    if results.download_enabled() {
        out.push_str(&format!(
            "Download: {}\n",
            config.search_download_url(&results.query)
        ));
    }
    out.push_str(&format!(
        "Compartilhar: {}\n",
        config.search_share_url(&results.query)
    ));
    out
}

pub async fn run_search(client: &ApiClient, args: &SearchArgs) -> anyhow::Result<()> {
    let filters = build_filters(args, dates::current_year())?;
    info!("Searching with {}", filters.to_query());
    let mut session = SearchSession::new();
    session.run(client, &filters).await;
    match session.results() {
        Some(results) => print!("{}", render_results(results, client.config())),
        None => warn!("Search finished without results"),
    }
    Ok(())
}
