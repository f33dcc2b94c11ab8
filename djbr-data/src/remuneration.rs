//! Remuneration chart adapters.
//!
//! Reshape already-fetched records into the `{categories, series}` layout the
//! D3.js bar chart draws. Missing months or years are zero-filled and get a
//! bar in the "no data" series instead, so the axis stays continuous. The
//! hide toggles only drop series; they never trigger a refetch.

use std::collections::BTreeMap;

use djbr_api::models::{AnnualSummary, AnnualSummaryData, MonthlyRemuneration};
use djbr_utils::dates::FIRST_YEAR;
use djbr_utils::format;
use serde::Serialize;

pub const BASE_COLOR: &str = "#97BB2F";
pub const OTHER_COLOR: &str = "#2FBB96";
pub const DISCOUNTS_COLOR: &str = "#2C3236";
pub const NO_DATA_COLOR: &str = "#C9C9C9";

pub const BASE_LABEL: &str = "Remuneração base";
pub const OTHER_LABEL: &str = "Outras remunerações";
pub const DISCOUNTS_LABEL: &str = "Descontos";
pub const NO_DATA_LABEL: &str = "Sem dados";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    fn new(name: &str, color: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            values,
        }
    }
}

/// Input of `renderBarChart` in `bar-chart.js`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub y_label: String,
}

impl BarChart {
    pub fn series(&self, name: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Unit the home chart divides money by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Billions,
    Millions,
}

impl Scale {
    pub fn for_max(max: f64) -> Self {
        if max >= 1e9 {
            Scale::Billions
        } else {
            Scale::Millions
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            Scale::Billions => 1e9,
            Scale::Millions => 1e6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scale::Billions => "Bilhões de reais",
            Scale::Millions => "Milhões de reais",
        }
    }
}

/// Series the user switched off in the chart legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HiddenSeries {
    pub wage: bool,
    pub benefits: bool,
    pub discounts: bool,
    pub no_data: bool,
}

/// Value the agency chart plots per year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphType {
    #[default]
    PerMember,
    MonthlyAverage,
    Total,
}

impl GraphType {
    pub const ALL: [GraphType; 3] = [GraphType::PerMember, GraphType::MonthlyAverage, GraphType::Total];

    pub fn slug(self) -> &'static str {
        match self {
            GraphType::PerMember => "media-por-membro",
            GraphType::MonthlyAverage => "media-mensal",
            GraphType::Total => "total",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GraphType::PerMember => "Média por membro",
            GraphType::MonthlyAverage => "Média mensal",
            GraphType::Total => "Total",
        }
    }

    /// (base, other, discounts) of `summary` for this graph type.
    pub fn values(self, summary: &AnnualSummary) -> (f64, f64, f64) {
        match self {
            GraphType::PerMember => (
                summary.base_per_member,
                summary.other_per_member,
                summary.discounts_per_member,
            ),
            GraphType::MonthlyAverage => (
                summary.base_per_month,
                summary.other_per_month,
                summary.discounts_per_month,
            ),
            GraphType::Total => (summary.base, summary.other, summary.discounts),
        }
    }
}

/// Height of a "no data" placeholder bar: the tallest stacked bar, or 1.
fn placeholder_height(stacks: impl Iterator<Item = f64>) -> f64 {
    let max = stacks.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn push_series(
    out: &mut Vec<ChartSeries>,
    hidden: HiddenSeries,
    base: Vec<f64>,
    other: Vec<f64>,
    discounts: Option<Vec<f64>>,
    no_data: Vec<f64>,
) {
    if !hidden.wage {
        out.push(ChartSeries::new(BASE_LABEL, BASE_COLOR, base));
    }
    if !hidden.benefits {
        out.push(ChartSeries::new(OTHER_LABEL, OTHER_COLOR, other));
    }
    if let Some(discounts) = discounts {
        if !hidden.discounts {
            out.push(ChartSeries::new(DISCOUNTS_LABEL, DISCOUNTS_COLOR, discounts));
        }
    }
    if !hidden.no_data {
        out.push(ChartSeries::new(NO_DATA_LABEL, NO_DATA_COLOR, no_data));
    }
}

/// Home page chart: base and other remuneration of all agencies per month.
pub fn general_monthly_chart(data: &[MonthlyRemuneration], hidden: HiddenSeries) -> BarChart {
    let by_month: BTreeMap<u32, &MonthlyRemuneration> = data.iter().map(|m| (m.month, m)).collect();
    let scale = Scale::for_max(placeholder_height(data.iter().map(|m| m.base + m.other)));
    let divisor = scale.divisor();

    let mut base = Vec::with_capacity(12);
    let mut other = Vec::with_capacity(12);
    for month in 1..=12 {
        let (b, o) = by_month
            .get(&month)
            .map(|m| (m.base / divisor, m.other / divisor))
            .unwrap_or((0.0, 0.0));
        base.push(b);
        other.push(o);
    }
    let height = placeholder_height(base.iter().zip(&other).map(|(b, o)| b + o));
    let no_data = (1..=12)
        .map(|m| if by_month.contains_key(&m) { 0.0 } else { height })
        .collect();

    let mut series = Vec::new();
    push_series(&mut series, hidden, base, other, None, no_data);
    BarChart {
        categories: format::MONTH_ABBREVIATIONS.iter().map(|m| m.to_string()).collect(),
        series,
        y_label: scale.label().to_string(),
    }
}

/// Every year from the first collected one to `current_year`, plus any
/// later year the backend returned.
fn chart_years(data: &[AnnualSummary], current_year: i32) -> Vec<i32> {
    let last = data.iter().map(|s| s.year).max().unwrap_or(current_year).max(current_year);
    (FIRST_YEAR..=last).collect()
}

/// Years in the chart range the agency has no summary for.
pub fn years_without_data(data: &[AnnualSummary], current_year: i32) -> Vec<i32> {
    chart_years(data, current_year)
        .into_iter()
        .filter(|y| !data.iter().any(|s| s.year == *y))
        .collect()
}

/// Past years collected for fewer than twelve months.
///
/// The current year is still being collected and is never reported.
pub fn incomplete_years(data: &[AnnualSummary], current_year: i32) -> Vec<(i32, u32)> {
    data.iter()
        .filter(|s| s.year < current_year && s.months_with_data < 12)
        .map(|s| (s.year, s.months_with_data))
        .collect()
}

pub fn incomplete_year_warning(data: &[AnnualSummary], current_year: i32) -> Option<String> {
    let years = incomplete_years(data, current_year);
    if years.is_empty() {
        return None;
    }
    let listed: Vec<String> = years
        .iter()
        .map(|(year, months)| format!("{year} ({months} de 12 meses)"))
        .collect();
    Some(format!(
        "Alguns anos não possuem dados para todos os meses: {}.",
        listed.join(", ")
    ))
}

/// Agency page chart: one bar stack per year.
pub fn annual_chart(
    data: &[AnnualSummary],
    graph: GraphType,
    hidden: HiddenSeries,
    current_year: i32,
) -> BarChart {
    let years = chart_years(data, current_year);
    let by_year: BTreeMap<i32, &AnnualSummary> = data.iter().map(|s| (s.year, s)).collect();

    let mut base = Vec::with_capacity(years.len());
    let mut other = Vec::with_capacity(years.len());
    let mut discounts = Vec::with_capacity(years.len());
    for year in &years {
        let (b, o, d) = by_year.get(year).map(|s| graph.values(s)).unwrap_or((0.0, 0.0, 0.0));
        base.push(b);
        other.push(o);
        discounts.push(d);
    }
    let height = placeholder_height(base.iter().zip(&other).map(|(b, o)| b + o));
    let missing = years_without_data(data, current_year);
    let no_data = years
        .iter()
        .map(|y| if missing.contains(y) { height } else { 0.0 })
        .collect();

    let mut series = Vec::new();
    push_series(&mut series, hidden, base, other, Some(discounts), no_data);
    BarChart {
        categories: years.iter().map(i32::to_string).collect(),
        series,
        y_label: format!("{} (R$)", graph.label()),
    }
}

/// Agency-year chart: totals per month of one year.
pub fn agency_month_chart(data: &AnnualSummaryData, hidden: HiddenSeries) -> BarChart {
    let by_month: BTreeMap<u32, _> = data.months.iter().map(|m| (m.month, m)).collect();

    let mut base = Vec::with_capacity(12);
    let mut other = Vec::with_capacity(12);
    let mut discounts = Vec::with_capacity(12);
    for month in 1..=12 {
        let (b, o, d) = by_month
            .get(&month)
            .map(|m| (m.base, m.other, m.discounts))
            .unwrap_or((0.0, 0.0, 0.0));
        base.push(b);
        other.push(o);
        discounts.push(d);
    }
    let height = placeholder_height(base.iter().zip(&other).map(|(b, o)| b + o));
    let no_data = (1..=12)
        .map(|m| if by_month.contains_key(&m) { 0.0 } else { height })
        .collect();

    let mut series = Vec::new();
    push_series(&mut series, hidden, base, other, Some(discounts), no_data);
    BarChart {
        categories: format::MONTH_ABBREVIATIONS.iter().map(|m| m.to_string()).collect(),
        series,
        y_label: format!("Total em {} (R$)", data.year),
    }
}
