//! Checked domain records handed to the pages.
//!
//! Every record here is produced from a validated wire shape (see `wire`),
//! so consumers can rely on months being 1-12 and money being finite.
//! All structs derive `Serialize` so they can be passed to D3.js as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A government body tracked by the platform.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Agency {
    /// Short lowercase identifier (e.g. "tjal").
    pub id: String,
    pub name: String,
    /// Wire jurisdiction label ("Estadual", "Ministério", ...).
    pub jurisdiction: String,
    pub entity: String,
    /// Federative unit, when the agency is state-level.
    pub state: Option<String>,
    /// Present only when the platform has a recorded collection status.
    pub collecting: Option<Vec<CollectingStatus>>,
    pub has_data: bool,
    pub ombudsman: Option<String>,
    pub twitter_handle: Option<String>,
}

impl Agency {
    /// Agencies listed by the search page: no recorded status, or the
    /// latest status says collection is active.
    pub fn is_monitored(&self) -> bool {
        match &self.collecting {
            None => true,
            Some(statuses) => statuses.first().map(|s| s.collecting).unwrap_or(true),
        }
    }

    /// Collection is paused and nothing was ever collected.
    pub fn is_not_collecting(&self) -> bool {
        matches!(&self.collecting, Some(statuses) if !statuses.is_empty()) && !self.has_data
    }

    /// Reasons recorded for the current collection status.
    pub fn collecting_reasons(&self) -> &[String] {
        self.collecting
            .as_ref()
            .and_then(|s| s.first())
            .map(|s| s.description.as_slice())
            .unwrap_or(&[])
    }

    pub fn group(&self) -> Option<AgencyGroup> {
        AgencyGroup::from_jurisdiction(&self.jurisdiction)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectingStatus {
    pub timestamp: Option<DateTime<Utc>>,
    pub description: Vec<String>,
    pub collecting: bool,
}

/// The eight agency groups the platform aggregates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AgencyGroup {
    StateJustice,
    Prosecutors,
    LaborJustice,
    MilitaryJustice,
    FederalJustice,
    ElectoralJustice,
    SuperiorJustice,
    JusticeCouncils,
}

impl AgencyGroup {
    pub const ALL: [AgencyGroup; 8] = [
        AgencyGroup::StateJustice,
        AgencyGroup::Prosecutors,
        AgencyGroup::LaborJustice,
        AgencyGroup::MilitaryJustice,
        AgencyGroup::FederalJustice,
        AgencyGroup::ElectoralJustice,
        AgencyGroup::SuperiorJustice,
        AgencyGroup::JusticeCouncils,
    ];

    /// Path segment used by the index endpoints (`/indice/grupo/{slug}`).
    pub fn slug(self) -> &'static str {
        match self {
            AgencyGroup::StateJustice => "justica-estadual",
            AgencyGroup::Prosecutors => "ministerios-publicos",
            AgencyGroup::LaborJustice => "justica-do-trabalho",
            AgencyGroup::MilitaryJustice => "justica-militar",
            AgencyGroup::FederalJustice => "justica-federal",
            AgencyGroup::ElectoralJustice => "justica-eleitoral",
            AgencyGroup::SuperiorJustice => "justica-superior",
            AgencyGroup::JusticeCouncils => "conselhos-de-justica",
        }
    }

    /// Display label used by selectors and tabs.
    pub fn label(self) -> &'static str {
        match self {
            AgencyGroup::StateJustice => "Justiça Estadual",
            AgencyGroup::Prosecutors => "Ministérios Públicos",
            AgencyGroup::LaborJustice => "Justiça do Trabalho",
            AgencyGroup::MilitaryJustice => "Justiça Militar",
            AgencyGroup::FederalJustice => "Justiça Federal",
            AgencyGroup::ElectoralJustice => "Justiça Eleitoral",
            AgencyGroup::SuperiorJustice => "Justiça Superior",
            AgencyGroup::JusticeCouncils => "Conselhos de Justiça",
        }
    }

    /// Value of the `jurisdicao` field for agencies in this group.
    pub fn jurisdiction(self) -> &'static str {
        match self {
            AgencyGroup::StateJustice => "Estadual",
            AgencyGroup::Prosecutors => "Ministério",
            AgencyGroup::LaborJustice => "Trabalho",
            AgencyGroup::MilitaryJustice => "Militar",
            AgencyGroup::FederalJustice => "Federal",
            AgencyGroup::ElectoralJustice => "Eleitoral",
            AgencyGroup::SuperiorJustice => "Superior",
            AgencyGroup::JusticeCouncils => "Conselho",
        }
    }

    pub fn from_jurisdiction(jurisdiction: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.jurisdiction().eq_ignore_ascii_case(jurisdiction.trim()))
    }

    /// Accepts the slug in any case, so `/grupo/JUSTICA-ESTADUAL` resolves.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

/// Headline numbers shown on the home page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneralSummary {
    pub agency_count: u32,
    pub start_date: String,
    pub end_date: String,
    pub record_count: u64,
    pub total_remuneration: f64,
}

/// Aggregate remuneration of every agency for one month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyRemuneration {
    pub month: u32,
    pub base: f64,
    pub other: f64,
    pub discounts: f64,
}

/// One agency's totals for one year, with per-member and per-month averages.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnualSummary {
    pub year: i32,
    pub member_count: u32,
    pub base: f64,
    pub other: f64,
    pub discounts: f64,
    pub base_per_member: f64,
    pub other_per_member: f64,
    pub discounts_per_member: f64,
    pub base_per_month: f64,
    pub other_per_month: f64,
    pub discounts_per_month: f64,
    pub months_with_data: u32,
    pub package: Option<DataPackage>,
}

/// Per-month breakdown for one agency-year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnualSummaryData {
    pub year: i32,
    pub agency_id: String,
    pub months: Vec<MonthlySummary>,
    pub package: Option<DataPackage>,
}

impl AnnualSummaryData {
    /// Collection time of the most recent month.
    pub fn last_collected(&self) -> Option<DateTime<Utc>> {
        self.months.iter().filter_map(|m| m.timestamp).max()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySummary {
    pub month: u32,
    pub member_count: u32,
    pub base: f64,
    pub other: f64,
    pub discounts: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Bundled data package published for an agency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DataPackage {
    pub url: String,
    pub hash: String,
    /// Size in bytes.
    pub size: u64,
}

/// Response of the parametric search endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResponse {
    /// Sample rows, at most `download_limit` of them.
    pub rows: Vec<SearchRow>,
    pub download_available: bool,
    pub download_limit: u64,
    /// Total rows matching the query.
    pub num_rows_if_available: u64,
}

/// One payroll line of a search result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRow {
    pub agency: String,
    pub month: u32,
    pub year: i32,
    pub registration: String,
    pub name: String,
    pub role: String,
    pub workplace: String,
    pub category: String,
    pub detail: String,
    pub value: f64,
}

/// Transparency scores of one agency, aggregated over its whole history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregateIndex {
    pub agency_id: String,
    pub scores: IndexScores,
}

/// Per-month transparency scores of one agency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgencyIndexDetail {
    pub agency_id: String,
    pub aggregate: Option<IndexScores>,
    pub details: Vec<MonthIndex>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthIndex {
    pub year: i32,
    pub month: u32,
    pub scores: IndexScores,
}

/// Transparency index with its two dimensions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct IndexScores {
    /// Harmonic mean of `completeness` and `ease`, computed by the backend.
    pub transparency: f64,
    pub completeness: f64,
    pub ease: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agency(collecting: Option<Vec<CollectingStatus>>, has_data: bool) -> Agency {
        Agency {
            id: "tjal".to_string(),
            name: "Tribunal de Justiça de Alagoas".to_string(),
            jurisdiction: "Estadual".to_string(),
            entity: "Tribunal".to_string(),
            state: Some("AL".to_string()),
            collecting,
            has_data,
            ombudsman: None,
            twitter_handle: None,
        }
    }

    fn status(collecting: bool) -> CollectingStatus {
        CollectingStatus {
            timestamp: None,
            description: vec!["Órgão não presta contas".to_string()],
            collecting,
        }
    }

    #[test]
    fn monitored_when_no_status_or_collecting() {
        assert!(agency(None, true).is_monitored());
        assert!(agency(Some(vec![status(true)]), true).is_monitored());
        assert!(!agency(Some(vec![status(false)]), false).is_monitored());
    }

    #[test]
    fn not_collecting_needs_status_and_no_data() {
        assert!(agency(Some(vec![status(false)]), false).is_not_collecting());
        assert!(!agency(Some(vec![status(false)]), true).is_not_collecting());
        assert!(!agency(None, false).is_not_collecting());
        assert_eq!(
            agency(Some(vec![status(false)]), false).collecting_reasons(),
            ["Órgão não presta contas".to_string()]
        );
    }

    #[test]
    fn groups_resolve_from_slug_and_jurisdiction() {
        assert_eq!(
            AgencyGroup::from_slug("JUSTICA-ESTADUAL"),
            Some(AgencyGroup::StateJustice)
        );
        assert_eq!(
            AgencyGroup::from_jurisdiction("Ministério"),
            Some(AgencyGroup::Prosecutors)
        );
        assert_eq!(AgencyGroup::from_slug("tribunais"), None);
        assert_eq!(agency(None, true).group(), Some(AgencyGroup::StateJustice));
    }
}
