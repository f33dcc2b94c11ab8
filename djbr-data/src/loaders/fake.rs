//! In-memory API used by the loader tests.

use std::cell::RefCell;
use std::collections::HashMap;

use djbr_api::models::{
    Agency, AgencyGroup, AgencyIndexDetail, AggregateIndex, AnnualSummary, AnnualSummaryData,
    GeneralSummary, IndexScores, MonthIndex, MonthlyRemuneration, SearchResponse,
};
use djbr_api::{ApiError, RemunerationApi, Result};

#[derive(Default)]
pub struct FakeApi {
    pub agencies: Vec<Agency>,
    pub annual: Vec<AnnualSummary>,
    pub search: Option<SearchResponse>,
    /// Endpoint names that answer with a 500.
    pub failing: Vec<&'static str>,
    pub calls: RefCell<HashMap<String, usize>>,
}

impl FakeApi {
    pub fn calls(&self, key: &str) -> usize {
        self.calls.borrow().get(key).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    fn hit(&self, endpoint: &'static str, key: String) -> Result<()> {
        *self.calls.borrow_mut().entry(key.clone()).or_default() += 1;
        if self.failing.contains(&endpoint) {
            return Err(ApiError::Status { status: 500, url: key });
        }
        Ok(())
    }

    fn not_found(key: String) -> ApiError {
        ApiError::Status { status: 404, url: key }
    }
}

pub fn agency(id: &str) -> Agency {
    Agency {
        id: id.to_string(),
        name: format!("Órgão {id}"),
        jurisdiction: "Estadual".to_string(),
        entity: "Tribunal".to_string(),
        state: None,
        collecting: None,
        has_data: true,
        ombudsman: None,
        twitter_handle: None,
    }
}

pub fn annual(year: i32) -> AnnualSummary {
    AnnualSummary {
        year,
        member_count: 1,
        base: 1.0,
        other: 1.0,
        discounts: 0.0,
        base_per_member: 1.0,
        other_per_member: 1.0,
        discounts_per_member: 0.0,
        base_per_month: 1.0,
        other_per_month: 1.0,
        discounts_per_month: 0.0,
        months_with_data: 12,
        package: None,
    }
}

fn scores() -> IndexScores {
    IndexScores {
        transparency: 0.5,
        completeness: 0.5,
        ease: 0.5,
    }
}

impl RemunerationApi for FakeApi {
    async fn agencies(&self) -> Result<Vec<Agency>> {
        self.hit("agencies", "agencies".to_string())?;
        Ok(self.agencies.clone())
    }

    async fn agency(&self, id: &str) -> Result<Agency> {
        let key = format!("agency/{id}");
        self.hit("agency", key.clone())?;
        self.agencies
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(key))
    }

    async fn general_summary(&self) -> Result<GeneralSummary> {
        self.hit("general_summary", "summary".to_string())?;
        Ok(GeneralSummary {
            agency_count: self.agencies.len() as u32,
            start_date: "2018-01-01".to_string(),
            end_date: "2023-12-01".to_string(),
            record_count: 10,
            total_remuneration: 1e9,
        })
    }

    async fn general_remuneration(&self, year: i32) -> Result<Vec<MonthlyRemuneration>> {
        self.hit("general_remuneration", format!("remuneration/{year}"))?;
        Ok(vec![MonthlyRemuneration {
            month: 1,
            base: f64::from(year),
            other: 0.0,
            discounts: 0.0,
        }])
    }

    async fn group_index(&self, group: AgencyGroup) -> Result<Vec<AggregateIndex>> {
        self.hit("group_index", format!("group/{}", group.slug()))?;
        Ok(self
            .agencies
            .iter()
            .filter(|a| a.group() == Some(group))
            .map(|a| AggregateIndex {
                agency_id: a.id.clone(),
                scores: scores(),
            })
            .collect())
    }

    async fn agency_index(&self, id: &str) -> Result<Vec<AgencyIndexDetail>> {
        self.hit("agency_index", format!("index/{id}"))?;
        Ok(vec![AgencyIndexDetail {
            agency_id: id.to_string(),
            aggregate: Some(scores()),
            details: vec![MonthIndex {
                year: 2022,
                month: 5,
                scores: scores(),
            }],
        }])
    }

    async fn agency_annual(&self, id: &str) -> Result<Vec<AnnualSummary>> {
        self.hit("agency_annual", format!("annual/{id}"))?;
        Ok(self.annual.clone())
    }

    async fn agency_year(&self, id: &str, year: i32) -> Result<AnnualSummaryData> {
        let key = format!("year/{id}/{year}");
        self.hit("agency_year", key.clone())?;
        if !self.annual.iter().any(|a| a.year == year) {
            return Err(Self::not_found(key));
        }
        Ok(AnnualSummaryData {
            year,
            agency_id: id.to_string(),
            months: Vec::new(),
            package: None,
        })
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.hit("search", format!("search{query}"))?;
        self.search
            .clone()
            .ok_or_else(|| Self::not_found(query.to_string()))
    }
}
