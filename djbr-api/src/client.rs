//! HTTP client for the general and UI-specific APIs.
//!
//! Every call is a single GET: no retry, no caching, no timeout policy.
//! Bodies are decoded through the wire schemas, so callers only ever see
//! checked records or an [`ApiError`].

use log::{info, warn};
use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    Agency, AgencyGroup, AgencyIndexDetail, AggregateIndex, AnnualSummary, AnnualSummaryData,
    GeneralSummary, MonthlyRemuneration, SearchResponse,
};
use crate::wire::{self, WireAgencyIndexBody};

/// Operations the pages need from the backend.
///
/// Implemented by [`ApiClient`]; page loaders are generic over it so they can
/// be exercised against in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait RemunerationApi {
    /// Every agency known to the platform.
    async fn agencies(&self) -> Result<Vec<Agency>>;
    async fn agency(&self, id: &str) -> Result<Agency>;
    async fn general_summary(&self) -> Result<GeneralSummary>;
    /// Month-by-month totals across all agencies for `year`.
    async fn general_remuneration(&self, year: i32) -> Result<Vec<MonthlyRemuneration>>;
    /// Aggregated transparency index of every agency in `group`.
    async fn group_index(&self, group: AgencyGroup) -> Result<Vec<AggregateIndex>>;
    async fn agency_index(&self, id: &str) -> Result<Vec<AgencyIndexDetail>>;
    /// One entry per year with collected data.
    async fn agency_annual(&self, id: &str) -> Result<Vec<AnnualSummary>>;
    async fn agency_year(&self, id: &str, year: i32) -> Result<AnnualSummaryData>;
    /// `query` is an encoded query string including the leading `?`.
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}

/// Which of the two configured base URLs a path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    General,
    Ui,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for `path` under `base`.
    pub fn url(&self, base: Base, path: &str) -> String {
        let root = match base {
            Base::General => &self.config.api_base_url,
            Base::Ui => &self.config.ui_api_base_url,
        };
        if path.starts_with('/') {
            format!("{root}{path}")
        } else {
            format!("{root}/{path}")
        }
    }

    /// GET `path` and return the URL together with the raw body.
    async fn get_text(&self, base: Base, path: &str) -> Result<(String, String)> {
        let url = self.url(base, path);
        info!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request failed for {}: {}", url, e);
            ApiError::Http(e)
        })?;
        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for {}: {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text().await?;
        Ok((url, body))
    }
}

impl RemunerationApi for ApiClient {
    async fn agencies(&self) -> Result<Vec<Agency>> {
        let (url, body) = self.get_text(Base::General, "/orgaos").await?;
        wire::decode_list::<wire::WireAgency, Agency>(&url, &body)
    }

    async fn agency(&self, id: &str) -> Result<Agency> {
        let (url, body) = self
            .get_text(Base::General, &format!("/orgao/{id}"))
            .await?;
        wire::decode::<wire::WireAgency, Agency>(&url, &body)
    }

    async fn general_summary(&self) -> Result<GeneralSummary> {
        let (url, body) = self.get_text(Base::Ui, "/v2/geral/resumo").await?;
        wire::decode::<wire::WireGeneralSummary, GeneralSummary>(&url, &body)
    }

    async fn general_remuneration(&self, year: i32) -> Result<Vec<MonthlyRemuneration>> {
        let (url, body) = self
            .get_text(Base::Ui, &format!("/v2/geral/remuneracao/{year}"))
            .await?;
        wire::decode_list::<wire::WireMonthlyRemuneration, MonthlyRemuneration>(&url, &body)
    }

    async fn group_index(&self, group: AgencyGroup) -> Result<Vec<AggregateIndex>> {
        let (url, body) = self
            .get_text(
                Base::General,
                &format!("/indice/grupo/{}?agregado=true", group.slug()),
            )
            .await?;
        wire::decode_list::<wire::WireAggregateIndex, AggregateIndex>(&url, &body)
    }

    async fn agency_index(&self, id: &str) -> Result<Vec<AgencyIndexDetail>> {
        let (url, body) = self
            .get_text(Base::General, &format!("/indice/orgao/{id}"))
            .await?;
        let wire: WireAgencyIndexBody =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode {
                url: url.clone(),
                source,
            })?;
        wire.into_list()
            .into_iter()
            .map(AgencyIndexDetail::try_from)
            .collect()
    }

    async fn agency_annual(&self, id: &str) -> Result<Vec<AnnualSummary>> {
        let (url, body) = self
            .get_text(Base::Ui, &format!("/v2/orgao/resumo/{id}"))
            .await?;
        let mut years =
            wire::decode_list::<wire::WireAnnualSummary, AnnualSummary>(&url, &body)?;
        years.sort_by_key(|y| y.year);
        Ok(years)
    }

    async fn agency_year(&self, id: &str, year: i32) -> Result<AnnualSummaryData> {
        let (url, body) = self
            .get_text(Base::Ui, &format!("/v2/orgao/totais/{id}/{year}"))
            .await?;
        wire::decode::<wire::WireAgencyYear, AnnualSummaryData>(&url, &body)
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let (url, body) = self
            .get_text(Base::Ui, &format!("/v2/pesquisar{query}"))
            .await?;
        wire::decode::<wire::WireSearchResponse, SearchResponse>(&url, &body)
    }
}
