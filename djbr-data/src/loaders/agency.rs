//! Agency-detail page.
//!
//! Any failure while loading the page data sends the browser to the
//! not-found page instead of rendering a partial page.

use djbr_api::links::NOT_FOUND_PATH;
use djbr_api::models::{Agency, AnnualSummary, AnnualSummaryData};
use djbr_api::{ApiConfig, RemunerationApi, Result};
use djbr_search::Location;
use djbr_utils::format;
use log::{info, warn};

use crate::index::{agency_index_points, IndexPoint};

/// `/orgao/{id}` or `/orgao/{id}/{year}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyRoute {
    pub id: String,
    pub year: Option<i32>,
}

impl AgencyRoute {
    pub fn from_path(path: &str) -> Option<Self> {
        let mut segments = path.trim_matches('/').split('/');
        if segments.next()? != "orgao" {
            return None;
        }
        let id = segments.next().filter(|s| !s.is_empty())?.to_lowercase();
        let year = match segments.next() {
            None | Some("") => None,
            Some(year) => Some(year.parse::<i32>().ok()?),
        };
        if segments.next().is_some() {
            return None;
        }
        Some(Self { id, year })
    }
}

/// Everything the agency page renders on first paint.
#[derive(Debug, Clone, PartialEq)]
pub struct AgencyPage {
    pub agency: Agency,
    /// One entry per year with data, oldest first.
    pub annual: Vec<AnnualSummary>,
    /// Monthly totals of the requested year, or of the latest year with data.
    pub totals: Option<AnnualSummaryData>,
    /// Year given in the path.
    pub year: Option<i32>,
}

impl AgencyPage {
    /// Charts, downloads and the index are hidden while the agency is
    /// flagged as not collecting and never had data.
    pub fn shows_details(&self) -> bool {
        !self.agency.is_not_collecting()
    }

    /// Package link and formatted size, when a package was published.
    pub fn download(&self, config: &ApiConfig) -> Option<(String, String)> {
        let package = self.totals.as_ref()?.package.as_ref()?;
        Some((config.package_url(&self.agency.id), format::bytes(package.size)))
    }

    /// "Dados coletados em 05/02/2024"
    pub fn last_collected_label(&self) -> Option<String> {
        let at = self.totals.as_ref()?.last_collected()?;
        Some(format!("Dados coletados em {}", at.format("%d/%m/%Y")))
    }

    /// "Tribunal de Justiça de Alagoas (TJAL)"
    pub fn title(&self) -> String {
        format!("{} ({})", self.agency.name, format::agency_code(&self.agency.id))
    }
}

pub async fn load_agency_page<A: RemunerationApi>(api: &A, route: &AgencyRoute) -> Result<AgencyPage> {
    let agency = api.agency(&route.id).await?;
    let annual = api.agency_annual(&route.id).await?;
    let totals_year = route.year.or_else(|| annual.last().map(|s| s.year));
    let totals = match totals_year {
        Some(year) => Some(api.agency_year(&route.id, year).await?),
        None => None,
    };
    info!(
        "Loaded agency {} ({} years with data)",
        route.id,
        annual.len()
    );
    Ok(AgencyPage {
        agency,
        annual,
        totals,
        year: route.year,
    })
}

/// Load the page for `path`, redirecting to the not-found page on any failure.
pub async fn open_agency_page<A: RemunerationApi, L: Location>(
    api: &A,
    location: &L,
    path: &str,
) -> Option<AgencyPage> {
    let Some(route) = AgencyRoute::from_path(path) else {
        warn!("Not an agency path: {}", path);
        location.redirect(NOT_FOUND_PATH);
        return None;
    };
    match load_agency_page(api, &route).await {
        Ok(page) => Some(page),
        Err(e) if e.is_not_found() => {
            info!("Agency {} does not exist", route.id);
            location.redirect(NOT_FOUND_PATH);
            None
        }
        Err(e) => {
            warn!("Failed to load agency {}: {}", route.id, e);
            location.redirect(NOT_FOUND_PATH);
            None
        }
    }
}

/// Index points for the lazily opened index accordion.
pub async fn open_agency_index<A: RemunerationApi, L: Location>(
    api: &A,
    location: &L,
    agency_id: &str,
) -> Option<Vec<IndexPoint>> {
    match api.agency_index(agency_id).await {
        Ok(details) => Some(agency_index_points(&details)),
        Err(e) if e.is_not_found() => {
            info!("Agency {} has no index", agency_id);
            location.redirect(NOT_FOUND_PATH);
            None
        }
        Err(e) => {
            warn!("Failed to load index of {}: {}", agency_id, e);
            location.redirect(NOT_FOUND_PATH);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::fake::{agency, annual, FakeApi};
    use djbr_api::models::{CollectingStatus, DataPackage};
    use djbr_search::MemoryLocation;

    fn api() -> FakeApi {
        FakeApi {
            agencies: vec![agency("trt13")],
            annual: vec![annual(2020), annual(2021)],
            ..FakeApi::default()
        }
    }

    #[test]
    fn routes_parse_id_and_optional_year() {
        assert_eq!(
            AgencyRoute::from_path("/orgao/TRT13"),
            Some(AgencyRoute { id: "trt13".to_string(), year: None })
        );
        assert_eq!(
            AgencyRoute::from_path("/orgao/tjal/2020/"),
            Some(AgencyRoute { id: "tjal".to_string(), year: Some(2020) })
        );
        assert_eq!(AgencyRoute::from_path("/orgao/tjal/abc"), None);
        assert_eq!(AgencyRoute::from_path("/orgao/"), None);
        assert_eq!(AgencyRoute::from_path("/grupo/x"), None);
        assert_eq!(AgencyRoute::from_path("/orgao/tjal/2020/1"), None);
    }

    #[tokio::test]
    async fn loads_latest_year_totals_by_default() {
        let api = api();
        let location = MemoryLocation::new("/orgao/trt13", "");
        let page = open_agency_page(&api, &location, "/orgao/trt13").await.unwrap();
        assert_eq!(page.totals.as_ref().unwrap().year, 2021);
        assert_eq!(page.title(), "Órgão trt13 (TRT-13)");
        assert!(page.shows_details());
        assert!(location.redirects().is_empty());
        assert_eq!(api.calls("year/trt13/2021"), 1);
    }

    #[tokio::test]
    async fn failed_fetch_redirects_to_not_found() {
        let api = FakeApi {
            failing: vec!["agency_annual"],
            ..api()
        };
        let location = MemoryLocation::new("/orgao/trt13", "");
        assert!(open_agency_page(&api, &location, "/orgao/trt13").await.is_none());
        assert_eq!(location.redirects(), vec![NOT_FOUND_PATH.to_string()]);
    }

    #[tokio::test]
    async fn unknown_agency_or_year_redirects() {
        let api = api();
        let location = MemoryLocation::new("/orgao/ghost", "");
        assert!(open_agency_page(&api, &location, "/orgao/ghost").await.is_none());
        assert!(open_agency_page(&api, &location, "/orgao/trt13/2019").await.is_none());
        assert!(open_agency_page(&api, &location, "/orgao").await.is_none());
        assert_eq!(location.redirects().len(), 3);
    }

    #[tokio::test]
    async fn agency_without_data_skips_totals() {
        let mut paused = agency("mpal");
        paused.has_data = false;
        paused.collecting = Some(vec![CollectingStatus {
            timestamp: None,
            description: vec!["Não presta contas".to_string()],
            collecting: false,
        }]);
        let api = FakeApi {
            agencies: vec![paused],
            ..FakeApi::default()
        };
        let location = MemoryLocation::default();
        let page = open_agency_page(&api, &location, "/orgao/mpal").await.unwrap();
        assert!(page.totals.is_none());
        assert!(!page.shows_details());
        assert_eq!(api.calls("year/mpal/2021"), 0);
    }

    #[tokio::test]
    async fn download_uses_package_size() {
        let api = api();
        let location = MemoryLocation::default();
        let mut page = open_agency_page(&api, &location, "/orgao/trt13").await.unwrap();
        let config = ApiConfig::new("https://api", "https://ui", "https://bucket", "https://site");
        assert!(page.download(&config).is_none());
        if let Some(totals) = page.totals.as_mut() {
            totals.package = Some(DataPackage {
                url: String::new(),
                hash: String::new(),
                size: 2048,
            });
        }
        assert_eq!(
            page.download(&config),
            Some((
                "https://bucket/trt13/datapackage/trt13.zip".to_string(),
                "2 KB".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn index_accordion_loads_points() {
        let api = api();
        let location = MemoryLocation::default();
        let points = open_agency_index(&api, &location, "trt13").await.unwrap();
        assert_eq!(points[0].label, "Mai/2022");

        let failing = FakeApi {
            failing: vec!["agency_index"],
            ..FakeApi::default()
        };
        assert!(open_agency_index(&failing, &location, "trt13").await.is_none());
        assert_eq!(location.redirects(), vec![NOT_FOUND_PATH.to_string()]);
    }
}
