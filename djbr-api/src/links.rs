//! Links built client-side rather than fetched through the client.

use crate::config::ApiConfig;
use crate::models::AgencyGroup;

impl ApiConfig {
    /// Bulk download of a search, `query` including the leading `?`.
    pub fn search_download_url(&self, query: &str) -> String {
        format!("{}/v2/download{}", self.api_base_url, query)
    }

    /// Bundled data package of an agency: `{repo}/{id}/datapackage/{id}.zip`.
    pub fn package_url(&self, agency_id: &str) -> String {
        format!(
            "{}/{id}/datapackage/{id}.zip",
            self.repo_url,
            id = agency_id
        )
    }

    pub fn search_share_url(&self, query: &str) -> String {
        format!("{}/pesquisar{}", self.site_url, query)
    }

    pub fn agency_share_url(&self, agency_id: &str) -> String {
        format!("{}/orgao/{}", self.site_url, agency_id)
    }
}

/// Site path of the per-year exploration page of an agency.
pub fn agency_year_path(agency_id: &str, year: i32) -> String {
    format!("/orgao/{agency_id}/{year}")
}

/// Site path of a group page, slug upper-cased as the group selector emits it.
pub fn group_path(group: AgencyGroup) -> String {
    format!("/grupo/{}", group.slug().to_uppercase())
}

pub const NOT_FOUND_PATH: &str = "/404";
pub const SEARCH_PATH: &str = "/pesquisar";

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("https://api", "https://ui", "https://bucket/", "https://site")
    }

    #[test]
    fn package_url_repeats_agency_id() {
        assert_eq!(
            config().package_url("tjal"),
            "https://bucket/tjal/datapackage/tjal.zip"
        );
    }

    #[test]
    fn search_links_append_query_verbatim() {
        let query = "?&anos=2023&meses=1,2";
        assert_eq!(
            config().search_download_url(query),
            "https://api/v2/download?&anos=2023&meses=1,2"
        );
        assert_eq!(
            config().search_share_url(query),
            "https://site/pesquisar?&anos=2023&meses=1,2"
        );
    }

    #[test]
    fn site_paths() {
        assert_eq!(agency_year_path("mpal", 2021), "/orgao/mpal/2021");
        assert_eq!(group_path(AgencyGroup::LaborJustice), "/grupo/JUSTICA-DO-TRABALHO");
        assert_eq!(config().agency_share_url("mpal"), "https://site/orgao/mpal");
    }
}
