//! Home page: headline, yearly remuneration chart and group index tabs.

use std::collections::{BTreeMap, BTreeSet};

use djbr_api::models::{AgencyGroup, MonthlyRemuneration};
use djbr_api::{RemunerationApi, Result};
use djbr_utils::dates::FIRST_YEAR;
use log::{info, warn};

use crate::generation::{Generation, RequestGenerations};
use crate::index::{group_index_points, GroupIndexPoint};
use crate::summary::Headline;

async fn fetch_headline<A: RemunerationApi>(api: &A) -> Result<Headline> {
    let summary = api.general_summary().await?;
    let agencies = api.agencies().await?;
    Ok(Headline::new(&summary, &agencies))
}

/// Headline figures; `None` when the summary or the agency list could not
/// be fetched.
pub async fn load_headline<A: RemunerationApi>(api: &A) -> Option<Headline> {
    match fetch_headline(api).await {
        Ok(headline) => Some(headline),
        Err(e) => {
            warn!("Failed to load headline: {}", e);
            None
        }
    }
}

/// A started fetch of one year's aggregate remuneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRequest {
    pub year: i32,
    pub generation: Generation,
}

/// Year navigation and dataset of the home remuneration chart.
#[derive(Debug, Clone)]
pub struct HomeChart {
    year: i32,
    current_year: i32,
    data: Vec<MonthlyRemuneration>,
    loading: bool,
    generations: RequestGenerations,
}

impl HomeChart {
    pub fn new(current_year: i32) -> Self {
        Self {
            year: current_year,
            current_year,
            data: Vec::new(),
            loading: true,
            generations: RequestGenerations::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn data(&self) -> &[MonthlyRemuneration] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_previous(&self) -> bool {
        self.year > FIRST_YEAR
    }

    pub fn has_next(&self) -> bool {
        self.year < self.current_year
    }

    /// Request for the year currently shown; used on mount.
    pub fn reload(&mut self) -> YearRequest {
        self.loading = true;
        YearRequest {
            year: self.year,
            generation: self.generations.begin(),
        }
    }

    /// Move to `year`. `None` when it is outside 2018..=current or already shown.
    pub fn go_to(&mut self, year: i32) -> Option<YearRequest> {
        if year == self.year || !(FIRST_YEAR..=self.current_year).contains(&year) {
            return None;
        }
        self.year = year;
        Some(self.reload())
    }

    pub fn previous(&mut self) -> Option<YearRequest> {
        self.go_to(self.year - 1)
    }

    pub fn next(&mut self) -> Option<YearRequest> {
        self.go_to(self.year + 1)
    }

    /// Replace the dataset with a finished fetch. Stale responses are dropped
    /// and failures leave an empty chart.
    pub fn apply(&mut self, request: YearRequest, result: Result<Vec<MonthlyRemuneration>>) -> bool {
        if !self.generations.is_current(request.generation) {
            info!("Discarding stale remuneration data for {}", request.year);
            return false;
        }
        self.data = match result {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to load remuneration for {}: {}", request.year, e);
                Vec::new()
            }
        };
        self.loading = false;
        true
    }
}

pub async fn fetch_year<A: RemunerationApi>(
    api: &A,
    request: YearRequest,
) -> Result<Vec<MonthlyRemuneration>> {
    api.general_remuneration(request.year).await
}

/// Group index tabs. A group is fetched the first time its tab is selected
/// and served from the cache afterwards. Reselecting a group whose fetch is
/// still in flight starts no second one.
#[derive(Debug, Clone)]
pub struct IndexTabs {
    selected: AgencyGroup,
    cache: BTreeMap<AgencyGroup, Vec<GroupIndexPoint>>,
    failed: BTreeSet<AgencyGroup>,
    pending: BTreeSet<AgencyGroup>,
}

impl Default for IndexTabs {
    fn default() -> Self {
        Self {
            selected: AgencyGroup::StateJustice,
            cache: BTreeMap::new(),
            failed: BTreeSet::new(),
            pending: BTreeSet::new(),
        }
    }
}

impl IndexTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> AgencyGroup {
        self.selected
    }

    pub fn points(&self, group: AgencyGroup) -> Option<&[GroupIndexPoint]> {
        self.cache.get(&group).map(Vec::as_slice)
    }

    pub fn has_failed(&self, group: AgencyGroup) -> bool {
        self.failed.contains(&group)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.contains(&self.selected)
    }

    /// Switch tabs; returns the group to fetch when it is neither cached nor
    /// already being fetched.
    pub fn select(&mut self, group: AgencyGroup) -> Option<AgencyGroup> {
        self.selected = group;
        if self.cache.contains_key(&group) || self.pending.contains(&group) {
            return None;
        }
        self.failed.remove(&group);
        self.pending.insert(group);
        Some(group)
    }

    pub fn store(&mut self, group: AgencyGroup, result: Result<Vec<GroupIndexPoint>>) {
        self.pending.remove(&group);
        match result {
            Ok(points) => {
                self.cache.insert(group, points);
            }
            Err(e) => {
                warn!("Failed to load index of {}: {}", group.slug(), e);
                self.failed.insert(group);
            }
        }
    }

    /// Select `group`, fetching it on first use.
    pub async fn open<A: RemunerationApi>(&mut self, api: &A, group: AgencyGroup) {
        if let Some(group) = self.select(group) {
            let result = fetch_group_points(api, group).await;
            self.store(group, result);
        }
    }
}

pub async fn fetch_group_points<A: RemunerationApi>(
    api: &A,
    group: AgencyGroup,
) -> Result<Vec<GroupIndexPoint>> {
    let entries = api.group_index(group).await?;
    Ok(group_index_points(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::fake::{agency, FakeApi};
    use djbr_api::models::CollectingStatus;

    #[tokio::test]
    async fn year_change_fetches_once_and_replaces_data() {
        let api = FakeApi::default();
        let mut chart = HomeChart::new(2023);
        let request = chart.reload();
        chart.apply(request, fetch_year(&api, request).await);
        assert_eq!(chart.data()[0].base, 2023.0);

        let request = chart.previous().unwrap();
        assert!(chart.is_loading());
        let result = fetch_year(&api, request).await;
        assert!(chart.apply(request, result));
        assert_eq!(api.calls("remuneration/2022"), 1);
        assert_eq!(api.total_calls(), 2);
        assert_eq!(chart.year(), 2022);
        assert_eq!(chart.data().len(), 1);
        assert_eq!(chart.data()[0].base, 2022.0);
        assert!(!chart.is_loading());
    }

    #[tokio::test]
    async fn stale_year_responses_are_discarded() {
        let api = FakeApi::default();
        let mut chart = HomeChart::new(2023);
        let older = chart.previous().unwrap();
        let newer = chart.previous().unwrap();

        let newer_data = fetch_year(&api, newer).await;
        assert!(chart.apply(newer, newer_data));
        let older_data = fetch_year(&api, older).await;
        assert!(!chart.apply(older, older_data));
        assert_eq!(chart.year(), 2021);
        assert_eq!(chart.data()[0].base, 2021.0);
    }

    #[test]
    fn navigation_is_bounded() {
        let mut chart = HomeChart::new(2019);
        assert!(!chart.has_next());
        assert!(chart.next().is_none());
        assert!(chart.previous().is_some());
        assert!(!chart.has_previous());
        assert!(chart.previous().is_none());
        assert!(chart.go_to(2018).is_none());
    }

    #[tokio::test]
    async fn failed_year_degrades_to_empty_chart() {
        let api = FakeApi {
            failing: vec!["general_remuneration"],
            ..FakeApi::default()
        };
        let mut chart = HomeChart::new(2023);
        let request = chart.reload();
        assert!(chart.apply(request, fetch_year(&api, request).await));
        assert!(chart.data().is_empty());
        assert!(!chart.is_loading());
    }

    #[tokio::test]
    async fn index_tabs_fetch_each_group_once() {
        let api = FakeApi {
            agencies: vec![agency("tjal"), agency("tjpb")],
            ..FakeApi::default()
        };
        let mut tabs = IndexTabs::new();
        tabs.open(&api, AgencyGroup::StateJustice).await;
        tabs.open(&api, AgencyGroup::Prosecutors).await;
        tabs.open(&api, AgencyGroup::StateJustice).await;
        assert_eq!(api.calls("group/justica-estadual"), 1);
        assert_eq!(api.calls("group/ministerios-publicos"), 1);
        assert_eq!(tabs.selected(), AgencyGroup::StateJustice);
        assert_eq!(tabs.points(AgencyGroup::StateJustice).unwrap().len(), 2);
        assert!(tabs.points(AgencyGroup::Prosecutors).unwrap().is_empty());
        assert!(!tabs.is_loading());
    }

    #[tokio::test]
    async fn reselecting_an_in_flight_tab_fetches_once() {
        let api = FakeApi {
            agencies: vec![agency("tjal")],
            ..FakeApi::default()
        };
        let mut tabs = IndexTabs::new();
        let first = tabs.select(AgencyGroup::StateJustice);
        assert_eq!(first, Some(AgencyGroup::StateJustice));
        assert!(tabs.is_loading());
        assert_eq!(tabs.select(AgencyGroup::Prosecutors), Some(AgencyGroup::Prosecutors));
        assert_eq!(tabs.select(AgencyGroup::StateJustice), None);
        assert!(tabs.is_loading());

        let result = fetch_group_points(&api, AgencyGroup::StateJustice).await;
        tabs.store(AgencyGroup::StateJustice, result);
        assert!(!tabs.is_loading());
        assert_eq!(tabs.select(AgencyGroup::StateJustice), None);
        assert_eq!(api.calls("group/justica-estadual"), 1);
        assert_eq!(tabs.points(AgencyGroup::StateJustice).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_tab_is_retried_on_next_selection() {
        let api = FakeApi {
            failing: vec!["group_index"],
            ..FakeApi::default()
        };
        let mut tabs = IndexTabs::new();
        tabs.open(&api, AgencyGroup::LaborJustice).await;
        assert!(tabs.has_failed(AgencyGroup::LaborJustice));
        assert!(!tabs.is_loading());
        tabs.open(&api, AgencyGroup::LaborJustice).await;
        assert_eq!(api.calls("group/justica-do-trabalho"), 2);
    }

    #[tokio::test]
    async fn headline_degrades_to_none() {
        for endpoint in ["general_summary", "agencies"] {
            let api = FakeApi {
                failing: vec![endpoint],
                ..FakeApi::default()
            };
            assert!(load_headline(&api).await.is_none());
        }
        assert!(load_headline(&FakeApi::default()).await.is_some());
    }

    #[tokio::test]
    async fn headline_counts_monitored_agencies() {
        let mut paused = agency("tjrr");
        paused.collecting = Some(vec![CollectingStatus {
            timestamp: None,
            description: Vec::new(),
            collecting: false,
        }]);
        let api = FakeApi {
            agencies: vec![agency("tjal"), agency("tjpb"), paused],
            ..FakeApi::default()
        };
        let headline = load_headline(&api).await.unwrap();
        assert_eq!(headline.agency_count, "2");
        assert_eq!(api.calls("agencies"), 1);
        assert!(headline.sentence().starts_with("Os dados vão de janeiro de 2018 a dezembro de 2023."));
        assert!(headline.sentence().contains("São dados de 2 órgãos"));
    }
}
