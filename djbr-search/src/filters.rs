//! Typed search filter state.

use djbr_api::models::{Agency, AgencyGroup};

/// The search endpoint accepts at most this many agencies per query.
pub const MAX_SELECTED_AGENCIES: usize = 3;

/// Remuneration category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Base,
    Other,
    Discounts,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Base,
        Category::Other,
        Category::Discounts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Tudo",
            Category::Base => "Remuneração base",
            Category::Other => "Outras remunerações",
            Category::Discounts => "Descontos",
        }
    }

    /// Value of the `categorias` parameter; `All` is never sent.
    pub fn param(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Base => Some("base"),
            Category::Other => Some("outras"),
            Category::Discounts => Some("descontos"),
        }
    }

    /// Unknown values fall back to `All`.
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "base" => Category::Base,
            "outras" => Category::Other,
            "descontos" => Category::Discounts,
            _ => Category::All,
        }
    }
}

/// Selected months, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSet(u16);

impl MonthSet {
    const FULL: u16 = 0b1111_1111_1111;

    pub fn all() -> Self {
        MonthSet(Self::FULL)
    }

    /// `None` when no month in 1-12 is given.
    pub fn from_months(months: impl IntoIterator<Item = u32>) -> Option<Self> {
        let bits = months
            .into_iter()
            .filter(|m| (1..=12).contains(m))
            .fold(0u16, |acc, m| acc | (1 << (m - 1)));
        (bits != 0).then_some(MonthSet(bits))
    }

    pub fn contains(self, month: u32) -> bool {
        (1..=12).contains(&month) && self.0 & (1 << (month - 1)) != 0
    }

    /// Ascending list of the selected months.
    pub fn months(self) -> Vec<u32> {
        (1..=12).filter(|m| self.contains(*m)).collect()
    }

    pub fn is_all(self) -> bool {
        self.0 == Self::FULL
    }

    /// Flip one month. Deselecting the last selected month is refused.
    pub fn toggle(&mut self, month: u32) -> bool {
        if !(1..=12).contains(&month) {
            return false;
        }
        let bit = 1 << (month - 1);
        if self.0 == bit {
            return false;
        }
        self.0 ^= bit;
        true
    }
}

impl Default for MonthSet {
    fn default() -> Self {
        MonthSet::all()
    }
}

/// Everything the search page lets the user choose.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub year: i32,
    pub months: MonthSet,
    agencies: Vec<String>,
    pub category: Category,
    /// Narrows the agency picker; not part of the backend query.
    pub agency_type: Option<AgencyGroup>,
}

impl SearchFilters {
    pub fn new(current_year: i32) -> Self {
        Self {
            year: current_year,
            months: MonthSet::all(),
            agencies: Vec::new(),
            category: Category::All,
            agency_type: None,
        }
    }

    /// Selected agency ids in selection order.
    pub fn agencies(&self) -> &[String] {
        &self.agencies
    }

    pub fn is_agency_selected(&self, id: &str) -> bool {
        self.agencies.iter().any(|a| a.eq_ignore_ascii_case(id))
    }

    /// Select or deselect `id`. Adding beyond the limit is refused.
    pub fn toggle_agency(&mut self, id: &str) -> bool {
        let id = id.trim().to_lowercase();
        if id.is_empty() {
            return false;
        }
        if let Some(pos) = self.agencies.iter().position(|a| *a == id) {
            self.agencies.remove(pos);
            return true;
        }
        if self.agencies.len() >= MAX_SELECTED_AGENCIES {
            return false;
        }
        self.agencies.push(id);
        true
    }

    /// Replace the selection, dropping duplicates and anything past the limit.
    pub fn set_agencies<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.agencies.clear();
        for id in ids {
            let id = id.as_ref().trim().to_lowercase();
            if id.is_empty() || self.agencies.contains(&id) {
                continue;
            }
            if self.agencies.len() == MAX_SELECTED_AGENCIES {
                break;
            }
            self.agencies.push(id);
        }
    }

    /// Reset every field to its default.
    pub fn clear(&mut self, current_year: i32) {
        *self = Self::new(current_year);
    }

    /// Agencies the picker offers: monitored ones of the selected type.
    pub fn agency_options<'a>(&self, all: &'a [Agency]) -> Vec<&'a Agency> {
        all.iter()
            .filter(|a| a.is_monitored())
            .filter(|a| match self.agency_type {
                Some(group) => a.group() == Some(group),
                None => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agency(id: &str, jurisdiction: &str) -> Agency {
        Agency {
            id: id.to_string(),
            name: id.to_uppercase(),
            jurisdiction: jurisdiction.to_string(),
            entity: String::new(),
            state: None,
            collecting: None,
            has_data: true,
            ombudsman: None,
            twitter_handle: None,
        }
    }

    #[test]
    fn month_set_never_empties() {
        let mut months = MonthSet::from_months([5]).unwrap();
        assert!(!months.toggle(5));
        assert_eq!(months.months(), vec![5]);
        assert!(months.toggle(1));
        assert!(months.toggle(5));
        assert_eq!(months.months(), vec![1]);
        assert!(!months.toggle(13));
    }

    #[test]
    fn month_set_from_months_ignores_out_of_range() {
        assert_eq!(MonthSet::from_months([0, 13]), None);
        let months = MonthSet::from_months([12, 1, 12]).unwrap();
        assert_eq!(months.months(), vec![1, 12]);
        assert!(MonthSet::default().is_all());
    }

    #[test]
    fn agency_selection_is_capped() {
        let mut filters = SearchFilters::new(2023);
        assert!(filters.toggle_agency("TJAL"));
        assert!(filters.toggle_agency("mpal"));
        assert!(filters.toggle_agency("trt19"));
        assert!(!filters.toggle_agency("tjpb"));
        assert_eq!(filters.agencies(), ["tjal", "mpal", "trt19"]);
        assert!(filters.toggle_agency("mpal"));
        assert!(filters.toggle_agency("tjpb"));
        assert_eq!(filters.agencies(), ["tjal", "trt19", "tjpb"]);
    }

    #[test]
    fn set_agencies_dedupes_and_truncates() {
        let mut filters = SearchFilters::new(2023);
        filters.set_agencies(["a", "A", "b", "c", "d"]);
        assert_eq!(filters.agencies(), ["a", "b", "c"]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut filters = SearchFilters::new(2020);
        filters.toggle_agency("tjal");
        filters.category = Category::Discounts;
        filters.months = MonthSet::from_months([1]).unwrap();
        filters.agency_type = Some(AgencyGroup::Prosecutors);
        filters.clear(2024);
        assert_eq!(filters, SearchFilters::new(2024));
    }

    #[test]
    fn agency_options_follow_type() {
        let all = vec![agency("tjal", "Estadual"), agency("mpal", "Ministério")];
        let mut filters = SearchFilters::new(2023);
        assert_eq!(filters.agency_options(&all).len(), 2);
        filters.agency_type = Some(AgencyGroup::Prosecutors);
        let options = filters.agency_options(&all);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "mpal");
    }

    #[test]
    fn category_params() {
        assert_eq!(Category::All.param(), None);
        assert_eq!(Category::from_param("outras"), Category::Other);
        assert_eq!(Category::from_param("Tudo"), Category::All);
        assert_eq!(Category::from_param("???"), Category::All);
    }
}
