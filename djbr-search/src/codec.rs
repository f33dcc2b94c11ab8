//! Query-string encoding and decoding of [`SearchFilters`].
//!
//! The submission format is the one the search endpoint has always received:
//! a leading `?`, then `&name=value` for each present filter, lists joined by
//! commas, absent or "all" filters omitted. For example
//! `?&anos=2023&meses=1,2,3&orgaos=tjal,mpal&categorias=base`.
//!
//! The address bar carries the same string plus the agency type (`tipo`),
//! which only narrows the agency picker and is never sent to the backend.

use djbr_api::models::{Agency, AgencyGroup};
use djbr_utils::dates;

use crate::filters::{Category, MonthSet, SearchFilters};

pub const PARAM_YEAR: &str = "anos";
pub const PARAM_MONTHS: &str = "meses";
pub const PARAM_AGENCIES: &str = "orgaos";
pub const PARAM_CATEGORY: &str = "categorias";
pub const PARAM_TYPE: &str = "tipo";

fn push_param(q: &mut String, name: &str, value: &str) {
    q.push('&');
    q.push_str(name);
    q.push('=');
    q.push_str(value);
}

fn push_list(q: &mut String, name: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    push_param(q, name, &values.join(","));
}

impl SearchFilters {
    /// Query string sent to the search and download endpoints.
    pub fn to_query(&self) -> String {
        let mut q = String::from("?");
        push_param(&mut q, PARAM_YEAR, &self.year.to_string());
        let months: Vec<String> = self.months.months().iter().map(u32::to_string).collect();
        push_list(&mut q, PARAM_MONTHS, &months);
        let agencies: Vec<String> = self
            .agencies()
            .iter()
            .map(|id| urlencoding::encode(id).into_owned())
            .collect();
        push_list(&mut q, PARAM_AGENCIES, &agencies);
        if let Some(category) = self.category.param() {
            push_param(&mut q, PARAM_CATEGORY, category);
        }
        q
    }

    /// Query string mirrored into the address bar and share links.
    pub fn to_location_query(&self) -> String {
        let mut q = self.to_query();
        if let Some(group) = self.agency_type {
            push_param(&mut q, PARAM_TYPE, group.slug());
        }
        q
    }

    /// Rebuild filters from an address-bar query.
    ///
    /// Malformed values never fail: each field falls back to its default.
    /// Agency ids are kept only when they exist in `known`.
    pub fn from_query(query: &str, known: &[Agency], current_year: i32) -> Self {
        let mut filters = SearchFilters::new(current_year);
        for (name, value) in query_pairs(query) {
            match name.as_str() {
                PARAM_YEAR => {
                    if let Some(year) = parse_year(&value, current_year) {
                        filters.year = year;
                    }
                }
                PARAM_MONTHS => {
                    let months = value
                        .split(',')
                        .filter_map(|m| m.trim().parse::<u32>().ok());
                    filters.months = MonthSet::from_months(months).unwrap_or_default();
                }
                PARAM_AGENCIES => {
                    let ids = value
                        .split(',')
                        .map(|id| id.trim().to_lowercase())
                        .filter(|id| known.iter().any(|a| a.id.eq_ignore_ascii_case(id)));
                    filters.set_agencies(ids);
                }
                PARAM_CATEGORY => filters.category = Category::from_param(&value),
                PARAM_TYPE => filters.agency_type = AgencyGroup::from_slug(&value),
                _ => {}
            }
        }
        filters
    }
}

/// Years outside the selectable range are treated as missing.
fn parse_year(value: &str, current_year: i32) -> Option<i32> {
    let year = value.trim().parse::<i32>().ok()?;
    (dates::clamp_year(year, current_year) == year).then_some(year)
}

/// Agency ids named by the `orgaos` parameter, lower-cased, unresolved.
pub fn requested_agencies(query: &str) -> Vec<String> {
    query_pairs(query)
        .into_iter()
        .filter(|(name, _)| name == PARAM_AGENCIES)
        .flat_map(|(_, value)| {
            value
                .split(',')
                .map(|id| id.trim().to_lowercase())
                .filter(|id| !id.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// True when the address bar carries any query parameter at all.
pub fn has_search_params(query: &str) -> bool {
    !query_pairs(query).is_empty()
}

/// Split a query string into decoded `(name, value)` pairs.
///
/// Accepts a leading `?`, empty segments (`?&anos=...`) and percent-encoded
/// values such as the `%2C` commas browsers write.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim()
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            let name = decode_component(name);
            if name.is_empty() {
                return None;
            }
            Some((name, decode_component(value)))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::MAX_SELECTED_AGENCIES;

    const YEAR: i32 = 2024;

    fn agency(id: &str) -> Agency {
        Agency {
            id: id.to_string(),
            name: id.to_uppercase(),
            jurisdiction: "Estadual".to_string(),
            entity: String::new(),
            state: None,
            collecting: None,
            has_data: true,
            ombudsman: None,
            twitter_handle: None,
        }
    }

    fn known() -> Vec<Agency> {
        ["tjal", "mpal", "trt19", "tjpb"].into_iter().map(agency).collect()
    }

    #[test]
    fn default_filters_send_year_and_all_months() {
        let filters = SearchFilters::new(2023);
        assert_eq!(
            filters.to_query(),
            "?&anos=2023&meses=1,2,3,4,5,6,7,8,9,10,11,12"
        );
    }

    #[test]
    fn present_filters_are_comma_joined() {
        let mut filters = SearchFilters::new(2022);
        filters.months = MonthSet::from_months([3, 1, 2]).unwrap();
        filters.toggle_agency("tjal");
        filters.toggle_agency("mpal");
        filters.category = Category::Base;
        assert_eq!(
            filters.to_query(),
            "?&anos=2022&meses=1,2,3&orgaos=tjal,mpal&categorias=base"
        );
    }

    #[test]
    fn category_all_and_type_are_not_sent() {
        let mut filters = SearchFilters::new(2022);
        filters.months = MonthSet::from_months([12]).unwrap();
        filters.agency_type = Some(AgencyGroup::Prosecutors);
        let query = filters.to_query();
        assert_eq!(query, "?&anos=2022&meses=12");
        assert!(!query.contains(PARAM_CATEGORY));
        assert!(!query.contains(PARAM_TYPE));
        assert_eq!(
            filters.to_location_query(),
            "?&anos=2022&meses=12&tipo=ministerios-publicos"
        );
    }

    #[test]
    fn round_trip_reproduces_filters() {
        let mut filters = SearchFilters::new(YEAR);
        filters.year = 2019;
        filters.months = MonthSet::from_months([2, 7, 11]).unwrap();
        filters.toggle_agency("trt19");
        filters.toggle_agency("tjal");
        filters.category = Category::Discounts;
        filters.agency_type = Some(AgencyGroup::LaborJustice);

        let parsed = SearchFilters::from_query(&filters.to_location_query(), &known(), YEAR);
        assert_eq!(parsed, filters);

        let defaults = SearchFilters::new(YEAR);
        let parsed = SearchFilters::from_query(&defaults.to_location_query(), &known(), YEAR);
        assert_eq!(parsed, defaults);
    }

    #[test]
    fn browser_encoded_commas_are_decoded() {
        let parsed = SearchFilters::from_query(
            "?anos=2021&meses=1%2C2&orgaos=tjal%2Cmpal&categorias=outras",
            &known(),
            YEAR,
        );
        assert_eq!(parsed.year, 2021);
        assert_eq!(parsed.months.months(), vec![1, 2]);
        assert_eq!(parsed.agencies(), ["tjal", "mpal"]);
        assert_eq!(parsed.category, Category::Other);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let parsed = SearchFilters::from_query(
            "?anos=abc&meses=0,13,x&orgaos=nope&categorias=tudo&tipo=???",
            &known(),
            YEAR,
        );
        assert_eq!(parsed, SearchFilters::new(YEAR));

        let parsed = SearchFilters::from_query("?anos=1999&meses=", &known(), YEAR);
        assert_eq!(parsed.year, YEAR);
        assert!(parsed.months.is_all());
    }

    #[test]
    fn unknown_and_excess_agencies_are_dropped() {
        let parsed = SearchFilters::from_query(
            "?orgaos=TJAL,ghost,mpal,trt19,tjpb",
            &known(),
            YEAR,
        );
        assert_eq!(parsed.agencies().len(), MAX_SELECTED_AGENCIES);
        assert_eq!(parsed.agencies(), ["tjal", "mpal", "trt19"]);
    }

    #[test]
    fn requested_agencies_ignore_the_known_list() {
        assert_eq!(
            requested_agencies("?anos=2022&orgaos=TJAL%2Cghost"),
            vec!["tjal".to_string(), "ghost".to_string()]
        );
        assert!(requested_agencies("?anos=2022").is_empty());
        assert!(requested_agencies("?orgaos=").is_empty());
    }

    #[test]
    fn search_params_detection() {
        assert!(!has_search_params(""));
        assert!(!has_search_params("?"));
        assert!(!has_search_params("?&"));
        assert!(has_search_params("?anos=2020"));
        assert!(has_search_params("?&meses=1"));
    }

    #[test]
    fn query_pairs_decode_names_and_values() {
        let pairs = query_pairs("?&a=1&b=x+y&c&=z");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x y".to_string()),
                ("c".to_string(), String::new()),
            ]
        );
    }
}
