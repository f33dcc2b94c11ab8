//! Home page headline.

use djbr_api::models::{Agency, GeneralSummary};
use djbr_utils::{dates, format};

#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    /// "Janeiro de 2018"
    pub start: String,
    pub end: String,
    /// Agencies currently monitored, counted from the agency list.
    pub agency_count: String,
    pub record_count: String,
    /// "R$ 12,35 bilhões"
    pub total: String,
}

impl Headline {
    pub fn new(summary: &GeneralSummary, agencies: &[Agency]) -> Self {
        let monitored = agencies.iter().filter(|a| a.is_monitored()).count();
        Self {
            start: dates::month_year_label(&summary.start_date),
            end: dates::month_year_label(&summary.end_date),
            agency_count: format::thousands(monitored as u64),
            record_count: format::thousands(summary.record_count),
            total: format::billions(summary.total_remuneration),
        }
    }

    /// The paragraph under the home page title.
    pub fn sentence(&self) -> String {
        format!(
            "Os dados vão de {} a {}. São dados de {} órgãos que compreendem {} registros de \
             pagamentos de salários, indenizações, gratificações e diárias, totalizando {} em \
             recursos públicos.",
            self.start.to_lowercase(),
            self.end.to_lowercase(),
            self.agency_count,
            self.record_count,
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use djbr_api::models::CollectingStatus;

    fn agency(id: &str, collecting: Option<bool>) -> Agency {
        Agency {
            id: id.to_string(),
            name: String::new(),
            jurisdiction: "Estadual".to_string(),
            entity: String::new(),
            state: None,
            collecting: collecting.map(|collecting| {
                vec![CollectingStatus {
                    timestamp: None,
                    description: Vec::new(),
                    collecting,
                }]
            }),
            has_data: true,
            ombudsman: None,
            twitter_handle: None,
        }
    }

    fn summary() -> GeneralSummary {
        GeneralSummary {
            agency_count: 215,
            start_date: "2018-01-01T00:00:00Z".to_string(),
            end_date: "2023-11-01T00:00:00Z".to_string(),
            record_count: 12_345,
            total_remuneration: 98_765_432_100.0,
        }
    }

    #[test]
    fn headline_formats_every_figure() {
        let agencies = vec![agency("tjal", None), agency("tjpb", Some(true))];
        let headline = Headline::new(&summary(), &agencies);
        assert_eq!(headline.start, "Janeiro de 2018");
        assert_eq!(headline.end, "Novembro de 2023");
        assert_eq!(headline.agency_count, "2");
        assert_eq!(headline.record_count, "12.345");
        assert_eq!(headline.total, "R$ 98,77 bilhões");
    }

    #[test]
    fn paused_agencies_are_not_counted() {
        let agencies = vec![
            agency("tjal", None),
            agency("tjrr", Some(false)),
            agency("mpal", Some(false)),
        ];
        let headline = Headline::new(&summary(), &agencies);
        assert_eq!(headline.agency_count, "1");
        assert_eq!(
            headline.sentence(),
            "Os dados vão de janeiro de 2018 a novembro de 2023. São dados de 1 órgãos que \
             compreendem 12.345 registros de pagamentos de salários, indenizações, \
             gratificações e diárias, totalizando R$ 98,77 bilhões em recursos públicos."
        );
    }
}
