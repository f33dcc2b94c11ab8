//! Agency listing, headline and transparency index reports.

use anyhow::Context;
use djbr_api::models::{Agency, AgencyGroup, MonthlyRemuneration};
use djbr_api::{ApiClient, RemunerationApi};
use djbr_data::index::{agency_index_points, GroupIndexPoint, IndexPoint};
use djbr_data::loaders::home::{fetch_group_points, load_headline};
use djbr_data::summary::Headline;
use djbr_utils::{dates, format};
use log::{info, warn};

pub fn parse_group(slug: &str) -> anyhow::Result<AgencyGroup> {
    AgencyGroup::from_slug(slug).with_context(|| {
        let known: Vec<&str> = AgencyGroup::ALL.iter().map(|g| g.slug()).collect();
        format!("unknown group '{}' (expected one of {})", slug, known.join(", "))
    })
}

/// Monitored agencies, optionally of one group, ordered by id.
pub fn monitored<'a>(agencies: &'a [Agency], group: Option<AgencyGroup>) -> Vec<&'a Agency> {
    let mut list: Vec<&Agency> = agencies
        .iter()
        .filter(|a| a.is_monitored())
        .filter(|a| group.map_or(true, |g| a.group() == Some(g)))
        .collect();
    list.sort_by(|a, b| a.id.cmp(&b.id));
    list
}

pub fn render_agencies(agencies: &[&Agency]) -> String {
    let mut out = String::new();
    for agency in agencies {
        let group = agency.group().map_or("-", AgencyGroup::label);
        out.push_str(&format!(
            "{:<10} {:<24} {}\n",
            format::agency_code(&agency.id),
            group,
            agency.name
        ));
    }
    out.push_str(&format!("{} órgãos\n", agencies.len()));
    out
}

pub fn render_headline(headline: &Headline) -> String {
    format!(
        "Período: {} a {}\nÓrgãos monitorados: {}\nRegistros: {}\nTotal: {}\n",
        headline.start, headline.end, headline.agency_count, headline.record_count, headline.total
    )
}

/// One line per month with data: base, other and discounts.
pub fn render_months(year: i32, months: &[MonthlyRemuneration]) -> String {
    let mut out = format!("Remuneração em {year}\n");
    for m in months {
        out.push_str(&format!(
            "{:<4} base {:>22}  outras {:>22}  descontos {:>22}\n",
            format::month_abbreviation(m.month),
            format::currency(m.base),
            format::currency(m.other),
            format::currency(m.discounts)
        ));
    }
    out
}

fn score(value: f64) -> String {
    format::decimal(value, 2)
}

pub fn render_group_points(points: &[GroupIndexPoint]) -> String {
    let mut out = String::from("Órgão      Transparência  Completude  Facilidade\n");
    for p in points {
        out.push_str(&format!(
            "{:<10} {:>13}  {:>10}  {:>10}\n",
            p.label,
            score(p.transparency),
            score(p.completeness),
            score(p.ease)
        ));
    }
    out
}

pub fn render_agency_points(points: &[IndexPoint]) -> String {
    let mut out = String::from("Mês        Transparência  Completude  Facilidade\n");
    for p in points {
        out.push_str(&format!(
            "{:<10} {:>13}  {:>10}  {:>10}\n",
            p.label,
            score(p.transparency),
            score(p.completeness),
            score(p.ease)
        ));
    }
    out
}

pub async fn run_agencies(client: &ApiClient, group: Option<&str>) -> anyhow::Result<()> {
    let group = group.map(parse_group).transpose()?;
    let agencies = client.agencies().await.context("failed to list agencies")?;
    info!("Fetched {} agencies", agencies.len());
    print!("{}", render_agencies(&monitored(&agencies, group)));
    Ok(())
}

pub async fn run_summary(client: &ApiClient) -> anyhow::Result<()> {
    let year = dates::current_year();
    let (headline, months) = tokio::join!(load_headline(client), client.general_remuneration(year));
    let headline = headline.context("failed to load the general summary or the agency list")?;
    print!("{}", render_headline(&headline));
    match months {
        Ok(months) => print!("{}", render_months(year, &months)),
        Err(e) => warn!("No monthly totals for {}: {}", year, e),
    }
    Ok(())
}

pub async fn run_group_index(client: &ApiClient, group: &str) -> anyhow::Result<()> {
    let group = parse_group(group)?;
    let points = fetch_group_points(client, group)
        .await
        .with_context(|| format!("failed to load the index of {}", group.label()))?;
    print!("{}", render_group_points(&points));
    Ok(())
}

pub async fn run_agency_index(client: &ApiClient, agency: &str) -> anyhow::Result<()> {
    let id = agency.trim().to_lowercase();
    let details = client
        .agency_index(&id)
        .await
        .with_context(|| format!("failed to load the index of {}", id))?;
    print!("{}", render_agency_points(&agency_index_points(&details)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use djbr_api::models::{CollectingStatus, GeneralSummary};

    fn agency(id: &str, jurisdiction: &str, collecting: bool) -> Agency {
        Agency {
            id: id.to_string(),
            name: format!("Órgão {id}"),
            jurisdiction: jurisdiction.to_string(),
            entity: String::new(),
            state: None,
            collecting: Some(vec![CollectingStatus {
                timestamp: None,
                description: Vec::new(),
                collecting,
            }]),
            has_data: true,
            ombudsman: None,
            twitter_handle: None,
        }
    }

    #[test]
    fn group_slugs_parse_in_any_case() {
        assert_eq!(parse_group("JUSTICA-ESTADUAL").unwrap(), AgencyGroup::StateJustice);
        let err = parse_group("nope").unwrap_err().to_string();
        assert!(err.contains("ministerios-publicos"));
    }

    #[test]
    fn listing_keeps_monitored_agencies_of_the_group() {
        let all = vec![
            agency("tjpb", "Estadual", true),
            agency("mpal", "Ministério", true),
            agency("tjal", "Estadual", true),
            agency("tjrr", "Estadual", false),
        ];
        let ids = |list: Vec<&Agency>| list.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(monitored(&all, None)), ["mpal", "tjal", "tjpb"]);
        assert_eq!(
            ids(monitored(&all, Some(AgencyGroup::StateJustice))),
            ["tjal", "tjpb"]
        );

        let report = render_agencies(&monitored(&all, Some(AgencyGroup::Prosecutors)));
        assert!(report.contains("MPAL"));
        assert!(report.ends_with("1 órgãos\n"));
    }

    #[test]
    fn headline_report() {
        let summary = GeneralSummary {
            agency_count: 215,
            start_date: "2018-01-01".to_string(),
            end_date: "2023-11-01".to_string(),
            record_count: 12_345,
            total_remuneration: 98_765_432_100.0,
        };
        let agencies = vec![agency("tjal", "Estadual", true), agency("tjrr", "Estadual", false)];
        let report = render_headline(&Headline::new(&summary, &agencies));
        assert!(report.starts_with("Período: Janeiro de 2018 a Novembro de 2023\n"));
        assert!(report.contains("Órgãos monitorados: 1\n"));
        assert!(report.contains("Total: R$ 98,77 bilhões"));
    }

    #[test]
    fn month_and_index_reports() {
        let months = vec![MonthlyRemuneration {
            month: 3,
            base: 1_000.0,
            other: 250.5,
            discounts: 100.0,
        }];
        let report = render_months(2023, &months);
        assert!(report.contains("Mar"));
        assert!(report.contains("R$ 250,50"));

        let points = vec![GroupIndexPoint {
            agency_id: "trt13".to_string(),
            label: "TRT-13".to_string(),
            transparency: 0.5,
            completeness: 0.25,
            ease: 1.0,
        }];
        let report = render_group_points(&points);
        assert!(report.contains("TRT-13"));
        assert!(report.contains("0,50"));
        assert!(report.contains("1,00"));
    }
}
