//! Transparency-index plot points.
//!
//! The backend already computes every score; this only flattens its nested
//! shapes into one point per bar, labelled and sorted for the index chart.

use std::cmp::Ordering;

use djbr_api::models::{AgencyIndexDetail, AggregateIndex, IndexScores};
use djbr_utils::format;
use serde::Serialize;

/// One agency-month of the agency index chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexPoint {
    pub agency_id: String,
    /// "Jan/2023"
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub transparency: f64,
    pub completeness: f64,
    pub ease: f64,
}

/// One agency of a group index tab.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupIndexPoint {
    pub agency_id: String,
    /// Display code ("TRT-13")
    pub label: String,
    pub transparency: f64,
    pub completeness: f64,
    pub ease: f64,
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Flatten per-month details, oldest month first.
pub fn agency_index_points(details: &[AgencyIndexDetail]) -> Vec<IndexPoint> {
    let mut points: Vec<IndexPoint> = details
        .iter()
        .flat_map(|detail| {
            detail.details.iter().map(move |m| {
                let IndexScores {
                    transparency,
                    completeness,
                    ease,
                } = m.scores;
                IndexPoint {
                    agency_id: detail.agency_id.clone(),
                    label: format!("{}/{}", format::month_abbreviation(m.month), m.year),
                    year: m.year,
                    month: m.month,
                    transparency,
                    completeness,
                    ease,
                }
            })
        })
        .collect();
    points.sort_by(|a, b| {
        a.agency_id
            .cmp(&b.agency_id)
            .then(a.year.cmp(&b.year))
            .then(a.month.cmp(&b.month))
    });
    points
}

/// Aggregated scores of a group, most transparent agency first.
pub fn group_index_points(entries: &[AggregateIndex]) -> Vec<GroupIndexPoint> {
    let mut points: Vec<GroupIndexPoint> = entries
        .iter()
        .map(|e| GroupIndexPoint {
            agency_id: e.agency_id.clone(),
            label: format::agency_code(&e.agency_id),
            transparency: e.scores.transparency,
            completeness: e.scores.completeness,
            ease: e.scores.ease,
        })
        .collect();
    points.sort_by(|a, b| {
        descending(a.transparency, b.transparency).then_with(|| a.agency_id.cmp(&b.agency_id))
    });
    points
}
