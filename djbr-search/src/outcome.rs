//! What the search page shows for a backend response.

use djbr_api::models::{SearchResponse, SearchRow};
use djbr_utils::format;
use serde::Serialize;

/// Headers of the result table, in the order of [`ResultRow::cells`].
pub const RESULT_COLUMNS: [&str; 11] = [
    "#",
    "Órgão",
    "Mês",
    "Ano",
    "Matrícula",
    "Nome",
    "Cargo",
    "Lotação",
    "Categoria de remuneração",
    "Descrição de remuneração",
    "Valor",
];

/// A result row with the sequential id the table uses for row identity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultRow {
    /// 1-based position in the response.
    pub id: usize,
    #[serde(flatten)]
    pub row: SearchRow,
}

impl ResultRow {
    /// Display text of each table column.
    pub fn cells(&self) -> [String; 11] {
        let r = &self.row;
        [
            self.id.to_string(),
            format::agency_code(&r.agency),
            format::month_name(r.month).to_string(),
            r.year.to_string(),
            r.registration.clone(),
            r.name.clone(),
            r.role.clone(),
            r.workplace.clone(),
            r.category.clone(),
            r.detail.clone(),
            format::currency(r.value),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The backend matched nothing for the period.
    NoData,
    /// More rows than the download limit: only a sample is shown.
    Sample { total: u64, limit: u64 },
    /// Every matched row can be downloaded.
    Downloadable { total: u64 },
}

/// A finished search, replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// Query string the rows were fetched with.
    pub query: String,
    pub rows: Vec<ResultRow>,
    pub outcome: SearchOutcome,
    pub download_limit: u64,
}

impl SearchResults {
    pub fn from_response(query: &str, response: SearchResponse) -> Self {
        let total = response.num_rows_if_available;
        let limit = response.download_limit;
        let outcome = if total == 0 {
            SearchOutcome::NoData
        } else if !response.download_available || total > limit {
            SearchOutcome::Sample { total, limit }
        } else {
            SearchOutcome::Downloadable { total }
        };
        let rows = response
            .rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| ResultRow { id: i + 1, row })
            .collect();
        Self {
            query: query.to_string(),
            rows,
            outcome,
            download_limit: limit,
        }
    }

    /// Result shown when the request itself failed.
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            rows: Vec::new(),
            outcome: SearchOutcome::NoData,
            download_limit: 0,
        }
    }

    pub fn download_enabled(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Downloadable { .. })
    }

    /// The table is rendered for samples and full results alike.
    pub fn shows_rows(&self) -> bool {
        !matches!(self.outcome, SearchOutcome::NoData)
    }

    pub fn shows_sample_warning(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Sample { .. })
    }

    pub fn message(&self) -> String {
        match self.outcome {
            SearchOutcome::NoData => "O órgão não prestou contas neste período.".to_string(),
            SearchOutcome::Sample { limit, .. } => format!(
                "A pesquisa retorna mais linhas que o número máximo permitido para download ({}). \
                 Refaça a sua busca com menos órgãos ou com um período mais curto. \
                 Abaixo, uma amostra dos dados:",
                format::row_limit(limit)
            ),
            SearchOutcome::Downloadable { total } => format!(
                "A pesquisa retornou {} linhas. Abaixo, uma amostra dos dados:",
                format::thousands(total)
            ),
        }
    }
}
