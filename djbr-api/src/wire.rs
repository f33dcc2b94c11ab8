//! Raw response shapes of the remuneration API and their checked conversion
//! into the records in `models`.
//!
//! Field names follow the API (Portuguese). Numeric fields the API omits for
//! months without payroll default to zero; anything that decodes but makes no
//! sense (month 13, NaN money, negative package size) becomes `ApiError::Invalid`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::models::{
    Agency, AgencyIndexDetail, AggregateIndex, AnnualSummary, AnnualSummaryData,
    CollectingStatus, DataPackage, GeneralSummary, IndexScores, MonthIndex, MonthlyRemuneration,
    MonthlySummary, SearchResponse, SearchRow,
};

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2200;

fn check_month(what: &'static str, month: u32) -> Result<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(ApiError::invalid(what, format!("month {month} out of range")))
    }
}

fn check_year(what: &'static str, year: i32) -> Result<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ApiError::invalid(what, format!("year {year} out of range")))
    }
}

fn check_money(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::invalid(what, format!("non-finite amount {value}")))
    }
}

fn check_score(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ApiError::invalid(what, format!("score {value} is not a non-negative number")))
    }
}

fn require_id(what: &'static str, id: String) -> Result<String> {
    let id = id.trim().to_string();
    if id.is_empty() {
        Err(ApiError::invalid(what, "empty agency id"))
    } else {
        Ok(id)
    }
}

/// Collection timestamps arrive as protobuf-style `{seconds, nanos}`.
#[derive(Debug, Deserialize)]
pub(crate) struct WireTimestamp {
    #[serde(default)]
    seconds: i64,
    #[serde(default)]
    nanos: u32,
}

impl WireTimestamp {
    fn into_datetime(self) -> Option<DateTime<Utc>> {
        if self.seconds == 0 && self.nanos == 0 {
            return None;
        }
        DateTime::from_timestamp(self.seconds, self.nanos)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCollecting {
    #[serde(default)]
    timestamp: Option<WireTimestamp>,
    #[serde(default)]
    description: Vec<String>,
    #[serde(default)]
    collecting: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAgency {
    id_orgao: String,
    #[serde(default)]
    nome: String,
    #[serde(default)]
    jurisdicao: String,
    #[serde(default)]
    entidade: String,
    #[serde(default)]
    uf: Option<String>,
    #[serde(default, alias = "coletando")]
    collecting: Option<Vec<WireCollecting>>,
    #[serde(default)]
    possui_dados: bool,
    #[serde(default)]
    ouvidoria: Option<String>,
    #[serde(default)]
    twitter_handle: Option<String>,
}

impl TryFrom<WireAgency> for Agency {
    type Error = ApiError;

    fn try_from(w: WireAgency) -> Result<Self> {
        Ok(Agency {
            id: require_id("agency", w.id_orgao)?.to_lowercase(),
            name: w.nome,
            jurisdiction: w.jurisdicao,
            entity: w.entidade,
            state: w.uf.filter(|s| !s.trim().is_empty()),
            collecting: w.collecting.map(|statuses| {
                statuses
                    .into_iter()
                    .map(|s| CollectingStatus {
                        timestamp: s.timestamp.and_then(WireTimestamp::into_datetime),
                        description: s.description,
                        collecting: s.collecting,
                    })
                    .collect()
            }),
            has_data: w.possui_dados,
            ombudsman: w.ouvidoria.filter(|s| !s.trim().is_empty()),
            twitter_handle: w.twitter_handle.filter(|s| !s.trim().is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireGeneralSummary {
    #[serde(default)]
    num_orgaos: u32,
    data_inicio: String,
    data_fim: String,
    #[serde(default)]
    num_meses_coletados: u64,
    #[serde(default)]
    remuneracao_total: f64,
}

impl TryFrom<WireGeneralSummary> for GeneralSummary {
    type Error = ApiError;

    fn try_from(w: WireGeneralSummary) -> Result<Self> {
        Ok(GeneralSummary {
            agency_count: w.num_orgaos,
            start_date: w.data_inicio,
            end_date: w.data_fim,
            record_count: w.num_meses_coletados,
            total_remuneration: check_money("general summary", w.remuneracao_total)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMonthlyRemuneration {
    mes: u32,
    #[serde(default)]
    remuneracao_base: f64,
    #[serde(default)]
    outras_remuneracoes: f64,
    #[serde(default)]
    descontos: f64,
}

impl TryFrom<WireMonthlyRemuneration> for MonthlyRemuneration {
    type Error = ApiError;

    fn try_from(w: WireMonthlyRemuneration) -> Result<Self> {
        const WHAT: &str = "monthly remuneration";
        Ok(MonthlyRemuneration {
            month: check_month(WHAT, w.mes)?,
            base: check_money(WHAT, w.remuneracao_base)?,
            other: check_money(WHAT, w.outras_remuneracoes)?,
            discounts: check_money(WHAT, w.descontos)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePackage {
    #[serde(default)]
    url: String,
    #[serde(default)]
    hash: String,
    #[serde(default)]
    size: i64,
}

impl TryFrom<WirePackage> for DataPackage {
    type Error = ApiError;

    fn try_from(w: WirePackage) -> Result<Self> {
        let size = u64::try_from(w.size)
            .map_err(|_| ApiError::invalid("data package", format!("negative size {}", w.size)))?;
        Ok(DataPackage {
            url: w.url,
            hash: w.hash,
            size,
        })
    }
}

fn convert_package(package: Option<WirePackage>) -> Result<Option<DataPackage>> {
    package.map(DataPackage::try_from).transpose()
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAnnualSummary {
    ano: i32,
    #[serde(default)]
    num_membros: u32,
    #[serde(default)]
    remuneracao_base: f64,
    #[serde(default)]
    outras_remuneracoes: f64,
    #[serde(default)]
    descontos: f64,
    #[serde(default)]
    remuneracao_base_por_membro: f64,
    #[serde(default)]
    outras_remuneracoes_por_membro: f64,
    #[serde(default)]
    descontos_por_membro: f64,
    #[serde(default)]
    remuneracao_base_por_mes: f64,
    #[serde(default)]
    outras_remuneracoes_por_mes: f64,
    #[serde(default)]
    descontos_por_mes: f64,
    #[serde(default)]
    meses_com_dados: u32,
    #[serde(default)]
    package: Option<WirePackage>,
}

impl TryFrom<WireAnnualSummary> for AnnualSummary {
    type Error = ApiError;

    fn try_from(w: WireAnnualSummary) -> Result<Self> {
        const WHAT: &str = "annual summary";
        if w.meses_com_dados > 12 {
            return Err(ApiError::invalid(
                WHAT,
                format!("{} months with data", w.meses_com_dados),
            ));
        }
        Ok(AnnualSummary {
            year: check_year(WHAT, w.ano)?,
            member_count: w.num_membros,
            base: check_money(WHAT, w.remuneracao_base)?,
            other: check_money(WHAT, w.outras_remuneracoes)?,
            discounts: check_money(WHAT, w.descontos)?,
            base_per_member: check_money(WHAT, w.remuneracao_base_por_membro)?,
            other_per_member: check_money(WHAT, w.outras_remuneracoes_por_membro)?,
            discounts_per_member: check_money(WHAT, w.descontos_por_membro)?,
            base_per_month: check_money(WHAT, w.remuneracao_base_por_mes)?,
            other_per_month: check_money(WHAT, w.outras_remuneracoes_por_mes)?,
            discounts_per_month: check_money(WHAT, w.descontos_por_mes)?,
            months_with_data: w.meses_com_dados,
            package: convert_package(w.package)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMonthlySummary {
    mes: u32,
    #[serde(default)]
    num_membros: u32,
    #[serde(default)]
    remuneracao_base: f64,
    #[serde(default)]
    outras_remuneracoes: f64,
    #[serde(default)]
    descontos: f64,
    #[serde(default)]
    timestamp: Option<WireTimestamp>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAgencyYear {
    ano: i32,
    #[serde(default, alias = "id_orgao")]
    orgao: String,
    #[serde(default)]
    meses: Vec<WireMonthlySummary>,
    #[serde(default)]
    package: Option<WirePackage>,
}

impl TryFrom<WireAgencyYear> for AnnualSummaryData {
    type Error = ApiError;

    fn try_from(w: WireAgencyYear) -> Result<Self> {
        const WHAT: &str = "agency year";
        let mut months = w
            .meses
            .into_iter()
            .map(|m| {
                Ok(MonthlySummary {
                    month: check_month(WHAT, m.mes)?,
                    member_count: m.num_membros,
                    base: check_money(WHAT, m.remuneracao_base)?,
                    other: check_money(WHAT, m.outras_remuneracoes)?,
                    discounts: check_money(WHAT, m.descontos)?,
                    timestamp: m.timestamp.and_then(WireTimestamp::into_datetime),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        months.sort_by_key(|m| m.month);
        Ok(AnnualSummaryData {
            year: check_year(WHAT, w.ano)?,
            agency_id: w.orgao.to_lowercase(),
            months,
            package: convert_package(w.package)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSearchRow {
    #[serde(default)]
    orgao: String,
    mes: u32,
    ano: i32,
    #[serde(default)]
    matricula: String,
    #[serde(default)]
    nome: String,
    #[serde(default)]
    cargo: String,
    #[serde(default)]
    lotacao: String,
    #[serde(default)]
    categoria_contracheque: String,
    #[serde(default)]
    detalhamento_contracheque: String,
    #[serde(default)]
    valor: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSearchResponse {
    #[serde(default)]
    result: Vec<WireSearchRow>,
    #[serde(default)]
    download_available: bool,
    #[serde(default)]
    download_limit: u64,
    #[serde(default)]
    num_rows_if_available: u64,
}

impl TryFrom<WireSearchResponse> for SearchResponse {
    type Error = ApiError;

    fn try_from(w: WireSearchResponse) -> Result<Self> {
        const WHAT: &str = "search row";
        let rows = w
            .result
            .into_iter()
            .map(|r| {
                Ok(SearchRow {
                    agency: r.orgao,
                    month: check_month(WHAT, r.mes)?,
                    year: check_year(WHAT, r.ano)?,
                    registration: r.matricula,
                    name: r.nome,
                    role: r.cargo,
                    workplace: r.lotacao,
                    category: r.categoria_contracheque,
                    detail: r.detalhamento_contracheque,
                    value: check_money(WHAT, r.valor)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SearchResponse {
            rows,
            download_available: w.download_available,
            download_limit: w.download_limit,
            num_rows_if_available: w.num_rows_if_available,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireScores {
    #[serde(default)]
    indice_transparencia: f64,
    #[serde(default)]
    indice_completude: f64,
    #[serde(default)]
    indice_facilidade: f64,
}

impl TryFrom<WireScores> for IndexScores {
    type Error = ApiError;

    fn try_from(w: WireScores) -> Result<Self> {
        const WHAT: &str = "transparency index";
        Ok(IndexScores {
            transparency: check_score(WHAT, w.indice_transparencia)?,
            completeness: check_score(WHAT, w.indice_completude)?,
            ease: check_score(WHAT, w.indice_facilidade)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAggregateIndex {
    id_orgao: String,
    agregado: WireScores,
}

impl TryFrom<WireAggregateIndex> for AggregateIndex {
    type Error = ApiError;

    fn try_from(w: WireAggregateIndex) -> Result<Self> {
        Ok(AggregateIndex {
            agency_id: require_id("transparency index", w.id_orgao)?.to_lowercase(),
            scores: w.agregado.try_into()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMonthIndex {
    ano: i32,
    mes: u32,
    indice_transparencia: WireScores,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAgencyIndex {
    id_orgao: String,
    #[serde(default)]
    agregado: Option<WireScores>,
    #[serde(default)]
    detalhe: Vec<WireMonthIndex>,
}

/// The per-agency index endpoint answers with one object or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireAgencyIndexBody {
    Many(Vec<WireAgencyIndex>),
    One(WireAgencyIndex),
}

impl WireAgencyIndexBody {
    pub(crate) fn into_list(self) -> Vec<WireAgencyIndex> {
        match self {
            WireAgencyIndexBody::Many(list) => list,
            WireAgencyIndexBody::One(one) => vec![one],
        }
    }
}

impl TryFrom<WireAgencyIndex> for AgencyIndexDetail {
    type Error = ApiError;

    fn try_from(w: WireAgencyIndex) -> Result<Self> {
        const WHAT: &str = "transparency index";
        let details = w
            .detalhe
            .into_iter()
            .map(|d| {
                Ok(MonthIndex {
                    year: check_year(WHAT, d.ano)?,
                    month: check_month(WHAT, d.mes)?,
                    scores: d.indice_transparencia.try_into()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(AgencyIndexDetail {
            agency_id: require_id(WHAT, w.id_orgao)?.to_lowercase(),
            aggregate: w.agregado.map(IndexScores::try_from).transpose()?,
            details,
        })
    }
}

/// Decode `body` as `W` and convert it, tagging errors with `url`.
pub(crate) fn decode<W, T>(url: &str, body: &str) -> Result<T>
where
    W: for<'de> Deserialize<'de>,
    T: TryFrom<W, Error = ApiError>,
{
    let wire: W = serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })?;
    T::try_from(wire)
}

/// Decode a JSON array, converting every element.
pub(crate) fn decode_list<W, T>(url: &str, body: &str) -> Result<Vec<T>>
where
    W: for<'de> Deserialize<'de>,
    T: TryFrom<W, Error = ApiError>,
{
    let wire: Vec<W> = serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })?;
    wire.into_iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agency_decodes_with_collecting_status() {
        let body = r#"{
            "id_orgao": "TJAL",
            "nome": "Tribunal de Justiça do Estado de Alagoas",
            "jurisdicao": "Estadual",
            "entidade": "Tribunal",
            "uf": "AL",
            "ouvidoria": "https://www.tjal.jus.br/ouvidoria",
            "twitter_handle": "",
            "possui_dados": true,
            "collecting": [{"timestamp": {"seconds": 1672531200}, "description": ["ok"], "collecting": true}]
        }"#;
        let agency: Agency = decode::<WireAgency, Agency>("/orgao/tjal", body).unwrap();
        assert_eq!(agency.id, "tjal");
        assert_eq!(agency.state.as_deref(), Some("AL"));
        assert!(agency.twitter_handle.is_none());
        assert!(agency.is_monitored());
        let status = &agency.collecting.as_ref().unwrap()[0];
        assert_eq!(status.timestamp.unwrap().timestamp(), 1672531200);
    }

    #[test]
    fn agency_accepts_coletando_alias() {
        let body = r#"{"id_orgao": "mpac", "coletando": [{"description": ["sem dados"], "collecting": false}]}"#;
        let agency: Agency = decode::<WireAgency, Agency>("/orgao/mpac", body).unwrap();
        assert!(!agency.is_monitored());
        assert!(agency.is_not_collecting());
    }

    #[test]
    fn agency_without_id_is_invalid() {
        let body = r#"{"id_orgao": "  ", "nome": "x"}"#;
        let err = decode::<WireAgency, Agency>("/orgao/x", body).unwrap_err();
        assert!(matches!(err, ApiError::Invalid { what: "agency", .. }));
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        let body = r#"[{"mes": 1, "remuneracao_base": 10.0}, {"mes": 13}]"#;
        let err = decode_list::<WireMonthlyRemuneration, MonthlyRemuneration>("/r", body)
            .unwrap_err();
        assert!(err.to_string().contains("month 13"));
    }

    #[test]
    fn missing_amounts_default_to_zero() {
        let body = r#"[{"mes": 3, "remuneracao_base": 1.5e9}]"#;
        let months =
            decode_list::<WireMonthlyRemuneration, MonthlyRemuneration>("/r", body).unwrap();
        assert_eq!(months[0].month, 3);
        assert_eq!(months[0].other, 0.0);
        assert_eq!(months[0].discounts, 0.0);
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        let err = decode::<WireSearchResponse, SearchResponse>("/v2/pesquisar", "[1, 2]")
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn search_response_decodes_rows() {
        let body = r#"{
            "result": [{
                "orgao": "tjal", "mes": 1, "ano": 2023, "matricula": "123",
                "nome": "Fulano", "cargo": "Juiz", "lotacao": "Maceió",
                "categoria_contracheque": "base", "detalhamento_contracheque": "Subsídio",
                "valor": 33689.11
            }],
            "download_available": true,
            "download_limit": 100000,
            "num_rows_if_available": 1
        }"#;
        let response = decode::<WireSearchResponse, SearchResponse>("/s", body).unwrap();
        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.rows[0].workplace, "Maceió");
        assert_eq!(response.download_limit, 100_000);
    }

    #[test]
    fn agency_year_sorts_months_and_keeps_package() {
        let body = r#"{
            "ano": 2022, "orgao": "TJAL",
            "meses": [
                {"mes": 2, "num_membros": 10, "remuneracao_base": 2.0, "timestamp": {"seconds": 200}},
                {"mes": 1, "num_membros": 10, "remuneracao_base": 1.0, "timestamp": {"seconds": 100}}
            ],
            "package": {"url": "u", "hash": "h", "size": 2048}
        }"#;
        let year = decode::<WireAgencyYear, AnnualSummaryData>("/t", body).unwrap();
        assert_eq!(year.agency_id, "tjal");
        assert_eq!(year.months[0].month, 1);
        assert_eq!(year.last_collected().unwrap().timestamp(), 200);
        assert_eq!(year.package.unwrap().size, 2048);
    }

    #[test]
    fn negative_package_size_is_rejected() {
        let body = r#"{"ano": 2022, "meses": [], "package": {"size": -1}}"#;
        let err = decode::<WireAgencyYear, AnnualSummaryData>("/t", body).unwrap_err();
        assert!(matches!(err, ApiError::Invalid { what: "data package", .. }));
    }

    #[test]
    fn agency_index_accepts_object_or_list() {
        let one = r#"{"id_orgao": "tjal", "detalhe": [{"ano": 2022, "mes": 5,
            "indice_transparencia": {"indice_transparencia": 0.5, "indice_completude": 0.4, "indice_facilidade": 0.7}}]}"#;
        let many = format!("[{one}]");
        for body in [one.to_string(), many] {
            let wire: WireAgencyIndexBody = serde_json::from_str(&body).unwrap();
            let list = wire.into_list();
            assert_eq!(list.len(), 1);
        }
    }

    #[test]
    fn negative_score_is_rejected() {
        let body = r#"[{"id_orgao": "tjal", "agregado": {"indice_transparencia": -0.1}}]"#;
        let err = decode_list::<WireAggregateIndex, AggregateIndex>("/i", body).unwrap_err();
        assert!(matches!(err, ApiError::Invalid { .. }));
    }
}
