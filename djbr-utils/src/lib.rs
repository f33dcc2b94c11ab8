//! Shared formatting and date helpers for the remuneration dashboards.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, Local, NaiveDate};

    /// First year with collected payroll data.
    pub const FIRST_YEAR: i32 = 2018;

    /// Day of January on which the yearly collection first runs.
    const FIRST_COLLECTION_DAY: u32 = 17;

    /// Default year shown by the pages on `today`.
    ///
    /// Before the first collection of the year (January 17th) there is no
    /// data for the new year yet, so the previous year is used.
    pub fn current_year_at(today: NaiveDate) -> i32 {
        if today.month() == 1 && today.day() < FIRST_COLLECTION_DAY {
            today.year() - 1
        } else {
            today.year()
        }
    }

    pub fn current_year() -> i32 {
        current_year_at(Local::now().date_naive())
    }

    /// Selectable years, newest first.
    pub fn available_years(current: i32) -> Vec<i32> {
        (FIRST_YEAR..=current.max(FIRST_YEAR)).rev().collect()
    }

    /// Clamp a requested year into the selectable range.
    pub fn clamp_year(year: i32, current: i32) -> i32 {
        year.clamp(FIRST_YEAR, current.max(FIRST_YEAR))
    }

    /// Parse either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
    pub fn parse_api_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        s.get(0..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// "Janeiro de 2018" for an API date; the input is echoed when unparseable.
    pub fn month_year_label(s: &str) -> String {
        match parse_api_date(s) {
            Some(date) => format!(
                "{} de {}",
                crate::format::month_name(date.month()),
                date.year()
            ),
            None => s.to_string(),
        }
    }

}

/// Display-string helpers
pub mod format {
    pub const MONTH_NAMES: [&str; 12] = [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
        "Outubro", "Novembro", "Dezembro",
    ];

    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
    ];

    /// Full Portuguese month name for 1-12; empty for anything else.
    pub fn month_name(month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    pub fn month_abbreviation(month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|i| MONTH_ABBREVIATIONS.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Human-readable size with 1024-based units, at most two decimals.
    pub fn bytes(size: u64) -> String {
        const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
        if size == 0 {
            return "0 Bytes".to_string();
        }
        let exp = ((size as f64).ln() / 1024f64.ln()).floor() as usize;
        let exp = exp.min(UNITS.len() - 1);
        let value = size as f64 / 1024f64.powi(exp as i32);
        let rounded = format!("{value:.2}");
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        format!("{} {}", trimmed, UNITS[exp])
    }

    /// Upper-cased agency code, with a dash before a numeric suffix
    /// ("trt13" -> "TRT-13", "tjal" -> "TJAL").
    pub fn agency_code(id: &str) -> String {
        let upper = id.trim().to_uppercase();
        let split = upper
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i);
        match split {
            Some(i) if i > 0 && upper[i..].chars().all(|c| c.is_ascii_digit()) => {
                format!("{}-{}", &upper[..i], &upper[i..])
            }
            _ => upper,
        }
    }

    /// Group digits in threes with `.` as the Brazilian locale does.
    pub fn thousands(n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        out
    }

    /// "R$ 33.689,11"
    pub fn currency(value: f64) -> String {
        let negative = value < 0.0;
        let cents = (value.abs() * 100.0).round() as u64;
        let sign = if negative && cents > 0 { "-" } else { "" };
        format!("{}R$ {},{:02}", sign, thousands(cents / 100), cents % 100)
    }

    /// "R$ 12,34 bilhões"
    pub fn billions(value: f64) -> String {
        format!("R$ {} bilhões", decimal(value / 1e9, 2))
    }

    /// Fixed decimals with a comma separator.
    pub fn decimal(value: f64, places: usize) -> String {
        format!("{value:.places$}").replace('.', ",")
    }

    /// Download limit expressed in thousands of rows ("100 mil").
    pub fn row_limit(limit: u64) -> String {
        format!("{} mil", limit / 1000)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_bytes() {
            assert_eq!(bytes(0), "0 Bytes");
            assert_eq!(bytes(512), "512 Bytes");
            assert_eq!(bytes(1024), "1 KB");
            assert_eq!(bytes(1536), "1.5 KB");
            assert_eq!(bytes(5 * 1024 * 1024 + 123_456), "5.12 MB");
        }

        #[test]
        fn test_agency_code() {
            assert_eq!(agency_code("tjal"), "TJAL");
            assert_eq!(agency_code("trt13"), "TRT-13");
            assert_eq!(agency_code(" mppb "), "MPPB");
            assert_eq!(agency_code("13"), "13");
        }

        #[test]
        fn test_money() {
            assert_eq!(currency(33689.114), "R$ 33.689,11");
            assert_eq!(currency(-5.0), "-R$ 5,00");
            assert_eq!(currency(0.0), "R$ 0,00");
            assert_eq!(billions(12_345_678_901.0), "R$ 12,35 bilhões");
            assert_eq!(thousands(1234567), "1.234.567");
            assert_eq!(thousands(999), "999");
        }

        #[test]
        fn test_months_and_limits() {
            assert_eq!(month_name(3), "Março");
            assert_eq!(month_name(0), "");
            assert_eq!(month_abbreviation(12), "Dez");
            assert_eq!(row_limit(100_000), "100 mil");
        }
    }
}
