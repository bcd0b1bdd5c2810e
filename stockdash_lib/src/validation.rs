use chrono::NaiveDate;

use crate::error::DashboardError;

pub const MAX_SYMBOL_LENGTH: usize = 32;

/// Strip ASCII control characters and surrounding whitespace.
fn strip_controls(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a ticker symbol: strip control chars, trim, uppercase.
///
/// Only emptiness and length are checked; the symbol's shape is left to the
/// provider.
pub fn normalize_symbol(input: &str) -> Result<String, DashboardError> {
    let cleaned = strip_controls(input);
    if cleaned.is_empty() {
        return Err(DashboardError::InvalidInput(
            "symbol is empty".to_string(),
        ));
    }
    if cleaned.len() > MAX_SYMBOL_LENGTH {
        return Err(DashboardError::InvalidInput(format!(
            "symbol exceeds maximum length of {} bytes",
            MAX_SYMBOL_LENGTH
        )));
    }
    Ok(cleaned.to_uppercase())
}

/// Parse an optional `YYYY-MM-DD` date. Blank input is `None`.
pub fn parse_date(field: &str, input: Option<&str>) -> Result<Option<NaiveDate>, DashboardError> {
    let Some(raw) = input.map(strip_controls).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            DashboardError::InvalidInput(format!(
                "{} date '{}' is not a valid YYYY-MM-DD date",
                field, raw
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_uppercase() {
        assert_eq!(normalize_symbol("aapl").unwrap(), "AAPL");
    }

    #[test]
    fn symbol_already_upper() {
        assert_eq!(normalize_symbol("AAPL").unwrap(), "AAPL");
    }

    #[test]
    fn symbol_trimmed() {
        assert_eq!(normalize_symbol("  msft \n").unwrap(), "MSFT");
    }

    #[test]
    fn symbol_with_punctuation_kept() {
        assert_eq!(normalize_symbol("brk-b").unwrap(), "BRK-B");
        assert_eq!(normalize_symbol("^gspc").unwrap(), "^GSPC");
        assert_eq!(normalize_symbol("shop.to").unwrap(), "SHOP.TO");
    }

    #[test]
    fn symbol_control_chars_stripped() {
        assert_eq!(normalize_symbol("aa\u{0007}pl").unwrap(), "AAPL");
    }

    #[test]
    fn symbol_empty() {
        assert!(normalize_symbol("").is_err());
        assert!(normalize_symbol("   ").is_err());
    }

    #[test]
    fn symbol_too_long() {
        assert!(normalize_symbol(&"A".repeat(33)).is_err());
        assert!(normalize_symbol(&"A".repeat(32)).is_ok());
    }

    #[test]
    fn symbol_normalization_idempotent() {
        let once = normalize_symbol(" tsla ").unwrap();
        assert_eq!(normalize_symbol(&once).unwrap(), once);
    }

    #[test]
    fn date_valid() {
        assert_eq!(
            parse_date("start", Some("2023-01-01")).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn date_blank_is_none() {
        assert_eq!(parse_date("start", None).unwrap(), None);
        assert_eq!(parse_date("start", Some("")).unwrap(), None);
        assert_eq!(parse_date("start", Some("  ")).unwrap(), None);
    }

    #[test]
    fn date_invalid() {
        let err = parse_date("end", Some("2023-13-01")).unwrap_err();
        assert!(err.to_string().contains("end date"));
        assert!(parse_date("end", Some("01/02/2023")).is_err());
    }
}
