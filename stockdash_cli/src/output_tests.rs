use super::*;
use chrono::NaiveDate;
use stockdash_lib::{CompanyInfo, MetadataPolicy, PricePoint};

fn apple_panel() -> CompanyPanel {
    let info = CompanyInfo {
        sector: Some("Technology".into()),
        beta: Some(1.25),
        market_cap: Some(2_500_000_000_000),
        forward_pe: None,
        website: Some("https://www.apple.com".into()),
    };
    CompanyPanel::build(&info, MetadataPolicy::Lenient).unwrap()
}

fn series() -> PriceSeries {
    PriceSeries::from_points([
        PricePoint {
            date: NaiveDate::from_ymd_opt(2023, 1, 4).unwrap(),
            close: 126.36,
        },
        PricePoint {
            date: NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(),
            close: 125.07,
        },
    ])
}

fn csv_string<T: Serialize>(rows: &[T]) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows).unwrap();
    String::from_utf8(buf).unwrap()
}

// -- field rows --

#[test]
fn test_field_rows_cover_panel() {
    let rows = build_field_rows(&apple_panel());
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].label, "🏢 Sector");
    assert_eq!(rows[0].value, "Technology");
    assert_eq!(rows[2].value, "2,500,000,000,000");
    assert_eq!(rows[3].value, "N/A");
}

#[test]
fn test_field_table_has_headers() {
    let table = Table::new(build_field_rows(&apple_panel())).to_string();
    assert!(table.contains("Field"));
    assert!(table.contains("Value"));
    assert!(table.contains("Technology"));
}

#[test]
fn test_field_csv() {
    let csv = csv_string(&build_field_rows(&apple_panel()));
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Field,Value"));
    assert_eq!(lines.next(), Some("🏢 Sector,Technology"));
    assert!(csv.contains("\"2,500,000,000,000\""));
}

// -- price rows --

#[test]
fn test_price_rows_sorted_and_rounded() {
    let rows = build_price_rows(&series());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2023-01-03");
    assert_eq!(rows[0].close, "125.07");
    assert_eq!(rows[1].close, "126.36");
}

#[test]
fn test_price_csv() {
    let csv = csv_string(&build_price_rows(&series()));
    assert_eq!(csv, "Date,Close\n2023-01-03,125.07\n2023-01-04,126.36\n");
}

#[test]
fn test_empty_series_has_no_rows() {
    assert!(build_price_rows(&PriceSeries::default()).is_empty());
}
