use anyhow::Result;
use serde::Serialize;
use stockdash_lib::{CompanyPanel, PriceSeries};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    label: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct PriceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
}

fn build_field_rows(panel: &CompanyPanel) -> Vec<FieldRow> {
    panel
        .fields()
        .map(|f| FieldRow {
            label: format!("{} {}", f.icon, f.label),
            value: f.value.clone(),
        })
        .collect()
}

fn build_price_rows(series: &PriceSeries) -> Vec<PriceRow> {
    series
        .points()
        .iter()
        .map(|p| PriceRow {
            date: p.date.to_string(),
            close: format!("{:.2}", p.close),
        })
        .collect()
}

// -- Table output --

pub fn print_panel_table(panel: &CompanyPanel) {
    println!("{}", Table::new(build_field_rows(panel)));
}

pub fn print_prices_table(series: &PriceSeries) {
    println!("{}", Table::new(build_price_rows(series)));
}

// -- CSV output --

fn write_csv<W: std::io::Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_panel_csv(panel: &CompanyPanel) -> Result<()> {
    write_csv(std::io::stdout(), &build_field_rows(panel))
}

pub fn print_prices_csv(series: &PriceSeries) -> Result<()> {
    write_csv(std::io::stdout(), &build_price_rows(series))
}

// -- JSON output --

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
