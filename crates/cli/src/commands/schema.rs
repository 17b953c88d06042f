//! Schema command: show the input form fields

use crate::output::{print_table, OutputFormat};
use anyhow::Result;
use predictor_lib::models::FeatureVector;
use predictor_lib::schema::FIELD_NAMES;
use serde::Serialize;
use tabled::Tabled;

/// Row for the schema table
#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Default")]
    default: String,
}

pub fn run(format: OutputFormat) -> Result<()> {
    let defaults = FeatureVector::zeroed();
    let rows: Vec<FieldRow> = FIELD_NAMES
        .iter()
        .enumerate()
        .map(|(index, &field)| FieldRow {
            position: index + 1,
            field,
            default: format!("{:.1}", defaults.get(field).unwrap_or(0.0)),
        })
        .collect();

    print_table(&rows, format);
    Ok(())
}
