//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use predictor_lib::models::{LabelColor, PredictionResult, RiskLabel};
use predictor_lib::present::ResultPresenter;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a table from a list of items
pub fn print_table<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No items found".yellow());
                return;
            }
            let table = Table::new(items).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
    }
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Label text colored by its semantic color
pub fn color_label(label: RiskLabel) -> String {
    let text = label.text();
    match label.color() {
        LabelColor::Green => text.green().bold().to_string(),
        LabelColor::Amber => text.yellow().bold().to_string(),
        LabelColor::Red => text.red().bold().to_string(),
    }
}

/// Format a probability as a percentage
pub fn format_probability(probability: f32) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Row of the per-class probability table
#[derive(Tabled)]
struct ProbabilityRow {
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Probability")]
    probability: String,
}

/// Renders the result as a probability table plus a colored verdict line
pub struct TablePresenter;

impl ResultPresenter for TablePresenter {
    fn present(&self, result: &PredictionResult) -> String {
        let rows: Vec<ProbabilityRow> = RiskLabel::ALL
            .iter()
            .map(|label| ProbabilityRow {
                class: label.text().to_string(),
                probability: format_probability(result.probabilities[label.class_index()]),
            })
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        format!(
            "{}\n\nPrediction: {} (model {})",
            table,
            color_label(result.label),
            result.model_version
        )
    }
}

/// Renders the result as pretty-printed JSON
pub struct JsonPresenter;

impl ResultPresenter for JsonPresenter {
    fn present(&self, result: &PredictionResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
