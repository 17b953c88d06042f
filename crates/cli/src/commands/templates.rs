//! Templates command: list the built-in input presets

use crate::output::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use predictor_lib::templates::Template;
use tabled::{settings::Style, Table, Tabled};

/// Row for one template value
#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn run(format: OutputFormat) -> Result<()> {
    let templates = Template::builtin();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&templates)?);
        }
        OutputFormat::Table => {
            for template in &templates {
                println!("{}", template.name().bold());
                let rows: Vec<ValueRow> = template
                    .vector()
                    .iter()
                    .map(|(field, value)| ValueRow {
                        field,
                        value: format!("{:.1}", value),
                    })
                    .collect();
                let table = Table::new(rows).with(Style::rounded()).to_string();
                println!("{}\n", table);
            }
        }
    }

    Ok(())
}
