//! Command output rendering

use clap::ValueEnum;
use colored::Colorize;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::CliError;

/// Output format of report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Header: value` line per field
    #[default]
    Detail,
    /// Header row followed by a value row
    Table,
    /// JSON object keyed by header
    Json,
}

/// Ordered (header, value) pairs describing one result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    fields: Vec<(String, String)>,
}

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.push((header.into(), value.into()));
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn headers(&self) -> Vec<&str> {
        self.fields.iter().map(|(h, _)| h.as_str()).collect()
    }

    pub fn value(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }
}

impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (header, value) in &self.fields {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

/// Render a row in the requested format
pub fn render(row: &ReportRow, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Detail => Ok(render_detail(row)),
        OutputFormat::Table => Ok(render_table(row)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(row)?),
    }
}

fn render_detail(row: &ReportRow) -> String {
    let width = row
        .fields
        .iter()
        .map(|(h, _)| h.chars().count() + 1)
        .max()
        .unwrap_or(0);

    row.fields
        .iter()
        .map(|(header, value)| {
            let label = format!("{:<width$}", format!("{}:", header), width = width);
            format!("{} {}", label.bold(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(row: &ReportRow) -> String {
    let widths: Vec<usize> = row
        .fields
        .iter()
        .map(|(h, v)| h.chars().count().max(v.chars().count()))
        .collect();

    let header_line = row
        .fields
        .iter()
        .zip(&widths)
        .map(|((h, _), w)| format!("{:<w$}", h, w = *w).bold().to_string())
        .collect::<Vec<_>>()
        .join("  ");
    let value_line = row
        .fields
        .iter()
        .zip(&widths)
        .map(|((_, v), w)| format!("{:<w$}", v, w = *w))
        .collect::<Vec<_>>()
        .join("  ");

    format!("{}\n{}", header_line.trim_end(), value_line.trim_end())
}
