//! Listing renderers: table, JSON and CSV.

use clap::ValueEnum as _;

use campus_core::prelude::*;

use crate::{
    cli::ListFormat,
    config::AppConfig,
    error::{CliError, CliResult},
    script::Listing,
};

/// `--format` wins; otherwise `output.format` from config.
pub fn resolve_format(flag: Option<ListFormat>, config: &AppConfig) -> CliResult<ListFormat> {
    match flag {
        Some(format) => Ok(format),
        None => ListFormat::from_str(&config.output.format, true).map_err(|e| {
            CliError::ConfigError {
                message: format!("output.format: {e}"),
                source: None,
            }
        }),
    }
}

pub fn render(listing: &Listing, format: ListFormat) -> CliResult<String> {
    match format {
        ListFormat::Table => Ok(table(listing)),
        ListFormat::Json => json(listing).map_err(|e| CliError::InvalidInput {
            message: "listing could not be serialised".into(),
            source: Some(Box::new(e)),
        }),
        ListFormat::Csv => Ok(csv(listing)),
    }
}

fn table(listing: &Listing) -> String {
    let title = match listing.kind() {
        EntityKind::Student => "Students",
        EntityKind::Course => "Courses",
        EntityKind::Trainer => "Trainers",
    };

    let mut out = format!("\n--- {title} in Database ---\n");
    let rows: Vec<String> = match listing {
        Listing::Students(v) => v.iter().map(ToString::to_string).collect(),
        Listing::Courses(v) => v.iter().map(ToString::to_string).collect(),
        Listing::Trainers(v) => v.iter().map(ToString::to_string).collect(),
    };
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

fn json(listing: &Listing) -> serde_json::Result<String> {
    match listing {
        Listing::Students(v) => serde_json::to_string_pretty(v),
        Listing::Courses(v) => serde_json::to_string_pretty(v),
        Listing::Trainers(v) => serde_json::to_string_pretty(v),
    }
}

fn csv(listing: &Listing) -> String {
    let (header, rows): (&str, Vec<[String; 3]>) = match listing {
        Listing::Students(v) => (
            "student_id,name,email",
            v.iter()
                .map(|s| [s.student_id.to_string(), s.name.clone(), s.email.clone()])
                .collect(),
        ),
        Listing::Courses(v) => (
            "course_id,title,trainer_id",
            v.iter()
                .map(|c| [c.course_id.to_string(), c.title.clone(), c.trainer_id.to_string()])
                .collect(),
        ),
        Listing::Trainers(v) => (
            "trainer_id,name,expertise",
            v.iter()
                .map(|t| [t.trainer_id.to_string(), t.name.clone(), t.expertise.clone()])
                .collect(),
        ),
    };

    let mut out = String::from(header);
    out.push('\n');
    for row in rows {
        let fields: Vec<String> = row.iter().map(|f| csv_field(f)).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a separator, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
