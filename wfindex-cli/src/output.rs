//! Output formatting for CLI reports.
//!
//! Every report can be written as pretty JSON or as human-readable text.
//! Only the final status line of a validation report is colored.

use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use wfindex::FileRole;

use crate::report::{IndexReport, LanguageEntry, MetadataReport, ValidationReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Write any report as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<T: Serialize + ?Sized>(report: &T, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn write_banner(writer: &mut dyn Write, title: &str) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  {title}")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    Ok(())
}

fn role_label(role: FileRole) -> &'static str {
    match role {
        FileRole::PrimaryDescriptor => "primary",
        FileRole::ImportedDescriptor => "imported",
        FileRole::TestParameterFile => "test-params",
        FileRole::Other => "other",
    }
}

/// Write an index report as plain text, one file per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_index_human(report: &IndexReport<'_>, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_banner(writer, "WORKFLOW FILE INDEX")?;
    writeln!(writer, "  Language:       {}", report.language)?;
    writeln!(writer, "  Initial path:   {}", report.initial_path)?;
    writeln!(writer, "  Files indexed:  {}", report.files.len())?;
    writeln!(
        writer,
        "  Imported:       {}",
        report.count(FileRole::ImportedDescriptor)
    )?;
    writeln!(writer)?;
    writeln!(writer, "{}", "-".repeat(80))?;
    for record in report.files {
        let version = if let Some(v) = record.declared_version() {
            format!(" (version {v})")
        } else {
            String::new()
        };
        writeln!(
            writer,
            "{:<12} {:>9} B  {}{version}",
            role_label(record.role()),
            record.content().len(),
            record.path()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;
    Ok(())
}

/// Write a validation report as plain text.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_validation_human(
    report: &ValidationReport<'_>,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    write_banner(writer, "WORKFLOW STRUCTURE VALIDATION")?;
    writeln!(writer, "  Language:       {}", report.language)?;
    writeln!(writer, "  Initial path:   {}", report.initial_path)?;
    writeln!(writer, "  Files indexed:  {}", report.files_indexed)?;
    writeln!(writer)?;

    for (title, verdict) in [
        ("WORKFLOW SET", &report.workflow_set),
        ("TEST PARAMETER SET", &report.test_parameter_set),
    ] {
        if verdict.messages.is_empty() {
            continue;
        }
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  {title}")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for (path, message) in &verdict.messages {
            writeln!(writer, "{path}: {message}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.valid {
        writeln!(
            writer,
            "{}",
            format!("\u{2713} {} is a valid workflow", report.initial_path).green()
        )?;
    } else {
        writeln!(
            writer,
            "{}",
            format!("\u{2717} {} is not a valid workflow", report.initial_path).red()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;
    Ok(())
}

/// Write a metadata report as plain text.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_metadata_human(
    report: &MetadataReport<'_>,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(writer, "Language:     {}", report.language)?;
    writeln!(writer, "Initial path: {}", report.initial_path)?;
    writeln!(
        writer,
        "Author:       {}",
        report.metadata.author.as_deref().unwrap_or("-")
    )?;
    writeln!(
        writer,
        "Description:  {}",
        report.metadata.description.as_deref().unwrap_or("-")
    )?;
    Ok(())
}

/// Write the enabled languages, one per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_languages_human(
    languages: &[LanguageEntry<'_>],
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    for language in languages {
        writeln!(writer, "{:<6} {}", language.short_name, language.long_name)?;
    }
    Ok(())
}
