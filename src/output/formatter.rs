use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::compat::analysis::QueryReport;
use crate::error::Result;
use crate::output::report;

/// Output format of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `tables:` and `platforms:` lines using the sentinel strings.
    #[default]
    Text,
    /// Pretty-printed JSON of the full report; an array when there are several.
    Json,
    /// Markdown report.
    Markdown,
}

#[derive(Serialize)]
struct SourcedReport<'a> {
    source: &'a str,
    #[serde(flatten)]
    report: &'a QueryReport,
}

/// Render the report of the query read from `source`.
pub fn render(source: &str, report: &QueryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&SourcedReport { source, report })?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Markdown => report::build_report(source, report),
    }
}

/// Render the reports of several sources as one document.
///
/// A single report renders exactly like [`render`]. With several, text
/// output prefixes each report with a `[source]` line, JSON output is one
/// array of reports and markdown reports follow each other.
pub fn render_all(reports: &[(String, QueryReport)], format: OutputFormat) -> Result<String> {
    if let [(source, report)] = reports {
        return render(source, report, format);
    }

    match format {
        OutputFormat::Json => {
            let sourced: Vec<SourcedReport<'_>> = reports
                .iter()
                .map(|(source, report)| SourcedReport { source, report })
                .collect();
            let mut json = serde_json::to_string_pretty(&sourced)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (source, report) in reports {
                writeln!(out, "[{source}]")?;
                out.push_str(&render_text(report)?);
            }
            Ok(out)
        }
        OutputFormat::Markdown => {
            let mut out = String::new();
            for (source, report) in reports {
                out.push_str(&report::build_report(source, report)?);
            }
            Ok(out)
        }
    }
}

fn render_text(report: &QueryReport) -> Result<String> {
    let tables = report.extraction.clone().into_sentinel_list();
    let platforms = report.compatibility.clone().into_sentinel_list();

    let mut out = String::new();
    if tables.is_empty() {
        writeln!(out, "tables:")?;
    } else {
        writeln!(out, "tables: {}", tables.join(", "))?;
    }
    writeln!(out, "platforms: {}", platforms.join(", "))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlatformDictionary;
    use crate::compat::analysis::analyze_query;

    #[test]
    fn text_uses_sentinels_for_invalid_queries() {
        let report = analyze_query("SELEC * FORM x", PlatformDictionary::builtin());
        let text = render("stdin", &report, OutputFormat::Text).unwrap();
        assert_eq!(text, "tables: Invalid query\nplatforms: Invalid query\n");
    }

    #[test]
    fn text_leaves_table_line_empty_without_tables() {
        let report = analyze_query("SELECT 1", PlatformDictionary::builtin());
        let text = render("stdin", &report, OutputFormat::Text).unwrap();
        assert_eq!(text, "tables:\nplatforms: None\n");
    }

    #[test]
    fn json_includes_source_and_flattened_report() {
        let report = analyze_query("SELECT * FROM users", PlatformDictionary::builtin());
        let json = render("users.sql", &report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "users.sql");
        assert_eq!(value["extraction"]["status"], "tables");
        assert_eq!(value["extraction"]["tables"][0], "users");
        assert_eq!(value["compatibility"]["status"], "platforms");
    }

    fn reports(sources: &[(&str, &str)]) -> Vec<(String, QueryReport)> {
        sources
            .iter()
            .map(|(source, sql)| {
                (
                    source.to_string(),
                    analyze_query(sql, PlatformDictionary::builtin()),
                )
            })
            .collect()
    }

    #[test]
    fn render_all_of_one_report_matches_render() {
        let many = reports(&[("a.sql", "SELECT * FROM users")]);
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(
                render_all(&many, format).unwrap(),
                render("a.sql", &many[0].1, format).unwrap()
            );
        }
    }

    #[test]
    fn render_all_emits_one_json_array_for_several_reports() {
        let many = reports(&[("a.sql", "SELECT * FROM users"), ("b.sql", "SELEC")]);
        let json = render_all(&many, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value.as_array().expect("several reports render as an array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["source"], "a.sql");
        assert_eq!(items[1]["source"], "b.sql");
        assert_eq!(items[1]["compatibility"]["status"], "invalid_query");
    }

    #[test]
    fn render_all_labels_text_reports_with_their_source() {
        let many = reports(&[("a.sql", "SELECT * FROM programs"), ("b.sql", "SELECT 1")]);
        assert_eq!(
            render_all(&many, OutputFormat::Text).unwrap(),
            "[a.sql]\ntables: programs\nplatforms: windows\n[b.sql]\ntables:\nplatforms: None\n"
        );
    }
}
