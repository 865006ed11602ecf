use std::fmt::Write;

use crate::compat::analysis::QueryReport;
use crate::compat::resolver::Compatibility;
use crate::error::Result;

/// Build a markdown report with a per-table support table and the overall verdict.
pub fn build_report(title: &str, report: &QueryReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "# {title}")?;
    writeln!(out)?;

    if report.extraction.is_invalid() {
        writeln!(out, "The query could not be parsed.")?;
        return Ok(out);
    }

    writeln!(out, "## Tables")?;
    writeln!(out)?;
    if report.tables.is_empty() {
        writeln!(out, "The query does not reference any table.")?;
    } else {
        writeln!(out, "| Table | Platforms |")?;
        writeln!(out, "|-------|-----------|")?;
        for table in &report.tables {
            let platforms = match &table.platforms {
                Some(platforms) => platforms.join(", "),
                None => "unknown table".to_string(),
            };
            writeln!(out, "| {} | {} |", table.name, platforms)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Compatibility")?;
    writeln!(out)?;
    match &report.compatibility {
        Compatibility::Platforms(platforms) => {
            writeln!(out, "Runs on: {}", platforms.join(", "))?;
        }
        Compatibility::NoCommonPlatform => {
            writeln!(out, "No platform supports every referenced table.")?;
        }
        Compatibility::InvalidQuery => {
            writeln!(out, "The query could not be parsed.")?;
        }
    }

    let unknown = report.unknown_tables();
    if !unknown.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unknown tables: {}", unknown.join(", "))?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlatformDictionary;
    use crate::compat::analysis::analyze_query;

    #[test]
    fn build_report_short_circuits_invalid_queries() {
        let report = analyze_query("SELEC * FORM x", PlatformDictionary::builtin());
        let markdown = build_report("q", &report).unwrap();
        assert_eq!(markdown, "# q\n\nThe query could not be parsed.\n");
    }

    #[test]
    fn build_report_flags_unknown_tables() {
        let report = analyze_query("SELECT * FROM users, mystery", PlatformDictionary::builtin());
        let markdown = build_report("q", &report).unwrap();
        assert!(markdown.contains("| mystery | unknown table |"));
        assert!(markdown.contains("No platform supports every referenced table."));
        assert!(markdown.ends_with("Unknown tables: mystery\n"));
    }

    #[test]
    fn build_report_mentions_queries_without_tables() {
        let report = analyze_query("SELECT 1", PlatformDictionary::builtin());
        let markdown = build_report("q", &report).unwrap();
        assert!(markdown.contains("The query does not reference any table."));
    }
}
