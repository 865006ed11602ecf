//! CLI entry point for `osquery-sql-compat`.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use osquery_sql_compat::catalog::{PlatformDictionary, TableCatalog};
use osquery_sql_compat::compat::analysis::{analyze_query, QueryReport};
use osquery_sql_compat::output::formatter::{self, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "osquery-sql-compat",
    about = "List the tables an osquery SQL query reads and the platforms it can run on"
)]
struct Cli {
    /// SQL files, one query per file (reads stdin when empty)
    #[arg(conflicts_with = "query")]
    input: Vec<PathBuf>,

    /// SQL query given inline
    #[arg(long, short)]
    query: Option<String>,

    /// JSON table catalog replacing the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded;
    let dictionary = match &cli.catalog {
        Some(path) => match TableCatalog::load(path) {
            Ok(catalog) => {
                tracing::debug!(tables = catalog.len(), path = %path.display(), "loaded catalog");
                loaded = PlatformDictionary::from_catalog(&catalog);
                &loaded
            }
            Err(e) => {
                eprintln!("Error loading catalog {}: {e}", path.display());
                process::exit(2);
            }
        },
        None => PlatformDictionary::builtin(),
    };

    // Collect (source, sql) pairs
    let mut queries: Vec<(String, String)> = Vec::new();
    if let Some(query) = &cli.query {
        queries.push(("query".to_string(), query.clone()));
    } else if cli.input.is_empty() {
        let mut sql = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut sql) {
            eprintln!("Error reading stdin: {e}");
            process::exit(2);
        }
        queries.push(("stdin".to_string(), sql));
    } else {
        for path in &cli.input {
            match std::fs::read_to_string(path) {
                Ok(sql) => queries.push((path.display().to_string(), sql)),
                Err(e) => {
                    eprintln!("Error reading {}: {e}", path.display());
                    process::exit(2);
                }
            }
        }
    }

    let mut reports: Vec<(String, QueryReport)> = Vec::with_capacity(queries.len());
    for (source, sql) in queries {
        let report = analyze_query(&sql, dictionary);

        if cli.verbose {
            let unknown = report.unknown_tables();
            if !unknown.is_empty() {
                eprintln!("{source}: unknown tables: {}", unknown.join(", "));
            }
        }
        reports.push((source, report));
    }

    match formatter::render_all(&reports, cli.format) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("Error rendering report: {e}");
            process::exit(2);
        }
    }

    // Exit code based on compatibility
    if reports
        .iter()
        .any(|(_, report)| !report.compatibility.is_compatible())
    {
        process::exit(1);
    }
}
