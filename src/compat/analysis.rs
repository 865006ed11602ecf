use serde::Serialize;

use crate::catalog::PlatformDictionary;
use crate::compat::resolver::{resolve_extraction, Compatibility};
use crate::parser::table_extractor::{extract_tables, TableExtraction};

/// Platform support of one referenced table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSupport {
    /// Table name as written in the query.
    pub name: String,
    /// Supported platforms, `None` when the table is unknown.
    pub platforms: Option<Vec<String>>,
}

impl TableSupport {
    /// True when the table was found in the dictionary.
    pub fn is_known(&self) -> bool {
        self.platforms.is_some()
    }
}

/// Full analysis of one SQL query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    /// Table extraction outcome.
    pub extraction: TableExtraction,
    /// Per-table platform support, one entry per distinct table in first-seen order.
    pub tables: Vec<TableSupport>,
    /// Platforms the whole query can run on.
    pub compatibility: Compatibility,
}

impl QueryReport {
    /// Referenced tables missing from the dictionary.
    pub fn unknown_tables(&self) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|table| !table.is_known())
            .map(|table| table.name.as_str())
            .collect()
    }
}

/// Extract the tables of `sql` and resolve their platform support.
pub fn analyze_query(sql: &str, dictionary: &PlatformDictionary) -> QueryReport {
    let extraction = extract_tables(sql);
    let compatibility = resolve_extraction(&extraction, dictionary);

    let mut tables: Vec<TableSupport> = Vec::new();
    for name in extraction.tables() {
        if tables.iter().any(|table| &table.name == name) {
            continue;
        }
        tables.push(TableSupport {
            name: name.clone(),
            platforms: dictionary
                .platforms_for(name)
                .map(|platforms| platforms.iter().cloned().collect()),
        });
    }

    QueryReport {
        extraction,
        tables,
        compatibility,
    }
}
