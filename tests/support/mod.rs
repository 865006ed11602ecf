#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use osquery_sql_compat::catalog::{OsqueryTable, PlatformDictionary, TableCatalog};

pub(crate) fn dictionary(entries: &[(&str, &[&str])]) -> PlatformDictionary {
    let tables = entries
        .iter()
        .map(|(name, platforms)| OsqueryTable::new(*name, platforms.iter().copied()))
        .collect();
    let catalog = TableCatalog::from_tables(tables).expect("test catalog should be valid");
    PlatformDictionary::from_catalog(&catalog)
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
