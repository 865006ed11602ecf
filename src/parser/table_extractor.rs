use serde::Serialize;

use crate::parser::sql_parser::parse_statements;
use crate::parser::syntax_tree::SyntaxNode;
use crate::INVALID_QUERY;

/// Outcome of extracting table references from a SQL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableExtraction {
    /// The query parsed; table names in pre-order, duplicates kept.
    Tables {
        /// Referenced table names.
        tables: Vec<String>,
    },
    /// The query did not parse.
    Invalid {
        /// Parser error message.
        reason: String,
    },
}

impl TableExtraction {
    /// Table names, empty for an invalid query.
    pub fn tables(&self) -> &[String] {
        match self {
            TableExtraction::Tables { tables } => tables,
            TableExtraction::Invalid { .. } => &[],
        }
    }

    /// True when the query failed to parse.
    pub fn is_invalid(&self) -> bool {
        matches!(self, TableExtraction::Invalid { .. })
    }

    /// Boundary form: the table list, or `["Invalid query"]`.
    pub fn into_sentinel_list(self) -> Vec<String> {
        match self {
            TableExtraction::Tables { tables } => tables,
            TableExtraction::Invalid { .. } => vec![INVALID_QUERY.to_string()],
        }
    }
}

/// Collect the names of all table nodes of `tree`, in pre-order.
pub fn collect_table_names(tree: &SyntaxNode) -> Vec<String> {
    tree.pre_order()
        .filter(|node| node.is_table())
        .filter_map(|node| node.name.clone())
        .collect()
}

/// Parse `sql` and extract every referenced table.
///
/// Parse failures are logged and reported as [`TableExtraction::Invalid`].
pub fn extract_tables(sql: &str) -> TableExtraction {
    match parse_statements(sql).and_then(|statements| SyntaxNode::from_statements(&statements)) {
        Ok(tree) => {
            let tables = collect_table_names(&tree);
            tracing::debug!(?tables, nodes = tree.node_count(), "extracted tables");
            TableExtraction::Tables { tables }
        }
        Err(reason) => {
            tracing::warn!(error = %reason, "failed to parse SQL query");
            TableExtraction::Invalid { reason }
        }
    }
}

/// Table names referenced by `sql`, or `["Invalid query"]` when it does not parse.
///
/// Never fails: callers can chain [`crate::compat::resolver::list_compatible_platforms`]
/// directly on the result.
pub fn parse_sql_tables(sql: &str) -> Vec<String> {
    extract_tables(sql).into_sentinel_list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax_tree::NodeKind;

    #[test]
    fn collect_table_names_keeps_duplicates_in_traversal_order() {
        let tree = SyntaxNode::new(NodeKind::Script).with_children(vec![
            SyntaxNode::table("users"),
            SyntaxNode::new(NodeKind::Query).with_children(vec![SyntaxNode::table("processes")]),
            SyntaxNode::table("users"),
        ]);

        assert_eq!(
            collect_table_names(&tree),
            vec!["users", "processes", "users"]
        );
    }

    #[test]
    fn extract_tables_reports_parser_reason() {
        let extraction = extract_tables("SELEC * FORM x");
        assert!(extraction.is_invalid());
        assert!(extraction.tables().is_empty());
        assert!(matches!(
            extraction,
            TableExtraction::Invalid { ref reason } if !reason.is_empty()
        ));
    }

    #[test]
    fn into_sentinel_list_maps_invalid_to_sentinel() {
        let invalid = TableExtraction::Invalid {
            reason: "boom".to_string(),
        };
        assert_eq!(invalid.into_sentinel_list(), vec![INVALID_QUERY]);

        let valid = TableExtraction::Tables {
            tables: vec!["users".to_string()],
        };
        assert_eq!(valid.into_sentinel_list(), vec!["users"]);
    }

    #[test]
    fn extract_tables_accepts_chains_within_the_nesting_limit() {
        let terms = vec!["pid = 1"; 50].join(" OR ");
        assert_eq!(
            parse_sql_tables(&format!("SELECT * FROM processes WHERE {terms}")),
            vec!["processes"]
        );
    }

    #[test]
    fn parse_sql_tables_handles_select_without_tables() {
        assert!(parse_sql_tables("SELECT 1").is_empty());
    }
}
