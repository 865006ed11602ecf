use sqlparser::ast::Statement;
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

/// Parse an osquery SQL string into `sqlparser` statements.
///
/// osquery runs queries through SQLite, so the SQLite dialect is used.
pub fn parse_statements(sql: &str) -> Result<Vec<Statement>, String> {
    Parser::parse_sql(&SQLiteDialect {}, sql).map_err(|e| e.to_string())
}
