/// Identifier normalization helpers (quoted identifiers, schema-qualified names).
pub mod names;
/// Thin wrapper around `sqlparser` with the SQLite dialect.
pub mod sql_parser;
/// Tagged node model built from the `sqlparser` AST and its pre-order traversal.
pub mod syntax_tree;
/// Table reference extraction from SQL strings.
pub mod table_extractor;
