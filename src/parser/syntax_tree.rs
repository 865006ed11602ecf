use std::ops::ControlFlow;

use serde::Serialize;
use sqlparser::ast::{Expr, ObjectName, Query, Statement, TableFactor, Visit, Visitor};

use crate::parser::names::display_relation_name;

/// Deepest nesting of open nodes accepted while translating a parsed query.
///
/// `sqlparser` builds left-deep operator chains (`a OR b OR c ...`) with a
/// loop, so its own recursion limit does not bound them, while its visitor
/// recurses once per expression.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Syntactic construct a [`SyntaxNode`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of a parsed input; its children are the statements.
    Script,
    /// A single SQL statement.
    Statement,
    /// A query body, including subqueries and CTE definitions.
    Query,
    /// An item of a `FROM` clause or join: table, subquery, table function, ...
    TableFactor,
    /// A reference to a named table. Always carries a name.
    Table,
    /// A table-valued function such as `json_each(...)`. Carries the function name.
    TableFunction,
    /// Any expression.
    Expression,
}

/// Node of the syntax tree handed to table extraction.
///
/// `sqlparser` output is translated into this shape once, right after
/// parsing, so traversal only deals with a tag, an optional name and an
/// ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    /// Variant tag.
    pub kind: NodeKind,
    /// Name attribute; set for [`NodeKind::Table`] and [`NodeKind::TableFunction`] nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Child nodes in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a node without name or children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: None,
            children: Vec::new(),
        }
    }

    /// Create a table reference node.
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Table,
            name: Some(name.into()),
            children: Vec::new(),
        }
    }

    /// Replace the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    /// True for table reference nodes.
    pub fn is_table(&self) -> bool {
        self.kind == NodeKind::Table
    }

    /// Translate parsed statements into a tree rooted at a [`NodeKind::Script`] node.
    ///
    /// Fails when the query nests deeper than [`MAX_NESTING_DEPTH`].
    pub fn from_statements(statements: &[Statement]) -> Result<Self, String> {
        let mut builder = TreeBuilder::new();
        for statement in statements {
            if statement.visit(&mut builder).is_break() {
                return Err(format!("query nesting exceeds {MAX_NESTING_DEPTH} levels"));
            }
        }
        Ok(builder.finish())
    }

    /// Depth-first pre-order iterator over this node and all its descendants.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        self.pre_order().count()
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        // Detach descendants first so dropping a deep tree never recurses.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order traversal backed by an explicit stack, so arbitrarily deep trees
/// never grow the call stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Builds a [`SyntaxNode`] tree from `sqlparser` visitor callbacks.
///
/// Every `pre_visit_*` opens a node and the matching `post_visit_*` attaches
/// it to the innermost open parent.
struct TreeBuilder {
    open: Vec<SyntaxNode>,
    /// Set when the table factor being visited calls a table-valued function;
    /// its name is the next relation visited.
    function_call: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            open: vec![SyntaxNode::new(NodeKind::Script)],
            function_call: false,
        }
    }

    fn open(&mut self, node: SyntaxNode) -> ControlFlow<()> {
        if self.open.len() > MAX_NESTING_DEPTH {
            return ControlFlow::Break(());
        }
        self.open.push(node);
        ControlFlow::Continue(())
    }

    fn close(&mut self) -> ControlFlow<()> {
        // The script root stays open until `finish`.
        if self.open.len() > 1 {
            if let Some(node) = self.open.pop() {
                if let Some(parent) = self.open.last_mut() {
                    parent.children.push(node);
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn finish(mut self) -> SyntaxNode {
        while self.open.len() > 1 {
            let _ = self.close();
        }
        self.open
            .pop()
            .unwrap_or_else(|| SyntaxNode::new(NodeKind::Script))
    }
}

impl Visitor for TreeBuilder {
    type Break = ();

    fn pre_visit_statement(&mut self, _statement: &Statement) -> ControlFlow<()> {
        self.open(SyntaxNode::new(NodeKind::Statement))
    }

    fn post_visit_statement(&mut self, _statement: &Statement) -> ControlFlow<()> {
        self.close()
    }

    fn pre_visit_query(&mut self, _query: &Query) -> ControlFlow<()> {
        self.open(SyntaxNode::new(NodeKind::Query))
    }

    fn post_visit_query(&mut self, _query: &Query) -> ControlFlow<()> {
        self.close()
    }

    fn pre_visit_table_factor(&mut self, table_factor: &TableFactor) -> ControlFlow<()> {
        self.function_call = matches!(table_factor, TableFactor::Table { args: Some(_), .. });
        self.open(SyntaxNode::new(NodeKind::TableFactor))
    }

    fn post_visit_table_factor(&mut self, _table_factor: &TableFactor) -> ControlFlow<()> {
        self.close()
    }

    fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<()> {
        let kind = if std::mem::take(&mut self.function_call) {
            NodeKind::TableFunction
        } else {
            NodeKind::Table
        };
        self.open(SyntaxNode {
            kind,
            name: Some(display_relation_name(&relation.to_string())),
            children: Vec::new(),
        })
    }

    fn post_visit_relation(&mut self, _relation: &ObjectName) -> ControlFlow<()> {
        self.close()
    }

    fn pre_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<()> {
        self.open(SyntaxNode::new(NodeKind::Expression))
    }

    fn post_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<()> {
        self.close()
    }
}
