//! Execution plans, the compiler's finished output.

use super::ast;
use super::string::AQL;

/// The translated form of one query request: a statement AST plus the
/// collection it targets. Printing it yields the statement text and the
/// bind variable table handed to the execution collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub collection: String,
    pub query: ast::Statement,
}

impl ExecutionPlan {
    /// Render the statement to text and bind variables.
    pub fn query_aql(&self) -> AQL {
        let mut aql = AQL::new();
        self.query.to_aql(&mut aql);
        aql
    }
}

/// Construct a plan for a single statement.
pub fn simple_exec_plan(collection: String, query: ast::Statement) -> ExecutionPlan {
    ExecutionPlan { collection, query }
}
