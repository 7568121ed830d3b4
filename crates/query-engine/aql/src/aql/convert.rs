//! Convert an AQL AST to a low-level AQL string.

use super::ast::*;
use super::string::AQL;

impl Statement {
    pub fn to_aql(&self, aql: &mut AQL) {
        self.for_.to_aql(aql);

        if let Some(search) = &self.search {
            aql.append_syntax(" ");
            search.to_aql(aql);
        }

        if let Some(filter) = &self.filter {
            aql.append_syntax(" ");
            filter.to_aql(aql);
        }

        self.sort.to_aql(aql);

        self.limit.to_aql(aql);

        aql.append_syntax(" ");
        self.return_.to_aql(aql);
    }
}

impl For {
    pub fn to_aql(&self, aql: &mut AQL) {
        aql.append_syntax("FOR ");
        self.variable.to_aql(aql);
        aql.append_syntax(" IN ");
        match &self.source {
            IterationSource::Collection(CollectionName(name))
            | IterationSource::View(ViewName(name)) => {
                aql.append_collection_bind(name);
            }
        }
    }
}

impl DocumentVariable {
    pub fn to_aql(&self, aql: &mut AQL) {
        let DocumentVariable(name) = self;
        aql.append_syntax(name);
    }
}

impl SearchClause {
    pub fn to_aql(&self, aql: &mut AQL) {
        match self.placement {
            SearchPlacement::Search => aql.append_syntax("SEARCH "),
            SearchPlacement::Filter => aql.append_syntax("FILTER "),
        }
        self.expression.to_aql(aql);
    }
}

impl Filter {
    pub fn to_aql(&self, aql: &mut AQL) {
        let Filter(expression) = self;
        aql.append_syntax("FILTER ");
        expression.to_aql(aql);
    }
}

impl Sort {
    pub fn to_aql(&self, aql: &mut AQL) {
        match self {
            Sort::None => {}
            Sort::Fields(elements) => {
                if !elements.is_empty() {
                    aql.append_syntax(" SORT ");
                    for (index, element) in elements.iter().enumerate() {
                        element.to_aql(aql);
                        if index < (elements.len() - 1) {
                            aql.append_syntax(", ");
                        }
                    }
                }
            }
            Sort::Relevance(variable) => {
                aql.append_syntax(" SORT BM25(");
                variable.to_aql(aql);
                aql.append_syntax(") DESC");
            }
        }
    }
}

impl SortElement {
    pub fn to_aql(&self, aql: &mut AQL) {
        self.target.to_aql(aql);
        match self.direction {
            SortDirection::Asc => aql.append_syntax(" ASC"),
            SortDirection::Desc => aql.append_syntax(" DESC"),
        }
    }
}

impl Limit {
    pub fn to_aql(&self, aql: &mut AQL) {
        match self {
            Limit::None => {}
            Limit::SkipAndCount { skip, count } => {
                aql.append_syntax(&format!(" LIMIT {skip}, {count}"));
            }
        }
    }
}

impl Return {
    pub fn to_aql(&self, aql: &mut AQL) {
        aql.append_syntax("RETURN ");
        match self {
            Return::Document(variable) => variable.to_aql(aql),
            Return::Projection(object) => object.to_aql(aql),
        }
    }
}

impl ProjectionObject {
    pub fn to_aql(&self, aql: &mut AQL) {
        aql.append_syntax("{ ");
        for (index, (name, value)) in self.entries.iter().enumerate() {
            aql.append_syntax("\"");
            aql.append_syntax(name.as_str());
            aql.append_syntax("\": ");
            match value {
                ProjectionValue::Expression(expression) => expression.to_aql(aql),
                ProjectionValue::Object(object) => object.to_aql(aql),
            }
            if index < (self.entries.len() - 1) {
                aql.append_syntax(", ");
            }
        }
        aql.append_syntax(" }");
    }
}

impl Expression {
    pub fn to_aql(&self, aql: &mut AQL) {
        match self {
            Expression::And(expressions) => {
                for (index, expression) in expressions.iter().enumerate() {
                    expression.to_aql(aql);
                    if index < (expressions.len() - 1) {
                        aql.append_syntax(" AND ");
                    }
                }
            }
            Expression::Or(expressions) => {
                aql.append_syntax("(");
                for (index, expression) in expressions.iter().enumerate() {
                    expression.to_aql(aql);
                    if index < (expressions.len() - 1) {
                        aql.append_syntax(" OR ");
                    }
                }
                aql.append_syntax(")");
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_aql(aql);
                operator.to_aql(aql);
                right.to_aql(aql);
            }
            Expression::ArrayComparison {
                left,
                operator,
                right,
            } => {
                left.to_aql(aql);
                operator.to_aql(aql);
                right.to_aql(aql);
            }
            Expression::FunctionCall { function, args } => {
                function.to_aql(aql);
                aql.append_syntax("(");
                for (index, arg) in args.iter().enumerate() {
                    arg.to_aql(aql);
                    if index < (args.len() - 1) {
                        aql.append_syntax(", ");
                    }
                }
                aql.append_syntax(")");
            }
            Expression::FilteredCount {
                variable,
                source,
                condition,
            } => {
                aql.append_syntax("LENGTH(FOR ");
                variable.to_aql(aql);
                aql.append_syntax(" IN ");
                source.to_aql(aql);
                aql.append_syntax(" FILTER ");
                condition.to_aql(aql);
                aql.append_syntax(" RETURN 1)");
            }
            Expression::FieldAccess { base, segments } => {
                base.to_aql(aql);
                for segment in segments {
                    aql.append_syntax(".");
                    aql.append_identifier(segment);
                }
            }
            Expression::Variable(variable) => variable.to_aql(aql),
            Expression::Value(value) => aql.append_bind_var(value.to_json()),
            Expression::AnalyzerName(name) => {
                aql.append_syntax("\"");
                aql.append_syntax(name.as_str());
                aql.append_syntax("\"");
            }
            Expression::FloatLiteral(f) => {
                aql.append_syntax(&format!("{f}"));
            }
        }
    }
}

impl BinaryOperator {
    pub fn to_aql(&self, aql: &mut AQL) {
        match self {
            BinaryOperator::Equals => aql.append_syntax(" == "),
            BinaryOperator::NotEquals => aql.append_syntax(" != "),
            BinaryOperator::LessThan => aql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => aql.append_syntax(" <= "),
            BinaryOperator::GreaterThan => aql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => aql.append_syntax(" >= "),
        }
    }
}

impl ArrayComparisonOperator {
    pub fn to_aql(&self, aql: &mut AQL) {
        match self {
            ArrayComparisonOperator::AnyEquals => aql.append_syntax(" ANY == "),
            ArrayComparisonOperator::NoneEquals => aql.append_syntax(" NONE == "),
        }
    }
}

impl Function {
    pub fn to_aql(&self, aql: &mut AQL) {
        match self {
            Function::Length => aql.append_syntax("LENGTH"),
            Function::Contains => aql.append_syntax("CONTAINS"),
            Function::Lower => aql.append_syntax("LOWER"),
            Function::NgramMatch => aql.append_syntax("NGRAM_MATCH"),
            Function::Analyzer => aql.append_syntax("ANALYZER"),
        }
    }
}

impl Value {
    /// The JSON form shipped in the bind table.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Value::from(*f),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Null => serde_json::Value::Null,
            Value::Array(values) => {
                serde_json::Value::Array(values.iter().map(Value::to_json).collect())
            }
            Value::Json(value) => value.clone(),
        }
    }
}
