//! Type definitions of an AQL AST representation.

use super::sanitize;

/// A complete `FOR .. RETURN` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub for_: For,
    pub search: Option<SearchClause>,
    pub filter: Option<Filter>,
    pub sort: Sort,
    pub limit: Limit,
    pub return_: Return,
}

/// A FOR clause, binding a cursor variable over a collection or view.
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub variable: DocumentVariable,
    pub source: IterationSource,
}

/// What a FOR clause iterates. Views are used for search statements,
/// plain collections for everything else. Either way the name travels
/// as a `@@collection` bind variable, never as statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationSource {
    Collection(CollectionName),
    View(ViewName),
}

/// A database collection name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName(pub String);

/// A search view name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewName(pub String);

/// A cursor variable bound by a FOR clause. Only built through
/// `helpers`, so the name is always an engine-chosen identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentVariable(pub String);

/// A search clause. Fuzzy and numeric terms are placed in a `SEARCH`
/// clause (ranked by the view), exact terms in a plain `FILTER`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchClause {
    pub placement: SearchPlacement,
    pub expression: Expression,
}

/// The keyword a search clause is emitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlacement {
    Search,
    Filter,
}

/// A FILTER clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter(pub Expression);

/// A SORT clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Sort {
    /// No sorting requested.
    None,
    /// Explicit sort keys, in tie-break precedence order.
    Fields(Vec<SortElement>),
    /// Relevance ranking: `SORT BM25(doc) DESC`.
    Relevance(DocumentVariable),
}

/// A single element in a SORT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SortElement {
    pub target: Expression,
    pub direction: SortDirection,
}

/// A direction for a single SORT element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A LIMIT clause. `skip` and `count` are validated integers and are the
/// only non-keyword text ever inlined besides sanitized field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    None,
    SkipAndCount { skip: u64, count: u64 },
}

/// A RETURN clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Return {
    /// Return the whole document.
    Document(DocumentVariable),
    /// Return a projected object.
    Projection(ProjectionObject),
}

/// A projection object literal. Entries keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionObject {
    pub entries: Vec<(FieldName, ProjectionValue)>,
}

/// The value side of one projection entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionValue {
    Expression(Expression),
    Object(ProjectionObject),
}

/// A literal object key in a projection. Always sanitized on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: &str) -> FieldName {
        FieldName(sanitize::sanitize_field_name(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A scalar expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Flat conjunction. Never parenthesized.
    And(Vec<Expression>),
    /// Disjunction. Always printed as one parenthesized group.
    Or(Vec<Expression>),
    /// A binary operation on two scalar expressions.
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// An array membership quantifier, `lhs ANY == rhs` style.
    ArrayComparison {
        left: Box<Expression>,
        operator: ArrayComparisonOperator,
        right: Box<Expression>,
    },
    /// A function call.
    FunctionCall {
        function: Function,
        args: Vec<Expression>,
    },
    /// Count of elements of `source` satisfying `condition`:
    /// `LENGTH(FOR v IN source FILTER condition RETURN 1)`.
    FilteredCount {
        variable: DocumentVariable,
        source: Box<Expression>,
        condition: Box<Expression>,
    },
    /// Attribute access rooted at some expression: `base.a.b`.
    FieldAccess {
        base: Box<Expression>,
        segments: Vec<FieldSegment>,
    },
    /// A cursor variable reference.
    Variable(DocumentVariable),
    /// An irreducible value. Always emitted as a bind variable.
    Value(Value),
    /// An analyzer name from service configuration, printed as a quoted
    /// string literal.
    AnalyzerName(AnalyzerName),
    /// A numeric constant from service configuration (the n-gram
    /// similarity floor). Never client data.
    FloatLiteral(f64),
}

/// A single sanitized segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSegment(String);

impl FieldSegment {
    /// Sanitize a raw, client-supplied property name into a segment.
    pub fn new(raw: &str) -> FieldSegment {
        FieldSegment(sanitize::sanitize_field_name(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An analyzer name, restricted to identifier characters on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalyzerName(String);

impl AnalyzerName {
    pub fn new(raw: &str) -> AnalyzerName {
        AnalyzerName(sanitize::sanitize_field_name(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A binary comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

/// A quantifier operator comparing an array against a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayComparisonOperator {
    /// `ANY ==`: membership.
    AnyEquals,
    /// `NONE ==`: absence.
    NoneEquals,
}

/// A scalar function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Length,
    Contains,
    Lower,
    NgramMatch,
    Analyzer,
}

/// Value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
    Array(Vec<Value>),
    Json(serde_json::Value),
}
