//! Query types.

use geo_types::Coord;
use std::fmt;

/// Comparison operator of a field condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equals,         // =
    LessThan,       // <
    GreaterThan,    // >
    LessOrEqual,    // <=
    GreaterOrEqual, // >=
}

impl CompareOp {
    /// Operators in the order they are searched for in an expression.
    /// Two-character operators come first since `>=` also contains `=`.
    pub const PRECEDENCE: [CompareOp; 5] = [
        CompareOp::GreaterOrEqual,
        CompareOp::LessOrEqual,
        CompareOp::GreaterThan,
        CompareOp::LessThan,
        CompareOp::Equals,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equals => "=",
            CompareOp::LessThan => "<",
            CompareOp::GreaterThan => ">",
            CompareOp::LessOrEqual => "<=",
            CompareOp::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single `field <op> value` check against a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCondition {
    pub field: String,
    pub op: CompareOp,
    pub value: String,
}

impl FieldCondition {
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

impl fmt::Display for FieldCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op, self.value)
    }
}

/// All conditions a record must satisfy. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub conditions: Vec<FieldCondition>,
    pub tags: Vec<String>,
    /// Geofence vertices as `(lat, lon)`; at least three when set.
    pub polygon: Option<Vec<Coord<f64>>>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: FieldCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_polygon(mut self, polygon: Vec<Coord<f64>>) -> Self {
        self.polygon = Some(polygon);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.tags.is_empty() && self.polygon.is_none()
    }
}
