use thiserror::Error;

/// Errors raised while building a query from user input.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Invalid tag expression: {0}")]
    InvalidCondition(String),

    #[error("Invalid polygon '{input}': {reason}")]
    InvalidPolygon { input: String, reason: String },

    #[error("Polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}
