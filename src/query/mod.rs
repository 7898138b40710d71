//! Search queries over image records.
//!
//! A query is a conjunction of:
//!   field=value, field<n, field>n,
//!   field<=n, field>=n             - field conditions
//!   tag                            - required user tag (case-insensitive)
//!   "lat,lon lat,lon lat,lon ..."  - geofence polygon

mod ast;
mod error;
mod parser;

pub use ast::*;
pub use error::QueryError;
pub use parser::{parse_condition, parse_polygon};
