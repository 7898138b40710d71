//! Search image-library metadata by field values, user tags and location.

pub mod app;
pub mod config;
pub mod generate;
pub mod geofence;
pub mod loader;
pub mod query;
pub mod record;
pub mod search;
pub mod sinks;

pub use geofence::{parse_coordinate, point_in_polygon};
pub use query::{CompareOp, FieldCondition, Query, QueryError};
pub use record::ImageRecord;
pub use search::{par_search, search};
