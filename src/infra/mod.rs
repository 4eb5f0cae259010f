//! Adapters between the engine and the outside world.

pub mod query_params;

pub use query_params::{criteria_from_query, criteria_from_url, QueryParamError};
