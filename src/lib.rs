//! Catalog query and map clustering engine for a peer-to-peer trading board.
//!
//! Everything operates on an in-memory [`Catalog`] snapshot: listings are filtered,
//! sorted and windowed for the list view, or grouped into clusters for the map.

pub mod config;
pub mod domain;
pub mod infra;
pub mod util;

pub use config::{ConfigError, EngineConfig, MissingDistance};
pub use domain::{
    cluster_items, filter_items, paginate, run_query, sort_items, BrowseState, Catalog,
    CatalogError, CatalogItem, Cluster, ClusterLayer, Condition, Coordinate, CriteriaError,
    FilterCriteria, SavedItemRegistry, SortKey,
};
