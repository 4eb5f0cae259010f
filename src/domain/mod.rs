//! Catalog querying and map clustering live here.

pub mod browse;
pub mod catalog;
pub mod clustering;
pub mod entities;
pub mod filter;
pub mod geo;
pub mod pagination;
pub mod query;
pub mod saved;
pub mod sort;

pub use browse::BrowseState;
pub use catalog::{Catalog, CatalogError};
pub use clustering::{cluster_items, cluster_radius_km, ClusterLayer};
pub use entities::{CatalogItem, Cluster, Condition, Coordinate, ItemId, SortKey};
pub use filter::{filter_items, CriteriaError, FilterCriteria, ValueRange};
pub use geo::{distance_km, km_to_miles, DistanceUnit};
pub use pagination::{paginate, Page, PageCursor};
pub use query::{run_query, QueryResult};
pub use saved::{SavedItemRegistry, ToggleOutcome};
pub use sort::sort_items;
