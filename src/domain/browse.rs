//! Caller-owned browsing state: the active query, how many pages are shown and the map zoom.

use super::catalog::Catalog;
use super::clustering::{cluster_items, ClusterLayer};
use super::filter::{CriteriaError, FilterCriteria};
use super::query::{run_query, QueryResult};
use crate::config::EngineConfig;

pub const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct BrowseState {
    pub criteria: FilterCriteria,
    /// Page size comes from the [`EngineConfig`] handed to [`BrowseState::view`].
    pub pages_loaded: usize,
    pub zoom: f64,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            pages_loaded: 1,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Replaces the query and goes back to the first page.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.pages_loaded = 1;
    }

    pub fn load_more(&mut self) {
        self.pages_loaded = self.pages_loaded.saturating_add(1);
    }

    /// Non-positive or non-finite zoom levels are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    /// The list view for the current state.
    pub fn view<'a>(
        &self,
        catalog: &'a Catalog,
        config: &EngineConfig,
    ) -> Result<QueryResult<'a>, CriteriaError> {
        run_query(catalog, &self.criteria, config, self.pages_loaded)
    }

    /// The map layer, restricted to the selected categories.
    pub fn map_layer<'a>(&self, catalog: &'a Catalog, config: &EngineConfig) -> ClusterLayer<'a> {
        cluster_items(
            catalog,
            self.zoom,
            &self.criteria.categories,
            config.cluster_base_radius_km,
        )
    }
}
