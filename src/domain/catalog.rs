//! Immutable catalog snapshot with boundary validation.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use super::entities::{CatalogItem, Coordinate};
use super::geo::{distance_km, DistanceUnit};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
    #[error("item {id}: estimated value must be a non-negative number, got {value}")]
    InvalidValue { id: String, value: f64 },
    #[error("item {id}: owner rating must be within 0..=5, got {rating}")]
    InvalidRating { id: String, rating: f64 },
    #[error("item {id}: coordinate out of range ({lat}, {lng})")]
    InvalidCoordinate { id: String, lat: f64, lng: f64 },
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A loaded set of listings. Every derived view borrows from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Validates item invariants and wraps them as a snapshot.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if let Err(err) = validate_item(item) {
                warn!(id = %item.id, "rejecting catalog: {err}");
                return Err(err);
            }
            if !seen.insert(item.id.as_str()) {
                warn!(id = %item.id, "rejecting catalog: duplicate id");
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        debug!(items = items.len(), "catalog snapshot created");
        Ok(Self { items })
    }

    /// Parses a JSON array of items.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Returns a new snapshot where every item with a coordinate carries its distance
    /// to `viewer`. Items without a coordinate keep whatever distance they had.
    pub fn with_viewer_distances(&self, viewer: Coordinate, unit: DistanceUnit) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if let Some(coordinate) = item.coordinate {
                    item.distance_from_viewer = Some(unit.from_km(distance_km(viewer, coordinate)));
                }
                item
            })
            .collect();
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn validate_item(item: &CatalogItem) -> Result<(), CatalogError> {
    if !(item.estimated_value.is_finite() && item.estimated_value >= 0.0) {
        return Err(CatalogError::InvalidValue {
            id: item.id.clone(),
            value: item.estimated_value,
        });
    }
    if !(0.0..=5.0).contains(&item.owner_rating) {
        return Err(CatalogError::InvalidRating {
            id: item.id.clone(),
            rating: item.owner_rating,
        });
    }
    if let Some(coordinate) = item.coordinate.filter(|c| !c.is_valid()) {
        return Err(CatalogError::InvalidCoordinate {
            id: item.id.clone(),
            lat: coordinate.lat,
            lng: coordinate.lng,
        });
    }
    Ok(())
}
