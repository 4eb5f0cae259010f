//! Faceted filtering over catalog items.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use super::entities::{CatalogItem, Condition, SortKey};

/// Inclusive bounds on `estimated_value`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    /// `INFINITY` when unbounded; JSON carries that as `null`.
    #[serde(default = "unbounded_max", deserialize_with = "deserialize_max")]
    pub max: f64,
}

fn unbounded_max() -> f64 {
    f64::INFINITY
}

fn deserialize_max<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl ValueRange {
    pub const UNBOUNDED: ValueRange = ValueRange {
        min: 0.0,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// A query over the catalog. Empty sets mean "no restriction".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_text: String,
    pub categories: HashSet<String>,
    pub value_range: ValueRange,
    pub conditions: HashSet<Condition>,
    /// An item passes when its rating meets any one of these.
    pub min_rating_thresholds: Vec<f64>,
    pub max_distance: Option<f64>,
    /// Disables the distance predicate entirely.
    pub include_worldwide: bool,
    pub sort_key: SortKey,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("value range is inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("value range bounds must be numbers")]
    NonNumericRange,
    #[error("max distance must be a non-negative number, got {0}")]
    InvalidDistance(f64),
    #[error("rating threshold must be within 0..=5, got {0}")]
    InvalidRatingThreshold(f64),
}

impl FilterCriteria {
    /// Boundary check run before the pipeline; the predicates assume it passed.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        let ValueRange { min, max } = self.value_range;
        if min.is_nan() || max.is_nan() {
            return Err(CriteriaError::NonNumericRange);
        }
        if min > max {
            return Err(CriteriaError::InvertedRange { min, max });
        }
        if let Some(distance) = self.max_distance {
            if !(distance.is_finite() && distance >= 0.0) {
                return Err(CriteriaError::InvalidDistance(distance));
            }
        }
        if let Some(&bad) = self
            .min_rating_thresholds
            .iter()
            .find(|t| !(0.0..=5.0).contains(*t))
        {
            return Err(CriteriaError::InvalidRatingThreshold(bad));
        }
        Ok(())
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_value_range(mut self, min: f64, max: f64) -> Self {
        self.value_range = ValueRange::new(min, max);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.insert(condition);
        self
    }

    pub fn with_min_rating(mut self, threshold: f64) -> Self {
        self.min_rating_thresholds.push(threshold);
        self
    }

    pub fn with_max_distance(mut self, distance: f64) -> Self {
        self.max_distance = Some(distance);
        self
    }

    pub fn worldwide(mut self, include: bool) -> Self {
        self.include_worldwide = include;
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// True when every predicate holds for `item`.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        matches_search(item, &self.search_text)
            && matches_category(item, &self.categories)
            && self.value_range.contains(item.estimated_value)
            && matches_condition(item, &self.conditions)
            && matches_any_rating(item, &self.min_rating_thresholds)
            && matches_distance(item, self.max_distance, self.include_worldwide)
    }
}

/// Case-insensitive substring match on title, description or category.
pub fn matches_search(item: &CatalogItem, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    [&item.title, &item.description, &item.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_category(item: &CatalogItem, categories: &HashSet<String>) -> bool {
    categories.is_empty() || categories.contains(&item.category)
}

pub fn matches_condition(item: &CatalogItem, conditions: &HashSet<Condition>) -> bool {
    conditions.is_empty() || conditions.contains(&item.condition)
}

/// Disjunction: "4+" and "3+" both ticked admits anything rated 3 or above.
pub fn matches_any_rating(item: &CatalogItem, thresholds: &[f64]) -> bool {
    thresholds.is_empty() || thresholds.iter().any(|&t| item.owner_rating >= t)
}

/// Items without a distance fail whenever the predicate is active.
pub fn matches_distance(item: &CatalogItem, max_distance: Option<f64>, worldwide: bool) -> bool {
    if worldwide {
        return true;
    }
    match max_distance {
        None => true,
        Some(max) => item
            .distance_from_viewer
            .map(|distance| distance <= max)
            .unwrap_or(false),
    }
}

/// Keeps matching items, preserving input order.
pub fn filter_items<'a, I>(items: I, criteria: &FilterCriteria) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let matched: Vec<&CatalogItem> = items
        .into_iter()
        .filter(|item| criteria.matches(item))
        .collect();
    debug!(matched = matched.len(), "filtered catalog");
    matched
}
