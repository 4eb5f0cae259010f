//! Filter → sort → paginate, end to end.

use tracing::{debug, info};

use super::entities::CatalogItem;
use super::filter::{filter_items, CriteriaError, FilterCriteria};
use super::pagination::paginate;
use super::sort::sort_items;
use crate::config::EngineConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryResult<'a> {
    pub page: Vec<&'a CatalogItem>,
    pub has_more: bool,
    /// Matches before pagination.
    pub total_matches: usize,
}

impl QueryResult<'_> {
    /// Zero results; the caller decides how to tell the user.
    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }
}

/// Validates `criteria`, then runs the full list pipeline over `items`.
pub fn run_query<'a, I>(
    items: I,
    criteria: &FilterCriteria,
    config: &EngineConfig,
    pages_loaded: usize,
) -> Result<QueryResult<'a>, CriteriaError>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    criteria.validate()?;

    let matched = filter_items(items, criteria);
    let sorted = sort_items(&matched, criteria.sort_key, config.missing_distance);
    let page = paginate(&sorted, config.page_size, pages_loaded);

    if sorted.is_empty() {
        info!(search = %criteria.search_text, "query returned no results");
    } else {
        debug!(
            total = sorted.len(),
            shown = page.items.len(),
            sort = %criteria.sort_key,
            "query complete"
        );
    }

    Ok(QueryResult {
        page: page.items,
        has_more: page.has_more,
        total_matches: sorted.len(),
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::entities::{Condition, SortKey};

    fn listing(id: &str, value: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: format!("Item {id}"),
            description: String::new(),
            category: "Sports".to_string(),
            condition: Condition::New,
            estimated_value: value,
            location: String::new(),
            coordinate: None,
            owner_rating: 5.0,
            distance_from_viewer: None,
            created_at: datetime!(2025-01-01 0:00 UTC),
            views: 0,
            saves: 0,
        }
    }

    #[test]
    fn pipeline_filters_sorts_and_windows() {
        let items: Vec<CatalogItem> = (0..5)
            .map(|n| listing(&n.to_string(), n as f64 * 10.0))
            .collect();
        let config = EngineConfig {
            page_size: 2,
            ..EngineConfig::default()
        };
        let criteria = FilterCriteria::default()
            .with_value_range(10.0, 40.0)
            .sorted_by(SortKey::PriceHigh);

        let result = run_query(&items, &criteria, &config, 1).unwrap();
        let ids: Vec<&str> = result.page.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "3"]);
        assert!(result.has_more);
        assert_eq!(result.total_matches, 4);

        let result = run_query(&items, &criteria, &config, 2).unwrap();
        assert_eq!(result.page.len(), 4);
        assert!(!result.has_more);
    }

    #[test]
    fn invalid_criteria_fail_before_filtering() {
        let items = vec![listing("a", 1.0)];
        let criteria = FilterCriteria::default().with_value_range(5.0, 1.0);
        assert!(matches!(
            run_query(&items, &criteria, &EngineConfig::default(), 1),
            Err(CriteriaError::InvertedRange { .. })
        ));
    }

    #[test]
    fn zero_results_are_not_an_error() {
        let items = vec![listing("a", 1.0)];
        let criteria = FilterCriteria::default().with_search("kayak");
        let result = run_query(&items, &criteria, &EngineConfig::default(), 1).unwrap();
        assert!(result.is_empty());
        assert!(!result.has_more);
        assert_eq!(result.total_matches, 0);
    }
}
