//! Maps listing-page URL parameters onto [`FilterCriteria`].
//!
//! Recognised keys: `search`, `category` (repeatable), `filter`
//! (`nearby` | `recent` | `popular`) and `sort` (any sort token). Unknown keys are ignored.

use thiserror::Error;
use tracing::debug;
use url::{form_urlencoded, Url};

use crate::domain::{FilterCriteria, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParamError {
    #[error("unknown quick filter: {0}")]
    UnknownFilter(String),
    #[error("unknown sort: {0}")]
    UnknownSort(String),
}

pub fn criteria_from_url(url: &Url) -> Result<FilterCriteria, QueryParamError> {
    criteria_from_query(url.query().unwrap_or_default())
}

/// Parses a raw query string (without the leading `?`).
pub fn criteria_from_query(query: &str) -> Result<FilterCriteria, QueryParamError> {
    let mut criteria = FilterCriteria::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim();
        match &*key {
            "search" => criteria.search_text = value.to_string(),
            "category" if !value.is_empty() && !value.eq_ignore_ascii_case("all") => {
                criteria.categories.insert(value.to_string());
            }
            "filter" => {
                criteria.sort_key = SortKey::from_quick_filter(value)
                    .ok_or_else(|| QueryParamError::UnknownFilter(value.to_string()))?;
            }
            "sort" => {
                criteria.sort_key = value
                    .parse()
                    .map_err(|_| QueryParamError::UnknownSort(value.to_string()))?;
            }
            other => debug!(key = other, "ignoring query parameter"),
        }
    }

    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_category_and_quick_filter() {
        let criteria =
            criteria_from_query("search=red%20bike&category=Sports&filter=nearby").unwrap();
        assert_eq!(criteria.search_text, "red bike");
        assert!(criteria.categories.contains("Sports"));
        assert_eq!(criteria.sort_key, SortKey::Distance);
    }

    #[test]
    fn empty_query_is_default() {
        assert_eq!(criteria_from_query("").unwrap(), FilterCriteria::default());
    }

    #[test]
    fn all_category_means_no_restriction() {
        let criteria = criteria_from_query("category=all&category=Books").unwrap();
        assert_eq!(criteria.categories.len(), 1);
    }

    #[test]
    fn explicit_sort_tokens() {
        let criteria = criteria_from_query("sort=price-high").unwrap();
        assert_eq!(criteria.sort_key, SortKey::PriceHigh);
        assert_eq!(
            criteria_from_query("sort=cheapest"),
            Err(QueryParamError::UnknownSort("cheapest".to_string()))
        );
        assert_eq!(
            criteria_from_query("filter=trending"),
            Err(QueryParamError::UnknownFilter("trending".to_string()))
        );
    }

    #[test]
    fn reads_from_full_url() {
        let url = Url::parse("https://swapboard.example/browse?filter=recent&utm=x").unwrap();
        let criteria = criteria_from_url(&url).unwrap();
        assert_eq!(criteria.sort_key, SortKey::Newest);
    }
}
