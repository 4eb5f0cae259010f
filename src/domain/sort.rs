use std::cmp::Ordering;

use super::entities::{CatalogItem, SortKey};
use crate::config::MissingDistance;

/// Returns `items` ordered by `key`. Equal keys keep their input order.
pub fn sort_items<'a>(
    items: &[&'a CatalogItem],
    key: SortKey,
    missing_distance: MissingDistance,
) -> Vec<&'a CatalogItem> {
    let mut sorted = items.to_vec();
    // `sort_by` is stable, which pagination relies on.
    sorted.sort_by(|a, b| compare(a, b, key, missing_distance));
    sorted
}

fn compare(a: &CatalogItem, b: &CatalogItem, key: SortKey, missing: MissingDistance) -> Ordering {
    match key {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::Popular => b.views.cmp(&a.views),
        SortKey::PriceLow => a.estimated_value.total_cmp(&b.estimated_value),
        SortKey::PriceHigh => b.estimated_value.total_cmp(&a.estimated_value),
        SortKey::Distance => match missing {
            MissingDistance::AsZero => {
                let a_d = a.distance_from_viewer.unwrap_or(0.0);
                let b_d = b.distance_from_viewer.unwrap_or(0.0);
                a_d.total_cmp(&b_d)
            }
            MissingDistance::Last => {
                let a_d = a.distance_from_viewer.unwrap_or(f64::INFINITY);
                let b_d = b.distance_from_viewer.unwrap_or(f64::INFINITY);
                a_d.total_cmp(&b_d)
            }
        },
    }
}
