//! Greedy proximity clustering for the map layer.
//!
//! The pass is order-sensitive: different orderings of the same items can yield
//! different cluster shapes. What holds for every ordering is that each category in
//! the input keeps at least one standalone pin.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::entities::{CatalogItem, Cluster, Coordinate};
use super::geo::distance_km;

/// Output of one clustering pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterLayer<'a> {
    pub clusters: Vec<Cluster>,
    /// Items rendered as individual markers, in input order.
    pub visible_pins: Vec<&'a CatalogItem>,
}

impl ClusterLayer<'_> {
    pub fn marker_count(&self) -> usize {
        self.clusters.len() + self.visible_pins.len()
    }
}

/// Cluster radius in kilometres for a zoom level.
pub fn cluster_radius_km(base_radius_km: f64, zoom: f64) -> f64 {
    base_radius_km / zoom
}

/// Groups placeable items into clusters and standalone pins.
///
/// `active_categories` restricts the input; an empty set keeps every category.
/// Items without a coordinate are skipped. `zoom` must be positive.
pub fn cluster_items<'a, I>(
    items: I,
    zoom: f64,
    active_categories: &HashSet<String>,
    base_radius_km: f64,
) -> ClusterLayer<'a>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let placed: Vec<(&CatalogItem, Coordinate)> = items
        .into_iter()
        .filter(|item| active_categories.is_empty() || active_categories.contains(&item.category))
        .filter_map(|item| item.coordinate.map(|coordinate| (item, coordinate)))
        .collect();

    let radius = cluster_radius_km(base_radius_km, zoom);
    let representatives = category_representatives(&placed);

    let mut processed = vec![false; placed.len()];
    let mut clustered = vec![false; placed.len()];
    let mut clusters = Vec::new();

    for i in 0..placed.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;
        let (seed, seed_at) = placed[i];
        let mut members = vec![i];

        for j in (i + 1)..placed.len() {
            if processed[j] || representatives.contains(&j) {
                continue;
            }
            if distance_km(seed_at, placed[j].1) < radius {
                processed[j] = true;
                members.push(j);
            }
        }

        if members.len() >= 2 {
            for &member in &members {
                clustered[member] = true;
            }
            clusters.push(Cluster {
                centroid: centroid(members.iter().map(|&m| placed[m].1)),
                member_ids: members.iter().map(|&m| placed[m].0.id.clone()).collect(),
                representative_category: seed.category.clone(),
            });
        }
    }

    let visible_pins: Vec<&CatalogItem> = placed
        .iter()
        .enumerate()
        .filter(|(index, _)| !clustered[*index] || representatives.contains(index))
        .map(|(_, (item, _))| *item)
        .collect();

    debug!(
        placed = placed.len(),
        radius_km = radius,
        clusters = clusters.len(),
        pins = visible_pins.len(),
        "clustered map items"
    );

    ClusterLayer {
        clusters,
        visible_pins,
    }
}

/// Index of the first item of each category.
fn category_representatives(placed: &[(&CatalogItem, Coordinate)]) -> HashSet<usize> {
    let mut first_by_category: HashMap<&str, usize> = HashMap::new();
    for (index, (item, _)) in placed.iter().enumerate() {
        first_by_category.entry(item.category.as_str()).or_insert(index);
    }
    first_by_category.into_values().collect()
}

fn centroid(points: impl Iterator<Item = Coordinate>) -> Coordinate {
    let (lat, lng, count) = points.fold((0.0, 0.0, 0usize), |(lat, lng, count), p| {
        (lat + p.lat, lng + p.lng, count + 1)
    });
    if count == 0 {
        return Coordinate::new(0.0, 0.0);
    }
    Coordinate::new(lat / count as f64, lng / count as f64)
}
