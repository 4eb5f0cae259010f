use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifier for catalog listings.
pub type ItemId = String;

/// A point in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and within lat/lng ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Physical condition of a listed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like New",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown condition: {0}")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|condition| condition.label().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_ascii_lowercase().as_str() {
                "like-new" | "like_new" | "likenew" => Some(Self::LikeNew),
                _ => None,
            })
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// A tradable listing. Constructed by the catalog loader and never mutated by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub condition: Condition,
    pub estimated_value: f64,
    /// Free-text place label, e.g. "Brooklyn, NY".
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub owner_rating: f64,
    /// Precomputed distance to the viewer, in whatever unit the loader chose.
    #[serde(default)]
    pub distance_from_viewer: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub saves: u64,
}

/// Ordering applied to a filtered result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Popular,
    PriceLow,
    PriceHigh,
    Distance,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Popular,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Distance,
    ];

    /// Token used in query strings and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Popular => "popular",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Distance => "distance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Popular => "Most popular",
            Self::PriceLow => "Price: low to high",
            Self::PriceHigh => "Price: high to low",
            Self::Distance => "Nearest",
        }
    }

    /// Maps the home page quick filters (`nearby`, `recent`, `popular`) to a sort order.
    pub fn from_quick_filter(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "nearby" => Some(Self::Distance),
            "recent" => Some(Self::Newest),
            "popular" => Some(Self::Popular),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// A map marker grouping two or more nearby items.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Arithmetic mean of the member coordinates.
    pub centroid: Coordinate,
    /// Member ids in insertion order; always at least two.
    pub member_ids: Vec<ItemId>,
    /// Category of the seed item, used for marker colour.
    pub representative_category: String,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.member_ids.iter().any(|member| member == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_parses_labels_case_insensitively() {
        assert_eq!("like new".parse::<Condition>(), Ok(Condition::LikeNew));
        assert_eq!("Like-New".parse::<Condition>(), Ok(Condition::LikeNew));
        assert_eq!("POOR".parse::<Condition>(), Ok(Condition::Poor));
        assert!("mint".parse::<Condition>().is_err());
    }

    #[test]
    fn sort_key_round_trips_through_tokens() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn quick_filters_map_to_sort_keys() {
        assert_eq!(SortKey::from_quick_filter("nearby"), Some(SortKey::Distance));
        assert_eq!(SortKey::from_quick_filter("Recent"), Some(SortKey::Newest));
        assert_eq!(SortKey::from_quick_filter("popular"), Some(SortKey::Popular));
        assert_eq!(SortKey::from_quick_filter("trending"), None);
    }

    #[test]
    fn catalog_item_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": "a1",
            "title": "Vintage Camera",
            "category": "Electronics",
            "condition": "Like New",
            "estimatedValue": 120.0,
            "coordinate": { "lat": 40.7, "lng": -74.0 },
            "ownerRating": 4.5,
            "createdAt": "2025-01-01T00:00:00Z"
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.condition, Condition::LikeNew);
        assert_eq!(item.coordinate, Some(Coordinate::new(40.7, -74.0)));
        assert_eq!(item.distance_from_viewer, None);
        assert_eq!(item.views, 0);
    }

    #[test]
    fn coordinate_validity_checks_ranges() {
        assert!(Coordinate::new(40.0, -74.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }
}
