use swapboard_catalog::{
    domain::geo::DistanceUnit, infra::criteria_from_query, util::demo_catalog, BrowseState,
    Coordinate, EngineConfig, SortKey,
};

#[test]
fn nearby_quick_filter_puts_closest_listing_first() {
    let catalog = demo_catalog().unwrap();
    let config = EngineConfig::default();
    let mut state = BrowseState::new();
    state.set_criteria(criteria_from_query("filter=nearby").unwrap());

    let view = state.view(&catalog, &config).unwrap();
    assert_eq!(view.page[0].id, "lst-004");
    // The online-only listing has no distance and goes last.
    assert_eq!(view.page.last().unwrap().id, "lst-008");
    assert_eq!(view.total_matches, 8);
    assert!(!view.has_more);
}

#[test]
fn search_and_category_from_url_params() {
    let catalog = demo_catalog().unwrap();
    let config = EngineConfig::default();
    let mut state = BrowseState::new();
    state.set_criteria(criteria_from_query("search=brooklyn&category=Music").unwrap());

    // "brooklyn" only appears in the location label, which search does not cover.
    assert!(state.view(&catalog, &config).unwrap().is_empty());

    state.set_criteria(criteria_from_query("search=RECORD&category=Music").unwrap());
    let view = state.view(&catalog, &config).unwrap();
    assert_eq!(view.page.len(), 1);
    assert_eq!(view.page[0].id, "lst-007");
}

#[test]
fn map_layer_keeps_every_category_visible() {
    let catalog = demo_catalog().unwrap();
    let config = EngineConfig::default();
    let state = BrowseState::new();

    let layer = state.map_layer(&catalog, &config);
    let mut pinned: Vec<&str> = layer
        .visible_pins
        .iter()
        .map(|item| item.category.as_str())
        .collect();
    pinned.sort_unstable();
    pinned.dedup();
    // Home is online-only and cannot be placed.
    assert_eq!(pinned, vec!["Books", "Electronics", "Furniture", "Music", "Sports"]);
    assert!(!layer.clusters.is_empty());
}

#[test]
fn recomputed_viewer_distances_drive_distance_sort() {
    let catalog = demo_catalog()
        .unwrap()
        .with_viewer_distances(Coordinate::new(39.95, -75.16), DistanceUnit::Miles);
    let config = EngineConfig::default();
    let mut state = BrowseState::new();
    state.set_criteria(state.criteria.clone().sorted_by(SortKey::Distance));

    let view = state.view(&catalog, &config).unwrap();
    assert_eq!(view.page[0].id, "lst-006");
}
