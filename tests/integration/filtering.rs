//! Filter engine tests against small fixture stores and the bundled content

use codespace::content::ContentStore;
use codespace::models::{Category, Difficulty, Language};
use codespace::search::{category_counts, paginate, show_category_panel, Facet, FilterState};
use codespace::search::pagination::total_pages;

use super::helpers::*;

#[test]
fn test_category_filter_returns_exact_match() {
    let store = scenario_store();
    let filters = FilterState {
        category: Facet::Only(Category::Setup),
        ..FilterState::default()
    };
    assert_eq!(ids(&filters.apply(store.items())), vec!["a"]);
}

#[test]
fn test_language_filter_includes_both_items() {
    let store = scenario_store();
    let filters = FilterState {
        language: Facet::Only(Language::Python),
        ..FilterState::default()
    };
    assert_eq!(ids(&filters.apply(store.items())), vec!["b", "shared"]);
}

#[test]
fn test_unmatched_query_yields_no_pages() {
    let store = scenario_store();
    let filters = FilterState {
        query: "nonexistent-zzz".to_string(),
        ..FilterState::default()
    };
    let hits = filters.apply(store.items());
    assert!(hits.is_empty());
    assert_eq!(total_pages(hits.len(), 12), 0);

    let page = paginate(&hits, 1, 12);
    assert_eq!(page.current, 1);
    assert!(!page.shows_controls());
    assert_eq!(page.range_label(), "No results");
}

#[test]
fn test_facets_combine_conjunctively() {
    let store = scenario_store();
    let filters = FilterState {
        query: "topic".to_string(),
        difficulty: Facet::Only(Difficulty::Advanced),
        language: Facet::Only(Language::Python),
        ..FilterState::default()
    };
    assert_eq!(ids(&filters.apply(store.items())), vec!["b"]);
}

#[test]
fn test_filters_preserve_store_order() {
    let store = ContentStore::embedded().expect("Failed to load bundled content");
    let filters = FilterState {
        difficulty: Facet::Only(Difficulty::Beginner),
        ..FilterState::default()
    };
    let hits = filters.apply(store.items());
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| {
            store
                .items()
                .iter()
                .position(|i| i.id == hit.id)
                .expect("hit must come from the store")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_category_panel_counts_bundled_content() {
    let store = ContentStore::embedded().expect("Failed to load bundled content");
    let counts = category_counts(store.items(), store.categories());
    let total: usize = counts.iter().map(|c| c.count).sum();
    assert_eq!(total, store.len());
    assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(show_category_panel(&FilterState::default(), store.len()));
}
