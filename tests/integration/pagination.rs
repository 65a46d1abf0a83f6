//! Pagination over filtered results

use codespace::content::ContentStore;
use codespace::search::{paginate, FilterState};
use codespace::view::{ViewAction, ViewState};

use super::helpers::*;

#[test]
fn test_twenty_five_items_make_three_pages() {
    let store = ContentStore::from_items(bulk_items(25)).expect("Failed to build store");
    let hits = FilterState::default().apply(store.items());

    let first = paginate(&hits, 1, 12);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 12);
    assert_eq!(first.items[0].id, "item-00");
    assert_eq!(first.range_label(), "Showing 1 to 12 of 25 results");

    let last = paginate(&hits, 3, 12);
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].id, "item-24");
    assert!(!last.has_next());
}

#[test]
fn test_view_state_paging_follows_filters() {
    let store = ContentStore::from_items(bulk_items(25)).expect("Failed to build store");
    let mut view = ViewState::default();
    let pages = |view: &ViewState| {
        let hits = view.filters.apply(store.items());
        paginate(&hits, view.page, 12).total_pages
    };

    view.apply(ViewAction::GoToPage(3), pages(&view));
    assert_eq!(view.page, 3);

    view.apply(ViewAction::SetQuery("item-1".to_string()), pages(&view));
    assert_eq!(view.page, 1);

    // "item-1" matches item-10..item-19 only; one page.
    view.apply(ViewAction::NextPage, pages(&view));
    assert_eq!(view.page, 1);
}
