//! `codespace search` - filtered, paged listing of the knowledge base.

use anyhow::{Context, Result};
use serde::Serialize;

use super::display::{
    print_card, print_category_panel, print_empty_state, print_header, print_list_row,
    print_pagination, print_quick_stats,
};
use super::AppContext;
use crate::models::KnowledgeItem;
use crate::search::{category_counts, paginate, show_category_panel, FilterState, QuickStats};
use crate::view::ViewMode;

#[derive(Serialize)]
struct SearchOutput<'a> {
    filters: &'a FilterState,
    page: usize,
    total_pages: usize,
    total: usize,
    items: &'a [&'a KnowledgeItem],
}

pub fn execute(
    ctx: &AppContext,
    filters: FilterState,
    page: usize,
    mode: ViewMode,
    json: bool,
) -> Result<()> {
    let filtered = filters.apply(ctx.store.items());
    let current = paginate(&filtered, page, ctx.config.page_size);

    if json {
        let output = SearchOutput {
            filters: &filters,
            page: current.current,
            total_pages: current.total_pages,
            total: current.total,
            items: current.items,
        };
        let rendered =
            serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
        println!("{rendered}");
        return Ok(());
    }

    print_header("Knowledge Base");
    print_quick_stats(&QuickStats::from_items(ctx.store.items()));
    println!();

    if current.is_empty() {
        print_empty_state(&filters);
        return Ok(());
    }

    match mode {
        ViewMode::Grid => current.items.iter().for_each(|item| print_card(item)),
        ViewMode::List => {
            current.items.iter().for_each(|item| print_list_row(item));
            println!();
        }
    }
    print_pagination(&current);

    if show_category_panel(&filters, filtered.len()) {
        print_category_panel(&category_counts(ctx.store.items(), ctx.store.categories()));
    }

    Ok(())
}
