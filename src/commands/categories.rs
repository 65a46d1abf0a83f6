//! `codespace categories` - item counts per category.

use anyhow::Result;
use colored::Colorize;

use super::display::print_header;
use super::AppContext;
use crate::search::category_counts;
use crate::view::style;

pub fn execute(ctx: &AppContext) -> Result<()> {
    print_header("Browse by Category");

    for entry in category_counts(ctx.store.items(), ctx.store.categories()) {
        let Some(category) = entry.meta.category else {
            continue;
        };
        let swatch = style::category(category);
        let count = if entry.count == 0 {
            entry.count.to_string().dimmed()
        } else {
            entry.count.to_string().bold()
        };
        println!(
            "{} {:<30} {:>3}  {}",
            swatch.icon.color(swatch.term),
            swatch.label,
            count,
            entry.meta.value.dimmed()
        );
    }

    println!();
    println!(
        "{}",
        "Filter with: codespace search --category <value>".dimmed()
    );
    Ok(())
}
