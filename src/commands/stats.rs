use anyhow::Result;
use colored::Colorize;

use super::display::print_header;
use super::AppContext;
use crate::search::QuickStats;

/// Print totals per difficulty level.
pub fn execute(ctx: &AppContext) -> Result<()> {
    let stats = QuickStats::from_items(ctx.store.items());

    print_header("Quick Stats");
    println!("{:<14} {}", "Total Items", stats.total.to_string().bold());
    println!("{:<14} {}", "Beginner", stats.beginner.to_string().green());
    println!("{:<14} {}", "Intermediate", stats.intermediate.to_string().yellow());
    println!("{:<14} {}", "Advanced", stats.advanced.to_string().red());
    Ok(())
}
