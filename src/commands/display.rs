//! Terminal rendering shared by the plain (non-TUI) commands.

use colored::{ColoredString, Colorize};

use crate::models::{ExecutionRecord, KnowledgeItem};
use crate::search::{CategoryCount, FilterState, Page, QuickStats};
use crate::utils::{truncate, wrap};
use crate::view::{style, Swatch};

const RULE_WIDTH: usize = 60;
const DESCRIPTION_WIDTH: usize = 76;

pub fn rule() -> String {
    "═".repeat(RULE_WIDTH)
}

/// `[icon label]` in the swatch's color.
pub fn badge(swatch: Swatch) -> ColoredString {
    format!("[{} {}]", swatch.icon, swatch.label).color(swatch.term)
}

pub fn print_header(title: &str) {
    println!("{}", title.bold().blue());
    println!("{}", rule());
}

pub fn print_quick_stats(stats: &QuickStats) {
    println!(
        "{} items  {} {}  {} {}  {} {}",
        stats.total.to_string().bold(),
        stats.beginner.to_string().green(),
        "beginner".dimmed(),
        stats.intermediate.to_string().yellow(),
        "intermediate".dimmed(),
        stats.advanced.to_string().red(),
        "advanced".dimmed(),
    );
}

fn badges(item: &KnowledgeItem) -> String {
    format!(
        "{} {} {}",
        badge(style::item_type(item.item_type)),
        badge(style::difficulty(item.difficulty)),
        badge(style::language(item.language)),
    )
}

/// Multi-line card used by the grid view.
pub fn print_card(item: &KnowledgeItem) {
    let category = style::category(item.category);
    println!(
        "{} {}  {}",
        category.icon.color(category.term),
        item.title.bold(),
        category.label.dimmed()
    );
    println!("  {}", badges(item));
    for line in wrap(&item.description, DESCRIPTION_WIDTH).iter().take(3) {
        println!("  {line}");
    }
    if !item.tags.is_empty() {
        let tags: Vec<String> = item.tags.iter().take(4).map(|t| format!("#{t}")).collect();
        let more = item.tags.len().saturating_sub(4);
        let suffix = if more > 0 { format!(" +{more}") } else { String::new() };
        println!("  {}{}", tags.join(" ").cyan(), suffix.dimmed());
    }
    let runnable = if item.has_code() { "  has code" } else { "" };
    println!("  {}", format!("id: {}{runnable}", item.id).dimmed());
    println!();
}

/// One line per item in the list view.
pub fn print_list_row(item: &KnowledgeItem) {
    let difficulty = style::difficulty(item.difficulty);
    println!(
        "{} {:<44} {:<14} {}",
        difficulty.icon.color(difficulty.term),
        truncate(&item.title, 44),
        style::category(item.category).label.dimmed(),
        item.id.dimmed()
    );
}

/// "Showing X to Y of Z results" plus page-number controls when there is more than one page.
pub fn print_pagination<T>(page: &Page<'_, T>) {
    println!("{}", page.range_label().dimmed());
    if !page.shows_controls() {
        return;
    }

    let prev = if page.has_previous() {
        "‹ Prev".normal()
    } else {
        "‹ Prev".dimmed()
    };
    let next = if page.has_next() {
        "Next ›".normal()
    } else {
        "Next ›".dimmed()
    };
    let numbers: Vec<String> = page
        .window()
        .into_iter()
        .map(|n| {
            if n == page.current {
                format!("[{n}]").bold().blue().to_string()
            } else {
                n.to_string()
            }
        })
        .collect();
    println!("{prev}  {}  {next}", numbers.join(" "));
    println!(
        "{}",
        format!("Page {} of {} (use --page N)", page.current, page.total_pages).dimmed()
    );
}

pub fn print_category_panel(counts: &[CategoryCount]) {
    println!();
    println!("{}", "Browse by Category".bold());
    for entry in counts {
        let icon = entry
            .meta
            .category
            .map(style::category)
            .map_or("·", |s| s.icon);
        println!(
            "  {} {:<30} {:>3}  {}",
            icon,
            entry.meta.label,
            entry.count,
            format!("-c {}", entry.meta.value).dimmed()
        );
    }
}

pub fn print_empty_state(filters: &FilterState) {
    println!("{}", "No results found".bold());
    println!("Try adjusting your search terms or filters.");
    if filters.is_active() {
        println!(
            "{}",
            "Run without a query or facet flags to clear all filters.".dimmed()
        );
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.bold().underline());
}

fn print_code(code: &str) {
    for line in code.lines() {
        println!("  {} {line}", "│".dimmed());
    }
}

/// Full detail view of one item.
pub fn print_item_detail(item: &KnowledgeItem) {
    let category = style::category(item.category);
    println!("{} {}", category.icon.color(category.term), item.title.bold());
    println!("{}", rule());
    println!("{}  {}", category.label.dimmed(), badges(item));
    println!();
    for line in wrap(&item.description, DESCRIPTION_WIDTH) {
        println!("{line}");
    }

    if let Some(code) = &item.code {
        section("Code");
        print_code(code);
    }

    if !item.explanation.is_empty() {
        section("Explanation");
        for line in wrap(&item.explanation, DESCRIPTION_WIDTH) {
            println!("{line}");
        }
    }

    if !item.code_examples.is_empty() {
        section("Additional Examples");
        for (n, example) in item.code_examples.iter().enumerate() {
            println!();
            println!(
                "{} {} {}",
                format!("{}.", n + 1).dimmed(),
                example.title.bold(),
                format!("({})", example.language).dimmed()
            );
            print_code(&example.code);
            if let Some(explanation) = &example.explanation {
                for line in wrap(explanation, DESCRIPTION_WIDTH) {
                    println!("  {}", line.dimmed());
                }
            }
        }
    }

    if !item.best_practices.is_empty() {
        section("Best Practices");
        for practice in &item.best_practices {
            println!("  {} {practice}", "✓".green());
        }
    }

    if !item.common_pitfalls.is_empty() {
        section("Common Pitfalls");
        for pitfall in &item.common_pitfalls {
            println!("  {} {pitfall}", "⚠".yellow());
        }
    }

    if !item.tags.is_empty() {
        section("Tags");
        let tags: Vec<String> = item.tags.iter().map(|t| format!("#{t}")).collect();
        println!("{}", tags.join(" ").cyan());
    }
}

/// Output panel for a playground run.
pub fn print_execution(record: &ExecutionRecord) {
    println!("{}", "Output".bold());
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    match &record.errors {
        Some(errors) => println!("{}", errors.red()),
        None => println!("{}", record.output),
    }
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    println!(
        "{}",
        format!(
            "{} · {} · {}ms",
            record.id,
            record.language,
            record.execution_time_ms
        )
        .dimmed()
    );
}
