//! Rendering functions for the browse TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use super::state::{BrowseState, InputMode, Tab};
use super::theme::Theme;
use crate::models::{ExecutionRecord, KnowledgeItem};
use crate::search::{CategoryCount, Page, QuickStats};
use crate::utils::truncate;
use crate::view::{style, ViewMode};

/// Height of the category panel when shown.
pub const PANEL_HEIGHT: u16 = 9;

fn block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Theme::header())
        .borders(Borders::ALL)
        .border_style(Theme::border(focused))
}

/// Tabs plus quick stats.
pub fn render_header(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(56)])
        .split(area);

    let tabs = Tabs::new(vec!["Knowledge Base", "Playground"])
        .select(state.tab.index())
        .style(Theme::dimmed())
        .highlight_style(Theme::accent())
        .divider("│");
    frame.render_widget(tabs, chunks[0]);

    let stats = QuickStats::from_items(state.ctx.store.items());
    let line = Line::from(vec![
        Span::styled(format!("{} items  ", stats.total), Theme::header()),
        Span::styled(format!("{} beginner  ", stats.beginner), Theme::success()),
        Span::styled(format!("{} intermediate  ", stats.intermediate), Theme::warning()),
        Span::styled(format!("{} advanced", stats.advanced), Theme::error()),
    ]);
    frame.render_widget(Paragraph::new(line), chunks[1]);
}

/// Search box and active facets.
pub fn render_search_bar(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let searching = state.mode == InputMode::Search;
    let filters = &state.view.filters;

    let cursor = if searching { "▏" } else { "" };
    let query = if filters.query.is_empty() && !searching {
        Span::styled("press / to search", Theme::dimmed())
    } else {
        Span::raw(format!("{}{cursor}", filters.query))
    };

    let facet = |name: &str, value: String| {
        vec![
            Span::styled(format!("{name}: "), Theme::dimmed()),
            Span::styled(value, Theme::tag()),
            Span::raw("  "),
        ]
    };
    let mut facets = Vec::new();
    facets.extend(facet(
        "Category",
        filters
            .category
            .value()
            .map_or("All".to_string(), |c| style::category(c).label.to_string()),
    ));
    facets.extend(facet(
        "Difficulty",
        filters
            .difficulty
            .value()
            .map_or("All".to_string(), |d| style::difficulty(d).label.to_string()),
    ));
    facets.extend(facet(
        "Language",
        filters
            .language
            .value()
            .map_or("All".to_string(), |l| style::language(Some(l)).label.to_string()),
    ));
    let mode = match state.view.view_mode {
        ViewMode::Grid => "grid",
        ViewMode::List => "list",
    };
    facets.extend(facet("View", mode.to_string()));

    let text = vec![Line::from(vec![Span::styled("Search: ", Theme::header()), query]), Line::from(facets)];
    let paragraph = Paragraph::new(text).block(block("Filters", searching));
    frame.render_widget(paragraph, area);
}

fn card(item: &KnowledgeItem, width: usize) -> ListItem<'static> {
    let category = style::category(item.category);
    let difficulty = style::difficulty(item.difficulty);
    let language = style::language(item.language);
    let kind = style::item_type(item.item_type);

    let title = Line::from(vec![
        Span::styled(format!("{} ", category.icon), Theme::fg(category.tui)),
        Span::styled(item.title.clone(), Theme::header()),
        Span::styled(format!("  {}", category.label), Theme::dimmed()),
    ]);
    let badges = Line::from(vec![
        Span::styled(format!("  {} {}  ", kind.icon, kind.label), Theme::fg(kind.tui)),
        Span::styled(format!("{} {}  ", difficulty.icon, difficulty.label), Theme::fg(difficulty.tui)),
        Span::styled(language.label, Theme::fg(language.tui)),
    ]);
    let description = Line::from(Span::raw(format!(
        "  {}",
        truncate(&item.description, width.saturating_sub(4))
    )));
    let tags: Vec<String> = item.tags.iter().take(4).map(|t| format!("#{t}")).collect();
    let more = item.tags.len().saturating_sub(4);
    let mut tag_spans = vec![Span::styled(format!("  {}", tags.join(" ")), Theme::tag())];
    if more > 0 {
        tag_spans.push(Span::styled(format!(" +{more}"), Theme::dimmed()));
    }

    ListItem::new(Text::from(vec![title, badges, description, Line::from(tag_spans), Line::raw("")]))
}

/// Current page as cards or a table, or the empty state.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    state: &BrowseState,
    page: &Page<'_, &KnowledgeItem>,
) {
    let title = format!("Results ({})", page.total);
    let results_block = block(&title, state.mode == InputMode::Normal);

    if page.is_empty() {
        render_empty_state(frame, area, results_block, state.view.filters.is_active());
        return;
    }

    match state.view.view_mode {
        ViewMode::Grid => {
            let width = area.width as usize;
            let items: Vec<ListItem> = page.items.iter().map(|item| card(item, width)).collect();
            let list = List::new(items)
                .block(results_block)
                .highlight_style(Theme::selected())
                .highlight_symbol("▌");
            let mut list_state = ListState::default().with_selected(Some(state.cursor));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
        ViewMode::List => {
            let rows: Vec<Row> = page
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let difficulty = style::difficulty(item.difficulty);
                    let category = style::category(item.category);
                    let row = Row::new(vec![
                        Span::styled(difficulty.icon, Theme::fg(difficulty.tui)),
                        Span::raw(item.title.clone()),
                        Span::styled(category.label, Theme::fg(category.tui)),
                        Span::styled(style::language(item.language).label, Theme::dimmed()),
                        Span::styled(item.id.clone(), Theme::dimmed()),
                    ]);
                    if i == state.cursor {
                        row.style(Theme::selected())
                    } else {
                        row
                    }
                })
                .collect();
            let header = Row::new(vec!["", "Title", "Category", "Language", "Id"])
                .style(Theme::header().add_modifier(Modifier::UNDERLINED));
            let table = Table::new(
                rows,
                [
                    Constraint::Length(4),
                    Constraint::Min(30),
                    Constraint::Length(28),
                    Constraint::Length(12),
                    Constraint::Length(36),
                ],
            )
            .header(header)
            .block(results_block);
            frame.render_widget(table, area);
        }
    }
}

fn render_empty_state(frame: &mut Frame, area: Rect, results_block: Block, filtered: bool) {
    let mut lines = vec![
        Line::raw(""),
        Line::styled("No results found", Theme::header()),
        Line::styled("Try adjusting your search terms or filters", Theme::dimmed()),
    ];
    if filtered {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Press x to clear all filters", Theme::tag()));
    }
    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(results_block);
    frame.render_widget(paragraph, area);
}

/// Browse-by-category panel; entries are numbered for the 1-9 shortcuts.
pub fn render_category_panel(frame: &mut Frame, area: Rect, counts: &[CategoryCount]) {
    let columns = 3;
    let rows_per_column = usize::from(area.height.saturating_sub(2)).max(1);
    let mut lines: Vec<Line> = (0..rows_per_column).map(|_| Line::raw("")).collect();

    for (i, entry) in counts.iter().enumerate().take(columns * rows_per_column) {
        let Some(category) = entry.meta.category else {
            continue;
        };
        let swatch = style::category(category);
        let shortcut = if i < 9 {
            format!("{} ", i + 1)
        } else {
            "  ".to_string()
        };
        let cell = vec![
            Span::styled(shortcut, Theme::dimmed()),
            Span::styled(format!("{} ", swatch.icon), Theme::fg(swatch.tui)),
            Span::raw(format!("{:<26}", truncate(swatch.label, 26))),
            Span::styled(format!("{:>3}   ", entry.count), Theme::header()),
        ];
        lines[i % rows_per_column].spans.extend(cell);
    }

    let paragraph = Paragraph::new(lines).block(block("Browse by Category", false));
    frame.render_widget(paragraph, area);
}

/// Range label, page window and prev/next state.
pub fn render_page_footer<T>(frame: &mut Frame, area: Rect, page: &Page<'_, T>) {
    let mut spans = vec![Span::styled(page.range_label(), Theme::dimmed())];
    if page.shows_controls() {
        spans.push(Span::raw("   "));
        let prev_style = if page.has_previous() {
            Theme::header()
        } else {
            Theme::dimmed()
        };
        spans.push(Span::styled("‹ Prev ", prev_style));
        for n in page.window() {
            if n == page.current {
                spans.push(Span::styled(format!("[{n}] "), Theme::accent()));
            } else {
                spans.push(Span::raw(format!("{n} ")));
            }
        }
        let next_style = if page.has_next() {
            Theme::header()
        } else {
            Theme::dimmed()
        };
        spans.push(Span::styled("Next ›", next_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &'a str) {
    lines.push(Line::raw(""));
    lines.push(Line::styled(title, Theme::accent()));
}

fn code_lines<'a>(lines: &mut Vec<Line<'a>>, code: &'a str) {
    for line in code.lines() {
        lines.push(Line::from(vec![
            Span::styled("│ ", Theme::dimmed()),
            Span::styled(line, Theme::success()),
        ]));
    }
}

/// Detail view for one item.
pub fn render_detail(frame: &mut Frame, area: Rect, item: &KnowledgeItem, scroll: u16) {
    let category = style::category(item.category);
    let difficulty = style::difficulty(item.difficulty);
    let language = style::language(item.language);
    let kind = style::item_type(item.item_type);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", category.icon), Theme::fg(category.tui)),
            Span::styled(item.title.as_str(), Theme::header()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}  ", category.label), Theme::dimmed()),
            Span::styled(format!("{} {}  ", kind.icon, kind.label), Theme::fg(kind.tui)),
            Span::styled(format!("{} {}  ", difficulty.icon, difficulty.label), Theme::fg(difficulty.tui)),
            Span::styled(language.label, Theme::fg(language.tui)),
        ]),
        Line::raw(""),
        Line::raw(item.description.as_str()),
    ];

    if let Some(code) = &item.code {
        section(&mut lines, "Code");
        code_lines(&mut lines, code);
    }
    if !item.explanation.is_empty() {
        section(&mut lines, "Explanation");
        lines.push(Line::raw(item.explanation.as_str()));
    }
    if !item.code_examples.is_empty() {
        section(&mut lines, "Additional Examples");
        for (n, example) in item.code_examples.iter().enumerate() {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", n + 1), Theme::dimmed()),
                Span::styled(example.title.as_str(), Theme::header()),
                Span::styled(format!(" ({})", example.language), Theme::dimmed()),
            ]));
            code_lines(&mut lines, &example.code);
            if let Some(explanation) = &example.explanation {
                lines.push(Line::styled(explanation.as_str(), Theme::dimmed()));
            }
        }
    }
    if !item.best_practices.is_empty() {
        section(&mut lines, "Best Practices");
        for practice in &item.best_practices {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Theme::success()),
                Span::raw(practice.as_str()),
            ]));
        }
    }
    if !item.common_pitfalls.is_empty() {
        section(&mut lines, "Common Pitfalls");
        for pitfall in &item.common_pitfalls {
            lines.push(Line::from(vec![
                Span::styled("⚠ ", Theme::warning()),
                Span::raw(pitfall.as_str()),
            ]));
        }
    }
    if !item.tags.is_empty() {
        section(&mut lines, "Tags");
        let tags: Vec<String> = item.tags.iter().map(|t| format!("#{t}")).collect();
        lines.push(Line::styled(tags.join(" "), Theme::tag()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block(&item.id, true))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn output_text(record: Option<&ExecutionRecord>, executing: bool, spinner: char) -> Vec<Line<'_>> {
    if executing {
        return vec![Line::styled(format!("{spinner} Running..."), Theme::warning())];
    }
    let Some(record) = record else {
        return vec![Line::styled("Press r to run the code", Theme::dimmed())];
    };

    let mut lines: Vec<Line> = match &record.errors {
        Some(errors) => vec![Line::styled(errors.as_str(), Theme::error())],
        None => record.output.lines().map(Line::raw).collect(),
    };
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("{}ms · {}", record.execution_time_ms, record.timestamp.format("%H:%M:%S")),
        Theme::dimmed(),
    ));
    lines
}

/// Editor and output panes.
pub fn render_playground(frame: &mut Frame, area: Rect, state: &BrowseState, spinner: char) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let playground = &state.playground;
    let editing = state.mode == InputMode::Edit;
    let mut code: Vec<Line> = playground
        .code()
        .lines()
        .enumerate()
        .map(|(n, line)| {
            Line::from(vec![
                Span::styled(format!("{:>3} ", n + 1), Theme::dimmed()),
                Span::raw(line),
            ])
        })
        .collect();
    if editing {
        code.push(Line::styled("    ▏", Theme::accent()));
    }
    // Keep the end of the buffer in view while typing.
    let visible = usize::from(chunks[0].height.saturating_sub(2));
    let scroll = if editing {
        code.len().saturating_sub(visible)
    } else {
        0
    };

    let editor_title = format!(
        "{} Editor{}",
        playground.language().label(),
        if editing { " (editing, Esc to stop)" } else { "" }
    );
    let editor = Paragraph::new(code)
        .block(block(&editor_title, editing))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(editor, chunks[0]);

    let output_title = format!(
        "Output (simulated) · {} run(s)",
        playground.history().len()
    );
    let output = Paragraph::new(output_text(
        playground.latest(),
        state.is_executing(),
        spinner,
    ))
    .block(block(&output_title, false))
    .wrap(Wrap { trim: false });
    frame.render_widget(output, chunks[1]);
}

/// Key hints, or the latest status message.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &BrowseState) {
    if let Some(status) = &state.status {
        frame.render_widget(Paragraph::new(Span::styled(status.as_str(), Theme::warning())), area);
        return;
    }

    let hints = match (state.tab, state.mode, state.view.selected.is_some()) {
        (_, InputMode::Search, _) => "type to filter · Enter/Esc done",
        (_, InputMode::Edit, _) => "type to edit · Enter newline · Esc done",
        (Tab::Knowledge, _, true) => "↑↓ scroll · p try in playground · Esc back · Tab playground · q quit",
        (Tab::Knowledge, _, false) => {
            "/ search · c/C category · d difficulty · l language · x clear · v view · ←→ page · Enter open · 1-9 category · q quit"
        }
        (Tab::Playground, _, _) => {
            if state.is_executing() {
                "running... · Tab knowledge · q quit"
            } else {
                "r run · e edit · l language · x reset · o clear output · Tab knowledge · q quit"
            }
        }
    };
    frame.render_widget(Paragraph::new(Span::styled(hints, Theme::dimmed())), area);
}
