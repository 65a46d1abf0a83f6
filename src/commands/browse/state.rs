//! State types for the browse TUI.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::commands::show::primary_code;
use crate::commands::AppContext;
use crate::models::{Category, Difficulty, ExecutionRecord, KnowledgeItem, Language, RunLanguage};
use crate::playground::{Playground, SimulatedRunner};
use crate::search::{category_counts, paginate, show_category_panel, total_pages, CategoryCount, Facet};
use crate::view::{ViewAction, ViewMode, ViewState};

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Knowledge,
    Playground,
}

impl Tab {
    pub fn toggled(self) -> Self {
        match self {
            Tab::Knowledge => Tab::Playground,
            Tab::Playground => Tab::Knowledge,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Knowledge => 0,
            Tab::Playground => 1,
        }
    }
}

/// Where key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the search box.
    Search,
    /// Typing into the playground editor.
    Edit,
}

/// Step a facet through `All`, then each value in order, wrapping around.
pub fn cycle_facet<T: Copy + PartialEq>(current: Facet<T>, values: &[T], forward: bool) -> Facet<T> {
    if values.is_empty() {
        return Facet::All;
    }
    let position = match current {
        Facet::All => 0,
        Facet::Only(v) => values.iter().position(|x| *x == v).map_or(0, |i| i + 1),
    };
    let len = values.len() + 1;
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    if next == 0 {
        Facet::All
    } else {
        Facet::Only(values[next - 1])
    }
}

pub struct BrowseState {
    pub ctx: AppContext,
    pub tab: Tab,
    pub view: ViewState,
    pub mode: InputMode,
    /// Highlighted row within the current page.
    pub cursor: usize,
    pub detail_scroll: u16,
    pub playground: Playground<SimulatedRunner>,
    pending: Option<Receiver<ExecutionRecord>>,
    /// One-line message for the footer.
    pub status: Option<String>,
}

impl BrowseState {
    pub fn new(ctx: AppContext) -> Self {
        let playground = Playground::new(ctx.config.runner(), ctx.config.history_cap);
        Self::with_playground(ctx, playground)
    }

    pub fn with_playground(ctx: AppContext, playground: Playground<SimulatedRunner>) -> Self {
        Self {
            ctx,
            tab: Tab::Knowledge,
            view: ViewState::default(),
            mode: InputMode::Normal,
            cursor: 0,
            detail_scroll: 0,
            playground,
            pending: None,
            status: None,
        }
    }

    pub fn filtered(&self) -> Vec<&KnowledgeItem> {
        self.view.filters.apply(self.ctx.store.items())
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.ctx.config.page_size)
    }

    /// Items on the current page.
    pub fn page_items(&self) -> Vec<&KnowledgeItem> {
        let filtered = self.filtered();
        paginate(&filtered, self.view.page, self.ctx.config.page_size)
            .items
            .to_vec()
    }

    /// Category panel entries, when the panel is visible.
    pub fn panel(&self) -> Option<Vec<CategoryCount>> {
        let hits = self.filtered().len();
        show_category_panel(&self.view.filters, hits)
            .then(|| category_counts(self.ctx.store.items(), self.ctx.store.categories()))
    }

    pub fn selected_item(&self) -> Option<&KnowledgeItem> {
        self.view.selected.as_deref().and_then(|id| self.ctx.store.get(id))
    }

    /// Apply a view action and keep the cursor on the page.
    pub fn dispatch(&mut self, action: ViewAction) {
        let page_before = self.view.page;
        let filters_before = self.view.filters.clone();
        let pages = self.total_pages();
        self.view.apply(action, pages);

        if self.view.page != page_before || self.view.filters != filters_before {
            self.cursor = 0;
        }
        if self.view.selected.is_none() {
            self.detail_scroll = 0;
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.page_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.page_items().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Open the highlighted item in the detail view.
    pub fn open_selected(&mut self) {
        let id = self.page_items().get(self.cursor).map(|item| item.id.clone());
        if let Some(id) = id {
            self.dispatch(ViewAction::Select(id));
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let next = cycle_facet(self.view.filters.category, Category::all(), forward);
        self.dispatch(ViewAction::SetCategory(next));
    }

    pub fn cycle_difficulty(&mut self) {
        let next = cycle_facet(self.view.filters.difficulty, Difficulty::all(), true);
        self.dispatch(ViewAction::SetDifficulty(next));
    }

    pub fn cycle_language(&mut self) {
        let next = cycle_facet(self.view.filters.language, Language::all(), true);
        self.dispatch(ViewAction::SetLanguage(next));
    }

    pub fn toggle_view_mode(&mut self) {
        let mode: ViewMode = self.view.view_mode.toggled();
        self.dispatch(ViewAction::SetViewMode(mode));
    }

    /// Pick the `n`th (1-based) category panel entry as the category filter.
    pub fn category_shortcut(&mut self, n: usize) {
        let category = self
            .panel()
            .and_then(|counts| n.checked_sub(1).and_then(|i| counts.get(i).copied()))
            .and_then(|entry| entry.meta.category);
        if let Some(category) = category {
            self.dispatch(ViewAction::SetCategory(Facet::Only(category)));
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.view.filters.query.clone();
        query.push(c);
        self.dispatch(ViewAction::SetQuery(query));
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.view.filters.query.clone();
        if query.pop().is_some() {
            self.dispatch(ViewAction::SetQuery(query));
        }
    }

    /// Load the selected item's code into the playground and switch tabs.
    pub fn try_in_playground(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let language = item
            .language
            .and_then(|l| RunLanguage::from_tag(l.as_str()))
            .or_else(|| {
                item.code_examples
                    .first()
                    .and_then(|e| RunLanguage::from_tag(&e.language))
            });
        let code = primary_code(item).map(str::to_string);

        match (language, code) {
            (Some(language), Some(code)) => {
                self.playground.set_language(language);
                self.playground.set_code(code);
                self.tab = Tab::Playground;
                self.status = Some(format!("Loaded into the {} playground", language.label()));
            }
            _ => self.status = Some("Language not supported for execution".to_string()),
        }
    }

    pub fn is_executing(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a background run unless one is already pending.
    pub fn run_playground(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.playground.start();
    }

    /// Collect a finished background run, if any.
    pub fn poll_execution(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(record) => {
                self.pending = None;
                self.playground.finish(record);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.playground.abort("execution worker stopped unexpectedly");
                self.status = Some("Execution worker stopped unexpectedly".to_string());
            }
        }
    }
}
