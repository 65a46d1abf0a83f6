//! Knowledge view state and its reducer.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Difficulty, Language};
use crate::search::{Facet, FilterState};

/// Card grid or compact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Everything the knowledge view needs to re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: FilterState,
    /// 1-based page number.
    pub page: usize,
    pub view_mode: ViewMode,
    /// Item shown in the detail view, if any.
    pub selected: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            page: 1,
            view_mode: ViewMode::default(),
            selected: None,
        }
    }
}

/// User intents that change the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetQuery(String),
    SetCategory(Facet<Category>),
    SetDifficulty(Facet<Difficulty>),
    SetLanguage(Facet<Language>),
    ClearFilters,
    GoToPage(usize),
    NextPage,
    PreviousPage,
    SetViewMode(ViewMode),
    Select(String),
    Back,
}

impl ViewState {
    /// Apply `action`. `total_pages` is the page count of the current
    /// filtered result and bounds every paging action.
    pub fn apply(&mut self, action: ViewAction, total_pages: usize) {
        let last = total_pages.max(1);
        match action {
            ViewAction::SetQuery(query) => {
                self.filters.query = query;
                self.page = 1;
            }
            ViewAction::SetCategory(category) => {
                self.filters.category = category;
                self.page = 1;
            }
            ViewAction::SetDifficulty(difficulty) => {
                self.filters.difficulty = difficulty;
                self.page = 1;
            }
            ViewAction::SetLanguage(language) => {
                self.filters.language = language;
                self.page = 1;
            }
            ViewAction::ClearFilters => {
                self.filters = FilterState::default();
                self.page = 1;
            }
            ViewAction::GoToPage(page) => self.page = page.clamp(1, last),
            ViewAction::NextPage => self.page = (self.page + 1).clamp(1, last),
            ViewAction::PreviousPage => self.page = self.page.saturating_sub(1).clamp(1, last),
            ViewAction::SetViewMode(mode) => self.view_mode = mode,
            ViewAction::Select(id) => self.selected = Some(id),
            ViewAction::Back => self.selected = None,
        }
    }

    pub fn in_detail(&self) -> bool {
        self.selected.is_some()
    }
}
