//! Keyboard handling for the browse TUI.

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::{BrowseState, InputMode, Tab};
use crate::models::RunLanguage;
use crate::view::ViewAction;

/// Lines scrolled per key press in the detail view.
pub const SCROLL_STEP: u16 = 2;

/// Result of handling a key event.
pub enum KeyEventResult {
    /// User requested exit.
    Exit,
    /// Continue running.
    Continue,
}

/// Route a key press by input mode, then by tab.
pub fn handle_key_event(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &mut BrowseState,
) -> KeyEventResult {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return KeyEventResult::Exit;
    }
    state.status = None;

    match state.mode {
        InputMode::Search => {
            handle_search_input(code, state);
            KeyEventResult::Continue
        }
        InputMode::Edit => {
            handle_editor_input(code, state);
            KeyEventResult::Continue
        }
        InputMode::Normal => match code {
            KeyCode::Char('q') => KeyEventResult::Exit,
            KeyCode::Tab => {
                state.tab = state.tab.toggled();
                KeyEventResult::Continue
            }
            _ => match state.tab {
                Tab::Knowledge if state.view.in_detail() => handle_detail_key(code, state),
                Tab::Knowledge => handle_knowledge_key(code, state),
                Tab::Playground => handle_playground_key(code, modifiers, state),
            },
        },
    }
}

fn handle_search_input(code: KeyCode, state: &mut BrowseState) {
    match code {
        KeyCode::Enter | KeyCode::Esc => state.mode = InputMode::Normal,
        KeyCode::Backspace => state.pop_query_char(),
        KeyCode::Char(c) => state.push_query_char(c),
        _ => {}
    }
}

fn handle_editor_input(code: KeyCode, state: &mut BrowseState) {
    let mut buffer = state.playground.code().to_string();
    match code {
        KeyCode::Esc => {
            state.mode = InputMode::Normal;
            return;
        }
        KeyCode::Enter => buffer.push('\n'),
        KeyCode::Tab => buffer.push_str("    "),
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(c) => buffer.push(c),
        _ => return,
    }
    state.playground.set_code(buffer);
}

fn handle_knowledge_key(code: KeyCode, state: &mut BrowseState) -> KeyEventResult {
    match code {
        KeyCode::Esc => return KeyEventResult::Exit,
        KeyCode::Char('/') => state.mode = InputMode::Search,
        KeyCode::Char('c') => state.cycle_category(true),
        KeyCode::Char('C') => state.cycle_category(false),
        KeyCode::Char('d') => state.cycle_difficulty(),
        KeyCode::Char('l') => state.cycle_language(),
        KeyCode::Char('x') => state.dispatch(ViewAction::ClearFilters),
        KeyCode::Char('v') => state.toggle_view_mode(),
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(1),
        KeyCode::Left | KeyCode::PageUp => state.dispatch(ViewAction::PreviousPage),
        KeyCode::Right | KeyCode::PageDown => state.dispatch(ViewAction::NextPage),
        KeyCode::Home => state.dispatch(ViewAction::GoToPage(1)),
        KeyCode::End => {
            let last = state.total_pages();
            state.dispatch(ViewAction::GoToPage(last));
        }
        KeyCode::Enter => state.open_selected(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(n) = c.to_digit(10) {
                state.category_shortcut(n as usize);
            }
        }
        _ => {}
    }
    KeyEventResult::Continue
}

fn handle_detail_key(code: KeyCode, state: &mut BrowseState) -> KeyEventResult {
    match code {
        KeyCode::Esc | KeyCode::Backspace => state.dispatch(ViewAction::Back),
        KeyCode::Up | KeyCode::Char('k') => {
            state.detail_scroll = state.detail_scroll.saturating_sub(SCROLL_STEP);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.detail_scroll = state.detail_scroll.saturating_add(SCROLL_STEP);
        }
        KeyCode::Home => state.detail_scroll = 0,
        KeyCode::Char('p') => state.try_in_playground(),
        _ => {}
    }
    KeyEventResult::Continue
}

fn handle_playground_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &mut BrowseState,
) -> KeyEventResult {
    match code {
        KeyCode::Esc => return KeyEventResult::Exit,
        KeyCode::Char('r') | KeyCode::F(5) => state.run_playground(),
        KeyCode::Enter if modifiers.contains(KeyModifiers::CONTROL) => state.run_playground(),
        KeyCode::Char('e') | KeyCode::Char('i') => state.mode = InputMode::Edit,
        KeyCode::Char('l') | KeyCode::Right => {
            let next = state.playground.language().next();
            state.playground.set_language(next);
        }
        KeyCode::Left => {
            let current = state.playground.language();
            let previous = RunLanguage::all()
                .iter()
                .copied()
                .find(|l| l.next() == current)
                .unwrap_or(current);
            state.playground.set_language(previous);
        }
        KeyCode::Char('x') => state.playground.reset_code(),
        KeyCode::Char('o') => state.playground.clear_output(),
        _ => {}
    }
    KeyEventResult::Continue
}
