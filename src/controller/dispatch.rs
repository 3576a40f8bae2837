//! Key dispatch
//!
//! An explicit table from (input mode, key) to a typed `Action`. In browse
//! mode the number keys jump between sections and Esc closes the menu and
//! then the toast.

use crate::controller::state::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    /// Typing into the database search box.
    Search,
    /// Editing a generator form field.
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Section),
    CycleTab,
    CycleFilter,
    EnterSearch,
    SearchChar(char),
    SearchBackspace,
    LeaveSearch,
    SelectNext,
    SelectPrev,
    CopySelected,
    FavoriteSelected,
    EnterForm,
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    LeaveForm,
    Generate,
    ClearForm,
    CopyResult,
    FavoriteResult,
    ToggleMenu,
    ToggleTheme,
    Escape,
    Quit,
}

pub fn dispatch(mode: InputMode, key: KeyEvent) -> Option<Action> {
    match mode {
        InputMode::Browse => dispatch_browse(key),
        InputMode::Search => dispatch_search(key),
        InputMode::Form => dispatch_form(key),
    }
}

fn dispatch_browse(key: KeyEvent) -> Option<Action> {
    // Ctrl+K and '/' both focus the database search box.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('k') => Some(Action::EnterSearch),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Some(Action::Navigate(Section::ALL[index]))
        }
        KeyCode::Char('/') => Some(Action::EnterSearch),
        KeyCode::Tab => Some(Action::CycleTab),
        KeyCode::Char('f') => Some(Action::CycleFilter),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
        KeyCode::Char('c') => Some(Action::CopySelected),
        KeyCode::Char(' ') => Some(Action::FavoriteSelected),
        KeyCode::Char('i') => Some(Action::EnterForm),
        KeyCode::Enter => Some(Action::Generate),
        KeyCode::Char('x') => Some(Action::ClearForm),
        KeyCode::Char('y') => Some(Action::CopyResult),
        KeyCode::Char('*') => Some(Action::FavoriteResult),
        KeyCode::Char('m') => Some(Action::ToggleMenu),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Esc => Some(Action::Escape),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn dispatch_search(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SearchChar(c))
        }
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Enter | KeyCode::Esc => Some(Action::LeaveSearch),
        _ => None,
    }
}

fn dispatch_form(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::FormChar(c))
        }
        KeyCode::Backspace => Some(Action::FormBackspace),
        KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
        KeyCode::Enter => Some(Action::Generate),
        KeyCode::Esc => Some(Action::LeaveForm),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_navigate_in_order() {
        assert_eq!(
            dispatch(InputMode::Browse, key(KeyCode::Char('1'))),
            Some(Action::Navigate(Section::Home))
        );
        assert_eq!(
            dispatch(InputMode::Browse, key(KeyCode::Char('4'))),
            Some(Action::Navigate(Section::Database))
        );
        assert_eq!(
            dispatch(InputMode::Browse, key(KeyCode::Char('6'))),
            Some(Action::Navigate(Section::Tutorial))
        );
    }

    #[test]
    fn test_search_mode_captures_characters() {
        assert_eq!(
            dispatch(InputMode::Search, key(KeyCode::Char('j'))),
            Some(Action::SearchChar('j'))
        );
        assert_eq!(
            dispatch(InputMode::Search, key(KeyCode::Esc)),
            Some(Action::LeaveSearch)
        );
    }

    #[test]
    fn test_form_mode_captures_characters() {
        assert_eq!(
            dispatch(InputMode::Form, key(KeyCode::Char('q'))),
            Some(Action::FormChar('q'))
        );
        assert_eq!(
            dispatch(InputMode::Form, key(KeyCode::Tab)),
            Some(Action::FormNextField)
        );
        assert_eq!(
            dispatch(InputMode::Form, key(KeyCode::Enter)),
            Some(Action::Generate)
        );
    }

    #[test]
    fn test_ctrl_k_enters_search() {
        let chord = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(dispatch(InputMode::Browse, chord), Some(Action::EnterSearch));
        // Plain 'k' is selection movement, not search
        assert_eq!(
            dispatch(InputMode::Browse, key(KeyCode::Char('k'))),
            Some(Action::SelectPrev)
        );
    }

    #[test]
    fn test_unmapped_keys_are_noops() {
        assert_eq!(dispatch(InputMode::Browse, key(KeyCode::F(5))), None);
        assert_eq!(dispatch(InputMode::Search, key(KeyCode::F(5))), None);
    }
}
