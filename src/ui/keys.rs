//! Keyboard handling for the roster screen
//!
//! Translating a key press into an [`Action`] is a pure function of the key,
//! the input focus and the display mode, so the key map can be tested without
//! a terminal.

use crate::browser::{DisplayMode, Field};
use crate::consts::cli_consts::ui::PAGE_SCROLL_LINES;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which control receives typed characters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Focus {
    /// Keys navigate the roster.
    #[default]
    Browse,
    /// Typed characters edit the search term.
    Search,
    /// Typed digits edit the jump box.
    Jump,
    /// Up / Down move through the filtered roster by name.
    Picker,
    /// Digits toggle card fields.
    Fields,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Previous,
    Next,
    ToggleMode,
    SetFocus(Focus),
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    JumpInput(char),
    JumpBackspace,
    SubmitJump,
    PickerUp,
    PickerDown,
    PickerConfirm,
    ToggleField(Field),
    ScrollUp(u16),
    ScrollDown(u16),
}

/// Maps a key press to an action, or `None` when the key does nothing here.
pub fn map_key(key: KeyEvent, focus: Focus, mode: DisplayMode) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let slideshow = mode == DisplayMode::Slideshow;

    // Left / Right drive the slideshow from every focus except the picker.
    if slideshow && focus != Focus::Picker {
        match key.code {
            KeyCode::Left => return Some(Action::Previous),
            KeyCode::Right => return Some(Action::Next),
            _ => {}
        }
    }

    match focus {
        Focus::Browse => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('h') if slideshow => Some(Action::Previous),
            KeyCode::Char('l') if slideshow => Some(Action::Next),
            KeyCode::Char('/') | KeyCode::Char('s') => Some(Action::SetFocus(Focus::Search)),
            KeyCode::Char('g') if slideshow => Some(Action::SetFocus(Focus::Jump)),
            KeyCode::Char('p') if slideshow => Some(Action::SetFocus(Focus::Picker)),
            KeyCode::Char('f') => Some(Action::SetFocus(Focus::Fields)),
            KeyCode::Char('m') => Some(Action::ToggleMode),
            KeyCode::Char('x') => Some(Action::ClearSearch),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown(1)),
            KeyCode::PageUp => Some(Action::ScrollUp(PAGE_SCROLL_LINES)),
            KeyCode::PageDown => Some(Action::ScrollDown(PAGE_SCROLL_LINES)),
            _ => None,
        },
        Focus::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(Action::SetFocus(Focus::Browse)),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        },
        Focus::Jump => match key.code {
            KeyCode::Esc => Some(Action::SetFocus(Focus::Browse)),
            KeyCode::Enter => Some(Action::SubmitJump),
            KeyCode::Backspace => Some(Action::JumpBackspace),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '+' => {
                Some(Action::JumpInput(c))
            }
            _ => None,
        },
        Focus::Picker => match key.code {
            KeyCode::Esc => Some(Action::SetFocus(Focus::Browse)),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PickerUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::PickerDown),
            KeyCode::Enter => Some(Action::PickerConfirm),
            _ => None,
        },
        Focus::Fields => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') => {
                Some(Action::SetFocus(Focus::Browse))
            }
            KeyCode::Char(c) => Field::from_hotkey(c).map(Action::ToggleField),
            _ => None,
        },
    }
}
