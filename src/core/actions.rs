//! Action vocabulary for the shell.
//!
//! Keybinds in the config name actions by string; frontends translate key
//! presses and mouse hits into `Action`s so `AppCore` has one entry point.

use crate::data::Screen;
use crossterm::event::{KeyCode, KeyModifiers};

/// Everything the user can ask the shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Tabs
    ShowBio,
    ShowProjects,
    ShowContacts,
    NextTab,
    PrevTab,
    Select(Screen), // Tab clicked

    // Page navigation
    Up,
    Down,
    PageUp,
    PageDown,

    // Links
    Activate,
    ActivateRow(usize), // Row clicked
    CopyLink,

    Quit,
}

/// Rows moved by PageUp/PageDown
pub const PAGE_STEP: isize = 5;

impl Action {
    /// Actions that can be bound from the config file
    pub const BINDABLE: [Action; 12] = [
        Action::ShowBio,
        Action::ShowProjects,
        Action::ShowContacts,
        Action::NextTab,
        Action::PrevTab,
        Action::Up,
        Action::Down,
        Action::PageUp,
        Action::PageDown,
        Action::Activate,
        Action::CopyLink,
        Action::Quit,
    ];

    /// Config name, None for actions that only come from the mouse
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Action::ShowBio => "show_bio",
            Action::ShowProjects => "show_projects",
            Action::ShowContacts => "show_contacts",
            Action::NextTab => "next_tab",
            Action::PrevTab => "prev_tab",
            Action::Up => "up",
            Action::Down => "down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Activate => "activate",
            Action::CopyLink => "copy_link",
            Action::Quit => "quit",
            Action::Select(_) | Action::ActivateRow(_) => return None,
        };
        Some(name)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::BINDABLE
            .into_iter()
            .find(|action| action.name() == Some(name))
    }
}

/// Parse a keybind string like "ctrl+c", "shift+tab" or "j"
pub fn parse_key_string(key_str: &str) -> Option<(KeyCode, KeyModifiers)> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return None;
    }

    // A lone "+" is the plus key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str),
    };

    let mut modifiers = KeyModifiers::empty();
    if !modifier_parts.is_empty() {
        for part in modifier_parts.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
    }

    let lowered = key_part.to_lowercase();
    let key_code = match lowered.as_str() {
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "page_up" | "pageup" => KeyCode::PageUp,
        "page_down" | "pagedown" => KeyCode::PageDown,
        f if f.len() > 1 && f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n) if (1..=12).contains(&n) => KeyCode::F(n),
            _ => return None,
        },
        _ => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return None,
            }
        }
    };

    Some(normalize_key(key_code, modifiers))
}

/// Canonical form used as the keybind map key.
///
/// Shift is folded into the key itself where the terminal already reports it
/// that way: uppercase characters and BackTab.
pub fn normalize_key(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => (
            KeyCode::Char(c.to_ascii_uppercase()),
            modifiers.difference(KeyModifiers::SHIFT),
        ),
        KeyCode::BackTab => (KeyCode::BackTab, modifiers.difference(KeyModifiers::SHIFT)),
        _ => (code, modifiers),
    }
}
