//! The three navigable screens and their tab metadata.

use std::fmt;

/// Icon shown next to a tab label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Person,
    Done,
    Call,
}

/// A top-level page reachable from the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Bio,
    Projects,
    Contacts,
}

impl Screen {
    /// Tab bar order
    pub const ALL: [Screen; 3] = [Screen::Bio, Screen::Projects, Screen::Contacts];

    /// Route shown on startup
    pub const START: Screen = Screen::Bio;

    /// Stable route identifier
    pub fn route(self) -> &'static str {
        match self {
            Screen::Bio => "personal_info",
            Screen::Projects => "projects",
            Screen::Contacts => "contacts",
        }
    }

    /// Label shown in the tab bar
    pub fn label(self) -> &'static str {
        match self {
            Screen::Bio => "Bio",
            Screen::Projects => "Projetos",
            Screen::Contacts => "Social",
        }
    }

    /// Heading shown at the top of the page
    pub fn heading(self) -> &'static str {
        match self {
            Screen::Bio => "Bio",
            Screen::Projects => "Projetos",
            Screen::Contacts => "Contatos",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Screen::Bio => Icon::Person,
            Screen::Projects => Icon::Done,
            Screen::Contacts => Icon::Call,
        }
    }

    /// Position in the tab bar
    pub fn index(self) -> usize {
        match self {
            Screen::Bio => 0,
            Screen::Projects => 1,
            Screen::Contacts => 2,
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.route() == route)
    }

    /// Next tab to the right, wrapping to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next tab to the left, wrapping to the last
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
