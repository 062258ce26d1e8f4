//! Navigation shell: tab selection plus the page router it drives.
//!
//! `select` is the only place the selection changes. Tab clicks, keyboard
//! tab switching and navigation by route name all go through it, so the
//! selected tab and the mounted page cannot drift apart.

use super::router::{Page, Router};
use super::state::Selection;
use crate::data::{Content, Screen};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route '{0}' (expected one of: personal_info, projects, contacts)")]
    Unknown(String),
}

#[derive(Debug, Clone)]
pub struct Shell {
    selection: Selection,
    router: Router,
}

impl Shell {
    pub fn new(content: Content) -> Self {
        Self {
            selection: Selection::new(),
            router: Router::new(content),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The mounted page, for cursor and scroll changes. Switching pages goes
    /// through `select`.
    pub fn page_mut(&mut self) -> &mut Page {
        self.router.page_mut()
    }

    pub fn current(&self) -> Screen {
        self.selection.current()
    }

    /// Make `screen` the active tab and mount its page.
    /// Returns true if the active tab changed.
    pub fn select(&mut self, screen: Screen) -> bool {
        let previous = self.selection.current();
        let changed = self.selection.set(screen);
        self.router.mount(screen);
        debug_assert_eq!(self.router.active(), screen);

        if changed {
            tracing::debug!(from = %previous, to = %screen, "Switched tab");
        }
        changed
    }

    /// Navigate by route identifier
    pub fn navigate(&mut self, route: &str) -> Result<Screen, RouteError> {
        let screen =
            Screen::from_route(route).ok_or_else(|| RouteError::Unknown(route.to_string()))?;
        self.select(screen);
        Ok(screen)
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.current().next())
    }

    pub fn select_previous(&mut self) -> bool {
        self.select(self.current().previous())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Content::PORTFOLIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(shell: &Shell) {
        let flags = shell.selection().flags();
        assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        assert!(flags[shell.current().index()]);
        assert_eq!(shell.router().active(), shell.current());
    }

    #[test]
    fn test_initial_route_is_bio() {
        let shell = Shell::default();
        assert_eq!(shell.current(), Screen::Bio);
        assert_eq!(shell.router().active(), Screen::Bio);
        assert_consistent(&shell);
    }

    #[test]
    fn test_every_pair_of_taps_keeps_one_tab_selected() {
        for first in Screen::ALL {
            for second in Screen::ALL {
                let mut shell = Shell::default();
                shell.select(first);
                assert_consistent(&shell);
                shell.select(second);
                assert_consistent(&shell);
                assert_eq!(shell.current(), second);
            }
        }
    }

    #[test]
    fn test_navigate_by_route() {
        let mut shell = Shell::default();
        assert_eq!(shell.navigate("contacts"), Ok(Screen::Contacts));
        assert_consistent(&shell);
        assert_eq!(shell.navigate("personal_info"), Ok(Screen::Bio));
        assert_consistent(&shell);
    }

    #[test]
    fn test_unknown_route_leaves_state_untouched() {
        let mut shell = Shell::default();
        shell.select(Screen::Projects);
        let err = shell.navigate("bio").unwrap_err();
        assert_eq!(err, RouteError::Unknown("bio".to_string()));
        assert_eq!(shell.current(), Screen::Projects);
        assert_consistent(&shell);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut shell = Shell::default();
        assert!(shell.select_previous());
        assert_eq!(shell.current(), Screen::Contacts);
        assert!(shell.select_next());
        assert_eq!(shell.current(), Screen::Bio);
        assert_consistent(&shell);
    }

    #[test]
    fn test_page_changes_keep_the_mounted_screen() {
        let mut shell = Shell::default();
        shell.select(Screen::Contacts);
        shell.page_mut().move_by(2);
        assert_eq!(shell.page_mut().list().and_then(|l| l.cursor()), Some(2));
        assert_consistent(&shell);

        // Reselecting remounts with fresh state
        shell.select(Screen::Bio);
        shell.select(Screen::Contacts);
        assert_eq!(shell.router().page().list().and_then(|l| l.cursor()), Some(0));
        assert_consistent(&shell);
    }

    #[test]
    fn test_selecting_active_tab_is_noop() {
        let mut shell = Shell::default();
        assert!(!shell.select(Screen::Bio));
        assert_consistent(&shell);
    }
}
