//! Tab selection state
//!
//! Which tab is active is a single `Screen` value, so exactly one tab is
//! selected at any time. It is owned by the navigation shell and starts over
//! on every launch.

use crate::data::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: Screen,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            current: Screen::START,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn is_selected(&self, screen: Screen) -> bool {
        self.current == screen
    }

    /// Per-tab selected flags in tab bar order
    pub fn flags(&self) -> [bool; 3] {
        Screen::ALL.map(|screen| self.is_selected(screen))
    }

    /// Returns true if the selection changed
    pub(crate) fn set(&mut self, screen: Screen) -> bool {
        let changed = self.current != screen;
        self.current = screen;
        changed
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_bio() {
        let selection = Selection::new();
        assert_eq!(selection.current(), Screen::Bio);
        assert_eq!(selection.flags(), [true, false, false]);
    }

    #[test]
    fn test_exactly_one_flag_for_every_transition() {
        for from in Screen::ALL {
            for to in Screen::ALL {
                let mut selection = Selection::new();
                selection.set(from);
                let changed = selection.set(to);

                assert_eq!(changed, from != to);
                let flags = selection.flags();
                assert_eq!(flags.iter().filter(|f| **f).count(), 1);
                assert!(flags[to.index()]);
            }
        }
    }
}
