//! Page router
//!
//! Maps the selected screen to the one page that is mounted. Mounting a
//! different screen drops the outgoing page together with its cursor and
//! scroll position.

use crate::data::{Content, Screen};

/// Transient state of the mounted Bio page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BioPage {
    scroll: u16,
}

impl BioPage {
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32);
        self.scroll = next as u16;
    }

    /// Pull the scroll offset back inside the rendered text
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

/// Transient state of a mounted list page (projects or contacts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPage {
    cursor: usize,
    len: usize,
}

impl ListPage {
    fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    /// Highlighted row, None when the list is empty
    pub fn cursor(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the highlight, stopping at the first and last rows
    pub fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let max = (self.len - 1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    /// Highlight a specific row. Out-of-range rows are ignored.
    pub fn select(&mut self, row: usize) -> bool {
        if row < self.len {
            self.cursor = row;
            true
        } else {
            false
        }
    }
}

/// The page currently mounted by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Bio(BioPage),
    Projects(ListPage),
    Contacts(ListPage),
}

impl Page {
    fn mount(screen: Screen, content: &Content) -> Self {
        match screen {
            Screen::Bio => Page::Bio(BioPage::default()),
            Screen::Projects => Page::Projects(ListPage::new(content.projects.len())),
            Screen::Contacts => Page::Contacts(ListPage::new(content.contacts.len())),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            Page::Bio(_) => Screen::Bio,
            Page::Projects(_) => Screen::Projects,
            Page::Contacts(_) => Screen::Contacts,
        }
    }

    pub fn list(&self) -> Option<&ListPage> {
        match self {
            Page::Projects(list) | Page::Contacts(list) => Some(list),
            Page::Bio(_) => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut ListPage> {
        match self {
            Page::Projects(list) | Page::Contacts(list) => Some(list),
            Page::Bio(_) => None,
        }
    }

    /// Scroll the bio text or move the list highlight
    pub fn move_by(&mut self, delta: isize) {
        match self {
            Page::Bio(bio) => bio.scroll_by(delta as i32),
            Page::Projects(list) | Page::Contacts(list) => list.move_by(delta),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    content: Content,
    page: Page,
}

impl Router {
    pub fn new(content: Content) -> Self {
        Self {
            page: Page::mount(Screen::START, &content),
            content,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn active(&self) -> Screen {
        self.page.screen()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Mount the page for `screen`, unmounting the current one.
    /// Mounting the active screen again keeps the existing page.
    pub(super) fn mount(&mut self, screen: Screen) -> bool {
        if self.page.screen() == screen {
            return false;
        }
        self.page = Page::mount(screen, &self.content);
        true
    }

    /// URL behind a row of the mounted page
    pub fn url_at(&self, row: usize) -> Option<&'static str> {
        match self.page {
            Page::Bio(_) => None,
            Page::Projects(_) => self.content.projects.get(row).map(|p| p.url),
            Page::Contacts(_) => self.content.contacts.get(row).map(|c| c.url),
        }
    }

    /// URL behind the highlighted row
    pub fn selected_url(&self) -> Option<&'static str> {
        self.page
            .list()
            .and_then(|list| list.cursor())
            .and_then(|row| self.url_at(row))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Content::PORTFOLIO)
    }
}
