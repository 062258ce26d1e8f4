//! Screen regions: the mounted page on top, a status line, and the tab bar
//! pinned to the bottom edge.

use ratatui::layout::{Constraint, Layout, Rect};

/// Icon row plus label row
pub const TAB_BAR_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub page: Rect,
    pub status: Rect,
    pub tab_bar: Rect,
}

impl ShellLayout {
    pub fn new(area: Rect) -> Self {
        let [page, status, tab_bar] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(TAB_BAR_HEIGHT),
        ])
        .areas(area);

        Self {
            page,
            status,
            tab_bar,
        }
    }
}

/// Split the tab bar into three equal-width columns
pub fn tab_columns(tab_bar: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(tab_bar)
}
