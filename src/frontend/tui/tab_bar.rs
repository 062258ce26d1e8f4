//! Bottom tab bar: one column per screen, icon above label.

use super::glyphs::icon_glyph;
use super::layout::tab_columns;
use crate::core::Selection;
use crate::data::Screen;
use crate::theme::AppTheme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Widget;

pub fn render_tab_bar(selection: &Selection, theme: &AppTheme, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    buf.set_style(area, Style::default().bg(theme.tab_bar_background));

    let tabs = Screen::ALL.into_iter().zip(selection.flags());
    for ((screen, selected), column) in tabs.zip(tab_columns(area)) {
        let style = if selected {
            Style::default()
                .fg(theme.tab_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.tab_unselected)
        };

        let icon_row = Rect::new(column.x, column.y, column.width, 1);
        Line::styled(icon_glyph(screen.icon()), style)
            .centered()
            .render(icon_row, buf);

        if column.height > 1 {
            let label_row = Rect::new(column.x, column.y + 1, column.width, 1);
            Line::styled(screen.label(), style)
                .centered()
                .render(label_row, buf);
        }
    }
}

/// Which tab a click at (x, y) lands on. The whole column is clickable.
pub fn tab_at(x: u16, y: u16, area: Rect) -> Option<Screen> {
    if y < area.y || y >= area.bottom() {
        return None;
    }

    Screen::ALL
        .into_iter()
        .zip(tab_columns(area))
        .find(|(_, column)| x >= column.x && x < column.right())
        .map(|(screen, _)| screen)
}
