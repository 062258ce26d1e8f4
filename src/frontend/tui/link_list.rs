//! Scrolling list of fixed-height link rows with one highlighted row.
//!
//! The viewport offset is derived from the cursor on every frame, so the
//! same state always draws the same rows and hit testing can recompute it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

pub struct LinkList<'a> {
    /// Each row's lines; the remainder of `row_height` is left blank
    rows: Vec<Vec<Line<'a>>>,
    row_height: u16,
    cursor: Option<usize>,
    highlight: Style,
}

impl<'a> LinkList<'a> {
    pub fn new(rows: Vec<Vec<Line<'a>>>, row_height: u16) -> Self {
        Self {
            rows,
            row_height: row_height.max(1),
            cursor: None,
            highlight: Style::default(),
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn highlight(mut self, style: Style) -> Self {
        self.highlight = style;
        self
    }
}

impl Widget for LinkList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = visible_rows(area.height, self.row_height);
        let offset = viewport_offset(self.cursor, self.rows.len(), visible);

        for (slot, (index, lines)) in self
            .rows
            .into_iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let top = area.y + slot as u16 * self.row_height;
            let used = (lines.len() as u16).min(self.row_height);

            for (i, line) in lines.into_iter().take(used as usize).enumerate() {
                line.render(Rect::new(area.x, top + i as u16, area.width, 1), buf);
            }

            if self.cursor == Some(index) && used > 0 {
                buf.set_style(Rect::new(area.x, top, area.width, used), self.highlight);
            }
        }
    }
}

/// Whole rows that fit in `height`
pub fn visible_rows(height: u16, row_height: u16) -> usize {
    (height / row_height.max(1)) as usize
}

/// First row shown so that the cursor row is on screen
pub fn viewport_offset(cursor: Option<usize>, len: usize, visible: usize) -> usize {
    match cursor {
        Some(cursor) if visible > 0 && cursor < len && cursor >= visible => cursor + 1 - visible,
        _ => 0,
    }
}

/// Row under a click at (x, y), accounting for the scroll offset
pub fn row_at(x: u16, y: u16, area: Rect, row_height: u16, offset: usize, len: usize) -> Option<usize> {
    if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
        return None;
    }

    let slot = ((y - area.y) / row_height.max(1)) as usize;
    if slot >= visible_rows(area.height, row_height) {
        return None;
    }

    let index = offset + slot;
    if index < len {
        Some(index)
    } else {
        None
    }
}
