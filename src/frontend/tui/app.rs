use super::layout::ShellLayout;
use super::link_list::{row_at, viewport_offset, visible_rows};
use super::pages::{page_inner, render_page, row_height};
use super::tab_bar::{render_tab_bar, tab_at};
use crate::config::UiConfig;
use crate::core::{Action, AppCore, StatusMessage};
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::AppTheme;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Widget,
    Terminal,
};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
///
/// Renders the application with ratatui and reads input via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    mouse_capture: bool,
    restored: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enters the alternate screen and
    /// enables mouse capture unless the config turns it off.
    pub fn new(ui: &UiConfig) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
        if ui.mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(ui.poll_timeout_ms),
            mouse_capture: ui.mouse,
            restored: false,
        })
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::mouse(
                mouse_event.kind,
                mouse_event.column,
                mouse_event.row,
                mouse_event.modifiers,
            )),
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Some(frontend_event) = Self::convert_event(event::read()?) {
                events.push(frontend_event);
            }
        }

        Ok(events)
    }

    fn render(&mut self, core: &mut AppCore) -> Result<()> {
        self.terminal
            .draw(|f| {
                let area = f.area();
                draw_shell(core, area, f.buffer_mut());
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn mouse_action(&self, core: &AppCore, event: &FrontendEvent) -> Option<Action> {
        let FrontendEvent::Mouse { kind, x, y, .. } = *event else {
            return None;
        };

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (width, height) = self.size();
                hit_test(core, Rect::new(0, 0, width, height), x, y)
            }
            MouseEventKind::ScrollUp => Some(Action::Up),
            MouseEventKind::ScrollDown => Some(Action::Down),
            _ => None,
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        if self.mouse_capture {
            execute!(self.terminal.backend_mut(), DisableMouseCapture)?;
        }
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

/// Draw the whole shell: mounted page, status line, tab bar
pub fn draw_shell(core: &mut AppCore, area: Rect, buf: &mut Buffer) {
    let layout = ShellLayout::new(area);

    render_page(core, layout.page, buf);
    render_status(core.status.as_ref(), &core.theme, layout.status, buf);
    render_tab_bar(core.shell.selection(), &core.theme, layout.tab_bar, buf);
}

fn render_status(status: Option<&StatusMessage>, theme: &AppTheme, area: Rect, buf: &mut Buffer) {
    let Some(status) = status else {
        return;
    };

    let color = if status.is_error {
        theme.status_error
    } else {
        theme.status_info
    };
    Line::styled(format!(" {}", status.text), Style::default().fg(color)).render(area, buf);
}

/// Resolve a left click at (x, y) against the layout `draw_shell` produces
pub fn hit_test(core: &AppCore, area: Rect, x: u16, y: u16) -> Option<Action> {
    let layout = ShellLayout::new(area);

    if let Some(screen) = tab_at(x, y, layout.tab_bar) {
        return Some(Action::Select(screen));
    }

    let page = core.shell.router().page();
    let list = page.list()?;
    if list.is_empty() {
        return None;
    }
    let inner = page_inner(core, layout.page);
    let height = row_height(page.screen());
    let offset = viewport_offset(list.cursor(), list.len(), visible_rows(inner.height, height));

    row_at(x, y, inner, height, offset, list.len()).map(Action::ActivateRow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::app_core::tests::{test_core, RecordingDispatcher};
    use crate::data::{Content, Screen, BIOGRAPHY, CONTACTS, PROJECTS};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 40,
    };

    fn rows(buf: &Buffer) -> Vec<String> {
        (buf.area.y..buf.area.bottom())
            .map(|y| {
                (buf.area.x..buf.area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn draw(core: &mut AppCore) -> Buffer {
        let mut buf = Buffer::empty(AREA);
        draw_shell(core, AREA, &mut buf);
        buf
    }

    fn find_row(rows: &[String], needle: &str) -> usize {
        rows.iter()
            .position(|row| row.contains(needle))
            .unwrap_or_else(|| panic!("{:?} not drawn", needle))
    }

    #[test]
    fn test_startup_shows_bio() {
        let (mut core, _) = test_core();
        let rows = rows(&draw(&mut core));
        assert!(rows[0].contains(" Bio "));
        assert!(rows[1].contains("Caio Braga"));
        assert!(rows[39].contains("Projetos"));
    }

    #[test]
    fn test_projects_drawn_in_order() {
        let (mut core, _) = test_core();
        core.apply(Action::ShowProjects);
        let rows = rows(&draw(&mut core));

        assert!(rows[0].contains(" Projetos "));
        for (i, project) in PROJECTS.iter().enumerate() {
            // Trailing space keeps "Schedule" from matching "ScheduleAPI"
            let row = find_row(&rows, &format!("◆ {} ", project.title));
            assert_eq!(row, 1 + i * 3, "{}", project.title);
        }
    }

    #[test]
    fn test_contacts_drawn_in_order() {
        let (mut core, _) = test_core();
        core.apply(Action::ShowContacts);
        let rows = rows(&draw(&mut core));

        assert!(rows[0].contains(" Contatos "));
        for (i, contact) in CONTACTS.iter().enumerate() {
            assert_eq!(find_row(&rows, contact.label), 1 + i);
        }
    }

    #[test]
    fn test_redraw_is_identical() {
        for screen in Screen::ALL {
            let (mut core, _) = test_core();
            core.apply(Action::Select(screen));
            core.apply(Action::Down);
            let first = draw(&mut core);
            let second = draw(&mut core);
            assert_eq!(first, second, "{}", screen);
        }
    }

    #[test]
    fn test_status_line() {
        let (mut core, _) = test_core();
        core.status = Some(StatusMessage::error("No browser could open x"));
        let buf = draw(&mut core);
        let rows = rows(&buf);
        assert!(rows[37].contains("No browser could open x"));
        assert_eq!(buf[(1, 37)].fg, core.theme.status_error);
    }

    #[test]
    fn test_click_tab_selects_it() {
        let (mut core, _) = test_core();
        let action = hit_test(&core, AREA, 25, 39);
        assert_eq!(action, Some(Action::Select(Screen::Projects)));

        core.apply(Action::Select(Screen::Projects));
        let buf = draw(&mut core);
        let labels = rows(&buf)[39].clone();
        let x = labels.find("Projetos").unwrap() as u16;
        assert_eq!(buf[(x, 39)].fg, core.theme.tab_selected);
    }

    #[test]
    fn test_click_rows() {
        let (mut core, opened) = test_core();
        assert_eq!(hit_test(&core, AREA, 10, 5), None);

        core.apply(Action::ShowProjects);
        // Row 1 spans lines 4..=6 inside the frame
        assert_eq!(hit_test(&core, AREA, 10, 4), Some(Action::ActivateRow(1)));
        assert_eq!(hit_test(&core, AREA, 10, 6), Some(Action::ActivateRow(1)));
        // Border
        assert_eq!(hit_test(&core, AREA, 0, 4), None);
        // Below the last project
        assert_eq!(hit_test(&core, AREA, 10, 30), None);

        if let Some(action) = hit_test(&core, AREA, 10, 4) {
            core.apply(action);
        }
        assert_eq!(*opened.borrow(), vec![PROJECTS[1].url.to_string()]);

        core.apply(Action::ShowContacts);
        assert_eq!(hit_test(&core, AREA, 10, 5), Some(Action::ActivateRow(4)));
    }

    #[test]
    fn test_empty_lists_draw_heading_only() {
        let recorder = RecordingDispatcher::default();
        let opened = recorder.opened.clone();
        let empty = Content {
            biography: &BIOGRAPHY,
            projects: &[],
            contacts: &[],
        };
        let mut core =
            AppCore::with_dispatcher(Config::embedded().unwrap(), empty, Box::new(recorder));

        let pages = [
            (Screen::Projects, " Projetos "),
            (Screen::Contacts, " Contatos "),
        ];
        for (screen, heading) in pages {
            core.apply(Action::Select(screen));
            core.apply(Action::Down);
            let buf = draw(&mut core);
            let rows = rows(&buf);

            assert!(rows[0].contains(heading), "{}", screen);
            // Nothing inside the frame, and nothing highlighted
            for y in 1..36u16 {
                for x in 1..AREA.width - 1 {
                    let cell = &buf[(x, y)];
                    assert_eq!(cell.symbol(), " ", "{} at ({}, {})", screen, x, y);
                    assert_ne!(cell.bg, core.theme.highlight_background, "{}", screen);
                }
            }

            for y in [1, 2, 5, 20, 35] {
                assert_eq!(hit_test(&core, AREA, 10, y), None, "{} row {}", screen, y);
            }
            // Tabs stay clickable
            assert_eq!(
                hit_test(&core, AREA, 25, 39),
                Some(Action::Select(Screen::Projects))
            );

            core.apply(Action::Activate);
            core.apply(Action::ActivateRow(0));
        }
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn test_click_follows_scrolled_viewport() {
        let (mut core, _) = test_core();
        let small = Rect::new(0, 0, 40, 12);
        core.apply(Action::ShowProjects);
        for _ in 0..6 {
            core.apply(Action::Down);
        }

        // 12 rows - 3 (status + tabs) - 2 (frame) leaves two project rows
        let mut buf = Buffer::empty(small);
        draw_shell(&mut core, small, &mut buf);
        let rows = rows(&buf);
        assert!(rows[1].contains(PROJECTS[5].title));
        assert!(rows[4].contains(PROJECTS[6].title));

        assert_eq!(hit_test(&core, small, 5, 1), Some(Action::ActivateRow(5)));
        assert_eq!(hit_test(&core, small, 5, 4), Some(Action::ActivateRow(6)));
    }
}
