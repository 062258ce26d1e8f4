//! Page rendering for the three screens.
//!
//! Each page is drawn inside a frame titled with its heading. The bio is a
//! scrollable paragraph; projects and contacts are link lists.

use super::glyphs::resource_glyph;
use super::link_list::LinkList;
use crate::config::UiConfig;
use crate::core::{AppCore, Page};
use crate::data::{Biography, ContactEntry, Project, Screen};
use crate::theme::AppTheme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Title line, description line, spacer
pub const PROJECT_ROW_HEIGHT: u16 = 3;
pub const CONTACT_ROW_HEIGHT: u16 = 1;

const PHOTO_FRAME_WIDTH: usize = 7;

pub fn row_height(screen: Screen) -> u16 {
    match screen {
        Screen::Projects => PROJECT_ROW_HEIGHT,
        Screen::Bio | Screen::Contacts => CONTACT_ROW_HEIGHT,
    }
}

fn page_block(screen: Screen, ui: &UiConfig, theme: &AppTheme) -> Block<'static> {
    let block = match ui.border_style.as_str() {
        "none" => Block::default(),
        style => {
            let border_type = match style {
                "single" => BorderType::Plain,
                "double" => BorderType::Double,
                "thick" => BorderType::Thick,
                _ => BorderType::Rounded,
            };
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(theme.border))
        }
    };

    block.title(Line::styled(
        format!(" {} ", screen.heading()),
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Area inside the page frame where rows are drawn
pub fn page_inner(core: &AppCore, area: Rect) -> Rect {
    page_block(core.current_screen(), &core.config.ui, &core.theme).inner(area)
}

pub fn render_page(core: &mut AppCore, area: Rect, buf: &mut Buffer) {
    let block = page_block(core.current_screen(), &core.config.ui, &core.theme);
    let inner = block.inner(area);
    block.render(area, buf);

    let content = *core.shell.router().content();
    let theme = &core.theme;
    let highlight = Style::default()
        .bg(theme.highlight_background)
        .fg(theme.highlight_text);

    match core.shell.page_mut() {
        Page::Bio(bio) => {
            let lines = bio_lines(content.biography, theme, inner.width);
            let max_scroll = lines.len().saturating_sub(inner.height as usize);
            bio.clamp_scroll(max_scroll.min(u16::MAX as usize) as u16);

            Paragraph::new(lines)
                .scroll((bio.scroll(), 0))
                .render(inner, buf);
        }
        Page::Projects(list) => {
            LinkList::new(project_rows(content.projects, theme), PROJECT_ROW_HEIGHT)
                .cursor(list.cursor())
                .highlight(highlight)
                .render(inner, buf);
        }
        Page::Contacts(list) => {
            LinkList::new(contact_rows(content.contacts, theme), CONTACT_ROW_HEIGHT)
                .cursor(list.cursor())
                .highlight(highlight)
                .render(inner, buf);
        }
    }
}

fn bio_lines(biography: &Biography, theme: &AppTheme, width: u16) -> Vec<Line<'static>> {
    let frame = Style::default().fg(theme.text_secondary);
    let horizontal = "─".repeat(PHOTO_FRAME_WIDTH - 2);
    let pad = " ".repeat((PHOTO_FRAME_WIDTH - 3) / 2);

    let mut lines = vec![
        Line::styled(
            biography.name,
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::default(),
        Line::styled(format!("╭{}╮", horizontal), frame).centered(),
        Line::styled(
            format!("│{}{}{}│", pad, resource_glyph(biography.photo), pad),
            frame,
        )
        .centered(),
        Line::styled(format!("╰{}╯", horizontal), frame).centered(),
        Line::default(),
    ];

    let text = Style::default().fg(theme.text);
    lines.extend(
        wrap_text(biography.text, width as usize)
            .into_iter()
            .map(|line| Line::styled(line, text)),
    );
    lines
}

fn project_rows(projects: &'static [Project], theme: &AppTheme) -> Vec<Vec<Line<'static>>> {
    projects
        .iter()
        .map(|project| {
            vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", resource_glyph(project.image)),
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled(
                        project.title,
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::styled(
                    format!("  {}", project.description),
                    Style::default().fg(theme.text_secondary),
                ),
            ]
        })
        .collect()
}

fn contact_rows(contacts: &'static [ContactEntry], theme: &AppTheme) -> Vec<Vec<Line<'static>>> {
    contacts
        .iter()
        .map(|contact| {
            vec![Line::from(vec![
                Span::styled(
                    format!("{} ", resource_glyph(contact.icon)),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(contact.label, Style::default().fg(theme.text)),
            ])]
        })
        .collect()
}

/// Render the mounted page off-screen at its full height and return the rows
/// as plain text. Used by `portfolio print`.
pub fn render_to_lines(core: &mut AppCore, width: u16) -> Vec<String> {
    let content = *core.shell.router().content();
    let inner_width = width.saturating_sub(2);
    let body = match core.current_screen() {
        Screen::Bio => bio_lines(content.biography, &core.theme, inner_width).len(),
        Screen::Projects => content.projects.len() * PROJECT_ROW_HEIGHT as usize,
        Screen::Contacts => content.contacts.len() * CONTACT_ROW_HEIGHT as usize,
    };
    let height = (body + 2).min(u16::MAX as usize) as u16;

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render_page(core, area, &mut buf);

    let mut lines: Vec<String> = (0..height)
        .map(|y| {
            let row: String = (0..width).map(|x| buf[(x, y)].symbol()).collect();
            row.trim_end().to_string()
        })
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Word wrap by display width. Explicit newlines are kept and words longer
/// than the width are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let options = textwrap::Options::new(width)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .break_words(true);

    text.split('\n')
        .flat_map(|paragraph| textwrap::wrap(paragraph, &options))
        .map(|line| line.into_owned())
        .collect()
}
