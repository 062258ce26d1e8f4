//! Application theme
//!
//! Resolves the hex strings from `[colors]` into ratatui colors once at
//! startup. Bad values fall back to the built-in palette with a warning.

use crate::config::ColorConfig;
use ratatui::style::Color;

/// Resolved UI colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTheme {
    // Tab bar
    pub tab_bar_background: Color,
    pub tab_selected: Color,
    pub tab_unselected: Color,

    // Pages
    pub heading: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub highlight_background: Color,
    pub highlight_text: Color,
    pub border: Color,

    // Status line
    pub status_info: Color,
    pub status_error: Color,
}

impl AppTheme {
    pub fn from_config(colors: &ColorConfig) -> Self {
        let fallback = ColorConfig::default();
        let resolve = |field: &str, value: &str, default: &str| {
            parse_color(value).unwrap_or_else(|| {
                tracing::warn!("Invalid color for colors.{}: '{}', using {}", field, value, default);
                parse_color(default).unwrap_or(Color::Reset)
            })
        };

        Self {
            tab_bar_background: resolve(
                "tab_bar_background",
                &colors.tab_bar_background,
                &fallback.tab_bar_background,
            ),
            tab_selected: resolve("tab_selected", &colors.tab_selected, &fallback.tab_selected),
            tab_unselected: resolve(
                "tab_unselected",
                &colors.tab_unselected,
                &fallback.tab_unselected,
            ),
            heading: resolve("heading", &colors.heading, &fallback.heading),
            text: resolve("text", &colors.text, &fallback.text),
            text_secondary: resolve(
                "text_secondary",
                &colors.text_secondary,
                &fallback.text_secondary,
            ),
            highlight_background: resolve(
                "highlight_background",
                &colors.highlight_background,
                &fallback.highlight_background,
            ),
            highlight_text: resolve(
                "highlight_text",
                &colors.highlight_text,
                &fallback.highlight_text,
            ),
            border: resolve("border", &colors.border, &fallback.border),
            status_info: resolve("status_info", &colors.status_info, &fallback.status_info),
            status_error: resolve("status_error", &colors.status_error, &fallback.status_error),
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}

/// Parse "#RRGGBB" (or "default"/"reset") into a color
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("default") || value.eq_ignore_ascii_case("reset") {
        return Some(Color::Reset);
    }

    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}
