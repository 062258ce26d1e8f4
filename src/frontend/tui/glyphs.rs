//! Terminal stand-ins for tab icons and image resources.

use crate::data::{Icon, ResourceHandle};

/// Drawn for handles with no glyph of their own
pub const MISSING: &str = "□";

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Person => "☺",
        Icon::Done => "✔",
        Icon::Call => "☎",
    }
}

/// Resolve an image handle to a single-cell glyph
pub fn resource_glyph(handle: ResourceHandle) -> &'static str {
    match handle.name() {
        "githubicon" => "◆",
        "emailicon" => "✉",
        "telefoneicon" => "☎",
        "instaicon" => "◎",
        "linkedinicon" => "▣",
        "eu" => "☺",
        _ => MISSING,
    }
}
