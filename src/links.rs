//! External link dispatch.
//!
//! Hands a URL to whatever the operating system has registered for its
//! scheme (browser, mail client, dialer). The call is fire-and-forget: we
//! never wait on the launched application.

use anyhow::{Context, Result};
use std::fmt;

/// Kind of external handler a URL is expected to reach, derived from its scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Mail,
    Phone,
    Web,
    Other,
}

impl LinkKind {
    /// Classify a URL by scheme. The URL is not validated beyond that.
    pub fn classify(url: &str) -> Self {
        let scheme = match url.split_once(':') {
            Some((scheme, _)) => scheme.to_ascii_lowercase(),
            None => return LinkKind::Other,
        };

        match scheme.as_str() {
            "mailto" => LinkKind::Mail,
            "tel" => LinkKind::Phone,
            "http" | "https" => LinkKind::Web,
            _ => LinkKind::Other,
        }
    }

    /// Short verb phrase for status messages
    pub fn describe(self) -> &'static str {
        match self {
            LinkKind::Mail => "mail client",
            LinkKind::Phone => "dialer",
            LinkKind::Web => "browser",
            LinkKind::Other => "default handler",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Boundary to the platform's external-open facility
pub trait LinkDispatcher {
    /// Open `url` in an external handler. The string is passed through unchanged.
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Dispatcher backed by the OS default URL handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDispatcher;

impl LinkDispatcher for SystemDispatcher {
    fn open_url(&self, url: &str) -> Result<()> {
        let kind = LinkKind::classify(url);
        tracing::info!(%url, handler = %kind, "Opening link");

        open::that_detached(url).with_context(|| format!("No {} could open {}", kind, url))
    }
}
