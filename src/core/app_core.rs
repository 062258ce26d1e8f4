use crate::config::Config;
use crate::core::actions::{Action, PAGE_STEP};
use crate::core::input_router::{build_keybind_map, route_key, KeybindMap};
use crate::core::shell::Shell;
use crate::data::{Content, Screen};
use crate::links::{LinkDispatcher, LinkKind, SystemDispatcher};
use crate::theme::AppTheme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

/// One-line notice shown above the tab bar until the next action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Core application state (frontend-agnostic)
///
/// Owns the navigation shell, the resolved keybinds and theme, and the link
/// dispatcher. Frontends feed it `Action`s and read it back to render.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Colors resolved from config
    pub theme: AppTheme,

    /// Tab selection and the mounted page
    pub shell: Shell,

    /// Parsed keybindings map (key combo -> action)
    pub keybind_map: KeybindMap,

    /// Application running flag
    pub running: bool,

    /// Set whenever state changed since the last frame
    pub needs_render: bool,

    /// Result of the last link action, if any
    pub status: Option<StatusMessage>,

    dispatcher: Box<dyn LinkDispatcher>,
    copy_to_clipboard: fn(&str) -> Result<()>,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        Self::with_dispatcher(config, Content::PORTFOLIO, Box::new(SystemDispatcher))
    }

    pub fn with_dispatcher(
        config: Config,
        content: Content,
        dispatcher: Box<dyn LinkDispatcher>,
    ) -> Self {
        let keybind_map = build_keybind_map(&config.keybinds);
        let theme = AppTheme::from_config(&config.colors);

        Self {
            config,
            theme,
            shell: Shell::new(content),
            keybind_map,
            running: true,
            needs_render: true,
            status: None,
            dispatcher,
            copy_to_clipboard: crate::clipboard::copy,
        }
    }

    /// Replace the clipboard writer
    #[cfg(test)]
    pub fn with_clipboard(mut self, copy: fn(&str) -> Result<()>) -> Self {
        self.copy_to_clipboard = copy;
        self
    }

    pub fn current_screen(&self) -> Screen {
        self.shell.current()
    }

    /// Handle a key press. Returns false if the key is unbound.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match route_key(&self.keybind_map, code, modifiers) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => {
                tracing::trace!("Unbound key {:?} {:?}", code, modifiers);
                false
            }
        }
    }

    pub fn apply(&mut self, action: Action) {
        tracing::trace!("Applying {:?}", action);
        self.status = None;
        self.needs_render = true;

        match action {
            Action::ShowBio => {
                self.shell.select(Screen::Bio);
            }
            Action::ShowProjects => {
                self.shell.select(Screen::Projects);
            }
            Action::ShowContacts => {
                self.shell.select(Screen::Contacts);
            }
            Action::Select(screen) => {
                self.shell.select(screen);
            }
            Action::NextTab => {
                self.shell.select_next();
            }
            Action::PrevTab => {
                self.shell.select_previous();
            }
            Action::Up => self.shell.page_mut().move_by(-1),
            Action::Down => self.shell.page_mut().move_by(1),
            Action::PageUp => self.shell.page_mut().move_by(-PAGE_STEP),
            Action::PageDown => self.shell.page_mut().move_by(PAGE_STEP),
            Action::Activate => self.activate_selected(),
            Action::ActivateRow(row) => {
                let selected = self
                    .shell
                    .page_mut()
                    .list_mut()
                    .map(|list| list.select(row))
                    .unwrap_or(false);
                if selected {
                    self.activate_selected();
                }
            }
            Action::CopyLink => self.copy_selected(),
            Action::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
        }
    }

    fn activate_selected(&mut self) {
        let Some(url) = self.shell.router().selected_url() else {
            return;
        };

        let kind = LinkKind::classify(url);
        match self.dispatcher.open_url(url) {
            Ok(()) => {
                self.status = Some(StatusMessage::info(format!("Opening {} in {}", url, kind)));
            }
            Err(e) => {
                tracing::error!("Failed to open {}: {:#}", url, e);
                self.status = Some(StatusMessage::error(format!("{:#}", e)));
            }
        }
    }

    fn copy_selected(&mut self) {
        let Some(url) = self.shell.router().selected_url() else {
            return;
        };

        match (self.copy_to_clipboard)(url) {
            Ok(()) => self.status = Some(StatusMessage::info(format!("Copied {}", url))),
            Err(e) => {
                tracing::warn!("Failed to copy {}: {:#}", url, e);
                self.status = Some(StatusMessage::error(format!("{:#}", e)));
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::{CONTACTS, PROJECTS};
    use anyhow::bail;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Dispatcher that records every URL it is handed
    #[derive(Clone, Default)]
    pub(crate) struct RecordingDispatcher {
        pub opened: Rc<RefCell<Vec<String>>>,
    }

    impl LinkDispatcher for RecordingDispatcher {
        fn open_url(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct NoHandlerDispatcher;

    impl LinkDispatcher for NoHandlerDispatcher {
        fn open_url(&self, url: &str) -> Result<()> {
            bail!("No application registered for {}", url)
        }
    }

    fn no_clipboard(_: &str) -> Result<()> {
        bail!("Clipboard unavailable")
    }

    fn fake_clipboard(_: &str) -> Result<()> {
        Ok(())
    }

    pub(crate) fn test_core() -> (AppCore, Rc<RefCell<Vec<String>>>) {
        let recorder = RecordingDispatcher::default();
        let opened = recorder.opened.clone();
        let core = AppCore::with_dispatcher(
            Config::embedded().unwrap(),
            Content::PORTFOLIO,
            Box::new(recorder),
        )
        .with_clipboard(fake_clipboard);
        (core, opened)
    }

    #[test]
    fn test_starts_on_bio_and_running() {
        let (core, _) = test_core();
        assert!(core.running);
        assert_eq!(core.current_screen(), Screen::Bio);
        assert!(core.status.is_none());
    }

    #[test]
    fn test_every_project_row_dispatches_its_url() {
        let (mut core, opened) = test_core();
        core.apply(Action::ShowProjects);

        for row in 0..PROJECTS.len() {
            core.apply(Action::ActivateRow(row));
        }

        let expected: Vec<String> = PROJECTS.iter().map(|p| p.url.to_string()).collect();
        assert_eq!(*opened.borrow(), expected);
    }

    #[test]
    fn test_keyboard_activation_on_contacts() {
        let (mut core, opened) = test_core();
        assert!(core.handle_key(KeyCode::Char('3'), KeyModifiers::NONE));
        assert_eq!(core.current_screen(), Screen::Contacts);

        core.handle_key(KeyCode::Down, KeyModifiers::NONE);
        core.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(*opened.borrow(), vec![CONTACTS[1].url.to_string()]);
        let status = core.status.clone().expect("status after dispatch");
        assert!(!status.is_error);
        assert!(status.text.contains("dialer"));
    }

    #[test]
    fn test_bio_has_nothing_to_open() {
        let (mut core, opened) = test_core();
        core.apply(Action::Activate);
        core.apply(Action::ActivateRow(0));
        core.apply(Action::CopyLink);
        assert!(opened.borrow().is_empty());
        assert!(core.status.is_none());
    }

    #[test]
    fn test_out_of_range_row_is_ignored() {
        let (mut core, opened) = test_core();
        core.apply(Action::ShowContacts);
        core.apply(Action::ActivateRow(CONTACTS.len()));
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn test_dispatch_failure_becomes_status() {
        let mut core = AppCore::with_dispatcher(
            Config::embedded().unwrap(),
            Content::PORTFOLIO,
            Box::new(NoHandlerDispatcher),
        );
        core.apply(Action::ShowContacts);
        core.apply(Action::Activate);

        let status = core.status.clone().expect("error status");
        assert!(status.is_error);
        assert!(status.text.contains("mailto:contatocaiobraga@gmail.com"));
        assert!(core.running);

        // Cleared by the next action
        core.apply(Action::Down);
        assert!(core.status.is_none());
    }

    #[test]
    fn test_copy_link_reports_result() {
        let (mut core, opened) = test_core();
        core.apply(Action::ShowProjects);
        core.apply(Action::CopyLink);
        assert_eq!(
            core.status,
            Some(StatusMessage::info(format!("Copied {}", PROJECTS[0].url)))
        );
        assert!(opened.borrow().is_empty());

        let mut core = core.with_clipboard(no_clipboard);
        core.apply(Action::CopyLink);
        assert!(core.status.as_ref().map(|s| s.is_error).unwrap_or(false));
    }

    #[test]
    fn test_tab_keys_cycle_and_reset_page_state() {
        let (mut core, _) = test_core();
        core.apply(Action::ShowProjects);
        core.apply(Action::PageDown);
        assert_eq!(core.shell.router().selected_url(), Some(PROJECTS[5].url));

        core.apply(Action::NextTab);
        assert_eq!(core.current_screen(), Screen::Contacts);
        core.apply(Action::PrevTab);
        assert_eq!(core.current_screen(), Screen::Projects);
        assert_eq!(core.shell.router().selected_url(), Some(PROJECTS[0].url));
    }

    #[test]
    fn test_quit() {
        let (mut core, _) = test_core();
        assert!(core.handle_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!core.running);
    }

    #[test]
    fn test_unbound_key() {
        let (mut core, _) = test_core();
        core.needs_render = false;
        assert!(!core.handle_key(KeyCode::Char('Z'), KeyModifiers::SHIFT));
        assert!(!core.needs_render);
    }
}
