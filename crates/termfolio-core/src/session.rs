//! Mutable state of one interactive run: working path, history, settings.

use log::debug;

use crate::config::{PROMPT_HOST, PROMPT_USER};
use crate::history::History;
use crate::models::{Background, SessionSettings, Theme};
use crate::path::WorkingPath;
use crate::store::{self, KeyValueStore, MemoryStore};

/// Session behavior switches chosen by the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Record blank and whitespace-only submissions in history
    pub record_blank_history: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            record_blank_history: true,
        }
    }
}

/// State owned by the single active session.
///
/// History and settings are loaded from the store on creation and written
/// back after every change.
pub struct Session {
    cwd: WorkingPath,
    history: History,
    settings: SessionSettings,
    options: SessionOptions,
    store: Box<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_options(store, SessionOptions::default())
    }

    pub fn with_options(mut store: Box<dyn KeyValueStore>, options: SessionOptions) -> Self {
        let history = History::new(store::load_history(store.as_ref()));
        let settings = store::load_settings(store.as_mut());
        debug!(
            "session loaded: {} history entries, settings {:?}",
            history.len(),
            settings
        );

        Self {
            cwd: WorkingPath::root(),
            history,
            settings,
            options,
            store,
        }
    }

    /// Session over a throwaway in-memory store.
    pub fn ephemeral() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn cwd(&self) -> &WorkingPath {
        &self.cwd
    }

    pub(crate) fn set_cwd(&mut self, path: WorkingPath) {
        debug!("cwd {} -> {}", self.cwd, path);
        self.cwd = path;
    }

    /// Prompt shown before input and in echo lines, e.g. `guest@portfolio:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", PROMPT_USER, PROMPT_HOST, self.cwd)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Record a submitted line exactly as typed and persist the log.
    pub fn record_submission(&mut self, raw: &str) {
        if raw.trim().is_empty() && !self.options.record_blank_history {
            self.history.reset_cursor();
            return;
        }
        self.history.push(raw);
        store::save_history(self.store.as_mut(), self.history.entries());
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn toggle_typewriter(&mut self) -> bool {
        self.settings.typewriter = !self.settings.typewriter;
        store::save_typewriter(self.store.as_mut(), self.settings.typewriter);
        self.settings.typewriter
    }

    pub fn toggle_banner(&mut self) -> bool {
        self.settings.banner = !self.settings.banner;
        store::save_banner(self.store.as_mut(), self.settings.banner);
        self.settings.banner
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        store::save_theme(self.store.as_mut(), theme);
    }

    pub fn set_background(&mut self, background: Background) {
        self.settings.background = background;
        store::save_background(self.store.as_mut(), background);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cwd", &self.cwd)
            .field("history", &self.history.len())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store_keys;
    use crate::error::StoreError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Store whose contents stay observable after being boxed into a session.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<HashMap<String, String>>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    impl SharedStore {
        fn value(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
    }

    #[test]
    fn test_prompt_follows_cwd() {
        let mut session = Session::ephemeral();
        assert_eq!(session.prompt(), "guest@portfolio:~$");

        let fs = crate::namespace::NamespaceTree::from_manifest(&crate::models::Manifest {
            directories: vec![crate::models::DirectoryEntry {
                path: "projects".to_string(),
            }],
            files: vec![],
        });
        let path = crate::path::resolve_path(&fs, &WorkingPath::root(), "projects").unwrap();
        session.set_cwd(path);
        assert_eq!(session.prompt(), "guest@portfolio:~/projects$");
    }

    #[test]
    fn test_history_is_loaded_and_persisted() {
        let mut store = SharedStore::default();
        store
            .set(store_keys::HISTORY, "[\"help\",\"ls\"]")
            .unwrap();

        let mut session = Session::new(Box::new(store.clone()));
        assert_eq!(session.history().entries(), ["help", "ls"]);
        assert_eq!(session.history().cursor(), 2);

        session.record_submission("  cd projects ");
        assert_eq!(
            store.value(store_keys::HISTORY),
            Some("[\"help\",\"ls\",\"  cd projects \"]".to_string())
        );
    }

    #[test]
    fn test_blank_submissions_follow_options() {
        let mut session = Session::ephemeral();
        session.record_submission("   ");
        assert_eq!(session.history().len(), 1);

        let mut strict = Session::with_options(
            Box::new(MemoryStore::new()),
            SessionOptions {
                record_blank_history: false,
            },
        );
        strict.record_submission("ls");
        strict.history_mut().up();
        strict.record_submission("  ");
        assert_eq!(strict.history().entries(), ["ls"]);
        assert_eq!(strict.history().cursor(), 1);
    }

    #[test]
    fn test_settings_are_persisted_on_change() {
        let store = SharedStore::default();
        let mut session = Session::new(Box::new(store.clone()));

        assert!(session.toggle_typewriter());
        assert!(!session.toggle_banner());
        session.set_theme(Theme::Light);
        session.set_background(Background::Matrix);

        assert_eq!(store.value(store_keys::TYPEWRITER), Some("true".to_string()));
        assert_eq!(store.value(store_keys::BANNER), Some("false".to_string()));
        assert_eq!(store.value(store_keys::THEME), Some("\"light\"".to_string()));
        assert_eq!(store.value(store_keys::BACKGROUND), Some("\"matrix\"".to_string()));

        let reloaded = Session::new(Box::new(store));
        assert!(reloaded.settings().typewriter);
        assert_eq!(reloaded.settings().theme, Theme::Light);
    }
}
