// src/core/state.rs
use crate::history::HistoryStore;
use crate::models::{HistoryEntry, Theme};
use crate::storage::{KeyValueStore, Result};

pub const HISTORY_KEY: &str = "passgen_history";
pub const THEME_KEY: &str = "passgen_theme";

/// Session state that outlives a single generation: the history and the
/// selected theme. Persisted through a `KeyValueStore` after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub history: HistoryStore,
    pub theme: Theme,
}

impl AppState {
    /// Load state from the store.
    ///
    /// A missing or unreadable history starts empty and an unknown theme
    /// falls back to the default; only storage I/O failures are errors.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let history = match store.get(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => HistoryStore::from_entries(entries),
                Err(e) => {
                    log::warn!("Discarding unreadable password history: {}", e);
                    HistoryStore::new()
                }
            },
            None => HistoryStore::new(),
        };

        let theme = match store.get(THEME_KEY)? {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("{}, using {}", e, Theme::default());
                Theme::default()
            }),
            None => Theme::default(),
        };

        log::debug!("Loaded state: {} history entries, theme {}", history.len(), theme);

        Ok(Self { history, theme })
    }

    /// Record a generated password and persist the history if it changed.
    pub fn record(&mut self, store: &mut dyn KeyValueStore, password: &str, timestamp: &str) -> Result<bool> {
        let changed = self.history.record(password, timestamp);
        if changed {
            self.save_history(store)?;
        }
        Ok(changed)
    }

    pub fn clear_history(&mut self, store: &mut dyn KeyValueStore) -> Result<()> {
        self.history.clear();
        self.save_history(store)?;
        log::info!("Password history cleared");
        Ok(())
    }

    pub fn set_theme(&mut self, store: &mut dyn KeyValueStore, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.save_theme(store)?;
        log::info!("Theme set to {}", theme);
        Ok(())
    }

    pub fn save_history(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let raw = serde_json::to_string(&self.history)?;
        store.set(HISTORY_KEY, &raw)
    }

    pub fn save_theme(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(THEME_KEY, self.theme.id())
    }
}
