// src/cli/handlers.rs
use std::path::{Path, PathBuf};

use crate::cli::render::StrengthReport;
use crate::core::AppState;
use crate::error::{AppError, Result};
use crate::export::{self, ExportFormat};
use crate::generators::{self, SecureRandom};
use crate::models::{GenerationConfig, HistoryEntry, Theme};
use crate::storage::KeyValueStore;

// Handlers shared by the subcommands and the interactive menu

/// Generate a password, record it in the history and report its strength.
///
/// Returns `None` when the options leave nothing to pick from.
pub fn handle_generate<R: SecureRandom + ?Sized>(
    state: &mut AppState,
    store: &mut dyn KeyValueStore,
    options: &GenerationConfig,
    rng: &mut R,
    timestamp: &str,
) -> Result<Option<StrengthReport>> {
    let password = generators::generate_for(options, rng);

    if password.is_empty() {
        log::info!("Generation produced no output, no character class selected");
        return Ok(None);
    }

    state.record(store, &password, timestamp)?;

    Ok(Some(StrengthReport::new(&password)))
}

pub fn handle_score(password: &str) -> StrengthReport {
    StrengthReport::new(password)
}

/// Look up a history entry by its 1-based position.
pub fn handle_recall(state: &AppState, index: usize) -> Result<&HistoryEntry> {
    index
        .checked_sub(1)
        .and_then(|i| state.history.get(i))
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "no history entry {} (history holds {})",
                index,
                state.history.len()
            ))
        })
}

pub fn handle_clear_history(state: &mut AppState, store: &mut dyn KeyValueStore) -> Result<()> {
    state.clear_history(store)?;
    Ok(())
}

pub fn handle_export(state: &AppState, format: ExportFormat, dir: &Path) -> Result<Option<PathBuf>> {
    Ok(export::export_history(&state.history, format, dir)?)
}

pub fn handle_theme(state: &mut AppState, store: &mut dyn KeyValueStore, theme: Option<Theme>) -> Result<Theme> {
    if let Some(theme) = theme {
        state.set_theme(store, theme)?;
    }
    Ok(state.theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::random::testing::Scripted;
    use crate::models::GenerationMode;
    use crate::storage::MemoryStore;
    use tempfile::tempdir;

    fn digits_only(length: usize) -> GenerationConfig {
        GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_symbols: false,
            ..GenerationConfig::default()
        }
        .with_length(length)
    }

    #[test]
    fn test_generate_records_history() {
        let mut store = MemoryStore::new();
        let mut state = AppState::default();
        let mut rng = Scripted::new(vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let report = handle_generate(&mut state, &mut store, &digits_only(8), &mut rng, "11:11:11")
            .unwrap()
            .unwrap();

        assert_eq!(report.password, "12345678");
        assert_eq!(report.points, 2);
        assert_eq!(state.history.entries()[0].password, "12345678");
        assert_eq!(AppState::load(&store).unwrap().history.len(), 1);
    }

    #[test]
    fn test_empty_generation_records_nothing() {
        let mut store = MemoryStore::new();
        let mut state = AppState::default();
        let mut rng = Scripted::new(vec![0]);
        let options = GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: false,
            ..GenerationConfig::default()
        };

        assert!(handle_generate(&mut state, &mut store, &options, &mut rng, "11:11:11").unwrap().is_none());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_easy_generation_ignores_empty_pool() {
        let mut store = MemoryStore::new();
        let mut state = AppState::default();
        let mut rng = Scripted::new(vec![0]);
        let options = GenerationConfig {
            mode: GenerationMode::Pronounceable,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: false,
            ..GenerationConfig::default()
        }
        .with_length(4);

        let report = handle_generate(&mut state, &mut store, &options, &mut rng, "t").unwrap().unwrap();
        assert_eq!(report.password, "baba");
    }

    #[test]
    fn test_recall_is_one_based() {
        let mut state = AppState::default();
        state.history.record("older", "1");
        state.history.record("newer", "2");
        assert_eq!(handle_recall(&state, 1).unwrap().password, "newer");
        assert_eq!(handle_recall(&state, 2).unwrap().password, "older");
        assert!(matches!(handle_recall(&state, 0), Err(AppError::InvalidInput(_))));
        assert!(matches!(handle_recall(&state, 3), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_export_and_clear() {
        let dir = tempdir().unwrap();
        let mut store = MemoryStore::new();
        let mut state = AppState::default();
        state.record(&mut store, "abcd", "1").unwrap();

        let path = handle_export(&state, ExportFormat::Csv, dir.path()).unwrap();
        assert!(path.unwrap().exists());

        handle_clear_history(&mut state, &mut store).unwrap();
        assert!(handle_export(&state, ExportFormat::Txt, dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_theme_show_and_set() {
        let mut store = MemoryStore::new();
        let mut state = AppState::default();
        assert_eq!(handle_theme(&mut state, &mut store, None).unwrap(), Theme::PastelBlue);
        assert_eq!(handle_theme(&mut state, &mut store, Some(Theme::PastelPink)).unwrap(), Theme::PastelPink);
        assert_eq!(AppState::load(&store).unwrap().theme, Theme::PastelPink);
    }
}
