// src/export/mod.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::history::HistoryStore;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Export directory does not exist: {0}")]
    MissingDirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Txt,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "password_history.csv",
            ExportFormat::Txt => "password_history.txt",
        }
    }

    pub fn render(&self, history: &HistoryStore) -> Option<String> {
        match self {
            ExportFormat::Csv => history.export_csv(),
            ExportFormat::Txt => history.export_txt(),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "text" => Ok(ExportFormat::Txt),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

/// Write the history into `dir` in the given format.
///
/// Returns the written path, or `None` without touching the filesystem when
/// the history is empty.
pub fn export_history(history: &HistoryStore, format: ExportFormat, dir: &Path) -> Result<Option<PathBuf>> {
    let content = match format.render(history) {
        Some(content) => content,
        None => {
            log::info!("History is empty, nothing to export");
            return Ok(None);
        }
    };

    if !dir.is_dir() {
        return Err(ExportError::MissingDirectory(dir.to_path_buf()));
    }

    let path = dir.join(format.file_name());
    fs::write(&path, content)?;

    log::info!("Exported {} history entries to {}", history.len(), path.display());

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_history_writes_nothing() {
        let dir = tempdir().unwrap();
        let history = HistoryStore::new();
        assert!(export_history(&history, ExportFormat::Csv, dir.path()).unwrap().is_none());
        assert!(export_history(&history, ExportFormat::Txt, dir.path()).unwrap().is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_csv_file() {
        let dir = tempdir().unwrap();
        let mut history = HistoryStore::new();
        history.record("Xy9!abcd", "08:00:00");

        let path = export_history(&history, ExportFormat::Csv, dir.path()).unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), "password_history.csv");
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "Password,Timestamp\n\"Xy9!abcd\",\"08:00:00\"\n");
    }

    #[test]
    fn test_export_txt_file() {
        let dir = tempdir().unwrap();
        let mut history = HistoryStore::new();
        history.record("bavo", "08:00:00");

        let path = export_history(&history, ExportFormat::Txt, dir.path()).unwrap().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "Password History\n\n[08:00:00] bavo\n");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let mut history = HistoryStore::new();
        history.record("bavo", "08:00:00");
        let missing = dir.path().join("nope");
        assert!(matches!(
            export_history(&history, ExportFormat::Txt, &missing),
            Err(ExportError::MissingDirectory(_))
        ));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
