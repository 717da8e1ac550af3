// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{GenerationConfig, GenerationMode, DEFAULT_PASSWORD_LENGTH, clamp_length};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_mode: GenerationMode,
    pub default_exclude_ambiguous: bool,

    // Storage
    pub store_file: Option<PathBuf>,

    // Export
    pub export_directory: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_mode: GenerationMode::Complex,
            default_exclude_ambiguous: false,

            // Storage
            store_file: None, // Resolved to the app config dir when opened

            // Export
            export_directory: PathBuf::from("."),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSGEN_DEFAULT_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => config.default_password_length = clamp_length(length),
                Err(_) => log::warn!("Ignoring invalid PASSGEN_DEFAULT_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSGEN_DEFAULT_MODE") {
            match val.parse::<GenerationMode>() {
                Ok(mode) => config.default_mode = mode,
                Err(e) => log::warn!("Ignoring PASSGEN_DEFAULT_MODE: {}", e),
            }
        }

        if let Some(val) = lookup("PASSGEN_EXCLUDE_AMBIGUOUS") {
            if let Ok(exclude) = val.parse() {
                config.default_exclude_ambiguous = exclude;
            }
        }

        // Storage
        if let Some(file) = lookup("PASSGEN_STORE_FILE") {
            config.store_file = Some(PathBuf::from(file));
        }

        // Export
        if let Some(dir) = lookup("PASSGEN_EXPORT_DIR") {
            config.export_directory = PathBuf::from(dir);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    /// Generation options seeded from the configured defaults.
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_password_length,
            mode: self.default_mode,
            exclude_ambiguous: self.default_exclude_ambiguous,
            ..GenerationConfig::default()
        }
    }
}
