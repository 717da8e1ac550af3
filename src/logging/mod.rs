// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use log::LevelFilter;

use crate::core::Config;

/// Install the global logger.
///
/// Logs go to `config.log_file` when set, otherwise to stderr so they never
/// mix with generated passwords on stdout.
pub fn init(config: &Config, verbose: bool) -> io::Result<()> {
    let level = if verbose { LevelFilter::Debug } else { config.log_level };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_env("PASSGEN_LOG")
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    // A second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }

    Ok(())
}
