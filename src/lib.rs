// src/lib.rs
//! Password generation with strength scoring and a persisted history.
//!
//! Passwords come either from a configurable character pool or from an
//! alternating consonant/vowel pattern. Randomness is injected through
//! [`generators::SecureRandom`] and persistence through
//! [`storage::KeyValueStore`], so everything below the CLI is testable
//! without a terminal or a disk.

pub mod cli;
pub mod core;
pub mod error;
pub mod export;
pub mod generators;
pub mod history;
pub mod logging;
pub mod models;
pub mod storage;
pub mod strength;
pub mod utils;

pub use crate::core::{AppState, Config};
pub use crate::error::{AppError, Result};
pub use crate::generators::{generate, generate_easy, PasswordGenerator, SecureRandom};
pub use crate::history::HistoryStore;
pub use crate::models::{GenerationConfig, GenerationMode, HistoryEntry, StrengthRating, Theme};
pub use crate::strength::score;
