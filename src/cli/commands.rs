// src/cli/commands.rs
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::models::{GenerationConfig, GenerationMode, Theme};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate(GenerateArgs),

    /// Rate the strength of a password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// List recently generated passwords
    History,

    /// Show a history entry again
    Recall {
        /// Position in the history list, starting at 1
        #[arg(required = true)]
        index: usize,
    },

    /// Forget all recently generated passwords
    ClearHistory,

    /// Export the history to a file
    Export {
        /// Output format (csv or txt)
        #[arg(required = true)]
        format: ExportFormat,

        /// Directory to write into
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show or change the colour theme
    Theme {
        /// Theme to switch to
        name: Option<Theme>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Password length (clamped to 4-64)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Pronounceable consonant/vowel password
    #[arg(long)]
    pub easy: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Drop look-alike characters (I, l, 1, O, 0)
    #[arg(long)]
    pub exclude_ambiguous: bool,
}

impl GenerateArgs {
    /// Apply the flags on top of configured defaults.
    pub fn apply(&self, defaults: GenerationConfig) -> GenerationConfig {
        let mut options = defaults;

        if let Some(length) = self.length {
            options.set_length(length);
        }
        if self.easy {
            options.mode = GenerationMode::Pronounceable;
        }

        options.include_uppercase &= !self.no_upper;
        options.include_lowercase &= !self.no_lower;
        options.include_digits &= !self.no_digits;
        options.include_symbols &= !self.no_symbols;
        options.exclude_ambiguous |= self.exclude_ambiguous;

        options
    }
}
