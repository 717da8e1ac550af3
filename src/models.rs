// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 64;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Uniform sampling from the configured character pool
    Complex,
    /// Alternating consonant/vowel letters
    Pronounceable,
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "complex" | "all" => Ok(GenerationMode::Complex),
            "easy" | "pronounceable" => Ok(GenerationMode::Pronounceable),
            other => Err(format!("unknown generation mode '{}'", other)),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub mode: GenerationMode,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            mode: GenerationMode::Complex,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationConfig {
    /// Set the length, clamping it into the supported range.
    pub fn set_length(&mut self, length: usize) {
        self.length = clamp_length(length);
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.set_length(length);
        self
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Clamp a requested length into `[MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH]`.
pub fn clamp_length(length: usize) -> usize {
    let clamped = length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
    if clamped != length {
        log::warn!("Password length {} out of range, using {}", length, clamped);
    }
    clamped
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthRating {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Medium => "Medium",
            StrengthRating::Strong => "Strong",
            StrengthRating::VeryStrong => "Very Strong",
        }
    }

    /// Fill level of the strength bar, in percent.
    pub fn percent(&self) -> u8 {
        match self {
            StrengthRating::Weak => 25,
            StrengthRating::Medium => 50,
            StrengthRating::Strong => 75,
            StrengthRating::VeryStrong => 100,
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    PastelBlue,
    PastelPink,
    PastelGreen,
    PastelPurple,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::PastelBlue,
        Theme::PastelPink,
        Theme::PastelGreen,
        Theme::PastelPurple,
        Theme::Dark,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::PastelBlue => "pastel-blue",
            Theme::PastelPink => "pastel-pink",
            Theme::PastelGreen => "pastel-green",
            Theme::PastelPurple => "pastel-purple",
            Theme::Dark => "dark",
        }
    }

    /// Accent colour used when rendering this theme in the terminal.
    pub fn accent(&self) -> console::Color {
        match self {
            Theme::PastelBlue => console::Color::Cyan,
            Theme::PastelPink => console::Color::Magenta,
            Theme::PastelGreen => console::Color::Green,
            Theme::PastelPurple => console::Color::Blue,
            Theme::Dark => console::Color::White,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id() == wanted)
            .ok_or_else(|| format!("unknown theme '{}'", s.trim()))
    }
}
