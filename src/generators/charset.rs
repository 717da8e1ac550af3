// src/generators/charset.rs
use crate::models::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Characters that are easily confused with each other in many fonts.
pub const AMBIGUOUS: &str = "Il1O0";

pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r',
    's', 't', 'v', 'w', 'x', 'y', 'z',
];

pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Build the character pool for complex generation.
///
/// Classes are appended in the order upper, lower, digits, symbols. The
/// result is empty when no class is enabled.
pub fn build_pool(config: &GenerationConfig) -> Vec<char> {
    let mut chars = Vec::new();

    if config.include_uppercase {
        chars.extend(UPPERCASE.chars());
    }
    if config.include_lowercase {
        chars.extend(LOWERCASE.chars());
    }
    if config.include_digits {
        chars.extend(DIGITS.chars());
    }
    if config.include_symbols {
        chars.extend(SYMBOLS.chars());
    }

    if config.exclude_ambiguous {
        chars.retain(|c| !is_ambiguous(*c));
    }

    chars
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c.to_ascii_lowercase())
}
