// src/generators/password.rs
use rand::rngs::OsRng;

use crate::generators::charset::{self, CONSONANTS, VOWELS};
use crate::generators::random::SecureRandom;
use crate::models::{GenerationConfig, GenerationMode};

pub struct PasswordGenerator<R: SecureRandom = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRandom> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Generate a password in the mode selected by `config`.
    ///
    /// An empty string means nothing could be generated.
    pub fn generate_password(&mut self, config: &GenerationConfig) -> String {
        generate_for(config, &mut self.rng)
    }
}

pub fn generate_for<R: SecureRandom + ?Sized>(config: &GenerationConfig, rng: &mut R) -> String {
    match config.mode {
        GenerationMode::Complex => generate(config, rng),
        GenerationMode::Pronounceable => generate_easy(config, rng),
    }
}

/// Sample `config.length` characters from the configured pool.
///
/// Returns an empty string when no character class is enabled.
pub fn generate<R: SecureRandom + ?Sized>(config: &GenerationConfig, rng: &mut R) -> String {
    let chars = charset::build_pool(config);

    if chars.is_empty() {
        log::debug!("No character class selected, nothing to generate");
        return String::new();
    }

    log::debug!(
        "Generating complex password: length={} pool={}",
        config.length,
        chars.len()
    );

    (0..config.length)
        .map(|_| chars[rng.next_u32() as usize % chars.len()])
        .collect()
}

// Alternating consonant/vowel password, always starting with a consonant.
// Digit, symbol and ambiguity options do not apply here.
pub fn generate_easy<R: SecureRandom + ?Sized>(config: &GenerationConfig, rng: &mut R) -> String {
    log::debug!("Generating pronounceable password: length={}", config.length);

    let mut password = String::with_capacity(config.length);

    for i in 0..config.length {
        let set = if i % 2 == 1 { VOWELS } else { CONSONANTS };
        let value = rng.next_u32();
        let c = set[value as usize % set.len()];

        let upper = if config.include_uppercase && config.include_lowercase {
            value % 2 == 0
        } else {
            config.include_uppercase
        };

        password.push(if upper { c.to_ascii_uppercase() } else { c });
    }

    password
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{is_ambiguous, is_consonant, is_vowel};
    use crate::generators::random::testing::Scripted;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn complex(upper: bool, lower: bool, digits: bool, symbols: bool) -> GenerationConfig {
        GenerationConfig {
            include_uppercase: upper,
            include_lowercase: lower,
            include_digits: digits,
            include_symbols: symbols,
            ..GenerationConfig::default()
        }
    }

    fn easy(upper: bool, lower: bool) -> GenerationConfig {
        GenerationConfig {
            mode: GenerationMode::Pronounceable,
            include_uppercase: upper,
            include_lowercase: lower,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_generate_password_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for length in [4, 16, 64] {
            let config = complex(true, true, true, true).with_length(length);
            assert_eq!(generate(&config, &mut rng).chars().count(), length);
        }
    }

    #[test]
    fn test_characters_come_from_pool() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let config = complex(false, true, true, false).with_length(64);
        let pool = charset::build_pool(&config);
        let password = generate(&config, &mut rng);
        assert!(password.chars().all(|c| pool.contains(&c)));
    }

    #[test]
    fn test_no_options_selected() {
        let mut rng = Scripted::new(vec![0]);
        let config = complex(false, false, false, false);
        assert_eq!(generate(&config, &mut rng), "");
    }

    #[test]
    fn test_index_is_draw_modulo_pool() {
        // digits only: pool is "0123456789"
        let mut rng = Scripted::new(vec![3, 10, 27, 9]);
        let config = complex(false, false, true, false).with_length(4);
        assert_eq!(generate(&config, &mut rng), "3079");
    }

    #[test]
    fn test_exclude_ambiguous() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut config = complex(true, true, true, true).with_length(64);
        config.exclude_ambiguous = true;
        for _ in 0..50 {
            let password = generate(&config, &mut rng);
            assert!(!password.chars().any(is_ambiguous), "{}", password);
        }
    }

    #[test]
    fn test_easy_alternates_consonants_and_vowels() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for config in [easy(true, true), easy(true, false), easy(false, true), easy(false, false)] {
            let password = generate_easy(&config.with_length(33), &mut rng);
            assert_eq!(password.len(), 33);
            for (i, c) in password.chars().enumerate() {
                if i % 2 == 0 {
                    assert!(is_consonant(c), "expected consonant at {} in {}", i, password);
                } else {
                    assert!(is_vowel(c), "expected vowel at {} in {}", i, password);
                }
            }
        }
    }

    #[test]
    fn test_easy_casing_rules() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let upper = generate_easy(&easy(true, false).with_length(20), &mut rng);
        assert!(upper.chars().all(|c| c.is_ascii_uppercase()));

        let lower = generate_easy(&easy(false, true).with_length(20), &mut rng);
        assert!(lower.chars().all(|c| c.is_ascii_lowercase()));

        let neither = generate_easy(&easy(false, false).with_length(20), &mut rng);
        assert!(neither.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_easy_mixed_case_uses_draw_parity() {
        // 2 -> consonants[2] = 'd', even -> upper
        // 7 -> vowels[2] = 'i', odd -> lower
        // 21 -> consonants[0] = 'b', odd -> lower
        // 10 -> vowels[0] = 'a', even -> upper
        let mut rng = Scripted::new(vec![2, 7, 21, 10]);
        let password = generate_easy(&easy(true, true).with_length(4), &mut rng);
        assert_eq!(password, "DibA");
    }

    #[test]
    fn test_easy_ignores_digits_and_symbols() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let password = generate_easy(&easy(false, true).with_length(64), &mut rng);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_generator_dispatches_on_mode() {
        let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(1));
        let password = generator.generate_password(&easy(false, true).with_length(6));
        assert!(is_consonant(password.chars().next().unwrap()));

        let empty = generator.generate_password(&complex(false, false, false, false));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_os_rng_generator() {
        let mut generator = PasswordGenerator::new();
        let password = generator.generate_password(&GenerationConfig::default());
        assert_eq!(password.chars().count(), 16);
    }
}
