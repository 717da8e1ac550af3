// src/strength.rs
use crate::models::StrengthRating;

/// Raw strength points (0-6) for a password.
///
/// One point each for reaching 8, 12 and 16 characters, and one each for
/// containing an ASCII uppercase letter, a digit, and anything outside
/// `[A-Za-z0-9]`.
pub fn points(password: &str) -> u8 {
    let length = password.chars().count();
    let mut points = 0;

    if length >= 8 {
        points += 1;
    }
    if length >= 12 {
        points += 1;
    }
    if length >= 16 {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        points += 1;
    }

    points
}

// Strong only covers a single point value; keep the bands as they are.
pub fn rating_for_points(points: u8) -> StrengthRating {
    match points {
        0..=2 => StrengthRating::Weak,
        3 | 4 => StrengthRating::Medium,
        5 => StrengthRating::Strong,
        _ => StrengthRating::VeryStrong,
    }
}

// Analyze password strength
pub fn score(password: &str) -> StrengthRating {
    rating_for_points(points(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lowercase_is_weak() {
        assert_eq!(points("short"), 0);
        assert_eq!(score("short"), StrengthRating::Weak);
    }

    #[test]
    fn test_mixed_eleven_chars_is_medium() {
        // "Password123" is 11 characters: >=8, upper, digit
        assert_eq!(points("Password123"), 3);
        assert_eq!(score("Password123"), StrengthRating::Medium);
    }

    #[test]
    fn test_twelve_chars_upper_digit_is_medium() {
        assert_eq!(points("Password1234"), 4);
        assert_eq!(score("Password1234"), StrengthRating::Medium);
    }

    #[test]
    fn test_fifteen_vs_sixteen_chars_all_classes() {
        // 15 characters, so the >=16 point is missing
        assert_eq!(points("Tr0ub4dor&3XyZ!"), 5);
        assert_eq!(score("Tr0ub4dor&3XyZ!"), StrengthRating::Strong);
        assert_eq!(points("Tr0ub4dor&3XyZ!?"), 6);
        assert_eq!(score("Tr0ub4dor&3XyZ!?"), StrengthRating::VeryStrong);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(rating_for_points(0), StrengthRating::Weak);
        assert_eq!(rating_for_points(2), StrengthRating::Weak);
        assert_eq!(rating_for_points(3), StrengthRating::Medium);
        assert_eq!(rating_for_points(4), StrengthRating::Medium);
        assert_eq!(rating_for_points(5), StrengthRating::Strong);
        assert_eq!(rating_for_points(6), StrengthRating::VeryStrong);
    }

    #[test]
    fn test_symbol_and_non_ascii_count_as_special() {
        assert_eq!(points("a!"), 1);
        assert_eq!(points("é"), 1);
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(points(""), 0);
        assert_eq!(score(""), StrengthRating::Weak);
    }
}
