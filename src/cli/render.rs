// src/cli/render.rs
use console::style;
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use serde::Serialize;

use crate::history::HistoryStore;
use crate::models::{StrengthRating, Theme};
use crate::strength;

const BAR_WIDTH: usize = 20;

/// Shown instead of the QR code when the password cannot be encoded.
pub const QR_PLACEHOLDER: &str = "QR Error";

/// Everything shown for a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub password: String,
    pub rating: StrengthRating,
    pub label: &'static str,
    pub points: u8,
    pub percent: u8,
}

impl StrengthReport {
    pub fn new(password: &str) -> Self {
        let points = strength::points(password);
        let rating = strength::rating_for_points(points);
        Self {
            password: password.to_string(),
            rating,
            label: rating.label(),
            points,
            percent: rating.percent(),
        }
    }
}

/// Text strength bar, e.g. `[#####---------------]  25%`.
pub fn strength_bar(rating: StrengthRating) -> String {
    let filled = BAR_WIDTH * rating.percent() as usize / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        rating.percent()
    )
}

fn rating_color(rating: StrengthRating) -> console::Color {
    match rating {
        StrengthRating::Weak => console::Color::Red,
        StrengthRating::Medium => console::Color::Yellow,
        StrengthRating::Strong => console::Color::Green,
        StrengthRating::VeryStrong => console::Color::Cyan,
    }
}

pub fn render_report(report: &StrengthReport, theme: Theme) -> String {
    format!(
        "{}\n{} {}",
        style(&report.password).fg(theme.accent()).bold(),
        style(strength_bar(report.rating)).fg(rating_color(report.rating)),
        report.label
    )
}

/// QR code of `password` drawn with half-block characters.
pub fn qr_text(password: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::with_error_correction_level(password.as_bytes(), EcLevel::H)?;
    Ok(code.render::<unicode::Dense1x2>().quiet_zone(true).build())
}

/// QR code in the theme's accent colour, or the placeholder when encoding
/// fails. Nothing is drawn for an empty password.
pub fn render_qr(password: &str, theme: Theme) -> String {
    if password.is_empty() {
        return String::new();
    }

    match qr_text(password) {
        Ok(image) => image
            .lines()
            .map(|line| style(line).fg(theme.accent()).to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        Err(e) => {
            log::warn!("QR code error: {}", e);
            QR_PLACEHOLDER.to_string()
        }
    }
}

pub fn render_history(history: &HistoryStore, theme: Theme) -> String {
    if history.is_empty() {
        return "No passwords generated yet.".to_string();
    }

    history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>2}. {}  {}",
                i + 1,
                style(&entry.password).fg(theme.accent()),
                style(&entry.timestamp).dim()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_themes(current: Theme) -> String {
    Theme::ALL
        .iter()
        .map(|theme| {
            let marker = if *theme == current { "*" } else { " " };
            format!("{} {}", marker, style(theme.id()).fg(theme.accent()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
