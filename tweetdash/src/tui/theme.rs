//! TUI color theme
//!
//! Sentiment colors follow the usual convention (green/amber/red); anything
//! else falls back to a small rotating palette.

use ratatui::style::Color;

pub const PRIMARY: Color = Color::Rgb(0, 200, 255);
pub const ACCENT: Color = Color::Rgb(255, 191, 0);
pub const INFO_DIM: Color = Color::Rgb(120, 140, 160);
pub const TEXT: Color = Color::White;
pub const BACKGROUND: Color = Color::Rgb(10, 16, 28);

pub const POSITIVE_GREEN: Color = Color::Rgb(0, 204, 102);
pub const NEUTRAL_AMBER: Color = Color::Rgb(255, 191, 0);
pub const NEGATIVE_RED: Color = Color::Rgb(239, 68, 68);

/// Fallback colors for unknown labels and word cloud words
pub const PALETTE: [Color; 6] = [
    Color::Rgb(99, 110, 250),
    Color::Rgb(0, 204, 150),
    Color::Rgb(171, 99, 250),
    Color::Rgb(255, 161, 90),
    Color::Rgb(25, 211, 243),
    Color::Rgb(255, 102, 146),
];

/// Color for a sentiment label; `index` picks a palette entry for
/// labels outside positive/neutral/negative.
#[must_use]
pub fn sentiment_color(label: &str, index: usize) -> Color {
    match label.to_ascii_lowercase().as_str() {
        "positive" => POSITIVE_GREEN,
        "neutral" => NEUTRAL_AMBER,
        "negative" => NEGATIVE_RED,
        _ => PALETTE[index % PALETTE.len()],
    }
}

/// Text gauge like `||||      ` for a percentage in 0-100
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn gauge_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "|".repeat(filled), " ".repeat(width - filled.min(width)))
}
