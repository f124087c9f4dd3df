use ratatui::style::Color;

use crate::studio::{ConfidenceBand, DisplayCategory};

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            error: Color::Rgb(247, 118, 142),   // #F7768E Coral Red
        }
    }

    /// Default theme is midnight
    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}

pub fn category_color(category: DisplayCategory) -> Color {
    match category {
        DisplayCategory::ExactPhrase => Color::Rgb(187, 154, 247), // purple
        DisplayCategory::Measurement => Color::Rgb(122, 162, 247), // blue
        DisplayCategory::Model => Color::Rgb(158, 206, 106),       // green
        DisplayCategory::Brand => Color::Rgb(224, 175, 104),       // yellow
        DisplayCategory::Number => Color::Rgb(255, 158, 100),      // orange
        DisplayCategory::Keyword => colors::dimmed(),
    }
}

pub fn band_color(band: ConfidenceBand) -> Color {
    match band {
        ConfidenceBand::High => Color::Rgb(158, 206, 106),
        ConfidenceBand::Medium => Color::Rgb(224, 175, 104),
        ConfidenceBand::Low => colors::error(),
    }
}
