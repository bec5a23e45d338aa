//! Site palette and the mapping from the configured mode to an iced theme.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
}

pub const NIGHT: Palette = Palette {
    background: Color::from_rgb(0.02, 0.02, 0.03),
    surface: Color::from_rgb(0.08, 0.08, 0.10),
    text: Color::WHITE,
    muted: Color::from_rgb(0.62, 0.62, 0.68),
    accent: Color::from_rgb(0.0, 0.94, 1.0),
    highlight: Color::from_rgb(0.75, 0.35, 1.0),
};

pub const DAY: Palette = Palette {
    background: Color::from_rgb(0.97, 0.97, 0.98),
    surface: Color::WHITE,
    text: Color::from_rgb(0.06, 0.06, 0.08),
    muted: Color::from_rgb(0.38, 0.38, 0.44),
    accent: Color::from_rgb(0.0, 0.55, 0.65),
    highlight: Color::from_rgb(0.5, 0.2, 0.8),
};

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Night => NIGHT,
        ThemeMode::Day => DAY,
    }
}

pub fn iced_theme(mode: ThemeMode) -> IcedTheme {
    let palette = palette(mode);
    let name = match mode {
        ThemeMode::Night => "NeuralChat Night",
        ThemeMode::Day => "NeuralChat Day",
    };
    IcedTheme::custom(
        name.to_string(),
        iced::theme::Palette {
            background: palette.background,
            text: palette.text,
            primary: palette.accent,
            success: Color::from_rgb(0.2, 0.8, 0.45),
            danger: Color::from_rgb(0.95, 0.3, 0.35),
        },
    )
}

/// Fade a color; used where the page would blur or fade an element.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: (color.a * alpha).clamp(0.0, 1.0),
        ..color
    }
}
