//! Theme resolution: stored (layout, color theme, mode) → concrete style tokens.
//!
//! This is the only place that decides which color plays which role. Renderers take
//! `StyleTokens` as data and never look at the mode or theme name themselves.
//!
//! # Rules
//! - Unknown color theme → layout default (Blue for Modern/Minimal, Orange for Bold).
//! - Bold inverts with mode: Light = colored page, black text; Dark = black page, colored text.
//! - Modern and Minimal never invert: mode flips background lightness, accent stays put.

pub mod palette;

use serde::Serialize;

use crate::models::content::DisplayMode;
pub use palette::{ColorTheme, Palette, BLACK, WHITE};

/// Page template. Parsed from the stored `layout` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutVariant {
    Modern,
    Minimal,
    Bold,
}

impl LayoutVariant {
    /// Unrecognized layouts render as Modern.
    pub fn from_stored(layout: &str) -> Self {
        match layout {
            "Minimal" => LayoutVariant::Minimal,
            "Bold" => LayoutVariant::Bold,
            "Modern" => LayoutVariant::Modern,
            _ => LayoutVariant::Modern,
        }
    }

    /// Palette used when the stored color theme is unknown.
    pub fn default_theme(self) -> ColorTheme {
        match self {
            LayoutVariant::Modern | LayoutVariant::Minimal => ColorTheme::Blue,
            LayoutVariant::Bold => ColorTheme::Orange,
        }
    }
}

/// Resolved colors for one page. All values are CSS colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleTokens {
    pub layout: LayoutVariant,
    pub theme: ColorTheme,
    pub mode: DisplayMode,
    pub background: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub accent: &'static str,
    pub accent_secondary: &'static str,
    pub border: &'static str,
    /// Background of the features band.
    pub surface: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
    pub feature_text: &'static str,
    pub button_background: &'static str,
    pub button_text: &'static str,
    /// Badge / marquee strip above the hero.
    pub banner_background: &'static str,
    pub banner_text: &'static str,
}

/// Resolves the style tokens for a stored project. Never fails.
pub fn resolve_theme(layout: LayoutVariant, color_theme: &str, mode: DisplayMode) -> StyleTokens {
    let theme = match ColorTheme::from_name(color_theme) {
        Some(theme) => theme,
        None => layout.default_theme(),
    };
    let palette = theme.palette();

    match layout {
        LayoutVariant::Modern => modern_tokens(theme, palette, mode),
        LayoutVariant::Minimal => minimal_tokens(theme, palette, mode),
        LayoutVariant::Bold => bold_tokens(theme, palette, mode),
    }
}

fn modern_tokens(theme: ColorTheme, palette: Palette, mode: DisplayMode) -> StyleTokens {
    let dark = mode == DisplayMode::Dark;
    StyleTokens {
        layout: LayoutVariant::Modern,
        theme,
        mode,
        background: if dark { "#0a0a0a" } else { "#f8fafc" },
        text: if dark { WHITE } else { "#0f172a" },
        muted_text: if dark { "#9ca3af" } else { "#4b5563" },
        accent: palette.bright,
        accent_secondary: palette.partner,
        border: if dark { "rgba(255,255,255,0.10)" } else { "rgba(0,0,0,0.05)" },
        surface: if dark { "#0a0a0a" } else { "#f8fafc" },
        card_background: if dark { "rgba(255,255,255,0.05)" } else { "rgba(255,255,255,0.80)" },
        card_border: if dark { "rgba(255,255,255,0.10)" } else { "rgba(0,0,0,0.05)" },
        feature_text: if dark { WHITE } else { BLACK },
        button_background: if dark { WHITE } else { BLACK },
        button_text: if dark { BLACK } else { WHITE },
        banner_background: if dark { "rgba(255,255,255,0.05)" } else { WHITE },
        banner_text: palette.bright,
    }
}

fn minimal_tokens(theme: ColorTheme, palette: Palette, mode: DisplayMode) -> StyleTokens {
    let dark = mode == DisplayMode::Dark;
    StyleTokens {
        layout: LayoutVariant::Minimal,
        theme,
        mode,
        background: if dark { "#09090b" } else { WHITE },
        text: if dark { WHITE } else { "#18181b" },
        muted_text: if dark { "#a1a1aa" } else { "#52525b" },
        accent: palette.strong,
        accent_secondary: palette.strong,
        border: if dark { "#27272a" } else { "#e5e7eb" },
        surface: if dark { "#18181b" } else { "#f5f5f7" },
        card_background: if dark { "#09090b" } else { WHITE },
        card_border: if dark { "#27272a" } else { "#e5e7eb" },
        feature_text: if dark { "#a1a1aa" } else { "#52525b" },
        button_background: palette.strong,
        button_text: WHITE,
        banner_background: if dark { "#27272a" } else { "#f3f4f6" },
        banner_text: if dark { "#d4d4d8" } else { "#4b5563" },
    }
}

fn bold_tokens(theme: ColorTheme, palette: Palette, mode: DisplayMode) -> StyleTokens {
    match mode {
        // Colored page, black type.
        DisplayMode::Light => StyleTokens {
            layout: LayoutVariant::Bold,
            theme,
            mode,
            background: palette.poster,
            text: BLACK,
            muted_text: BLACK,
            accent: palette.poster,
            accent_secondary: BLACK,
            border: BLACK,
            surface: WHITE,
            card_background: WHITE,
            card_border: BLACK,
            feature_text: BLACK,
            button_background: WHITE,
            button_text: BLACK,
            banner_background: BLACK,
            banner_text: palette.poster,
        },
        // Black page, colored type.
        DisplayMode::Dark => StyleTokens {
            layout: LayoutVariant::Bold,
            theme,
            mode,
            background: BLACK,
            text: palette.poster,
            muted_text: palette.poster,
            accent: palette.poster,
            accent_secondary: palette.on_poster,
            border: palette.poster,
            surface: "#18181b",
            card_background: "#18181b",
            card_border: palette.poster,
            feature_text: WHITE,
            button_background: palette.poster,
            button_text: palette.on_poster,
            banner_background: palette.poster,
            banner_text: palette.on_poster,
        },
    }
}
