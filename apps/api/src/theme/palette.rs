//! Named color palettes. Values are CSS hex colors.

use serde::Serialize;

/// A named palette a project can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorTheme {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
}

impl ColorTheme {
    /// Exact, case-sensitive match on the stored name. Unknown names are `None`;
    /// the caller decides the fallback because it differs per layout.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Blue" => Some(ColorTheme::Blue),
            "Purple" => Some(ColorTheme::Purple),
            "Green" => Some(ColorTheme::Green),
            "Orange" => Some(ColorTheme::Orange),
            "Red" => Some(ColorTheme::Red),
            _ => None,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorTheme::Blue => Palette {
                strong: "#2563eb",
                bright: "#3b82f6",
                soft: "#60a5fa",
                partner: "#9333ea",
                poster: "#2563eb",
                on_poster: WHITE,
            },
            ColorTheme::Purple => Palette {
                strong: "#9333ea",
                bright: "#a855f7",
                soft: "#c084fc",
                partner: "#db2777",
                poster: "#9333ea",
                on_poster: WHITE,
            },
            ColorTheme::Green => Palette {
                strong: "#059669",
                bright: "#10b981",
                soft: "#34d399",
                partner: "#0d9488",
                poster: "#059669",
                on_poster: WHITE,
            },
            ColorTheme::Orange => Palette {
                strong: "#ea580c",
                bright: "#f97316",
                soft: "#fb923c",
                partner: "#dc2626",
                poster: "#ff4d00",
                on_poster: BLACK,
            },
            ColorTheme::Red => Palette {
                strong: "#dc2626",
                bright: "#ef4444",
                soft: "#f87171",
                partner: "#ea580c",
                poster: "#dc2626",
                on_poster: WHITE,
            },
        }
    }
}

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

/// Shades of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Buttons and solid accents.
    pub strong: &'static str,
    /// Accent text on neutral backgrounds.
    pub bright: &'static str,
    /// Gradient start.
    pub soft: &'static str,
    /// Second hue for gradients and glows.
    pub partner: &'static str,
    /// Full-bleed color used by the Bold layout.
    pub poster: &'static str,
    /// Readable text color on top of `poster`.
    pub on_poster: &'static str,
}
