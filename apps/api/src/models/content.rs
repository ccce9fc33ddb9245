use serde::{Deserialize, Serialize};

/// Landing-page copy as returned by the model and stored in `projects.content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub hero_headline: String,
    pub sub_headline: String,
    pub cta_text: String,
    /// Rendered in stored order. Three entries are requested but not enforced.
    pub features: Vec<String>,
    pub seo_meta_description: String,
}

/// Background/foreground polarity of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Light,
    Dark,
}

impl DisplayMode {
    /// Bold pages are light; every other layout value, recognized or not, is dark.
    /// Matches the stored text exactly, so `"bold"` is dark.
    pub fn for_layout(layout: &str) -> Self {
        if layout == "Bold" {
            DisplayMode::Light
        } else {
            DisplayMode::Dark
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Light => "Light",
            DisplayMode::Dark => "Dark",
        }
    }

    /// Parses a stored mode column. Anything other than `"Light"` reads as dark.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "Light" => DisplayMode::Light,
            _ => DisplayMode::Dark,
        }
    }
}
