//! Highlighter options and their resolution into a concrete config.
//!
//! [`HighlighterOptions`] is what callers (CLI, JSON file, persisted demo
//! state) provide: every field except `text` may be absent.
//! [`HighlighterOptions::resolve`] fills the gaps with defaults. Values are
//! passed through as given; a negative duration or an opacity above 1 is
//! the caller's business.

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::Color32;
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#6ca0dc";
pub const DEFAULT_FONT_SIZE: &str = "30px";
pub const DEFAULT_HIGHLIGHT_OPACITY: f32 = 0.3;
pub const DEFAULT_DURATION: f32 = 1.5;

/// Base size for `em`/`rem` lengths
const ROOT_FONT_PX: f32 = 16.0;

/// Partial options as supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlighterOptions {
    pub text: String,
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub class_name: Option<String>,
    pub show_icon: Option<bool>,
    pub highlight_opacity: Option<f32>,
    pub duration: Option<f32>,
    pub delay: Option<f32>,
    pub replay_on_hover: Option<bool>,
}

impl HighlighterOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Fill absent fields with defaults.
    pub fn resolve(&self) -> AnimationConfig {
        AnimationConfig {
            text: self.text.clone(),
            color: self.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            font_size: self
                .font_size
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string()),
            class_name: self.class_name.clone().unwrap_or_default(),
            show_icon: self.show_icon.unwrap_or(true),
            highlight_opacity: self.highlight_opacity.unwrap_or(DEFAULT_HIGHLIGHT_OPACITY),
            duration: self.duration.unwrap_or(DEFAULT_DURATION),
            delay: self.delay.unwrap_or(0.0),
            replay_on_hover: self.replay_on_hover.unwrap_or(false),
        }
    }

    /// Overlay every field that is set in `other` onto `self`.
    /// An empty `other.text` keeps the current text.
    pub fn merge(&mut self, other: HighlighterOptions) {
        if !other.text.is_empty() {
            self.text = other.text;
        }
        self.color = other.color.or(self.color.take());
        self.font_size = other.font_size.or(self.font_size.take());
        self.class_name = other.class_name.or(self.class_name.take());
        self.show_icon = other.show_icon.or(self.show_icon);
        self.highlight_opacity = other.highlight_opacity.or(self.highlight_opacity);
        self.duration = other.duration.or(self.duration);
        self.delay = other.delay.or(self.delay);
        self.replay_on_hover = other.replay_on_hover.or(self.replay_on_hover);
    }
}

impl From<&AnimationConfig> for HighlighterOptions {
    /// Every field set explicitly.
    fn from(config: &AnimationConfig) -> Self {
        Self {
            text: config.text.clone(),
            color: Some(config.color.clone()),
            font_size: Some(config.font_size.clone()),
            class_name: Some(config.class_name.clone()),
            show_icon: Some(config.show_icon),
            highlight_opacity: Some(config.highlight_opacity),
            duration: Some(config.duration),
            delay: Some(config.delay),
            replay_on_hover: Some(config.replay_on_hover),
        }
    }
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<HighlighterOptions> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;
    let options: HighlighterOptions = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse options file: {}", path.display()))?;
    info!("Loaded highlighter options from {}", path.display());
    Ok(options)
}

/// Fully resolved configuration for one render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub text: String,
    pub color: String,
    pub font_size: String,
    pub class_name: String,
    pub show_icon: bool,
    pub highlight_opacity: f32,
    /// Sweep/translate duration in seconds
    pub duration: f32,
    /// Seconds before the sequence starts
    pub delay: f32,
    pub replay_on_hover: bool,
}

impl AnimationConfig {
    /// The inputs whose change forces the sequence to be rebuilt.
    pub fn replay_key(&self) -> ReplayKey {
        ReplayKey {
            show_icon: self.show_icon,
            duration_bits: self.duration.to_bits(),
            delay_bits: self.delay.to_bits(),
        }
    }

    /// Paint-ready style; unparseable strings fall back to defaults.
    pub fn style(&self) -> ResolvedStyle {
        let color = parse_color(&self.color).unwrap_or_else(|| {
            warn!("Invalid highlight color {:?}, using {}", self.color, DEFAULT_COLOR);
            default_color()
        });
        let font_px = parse_font_size(&self.font_size).unwrap_or_else(|| {
            warn!("Invalid font size {:?}, using {}", self.font_size, DEFAULT_FONT_SIZE);
            30.0
        });
        ResolvedStyle {
            color,
            font_px,
            highlight_opacity: self.highlight_opacity,
        }
    }
}

/// `show_icon`, `duration`, `delay`: compared between renders.
///
/// Times are compared bitwise so an unchanged NaN stays equal to itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayKey {
    pub show_icon: bool,
    pub duration_bits: u32,
    pub delay_bits: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub color: Color32,
    pub font_px: f32,
    pub highlight_opacity: f32,
}

fn default_color() -> Color32 {
    Color32::from_rgb(0x6c, 0xa0, 0xdc)
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(s: &str) -> Option<Color32> {
    let s = s.trim();
    if !s.starts_with('#') {
        return None;
    }
    Color32::from_hex(s).ok()
}

/// Parse a CSS length into points: `30px`, `30`, `12pt`, `1.5em`, `2rem`.
pub fn parse_font_size(s: &str) -> Option<f32> {
    let s = s.trim();
    let (num, scale) = if let Some(n) = s.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = s.strip_suffix("pt") {
        (n, 4.0 / 3.0)
    } else if let Some(n) = s.strip_suffix("rem") {
        (n, ROOT_FONT_PX)
    } else if let Some(n) = s.strip_suffix("em") {
        (n, ROOT_FONT_PX)
    } else {
        (s, 1.0)
    };
    let value: f32 = num.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value * scale)
}
