//! Highlighter widget - text with an animated highlight sweep and marker
//!
//! State lives in [`HighlighterState`]; rendering and trigger detection
//! happen in [`render_highlighter`] once per frame.

mod highlighter;
mod highlighter_events;
mod highlighter_ui;
pub mod icon;

pub use highlighter::HighlighterState;
pub use highlighter_events::SweepTrigger;
pub use highlighter_ui::{highlight_shape, render_highlighter, Highlighter};
