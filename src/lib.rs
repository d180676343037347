//! SWEEPMARK - animated text highlighter widget for egui
//!
//! A text label whose highlight bar sweeps in from the left, optionally
//! led by a marker icon. Re-exports all modules for use by the binary.

// Core animation (layers, timelines, engine, sequencer)
pub mod core;

// App modules
pub mod cli;
pub mod config;
pub mod paths;
pub mod shell;
pub mod widgets;

// Re-export commonly used types
pub use config::{AnimationConfig, HighlighterOptions};
pub use crate::core::{FrameTimeline, SequencePhase, Sequencer, TimelineEngine};
pub use widgets::highlighter::{render_highlighter, Highlighter, HighlighterState};
