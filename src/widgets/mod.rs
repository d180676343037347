//! UI Widgets - modular, reusable UI components
//!
//! Each widget is self-contained; the app owns their state

pub mod highlighter;
pub mod options_panel;
pub mod status;
