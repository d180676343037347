//! Status bar widget - sweep phase and layer readout

mod progress_bar;
mod status;

pub use progress_bar::ProgressBar;
pub use status::{StatusBar, StatusEntry};
