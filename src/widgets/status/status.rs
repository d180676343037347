use eframe::egui;

use super::progress_bar::ProgressBar;
use crate::core::{LayerStates, SequencePhase};

/// One highlighter's line in the status bar
pub struct StatusEntry<'a> {
    pub name: &'a str,
    pub phase: SequencePhase,
    pub layers: &'a LayerStates,
}

/// Status bar component: sweep phase and live layer values
pub struct StatusBar {
    pub current_message: String,
    progress: ProgressBar,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            current_message: String::new(),
            progress: ProgressBar::new(80.0, 12.0),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.current_message = message.into();
    }

    /// Render status bar at bottom of screen
    pub fn render(&mut self, ctx: &egui::Context, entries: &[StatusEntry<'_>], frame_time_ms: f32) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for entry in entries {
                    ui.monospace(entry.name);
                    ui.monospace(Self::format_phase(entry.phase));

                    // Sweep progress is the highlight bar's horizontal scale
                    self.progress.set_fraction(entry.layers.highlight.scale_x);
                    self.progress.render(ui);

                    let marker = &entry.layers.marker;
                    ui.monospace(format!(
                        "x:{:>6.1} a:{:.2} s:{:.2}",
                        marker.x, marker.opacity, marker.scale
                    ));

                    ui.separator();
                }

                // Frame time
                ui.monospace(format!("{:.1}ms", frame_time_ms));

                // Status message (if any)
                if !self.current_message.is_empty() {
                    ui.separator();
                    ui.monospace(&self.current_message);
                }
            });
        });
    }

    fn format_phase(phase: SequencePhase) -> &'static str {
        match phase {
            SequencePhase::Idle => "idle    ",
            SequencePhase::Playing => "playing ",
            SequencePhase::Finished => "finished",
        }
    }
}
