use eframe::egui;

/// Compact progress bar showing a 0..1 fraction as a percentage
pub struct ProgressBar {
    fraction: f32,
    width: f32,
    height: f32,
    fill_color: egui::Color32,
}

impl ProgressBar {
    /// Create new progress bar with specified dimensions
    /// Default fill color: light gray (0.7, 0.7, 0.7)
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_color(width, height, egui::Color32::from_rgb(178, 178, 178))
    }

    /// Create new progress bar with custom fill color
    pub fn with_color(width: f32, height: f32, fill_color: egui::Color32) -> Self {
        Self {
            fraction: 0.0,
            width,
            height,
            fill_color,
        }
    }

    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction;
    }

    /// Displayed fraction, clamped to 0..=1 (NaN shows as empty)
    pub fn fraction(&self) -> f32 {
        if self.fraction.is_nan() {
            0.0
        } else {
            self.fraction.clamp(0.0, 1.0)
        }
    }

    /// Render progress bar
    pub fn render(&self, ui: &mut egui::Ui) {
        let progress = self.fraction();

        // Reserve space for the progress bar
        let (rect, _response) =
            ui.allocate_exact_size(egui::vec2(self.width, self.height), egui::Sense::hover());

        // Draw background (dark)
        let bg_color = egui::Color32::from_gray(40);
        ui.painter().rect_filled(rect, 2.0, bg_color);

        // Draw progress fill
        if progress > 0.0 {
            let fill_width = rect.width() * progress;
            let fill_rect =
                egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
            ui.painter().rect_filled(fill_rect, 2.0, self.fill_color);
        }

        let text_color = egui::Color32::from_gray(220);
        let font_id = egui::FontId::monospace(9.0);

        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{:.0}%", progress * 100.0),
            font_id,
            text_color,
        );
    }
}
