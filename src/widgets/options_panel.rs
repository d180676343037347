//! Live editor for [`HighlighterOptions`].

use eframe::egui::{self, Color32};

use crate::config::{parse_color, HighlighterOptions};

/// What the user asked for besides editing values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelActions {
    /// Any option changed this frame
    pub changed: bool,
    /// Unmount and mount again
    pub remount: bool,
}

/// Render option controls. Edits are written back as explicit values.
pub fn render_options_panel(ui: &mut egui::Ui, options: &mut HighlighterOptions) -> PanelActions {
    let mut cfg = options.resolve();
    let mut actions = PanelActions::default();
    let before = cfg.clone();

    ui.heading("Text");
    ui.add_space(4.0);
    ui.text_edit_singleline(&mut cfg.text);
    ui.add_space(8.0);

    ui.label("Color:");
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut cfg.color).desired_width(90.0));
        if let Some(mut picked) = parse_color(&cfg.color)
            && ui.color_edit_button_srgba(&mut picked).changed()
        {
            cfg.color = color_to_hex(picked);
        }
    });
    ui.add_space(8.0);

    ui.label("Font Size:");
    ui.add(egui::TextEdit::singleline(&mut cfg.font_size).desired_width(90.0));
    ui.add_space(8.0);

    ui.label("Class Name:");
    ui.add(egui::TextEdit::singleline(&mut cfg.class_name).desired_width(140.0));
    ui.add_space(16.0);

    ui.heading("Animation");
    ui.add_space(8.0);

    ui.label("Highlight Opacity:");
    ui.add(egui::Slider::new(&mut cfg.highlight_opacity, 0.0..=1.0).step_by(0.05));
    ui.add_space(8.0);

    ui.label("Duration:");
    ui.add(
        egui::Slider::new(&mut cfg.duration, 0.0..=5.0)
            .suffix(" s")
            .step_by(0.1),
    );
    ui.add_space(8.0);

    ui.label("Delay:");
    ui.add(
        egui::Slider::new(&mut cfg.delay, 0.0..=3.0)
            .suffix(" s")
            .step_by(0.1),
    );
    ui.add_space(8.0);

    ui.checkbox(&mut cfg.show_icon, "Show marker icon");
    ui.checkbox(&mut cfg.replay_on_hover, "Replay on hover");
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui.button("Replay").clicked() {
            actions.remount = true;
        }
        if ui.button("Defaults").clicked() {
            *options = HighlighterOptions::new(cfg.text.clone());
            actions.changed = true;
        }
    });

    if !actions.changed && cfg != before {
        *options = HighlighterOptions::from(&cfg);
        actions.changed = true;
    }
    actions
}

/// `#rrggbb`, or `#rrggbbaa` when the color is not opaque.
fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex_keeps_alpha() {
        let opaque = parse_color("#6ca0dc").unwrap();
        assert_eq!(color_to_hex(opaque), "#6ca0dc");

        let translucent = color_to_hex(parse_color("#ff000080").unwrap());
        assert_eq!(translucent.len(), 9);
        assert!(translucent.ends_with("80"));
        assert_eq!(parse_color(&translucent).unwrap().a(), 0x80);
    }
}
