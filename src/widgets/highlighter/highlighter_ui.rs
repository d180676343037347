//! Highlighter rendering: container, skewed highlight bar, text, marker.

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Shape, Stroke};

use super::highlighter::HighlighterState;
use super::icon::{marker_shapes, IconTransform, ICON_SIZE};
use crate::config::AnimationConfig;
use crate::core::{SceneNodes, VisualLayer};

/// Highlight bar skew, degrees (negative tilts the right end up)
const HIGHLIGHT_SKEW_DEG: f32 = -2.0;

/// Show a highlighter and drive its animation for this frame.
///
/// Order per frame: advance running timelines, detect triggers against the
/// freshly laid-out container, then paint the resulting layer values.
pub fn render_highlighter(ui: &mut egui::Ui, state: &mut HighlighterState, config: &AnimationConfig) -> egui::Response {
    let style = state.style(config);
    let text_color = ui.visuals().text_color();
    let galley = ui.painter().layout_no_wrap(
        config.text.clone(),
        egui::FontId::proportional(style.font_px),
        text_color,
    );

    let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::hover());
    let label = if config.class_name.is_empty() {
        config.text.clone()
    } else {
        format!("{} {}", config.class_name, config.text)
    };
    response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Label, ui.is_enabled(), &label));

    state.tick(ui.input(|i| i.time));

    if let Some(trigger) = state.detect_trigger(config, response.hovered()) {
        let nodes = SceneNodes {
            container_width: Some(rect.width()),
            highlight: true,
            marker: config.show_icon,
        };
        state.handle_trigger(trigger, config, &nodes);
    }

    if ui.is_rect_visible(rect) {
        let layers = *state.layers();
        let painter = ui.painter();

        let bar_alpha = (style.highlight_opacity * layers.highlight.opacity).clamp(0.0, 1.0);
        if let Some(bar) = highlight_shape(rect, &layers.highlight, style.color.gamma_multiply(bar_alpha)) {
            painter.add(bar);
        }

        painter.galley(rect.min, galley, text_color);

        if config.show_icon && !layers.marker.is_invisible() {
            let marker = &layers.marker;
            let xf = marker_transform(rect, marker);
            let color = style.color.gamma_multiply(marker.opacity.clamp(0.0, 1.0));
            painter.extend(marker_shapes(&xf, color));
        }
    }

    if state.is_playing() {
        ui.ctx().request_repaint();
    }

    response
}

/// Highlight bar quad: full container height, scaled along x about
/// `origin_x`, skewed vertically about the same pivot.
pub fn highlight_shape(rect: Rect, layer: &VisualLayer, fill: Color32) -> Option<Shape> {
    let width = rect.width() * layer.scale_x;
    if width <= 0.0 || fill.a() == 0 {
        return None;
    }
    let pivot_x = rect.left() + rect.width() * layer.origin_x;
    let left = pivot_x - (pivot_x - rect.left()) * layer.scale_x;
    let right = left + width;
    let tan = HIGHLIGHT_SKEW_DEG.to_radians().tan();
    let skew = |x: f32, y: f32| egui::pos2(x, y + (x - pivot_x) * tan);

    let points = vec![
        skew(left, rect.top()),
        skew(right, rect.top()),
        skew(right, rect.bottom()),
        skew(left, rect.bottom()),
    ];
    Some(Shape::convex_polygon(points, fill, Stroke::NONE))
}

/// Marker box sits at the container's left edge, vertically centered; it
/// rotates and scales about the center of its unshifted layout box.
fn marker_transform(rect: Rect, marker: &VisualLayer) -> IconTransform {
    let half = ICON_SIZE / 2.0;
    let left = rect.left() + marker.x;
    IconTransform {
        origin: Pos2::new(left, rect.center().y - half),
        pivot: Pos2::new(left + half, rect.center().y + half),
        scale: marker.scale,
        rotation: marker.rotation,
    }
}

/// Widget adapter: `ui.add(Highlighter::new(&mut state, &config))`.
pub struct Highlighter<'a> {
    state: &'a mut HighlighterState,
    config: &'a AnimationConfig,
}

impl<'a> Highlighter<'a> {
    pub fn new(state: &'a mut HighlighterState, config: &'a AnimationConfig) -> Self {
        Self { state, config }
    }
}

impl egui::Widget for Highlighter<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        render_highlighter(ui, self.state, self.config)
    }
}
