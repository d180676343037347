//! Marker icon geometry: a two-stroke highlighter pen in a 24x24 viewbox.

use eframe::egui::{self, Color32, Pos2, Shape, Stroke};

/// Viewbox edge length the strokes are authored in
pub const VIEWBOX: f32 = 24.0;
/// Rendered icon box size in points
pub const ICON_SIZE: f32 = 32.0;
/// Stroke width in viewbox units
const STROKE_WIDTH: f32 = 2.0;

/// Nib and cap outline.
const NIB: &[[f32; 2]] = &[[9.0, 11.0], [3.0, 17.0], [3.0, 20.0], [12.0, 20.0], [15.0, 17.0]];

/// Barrel outline; the two rounded corners are approximated by their midpoints.
const BARREL: &[[f32; 2]] = &[
    [22.0, 12.0],
    [17.4, 16.6],
    [16.0, 17.172],
    [14.6, 16.6],
    [9.4, 11.4],
    [8.828, 10.0],
    [9.4, 8.6],
    [14.0, 4.0],
];

/// Where and how to draw the icon this frame.
#[derive(Clone, Copy, Debug)]
pub struct IconTransform {
    /// Top-left of the untransformed icon box
    pub origin: Pos2,
    /// Rotation/scale pivot
    pub pivot: Pos2,
    pub scale: f32,
    /// Clockwise, degrees
    pub rotation: f32,
}

impl IconTransform {
    fn map(&self, p: [f32; 2]) -> Pos2 {
        let k = ICON_SIZE / VIEWBOX;
        let local = egui::pos2(self.origin.x + p[0] * k, self.origin.y + p[1] * k);
        let rot = egui::emath::Rot2::from_angle(self.rotation.to_radians());
        self.pivot + rot * ((local - self.pivot) * self.scale)
    }
}

/// Stroke shapes for the icon, empty when fully scaled down.
pub fn marker_shapes(xf: &IconTransform, color: Color32) -> Vec<Shape> {
    if xf.scale <= 0.0 {
        return Vec::new();
    }
    let stroke = Stroke::new(STROKE_WIDTH * ICON_SIZE / VIEWBOX * xf.scale, color);
    [NIB, BARREL]
        .iter()
        .map(|path| Shape::line(path.iter().map(|&p| xf.map(p)).collect(), stroke))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_at(x: f32, y: f32) -> IconTransform {
        IconTransform {
            origin: egui::pos2(x, y),
            pivot: egui::pos2(x + ICON_SIZE / 2.0, y + ICON_SIZE / 2.0),
            scale: 1.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_identity_maps_into_box() {
        let xf = identity_at(10.0, 20.0);
        let p = xf.map([24.0, 24.0]);
        assert!((p.x - 42.0).abs() < 1e-4 && (p.y - 52.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_about_pivot() {
        let mut xf = identity_at(0.0, 0.0);
        xf.rotation = 90.0;
        // right-middle of the box rotates clockwise onto bottom-middle
        let p = xf.map([24.0, 12.0]);
        assert!((p.x - 16.0).abs() < 1e-3 && (p.y - 32.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_scale_draws_nothing() {
        let mut xf = identity_at(0.0, 0.0);
        assert_eq!(marker_shapes(&xf, Color32::WHITE).len(), 2);
        xf.scale = 0.0;
        assert!(marker_shapes(&xf, Color32::WHITE).is_empty());
    }
}
