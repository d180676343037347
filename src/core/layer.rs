//! Visual layers and their animatable properties.
//!
//! A highlighter owns exactly two layers: the highlight bar and the
//! marker icon. Only the timeline engine writes to them; the renderer
//! reads a snapshot once per frame.

use serde::{Deserialize, Serialize};

/// Which layer a tween or `set` targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerId {
    Highlight,
    Marker,
}

/// Animatable property of a [`VisualLayer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prop {
    /// Horizontal scale factor
    ScaleX,
    /// Uniform scale factor
    Scale,
    /// Alpha multiplier (0.0-1.0)
    Opacity,
    /// Rotation in degrees, clockwise
    Rotation,
    /// Horizontal translation in points
    X,
    /// Horizontal transform origin as a fraction of width (0 = left edge)
    OriginX,
}

/// Property/target pair, the unit of every `set` and tween.
pub type PropValue = (Prop, f32);

/// Mutable transform/opacity state of one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualLayer {
    pub scale_x: f32,
    pub scale: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub x: f32,
    pub origin_x: f32,
}

impl Default for VisualLayer {
    /// Identity transform, fully opaque, centered origin.
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale: 1.0,
            opacity: 1.0,
            rotation: 0.0,
            x: 0.0,
            origin_x: 0.5,
        }
    }
}

impl VisualLayer {
    pub fn get(&self, prop: Prop) -> f32 {
        match prop {
            Prop::ScaleX => self.scale_x,
            Prop::Scale => self.scale,
            Prop::Opacity => self.opacity,
            Prop::Rotation => self.rotation,
            Prop::X => self.x,
            Prop::OriginX => self.origin_x,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f32) {
        match prop {
            Prop::ScaleX => self.scale_x = value,
            Prop::Scale => self.scale = value,
            Prop::Opacity => self.opacity = value,
            Prop::Rotation => self.rotation = value,
            Prop::X => self.x = value,
            Prop::OriginX => self.origin_x = value,
        }
    }

    pub fn apply(&mut self, props: &[PropValue]) {
        for &(prop, value) in props {
            self.set(prop, value);
        }
    }

    /// Nothing visible to paint
    pub fn is_invisible(&self) -> bool {
        self.opacity <= 0.0 || self.scale <= 0.0 || self.scale_x <= 0.0
    }
}

/// Both layers of one highlighter instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerStates {
    pub highlight: VisualLayer,
    pub marker: VisualLayer,
}

impl LayerStates {
    pub fn layer(&self, id: LayerId) -> &VisualLayer {
        match id {
            LayerId::Highlight => &self.highlight,
            LayerId::Marker => &self.marker,
        }
    }

    pub fn layer_mut(&mut self, id: LayerId) -> &mut VisualLayer {
        match id {
            LayerId::Highlight => &mut self.highlight,
            LayerId::Marker => &mut self.marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip_per_prop() {
        let mut layer = VisualLayer::default();
        layer.apply(&[(Prop::Rotation, -30.0), (Prop::X, 120.0), (Prop::OriginX, 0.0)]);
        assert_eq!(layer.get(Prop::Rotation), -30.0);
        assert_eq!(layer.get(Prop::X), 120.0);
        assert_eq!(layer.origin_x, 0.0);
        // untouched
        assert_eq!(layer.scale, 1.0);
    }

    #[test]
    fn test_invisible() {
        let mut layer = VisualLayer::default();
        assert!(!layer.is_invisible());
        layer.set(Prop::ScaleX, 0.0);
        assert!(layer.is_invisible());
    }

    #[test]
    fn test_layer_lookup() {
        let mut states = LayerStates::default();
        states.layer_mut(LayerId::Marker).set(Prop::Opacity, 0.25);
        assert_eq!(states.marker.opacity, 0.25);
        assert_eq!(states.layer(LayerId::Highlight).opacity, 1.0);
    }
}
