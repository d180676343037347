//! Easing curves for tweens.
//!
//! Only the curves the sweep actually uses. `Power2InOut` matches the
//! common "power2.inOut" naming (quadratic ease-in-out).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out
    #[default]
    Power2InOut,
}

impl Ease {
    /// Map linear progress `t` (clamped to 0..=1) to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}
