//! Declarative timeline: an ordered list of tweens with relative positions.
//!
//! Tweens are added in order. Each one carries a [`Position`] describing
//! where it starts relative to what was added before it. [`Timeline::schedule`]
//! resolves those positions into absolute start times (seconds from the
//! moment the timeline's delay has elapsed). Nothing here touches layer state.
//!
//! ```
//! use sweepmark::core::{Timeline, Position, LayerId, Prop};
//!
//! let tl = Timeline::new(0.0)
//!     .to(LayerId::Marker, &[(Prop::Opacity, 1.0)], 0.3, Position::End)
//!     .to(LayerId::Highlight, &[(Prop::ScaleX, 1.0)], 1.0, Position::End)
//!     .to(LayerId::Marker, &[(Prop::X, 200.0)], 1.0, Position::WithPrevious);
//! let sched = tl.schedule();
//! assert_eq!(sched[1].start, 0.3);
//! assert_eq!(sched[2].start, 0.3);
//! ```

use super::ease::Ease;
use super::layer::{LayerId, PropValue};

/// Where a tween starts, relative to the tweens added before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the whole timeline (the default placement)
    End,
    /// Same start as the previously added tween (`"<"`)
    WithPrevious,
    /// End of the previously added tween plus an offset (`">-0.3"`)
    AfterPrevious(f32),
}

/// One property transition toward fixed targets.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub layer: LayerId,
    pub targets: Vec<PropValue>,
    pub duration: f32,
    pub position: Position,
}

/// A tween with its position resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledTween {
    pub layer: LayerId,
    pub targets: Vec<PropValue>,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl ScheduledTween {
    pub fn end(&self) -> f32 {
        self.start + self.duration.max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    /// Seconds before the first tween may start
    pub delay: f32,
    pub default_ease: Ease,
    pub tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            default_ease: Ease::default(),
            tweens: Vec::new(),
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.default_ease = ease;
        self
    }

    /// Append a tween toward `targets` (builder style).
    pub fn to(mut self, layer: LayerId, targets: &[PropValue], duration: f32, position: Position) -> Self {
        self.tweens.push(Tween {
            layer,
            targets: targets.to_vec(),
            duration,
            position,
        });
        self
    }

    /// Resolve every tween's position into an absolute start time.
    ///
    /// Negative durations are kept as given but occupy no time when
    /// computing ends. Negative resolved starts are clamped to zero.
    pub fn schedule(&self) -> Vec<ScheduledTween> {
        let mut out: Vec<ScheduledTween> = Vec::with_capacity(self.tweens.len());
        let mut timeline_end = 0.0_f32;

        for tween in &self.tweens {
            let prev = out.last();
            let start = match tween.position {
                Position::End => timeline_end,
                Position::WithPrevious => prev.map(|p| p.start).unwrap_or(0.0),
                Position::AfterPrevious(offset) => prev.map(|p| p.end()).unwrap_or(timeline_end) + offset,
            }
            .max(0.0);

            let scheduled = ScheduledTween {
                layer: tween.layer,
                targets: tween.targets.clone(),
                start,
                duration: tween.duration,
                ease: self.default_ease,
            };
            timeline_end = timeline_end.max(scheduled.end());
            out.push(scheduled);
        }

        out
    }

    /// Length of the timeline excluding `delay`.
    pub fn duration(&self) -> f32 {
        self.schedule().iter().map(ScheduledTween::end).fold(0.0, f32::max)
    }
}
