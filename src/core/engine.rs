//! Timeline engine: the primitive that actually moves layer properties.
//!
//! [`TimelineEngine`] is the seam between the sequencer (which only decides
//! *what* to play) and whatever steps property values over time.
//! [`FrameTimeline`] is the frame-driven implementation used by the widget:
//! the host calls [`FrameTimeline::advance`] once per rendered frame with the
//! frame delta.
//!
//! # Tween semantics
//!
//! - From-values are captured from the layer when a tween first starts,
//!   not when the timeline is built.
//! - A running tween writes eased values every step; on completion it writes
//!   its exact targets once and is never written again.
//! - Duration <= 0 completes on the first step that reaches its start.
//! - `kill` drops a timeline immediately; layers keep their last values.

use log::{debug, trace};

use super::layer::{LayerId, LayerStates, PropValue};
use super::timeline::{ScheduledTween, Timeline};

/// Operations a highlighter needs from an animation backend.
pub trait TimelineEngine {
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Set properties immediately, no animation.
    fn set(&mut self, layer: LayerId, props: &[PropValue]);

    /// Start playing a timeline. Returns a handle for later `kill`.
    fn play(&mut self, timeline: Timeline) -> Self::Handle;

    /// Discard all pending and in-flight work of a timeline.
    /// Unknown or finished handles are ignored.
    fn kill(&mut self, handle: Self::Handle);

    /// True while the timeline still has tweens to run.
    fn is_active(&self, handle: Self::Handle) -> bool;
}

/// Opaque id of a timeline played on a [`FrameTimeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineHandle(u64);

#[derive(Clone, Debug)]
enum TweenState {
    Pending,
    /// Running, with the from-values captured at start
    Running(Vec<PropValue>),
    Done,
}

#[derive(Debug)]
struct PlayingTween {
    tween: ScheduledTween,
    state: TweenState,
}

#[derive(Debug)]
struct Playing {
    handle: TimelineHandle,
    delay: f32,
    elapsed: f32,
    tweens: Vec<PlayingTween>,
}

impl Playing {
    fn is_done(&self) -> bool {
        self.tweens.iter().all(|t| matches!(t.state, TweenState::Done))
    }
}

/// Frame-stepped timeline engine owning the layer state of one widget.
#[derive(Debug, Default)]
pub struct FrameTimeline {
    layers: LayerStates,
    playing: Vec<Playing>,
    next_id: u64,
}

impl FrameTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current layer values (read-only snapshot for painting).
    pub fn layers(&self) -> &LayerStates {
        &self.layers
    }

    /// Any timeline still running?
    pub fn is_playing(&self) -> bool {
        !self.playing.is_empty()
    }

    /// Step all live timelines by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let layers = &mut self.layers;

        for playing in &mut self.playing {
            playing.elapsed += dt;
            let local = playing.elapsed - playing.delay;
            if local < 0.0 {
                continue;
            }

            for pt in &mut playing.tweens {
                let tween = &pt.tween;
                if local < tween.start || matches!(pt.state, TweenState::Done) {
                    continue;
                }

                let layer = layers.layer_mut(tween.layer);
                if matches!(pt.state, TweenState::Pending) {
                    let from = tween.targets.iter().map(|&(p, _)| (p, layer.get(p))).collect();
                    pt.state = TweenState::Running(from);
                }

                let progress = if tween.duration <= 0.0 {
                    1.0
                } else {
                    ((local - tween.start) / tween.duration).clamp(0.0, 1.0)
                };

                if progress >= 1.0 {
                    layer.apply(&tween.targets);
                    pt.state = TweenState::Done;
                    continue;
                }

                if let TweenState::Running(from) = &pt.state {
                    let k = tween.ease.apply(progress);
                    for (&(prop, a), &(_, b)) in from.iter().zip(&tween.targets) {
                        layer.set(prop, a + (b - a) * k);
                    }
                }
            }
        }

        self.playing.retain(|p| {
            let done = p.is_done();
            if done {
                debug!("Timeline {:?} finished after {:.3}s", p.handle, p.elapsed);
            }
            !done
        });
    }
}

impl TimelineEngine for FrameTimeline {
    type Handle = TimelineHandle;

    fn set(&mut self, layer: LayerId, props: &[PropValue]) {
        trace!("set {:?} {:?}", layer, props);
        self.layers.layer_mut(layer).apply(props);
    }

    fn play(&mut self, timeline: Timeline) -> TimelineHandle {
        self.next_id += 1;
        let handle = TimelineHandle(self.next_id);
        let tweens: Vec<PlayingTween> = timeline
            .schedule()
            .into_iter()
            .map(|tween| PlayingTween {
                tween,
                state: TweenState::Pending,
            })
            .collect();
        debug!(
            "Timeline {:?} started: {} tweens over {:.3}s, delay {:.3}s",
            handle,
            tweens.len(),
            timeline.duration(),
            timeline.delay
        );
        self.playing.push(Playing {
            handle,
            delay: timeline.delay,
            elapsed: 0.0,
            tweens,
        });
        handle
    }

    fn kill(&mut self, handle: TimelineHandle) {
        let before = self.playing.len();
        self.playing.retain(|p| p.handle != handle);
        if self.playing.len() != before {
            debug!("Timeline {:?} killed", handle);
        }
    }

    fn is_active(&self, handle: TimelineHandle) -> bool {
        self.playing.iter().any(|p| p.handle == handle)
    }
}
