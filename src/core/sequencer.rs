//! Sweep sequencer: builds the highlight/marker plan and owns the one live
//! timeline of a highlighter instance.
//!
//! # Plan
//!
//! Reset (immediate):
//! - highlight: `scale_x = 0`, origin at left edge
//! - marker (if shown): `opacity = 0`, `scale = 0`, `rotation = -30`, `x = 0`
//!
//! Timeline (after `delay`, ease in-out):
//! 1. marker fades/scales in over 0.3s
//! 2. highlight `scale_x` 0 -> 1 over `duration`, after step 1
//! 3. marker `x` 0 -> container width over `duration`, together with step 2
//! 4. marker fades/scales out over 0.3s, ending with step 3
//!
//! Without the marker only step 2 runs.

use log::debug;

use super::ease::Ease;
use super::engine::TimelineEngine;
use super::layer::{LayerId, Prop, PropValue};
use super::timeline::{Position, Timeline};
use crate::config::AnimationConfig;

/// Marker fade in/out time in seconds
pub const MARKER_FADE: f32 = 0.3;
/// Marker tilt before it fades in, in degrees
pub const MARKER_START_ROTATION: f32 = -30.0;

/// What the renderer actually has on screen this frame.
///
/// A missing container or highlight makes the sequencer a no-op; a missing
/// marker only drops the marker steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneNodes {
    /// Rendered container width in points, `None` if not laid out
    pub container_width: Option<f32>,
    pub highlight: bool,
    pub marker: bool,
}

/// Immediate resets followed by the timeline to play.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPlan {
    pub resets: Vec<(LayerId, Vec<PropValue>)>,
    pub timeline: Timeline,
}

/// Build the plan for `config`, or `None` if required nodes are missing.
pub fn build_plan(config: &AnimationConfig, nodes: &SceneNodes) -> Option<SweepPlan> {
    let width = nodes.container_width?;
    if !nodes.highlight {
        return None;
    }
    let with_marker = config.show_icon && nodes.marker;

    let mut resets = vec![(LayerId::Highlight, vec![(Prop::ScaleX, 0.0), (Prop::OriginX, 0.0)])];
    let mut timeline = Timeline::new(config.delay).with_ease(Ease::Power2InOut);

    if with_marker {
        resets.push((
            LayerId::Marker,
            vec![
                (Prop::Opacity, 0.0),
                (Prop::Scale, 0.0),
                (Prop::Rotation, MARKER_START_ROTATION),
                (Prop::X, 0.0),
            ],
        ));
        timeline = timeline
            .to(LayerId::Marker, &[(Prop::Opacity, 1.0), (Prop::Scale, 1.0)], MARKER_FADE, Position::End)
            .to(LayerId::Highlight, &[(Prop::ScaleX, 1.0)], config.duration, Position::End)
            .to(LayerId::Marker, &[(Prop::X, width)], config.duration, Position::WithPrevious)
            .to(
                LayerId::Marker,
                &[(Prop::Opacity, 0.0), (Prop::Scale, 0.0)],
                MARKER_FADE,
                Position::AfterPrevious(-MARKER_FADE),
            );
    } else {
        timeline = timeline.to(LayerId::Highlight, &[(Prop::ScaleX, 1.0)], config.duration, Position::End);
    }

    Some(SweepPlan { resets, timeline })
}

/// Lifecycle of the sequence as seen from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencePhase {
    Idle,
    Playing,
    Finished,
}

/// Owns the single active timeline handle of one highlighter.
#[derive(Debug)]
pub struct Sequencer<H> {
    active: Option<H>,
}

impl<H> Default for Sequencer<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H: Copy + Eq + std::fmt::Debug> Sequencer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<H> {
        self.active
    }

    /// Kill any running sequence, reset the layers, play a fresh one.
    ///
    /// Returns `false` (and touches nothing) when required nodes are missing.
    pub fn run<E>(&mut self, engine: &mut E, config: &AnimationConfig, nodes: &SceneNodes) -> bool
    where
        E: TimelineEngine<Handle = H>,
    {
        let Some(plan) = build_plan(config, nodes) else {
            debug!("Highlighter nodes missing, skipping sweep");
            return false;
        };

        self.cancel(engine);

        for (layer, props) in &plan.resets {
            engine.set(*layer, props);
        }
        let handle = engine.play(plan.timeline);
        debug!(
            "Sweep started {:?}: duration {:.3}s, delay {:.3}s, marker {}",
            handle,
            config.duration,
            config.delay,
            config.show_icon && nodes.marker
        );
        self.active = Some(handle);
        true
    }

    /// Kill the active sequence, if any. Layers keep their last values.
    pub fn cancel<E>(&mut self, engine: &mut E)
    where
        E: TimelineEngine<Handle = H>,
    {
        if let Some(handle) = self.active.take() {
            engine.kill(handle);
        }
    }

    pub fn phase<E>(&self, engine: &E) -> SequencePhase
    where
        E: TimelineEngine<Handle = H>,
    {
        match self.active {
            None => SequencePhase::Idle,
            Some(h) if engine.is_active(h) => SequencePhase::Playing,
            Some(_) => SequencePhase::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HighlighterOptions;
    use crate::core::engine::FrameTimeline;

    /// Timeline engine double that records every call.
    #[derive(Debug, Default)]
    struct RecordingEngine {
        ops: Vec<Op>,
        live: Vec<u32>,
        next: u32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Set(LayerId, Vec<PropValue>),
        Play(u32, Timeline),
        Kill(u32),
    }

    impl TimelineEngine for RecordingEngine {
        type Handle = u32;

        fn set(&mut self, layer: LayerId, props: &[PropValue]) {
            self.ops.push(Op::Set(layer, props.to_vec()));
        }

        fn play(&mut self, timeline: Timeline) -> u32 {
            self.next += 1;
            self.live.push(self.next);
            self.ops.push(Op::Play(self.next, timeline));
            self.next
        }

        fn kill(&mut self, handle: u32) {
            self.live.retain(|&h| h != handle);
            self.ops.push(Op::Kill(handle));
        }

        fn is_active(&self, handle: u32) -> bool {
            self.live.contains(&handle)
        }
    }

    fn nodes(width: f32) -> SceneNodes {
        SceneNodes {
            container_width: Some(width),
            highlight: true,
            marker: true,
        }
    }

    fn config(show_icon: bool, duration: f32, delay: f32) -> AnimationConfig {
        HighlighterOptions {
            show_icon: Some(show_icon),
            duration: Some(duration),
            delay: Some(delay),
            ..HighlighterOptions::new("Hello")
        }
        .resolve()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_plan_with_marker_matches_worked_example() {
        let plan = build_plan(&config(true, 1.0, 0.0), &nodes(200.0)).unwrap();
        let s = plan.timeline.schedule();
        assert_eq!(s.len(), 4);

        // marker in [0, 0.3]
        assert_eq!(s[0].layer, LayerId::Marker);
        assert!(approx(s[0].start, 0.0) && approx(s[0].end(), 0.3));
        // highlight [0.3, 1.3]
        assert_eq!(s[1].layer, LayerId::Highlight);
        assert_eq!(s[1].targets, vec![(Prop::ScaleX, 1.0)]);
        assert!(approx(s[1].start, 0.3) && approx(s[1].end(), 1.3));
        // marker x [0.3, 1.3] across container width
        assert_eq!(s[2].targets, vec![(Prop::X, 200.0)]);
        assert!(approx(s[2].start, 0.3) && approx(s[2].end(), 1.3));
        // marker out [1.0, 1.3]
        assert_eq!(s[3].targets, vec![(Prop::Opacity, 0.0), (Prop::Scale, 0.0)]);
        assert!(approx(s[3].start, 1.0) && approx(s[3].end(), 1.3));

        assert!(s.iter().all(|t| t.ease == Ease::Power2InOut));
    }

    #[test]
    fn test_plan_resets() {
        let plan = build_plan(&config(true, 1.0, 0.0), &nodes(50.0)).unwrap();
        assert_eq!(
            plan.resets[0],
            (LayerId::Highlight, vec![(Prop::ScaleX, 0.0), (Prop::OriginX, 0.0)])
        );
        assert_eq!(
            plan.resets[1],
            (
                LayerId::Marker,
                vec![
                    (Prop::Opacity, 0.0),
                    (Prop::Scale, 0.0),
                    (Prop::Rotation, -30.0),
                    (Prop::X, 0.0)
                ]
            )
        );
    }

    #[test]
    fn test_plan_without_icon_has_no_marker_work() {
        let plan = build_plan(&config(false, 2.0, 0.5), &nodes(80.0)).unwrap();
        assert!(plan.resets.iter().all(|(l, _)| *l == LayerId::Highlight));
        let s = plan.timeline.schedule();
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].layer, LayerId::Highlight);
        assert_eq!(s[0].start, 0.0);
        assert_eq!(plan.timeline.delay, 0.5);
    }

    #[test]
    fn test_missing_marker_node_skips_marker_steps() {
        let mut n = nodes(80.0);
        n.marker = false;
        let plan = build_plan(&config(true, 1.0, 0.0), &n).unwrap();
        assert!(plan.timeline.tweens.iter().all(|t| t.layer == LayerId::Highlight));
    }

    #[test]
    fn test_missing_container_is_noop() {
        let mut engine = RecordingEngine::default();
        let mut seq = Sequencer::new();
        assert!(seq.run(&mut engine, &config(true, 1.0, 0.0), &nodes(10.0)));

        let missing = SceneNodes {
            container_width: None,
            ..nodes(0.0)
        };
        let before = engine.ops.len();
        assert!(!seq.run(&mut engine, &config(true, 1.0, 0.0), &missing));
        assert_eq!(engine.ops.len(), before);
        // previous sequence untouched
        assert_eq!(seq.active(), Some(1));

        let no_highlight = SceneNodes {
            highlight: false,
            ..nodes(10.0)
        };
        assert!(!seq.run(&mut engine, &config(true, 1.0, 0.0), &no_highlight));
        assert_eq!(engine.ops.len(), before);
    }

    #[test]
    fn test_rerun_kills_before_reset() {
        let mut engine = RecordingEngine::default();
        let mut seq = Sequencer::new();
        let cfg = config(true, 1.0, 0.0);
        seq.run(&mut engine, &cfg, &nodes(10.0));
        engine.ops.clear();

        seq.run(&mut engine, &cfg, &nodes(10.0));
        assert_eq!(engine.ops[0], Op::Kill(1));
        assert!(matches!(engine.ops[1], Op::Set(LayerId::Highlight, _)));
        assert!(matches!(engine.ops.last(), Some(Op::Play(2, _))));
        assert_eq!(engine.live, vec![2]);
        assert_eq!(seq.active(), Some(2));
    }

    #[test]
    fn test_cancel_and_phase() {
        let mut engine = RecordingEngine::default();
        let mut seq: Sequencer<u32> = Sequencer::new();
        assert_eq!(seq.phase(&engine), SequencePhase::Idle);

        seq.run(&mut engine, &config(false, 1.0, 0.0), &nodes(10.0));
        assert_eq!(seq.phase(&engine), SequencePhase::Playing);

        seq.cancel(&mut engine);
        assert_eq!(seq.phase(&engine), SequencePhase::Idle);
        assert!(engine.live.is_empty());
        // second cancel is a no-op
        seq.cancel(&mut engine);
        assert_eq!(engine.ops.iter().filter(|o| matches!(o, Op::Kill(_))).count(), 1);
    }

    #[test]
    fn test_highlight_reaches_full_scale_on_time() {
        for (show_icon, lead) in [(true, MARKER_FADE), (false, 0.0)] {
            let mut engine = FrameTimeline::new();
            let mut seq = Sequencer::new();
            let cfg = config(show_icon, 1.0, 0.25);
            seq.run(&mut engine, &cfg, &nodes(100.0));
            assert_eq!(engine.layers().highlight.scale_x, 0.0);

            let total = cfg.delay + lead + cfg.duration;
            engine.advance(total - 0.05);
            assert!(engine.layers().highlight.scale_x < 1.0);
            engine.advance(0.05 + 1e-3);
            assert_eq!(engine.layers().highlight.scale_x, 1.0);
            assert_eq!(seq.phase(&engine), SequencePhase::Finished);
        }
    }

    #[test]
    fn test_marker_starts_and_ends_hidden_peaking_mid_sweep() {
        let mut engine = FrameTimeline::new();
        let mut seq = Sequencer::new();
        seq.run(&mut engine, &config(true, 1.0, 0.0), &nodes(120.0));

        let m = engine.layers().marker;
        assert_eq!((m.opacity, m.scale, m.rotation, m.x), (0.0, 0.0, -30.0, 0.0));

        engine.advance(0.5);
        let m = engine.layers().marker;
        assert_eq!((m.opacity, m.scale), (1.0, 1.0));
        assert!(m.x > 0.0 && m.x < 120.0);

        engine.advance(1.0);
        let m = engine.layers().marker;
        assert_eq!((m.opacity, m.scale), (0.0, 0.0));
        assert_eq!(m.x, 120.0);
    }

    #[test]
    fn test_rerun_mid_sweep_resets_highlight() {
        let mut engine = FrameTimeline::new();
        let mut seq = Sequencer::new();
        let cfg = config(false, 1.0, 0.0);
        seq.run(&mut engine, &cfg, &nodes(100.0));
        engine.advance(0.6);
        assert!(engine.layers().highlight.scale_x > 0.0);

        let longer = config(false, 3.0, 0.0);
        seq.run(&mut engine, &longer, &nodes(100.0));
        assert_eq!(engine.layers().highlight.scale_x, 0.0);
        engine.advance(1.5);
        // halfway through the new, longer sweep
        assert!(approx(engine.layers().highlight.scale_x, 0.5));
        engine.advance(1.5);
        assert_eq!(engine.layers().highlight.scale_x, 1.0);
    }
}
