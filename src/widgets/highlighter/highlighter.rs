use log::{debug, info};

use super::highlighter_events::SweepTrigger;
use crate::config::{AnimationConfig, ReplayKey, ResolvedStyle};
use crate::core::{FrameTimeline, LayerStates, SceneNodes, SequencePhase, Sequencer, TimelineHandle};

/// Per-instance highlighter state.
///
/// Owns the layer values (inside the frame engine) and the single active
/// timeline handle. Keep one of these alive for as long as the widget is
/// shown; dropping it or calling [`unmount`](Self::unmount) kills the sweep.
#[derive(Debug, Default)]
pub struct HighlighterState {
    engine: FrameTimeline,
    sequencer: Sequencer<TimelineHandle>,
    mounted: bool,
    last_key: Option<ReplayKey>,
    hovered: bool,
    last_time: Option<f64>,
    /// (color, font size) the cached style was resolved from
    style_cache: Option<((String, String), ResolvedStyle)>,
}

impl HighlighterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &LayerStates {
        self.engine.layers()
    }

    pub fn phase(&self) -> SequencePhase {
        self.sequencer.phase(&self.engine)
    }

    pub fn is_playing(&self) -> bool {
        self.engine.is_playing()
    }

    /// Work out whether this show should (re)start the sweep.
    ///
    /// Mount wins over a prop change, which wins over pointer-enter. The
    /// hover edge is tracked on every call, even when another trigger fires.
    pub fn detect_trigger(&mut self, config: &AnimationConfig, hovered: bool) -> Option<SweepTrigger> {
        let entered = hovered && !self.hovered;
        self.hovered = hovered;

        let key = config.replay_key();
        let trigger = if !self.mounted {
            self.mounted = true;
            Some(SweepTrigger::Mounted)
        } else if self.last_key != Some(key) {
            Some(SweepTrigger::PropsChanged)
        } else if entered && config.replay_on_hover {
            Some(SweepTrigger::PointerEnter)
        } else {
            None
        };
        self.last_key = Some(key);
        trigger
    }

    /// Restart the sweep for `trigger`. Returns `false` if nodes are missing.
    pub fn handle_trigger(&mut self, trigger: SweepTrigger, config: &AnimationConfig, nodes: &SceneNodes) -> bool {
        debug!("Highlighter {:?}: sweep on {}", config.text, trigger.as_str());
        self.sequencer.run(&mut self.engine, config, nodes)
    }

    /// Advance running timelines to host time `now` (seconds).
    pub fn tick(&mut self, now: f64) {
        let dt = self.last_time.map(|t| (now - t).max(0.0) as f32).unwrap_or(0.0);
        self.last_time = Some(now);
        self.engine.advance(dt);
    }

    /// Advance by an explicit delta, independent of host time.
    pub fn advance(&mut self, dt: f32) {
        self.engine.advance(dt);
    }

    /// Kill the active sweep. The next show counts as a fresh mount.
    pub fn unmount(&mut self) {
        if self.mounted {
            info!("Highlighter unmounted");
        }
        self.sequencer.cancel(&mut self.engine);
        self.mounted = false;
        self.last_key = None;
        self.hovered = false;
        self.last_time = None;
    }

    /// Paint style, re-resolved only when the color or size strings change.
    pub fn style(&mut self, config: &AnimationConfig) -> ResolvedStyle {
        let key = (config.color.clone(), config.font_size.clone());
        let mut style = match &self.style_cache {
            Some((cached, style)) if *cached == key => *style,
            _ => {
                let style = config.style();
                self.style_cache = Some((key, style));
                style
            }
        };
        style.highlight_opacity = config.highlight_opacity;
        style
    }
}

impl Drop for HighlighterState {
    fn drop(&mut self) {
        self.sequencer.cancel(&mut self.engine);
    }
}
