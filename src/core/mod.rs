//! Core animation modules - layers, timelines, engine, sequencer
//!
//! These modules drive the sweep, independent of UI.

pub mod ease;
pub mod engine;
pub mod layer;
pub mod sequencer;
pub mod timeline;

// Re-exports for convenience
pub use ease::Ease;
pub use engine::{FrameTimeline, TimelineEngine, TimelineHandle};
pub use layer::{LayerId, LayerStates, Prop, PropValue, VisualLayer};
pub use sequencer::{build_plan, SceneNodes, SequencePhase, Sequencer, SweepPlan};
pub use timeline::{Position, ScheduledTween, Timeline, Tween};
