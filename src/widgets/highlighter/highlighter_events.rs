//! Highlighter widget events.

/// Why a sweep is (re)started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepTrigger {
    /// First show after creation or after an unmount
    Mounted,
    /// `show_icon`, `duration` or `delay` differ from the last show
    PropsChanged,
    /// Pointer entered the container with `replay_on_hover` set
    PointerEnter,
}

impl SweepTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepTrigger::Mounted => "mounted",
            SweepTrigger::PropsChanged => "props changed",
            SweepTrigger::PointerEnter => "pointer enter",
        }
    }
}
