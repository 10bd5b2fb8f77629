//! Day/night skybox selection with transition-only environment refresh.

use crate::daynight::celestial::is_daytime;
use crate::daynight::sink::EnvironmentSink;

/// The two valid skybox selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skybox {
    Day,
    Night,
}

/// Pure selection: which skybox belongs to normalized time `t`.
#[inline]
pub fn select_skybox(t: f32) -> Skybox {
    if is_daytime(t) {
        Skybox::Day
    } else {
        Skybox::Night
    }
}

/// Applies skybox selection to a sink, caching the last applied value so the
/// environment refresh fires exactly once per day/night transition rather
/// than every frame.
#[derive(Clone, Debug, Default)]
pub struct SkyboxSelector {
    last_applied: Option<Skybox>,
}

impl SkyboxSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the skybox for normalized time `t`. Returns true when a
    /// transition occurred (and the refresh was triggered).
    pub fn apply(&mut self, t: f32, sink: &mut dyn EnvironmentSink) -> bool {
        let skybox = select_skybox(t);
        if self.last_applied == Some(skybox) {
            return false;
        }
        self.last_applied = Some(skybox);
        sink.set_skybox(skybox);
        sink.refresh_environment();
        true
    }

    /// Last skybox pushed to the sink, if any.
    #[inline]
    pub fn current(&self) -> Option<Skybox> {
        self.last_applied
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
