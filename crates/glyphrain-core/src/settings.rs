//! Tunables of the rain effect.

use std::time::Duration;

/// Default period between render steps (~30 steps per second).
pub const DEFAULT_TICK: Duration = Duration::from_millis(33);

/// Default opacity of the black overlay painted every step.
pub const DEFAULT_FADE_ALPHA: f32 = 0.03;

/// Default value a random draw must exceed to recycle a drop.
pub const DEFAULT_RECYCLE_THRESHOLD: f64 = 0.975;

/// Settings driving the rain renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainSettings {
    /// Period between render steps.
    pub tick: Duration,
    /// Opacity of the trail overlay, in `(0, 1]`.
    pub fade_alpha: f32,
    /// Recycle a drop past the bottom when a uniform draw exceeds this.
    /// `1.0` disables recycling.
    pub recycle_threshold: f64,
}

impl Default for RainSettings {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            fade_alpha: DEFAULT_FADE_ALPHA,
            recycle_threshold: DEFAULT_RECYCLE_THRESHOLD,
        }
    }
}
