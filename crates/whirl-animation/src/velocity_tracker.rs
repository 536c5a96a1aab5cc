//! Instantaneous velocity sampling for drag gestures.
//!
//! Converts a stream of `(position, timestamp)` input events into a bounded
//! history of per-frame velocity samples. Averaging the newest few samples
//! at release smooths the noise inherent in discrete pointer events.

use smallvec::SmallVec;

use crate::config::CarouselConfig;

/// Reference frame duration in milliseconds. Instantaneous samples are
/// normalized to this cadence so release velocity does not depend on the
/// host's input event rate.
const REFERENCE_FRAME_MS: f64 = 16.0;

/// How many of the newest samples feed the release average.
const RELEASE_WINDOW: usize = 3;

#[derive(Clone, Copy, Debug)]
struct RawSample {
    x: f32,
    t_ms: f64,
}

/// Bounded-history velocity sampler for one drag gesture.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    last: Option<RawSample>,
    history: SmallVec<[f32; 8]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the history and seeds the last raw sample with the press
    /// point, so a gesture's first move already yields a velocity sample.
    pub fn begin_at(&mut self, x: f32, t_ms: f64) {
        self.history.clear();
        self.last = Some(RawSample { x, t_ms });
    }

    /// Feeds one raw input sample.
    ///
    /// A non-increasing timestamp discards the sample — duplicate-timestamp
    /// events would otherwise divide by zero. The last raw sample is updated
    /// either way.
    pub fn add_sample(&mut self, x: f32, t_ms: f64, config: &CarouselConfig) {
        let previous = self.last.replace(RawSample { x, t_ms });
        let Some(previous) = previous else {
            return;
        };

        let delta_t = t_ms - previous.t_ms;
        if delta_t <= 0.0 {
            return;
        }

        let instantaneous = ((x - previous.x) as f64 / delta_t * REFERENCE_FRAME_MS) as f32;
        self.history.push(instantaneous);
        while self.history.len() > config.max_history_samples.max(1) {
            self.history.remove(0);
        }
    }

    /// Computes the velocity to release momentum with: the mean of the
    /// newest `min(3, len)` samples scaled by `velocity_scale`, clamped to
    /// `±max_velocity`. An empty history releases at zero — a gesture
    /// shorter than one sample interval simply leaves the track at rest.
    pub fn release_velocity(&self, config: &CarouselConfig) -> f32 {
        if self.history.is_empty() {
            return 0.0;
        }

        let window = RELEASE_WINDOW.min(self.history.len());
        let newest = &self.history[self.history.len() - window..];
        let mean = newest.iter().sum::<f32>() / window as f32;
        (mean * config.velocity_scale).clamp(-config.max_velocity, config.max_velocity)
    }

    pub fn sample_count(&self) -> usize {
        self.history.len()
    }
}
