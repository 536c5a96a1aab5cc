//! Wheel impulse adapter.

use crate::carousel::CarouselState;

/// Forwards wheel deltas as velocity impulses.
///
/// Impulses accumulate onto whatever momentum is already in flight, so a
/// run of scroll ticks reads as one continuous gesture.
pub struct WheelAdapter {
    state: CarouselState,
}

impl WheelAdapter {
    pub fn new(state: CarouselState) -> Self {
        Self { state }
    }

    pub fn on_wheel(&self, delta_y: f32) {
        self.state.wheel_impulse(delta_y);
    }
}
