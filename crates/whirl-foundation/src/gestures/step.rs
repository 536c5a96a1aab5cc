//! Discrete previous/next control adapter.

use super::events::StepDirection;
use crate::carousel::CarouselState;

/// Maps previous/next controls onto fixed-velocity kicks.
pub struct StepAdapter {
    state: CarouselState,
}

impl StepAdapter {
    pub fn new(state: CarouselState) -> Self {
        Self { state }
    }

    pub fn step(&self, direction: StepDirection) {
        match direction {
            StepDirection::Previous => self.state.step_previous(),
            StepDirection::Next => self.state.step_next(),
        }
    }
}
