//! Touch drag adapter.

use web_time::Instant;

use super::events::{TouchEvent, TouchId, TouchPhase};
use crate::carousel::CarouselState;

/// Normalizes touch events onto the carousel drag vocabulary.
///
/// Same state machine as the pointer adapter; only the event shape differs.
/// The drag follows the first finger down — secondary fingers are ignored,
/// and one of them lifting does not end the gesture.
pub struct TouchAdapter {
    state: CarouselState,
    epoch: Instant,
    active_touch: Option<TouchId>,
}

impl TouchAdapter {
    pub fn new(state: CarouselState) -> Self {
        Self {
            state,
            epoch: Instant::now(),
            active_touch: None,
        }
    }

    /// Handles a host event, stamping it with the adapter's monotonic clock.
    pub fn on_event(&mut self, event: TouchEvent) {
        let t_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.on_event_at(event, t_ms);
    }

    /// Handles a host event that already carries a timestamp.
    pub fn on_event_at(&mut self, event: TouchEvent, t_ms: f64) {
        match event.phase {
            TouchPhase::Started => {
                if self.active_touch.is_none() {
                    self.active_touch = Some(event.id);
                    self.state.begin_drag(event.x, t_ms);
                }
            }
            TouchPhase::Moved => {
                if self.active_touch == Some(event.id) {
                    self.state.move_drag(event.x, t_ms);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch == Some(event.id) {
                    self.active_touch = None;
                    self.state.end_drag();
                }
            }
        }
    }

    pub fn active_touch(&self) -> Option<TouchId> {
        self.active_touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CarouselConfig;
    use whirl_core::FrameDispatcher;

    fn adapter() -> TouchAdapter {
        let state = CarouselState::new(
            CarouselConfig::touch(316.0, 5),
            FrameDispatcher::new(),
        )
        .expect("valid config");
        TouchAdapter::new(state)
    }

    #[test]
    fn first_finger_drives_the_drag() {
        let mut adapter = adapter();
        adapter.on_event_at(TouchEvent::new(11, TouchPhase::Started, 500.0), 0.0);
        assert!(adapter.state.is_dragging());
        assert_eq!(adapter.active_touch(), Some(11));

        adapter.on_event_at(TouchEvent::new(11, TouchPhase::Moved, 440.0), 16.0);
        assert_eq!(adapter.state.position(), -60.0);

        adapter.on_event_at(TouchEvent::new(11, TouchPhase::Ended, 440.0), 32.0);
        assert!(!adapter.state.is_dragging());
        assert_eq!(adapter.active_touch(), None);
    }

    #[test]
    fn secondary_finger_is_ignored() {
        let mut adapter = adapter();
        adapter.on_event_at(TouchEvent::new(1, TouchPhase::Started, 500.0), 0.0);
        adapter.on_event_at(TouchEvent::new(2, TouchPhase::Started, 100.0), 4.0);
        assert_eq!(adapter.active_touch(), Some(1));

        // Moves and lift of the second finger leave the gesture untouched.
        adapter.on_event_at(TouchEvent::new(2, TouchPhase::Moved, 150.0), 8.0);
        assert_eq!(adapter.state.position(), 0.0);
        adapter.on_event_at(TouchEvent::new(2, TouchPhase::Ended, 150.0), 12.0);
        assert!(adapter.state.is_dragging());

        adapter.on_event_at(TouchEvent::new(1, TouchPhase::Moved, 420.0), 16.0);
        assert_eq!(adapter.state.position(), -80.0);
    }

    #[test]
    fn cancelled_touch_ends_the_drag() {
        let mut adapter = adapter();
        adapter.on_event_at(TouchEvent::new(5, TouchPhase::Started, 300.0), 0.0);
        adapter.on_event_at(TouchEvent::new(5, TouchPhase::Cancelled, 300.0), 8.0);
        assert!(!adapter.state.is_dragging());
    }

    #[test]
    fn move_for_unknown_touch_is_ignored() {
        let mut adapter = adapter();
        adapter.on_event_at(TouchEvent::new(9, TouchPhase::Moved, 250.0), 0.0);
        assert!(!adapter.state.is_dragging());
        assert_eq!(adapter.state.position(), 0.0);
    }
}
