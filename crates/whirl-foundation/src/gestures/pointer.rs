//! Mouse/pen drag adapter.

use web_time::Instant;

use super::events::{PointerEvent, PointerEventKind};
use crate::carousel::CarouselState;

/// Normalizes pointer events onto the carousel drag vocabulary.
///
/// Tracks the pressed state itself so hover moves between gestures are
/// ignored rather than forwarded as drags.
pub struct PointerAdapter {
    state: CarouselState,
    epoch: Instant,
    pressed: bool,
}

impl PointerAdapter {
    pub fn new(state: CarouselState) -> Self {
        Self {
            state,
            epoch: Instant::now(),
            pressed: false,
        }
    }

    /// Handles a host event, stamping it with the adapter's monotonic clock.
    pub fn on_event(&mut self, event: PointerEvent) {
        let t_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.on_event_at(event, t_ms);
    }

    /// Handles a host event that already carries a timestamp (milliseconds
    /// on any monotonic scale shared by the whole gesture).
    pub fn on_event_at(&mut self, event: PointerEvent, t_ms: f64) {
        match event.kind {
            PointerEventKind::Down => {
                self.pressed = true;
                self.state.begin_drag(event.x, t_ms);
            }
            PointerEventKind::Move => {
                if self.pressed {
                    self.state.move_drag(event.x, t_ms);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if std::mem::take(&mut self.pressed) {
                    self.state.end_drag();
                }
            }
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CarouselConfig;
    use whirl_core::FrameDispatcher;

    fn adapter() -> PointerAdapter {
        let state = CarouselState::new(
            CarouselConfig::desktop(316.0, 5),
            FrameDispatcher::new(),
        )
        .expect("valid config");
        PointerAdapter::new(state)
    }

    #[test]
    fn down_move_up_runs_a_drag() {
        let mut adapter = adapter();
        adapter.on_event_at(PointerEvent::new(PointerEventKind::Down, 500.0), 0.0);
        assert!(adapter.state.is_dragging());

        adapter.on_event_at(PointerEvent::new(PointerEventKind::Move, 400.0), 16.0);
        assert_eq!(adapter.state.position(), -100.0);

        adapter.on_event_at(PointerEvent::new(PointerEventKind::Up, 400.0), 32.0);
        assert!(!adapter.state.is_dragging());
    }

    #[test]
    fn hover_moves_without_press_are_ignored() {
        let mut adapter = adapter();
        adapter.on_event_at(PointerEvent::new(PointerEventKind::Move, 400.0), 0.0);
        assert!(!adapter.state.is_dragging());
        assert_eq!(adapter.state.position(), 0.0);
    }

    #[test]
    fn cancel_ends_the_drag() {
        let mut adapter = adapter();
        adapter.on_event_at(PointerEvent::new(PointerEventKind::Down, 500.0), 0.0);
        adapter.on_event_at(PointerEvent::new(PointerEventKind::Cancel, 500.0), 8.0);
        assert!(!adapter.state.is_dragging());
        assert!(!adapter.is_pressed());
    }

    #[test]
    fn up_without_down_is_a_no_op() {
        let mut adapter = adapter();
        adapter.on_event_at(PointerEvent::new(PointerEventKind::Up, 500.0), 0.0);
        assert!(!adapter.state.is_dragging());
    }
}
