//! Friction-decay position integration over a periodic domain.
//!
//! One integration step per scheduler frame while momentum lasts: advance
//! position by velocity, decay velocity by the retention factor, normalize
//! position back into `(-single_set_width, 0]`.

use crate::config::CarouselConfig;
use crate::velocity_tracker::VelocityTracker;

/// Reference captured once at drag start. Positions during the drag are
/// computed from this anchor rather than accumulated per-event deltas, which
/// would drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub start_x: f32,
    pub start_position: f32,
}

/// Mutable physics state, owned by exactly one carousel instance and never
/// shared across carousels.
///
/// Invariants: `-single_set_width < position <= 0` and
/// `|velocity| <= max(max_velocity, wheel_max_velocity, step_velocity)` —
/// every velocity assignment clamps at the assignment site.
#[derive(Clone, Debug, Default)]
pub struct CarouselPhysicsState {
    pub position: f32,
    pub velocity: f32,
    pub is_dragging: bool,
    pub drag_anchor: Option<DragAnchor>,
    pub tracker: VelocityTracker,
}

/// Outcome of one integration step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub position_changed: bool,
    /// The momentum loop is over; the caller should release its scheduler
    /// registration.
    pub finished: bool,
}

/// Normalizes `position` into `(-single_set_width, 0]`.
///
/// Loops rather than adjusting once, so even a single jump larger than the
/// period lands in-domain. A position of exactly `-single_set_width` wraps
/// to `0` instead of accumulating negative drift.
pub fn wrap_position(mut position: f32, single_set_width: f32) -> f32 {
    while position <= -single_set_width {
        position += single_set_width;
    }
    while position > 0.0 {
        position -= single_set_width;
    }
    position
}

/// Advances the state by one frame.
///
/// An in-progress drag owns position directly, so a tick that observes
/// `is_dragging` (scheduled before the drag began) is a no-op that ends the
/// loop. Likewise once velocity decays to the stop threshold it is zeroed
/// exactly rather than left to shrink forever.
pub fn tick(state: &mut CarouselPhysicsState, config: &CarouselConfig) -> Tick {
    if state.is_dragging || state.velocity.abs() <= config.min_velocity {
        state.velocity = 0.0;
        return Tick {
            position_changed: false,
            finished: true,
        };
    }

    state.position += state.velocity;
    state.velocity *= config.friction;
    state.position = wrap_position(state.position, config.single_set_width());

    Tick {
        position_changed: true,
        finished: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CarouselConfig {
        CarouselConfig {
            friction: 0.95,
            ..CarouselConfig::desktop(316.0, 5)
        }
    }

    #[test]
    fn decays_velocity_and_advances_position() {
        let mut state = CarouselPhysicsState {
            velocity: -25.0,
            ..Default::default()
        };
        let config = config();

        let first = tick(&mut state, &config);
        assert!(first.position_changed);
        assert_eq!(state.position, -25.0);
        assert!((state.velocity - -23.75).abs() < 1e-4);

        tick(&mut state, &config);
        assert!((state.position - -48.75).abs() < 1e-3);
        assert!((state.velocity - -22.5625).abs() < 1e-3);
    }

    #[test]
    fn velocity_magnitude_strictly_decreases() {
        let mut state = CarouselPhysicsState {
            velocity: 25.0,
            ..Default::default()
        };
        let config = config();

        let mut previous = state.velocity.abs();
        loop {
            let result = tick(&mut state, &config);
            if result.finished {
                break;
            }
            assert!(
                state.velocity.abs() < previous,
                "decay must be monotonic: {} -> {}",
                previous,
                state.velocity.abs()
            );
            previous = state.velocity.abs();
        }
        assert_eq!(state.velocity, 0.0, "stop threshold zeroes velocity exactly");
    }

    #[test]
    fn exact_boundary_wraps_to_zero_same_tick() {
        let mut state = CarouselPhysicsState {
            position: -1555.0,
            velocity: -25.0,
            ..Default::default()
        };
        // -1555 - 25 = -1580, exactly -single_set_width.
        tick(&mut state, &config());
        assert_eq!(state.position, 0.0);
    }

    #[test]
    fn large_jump_wraps_fully_in_domain() {
        let width = config().single_set_width();
        let wrapped = wrap_position(-3.5 * width, width);
        assert!(wrapped > -width && wrapped <= 0.0, "got {wrapped}");
        assert!((wrapped - -0.5 * width).abs() < 1e-3);

        let wrapped = wrap_position(2.25 * width, width);
        assert!(wrapped > -width && wrapped <= 0.0, "got {wrapped}");
    }

    #[test]
    fn dragging_preempts_integration() {
        let mut state = CarouselPhysicsState {
            position: -100.0,
            velocity: 20.0,
            is_dragging: true,
            ..Default::default()
        };
        let result = tick(&mut state, &config());
        assert!(result.finished);
        assert!(!result.position_changed);
        assert_eq!(state.position, -100.0);
        assert_eq!(state.velocity, 0.0);
    }

    #[test]
    fn below_threshold_finishes_without_moving() {
        let mut state = CarouselPhysicsState {
            position: -40.0,
            velocity: 0.4,
            ..Default::default()
        };
        let result = tick(&mut state, &config());
        assert!(result.finished);
        assert_eq!(state.position, -40.0);
        assert_eq!(state.velocity, 0.0);
    }

    #[test]
    fn position_stays_in_domain_through_full_decay() {
        let config = config();
        let width = config.single_set_width();
        let mut state = CarouselPhysicsState {
            velocity: -25.0,
            ..Default::default()
        };
        while !tick(&mut state, &config).finished {
            assert!(
                state.position > -width && state.position <= 0.0,
                "wrap invariant violated at {}",
                state.position
            );
        }
    }
}
