//! Carousel state holder.
//!
//! One [`CarouselState`] per carousel instance. It owns the physics state
//! exclusively — input handlers and the frame tick are the only writers, and
//! never run concurrently: beginning a drag always releases the scheduler
//! registration, and registration never happens while a drag is in progress.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use whirl_animation::{
    self as physics, CarouselConfig, CarouselConfigError, CarouselPhysicsState, DragAnchor,
};
use whirl_core::{FrameDispatcher, RegistrationId};

static NEXT_CAROUSEL_ID: AtomicU64 = AtomicU64::new(1);

/// Direct-write sink for the track offset.
///
/// The per-frame write bypasses whatever view-state layer sits above the
/// engine, so a momentum frame does not pay a re-render.
/// [`CarouselState::position`] remains the single source of truth; this sink
/// is a render-side fast path, not part of the engine contract.
pub trait RenderTarget {
    fn set_track_offset(&self, offset: f32);
}

/// Handle to one carousel instance. Cheap to clone; clones share the same
/// underlying state.
#[derive(Clone)]
pub struct CarouselState {
    inner: Rc<CarouselInner>,
}

struct CarouselInner {
    id: RegistrationId,
    config: CarouselConfig,
    dispatcher: FrameDispatcher,
    physics: RefCell<CarouselPhysicsState>,
    render_target: RefCell<Option<Rc<dyn RenderTarget>>>,
    on_index_changed: RefCell<Option<Box<dyn Fn(usize)>>>,
    on_drag_state_changed: RefCell<Option<Box<dyn Fn(bool)>>>,
    last_notified_index: Cell<usize>,
}

impl CarouselState {
    /// Creates a carousel with zeroed position and velocity.
    ///
    /// Rejects configurations the wrap math is undefined for (see
    /// [`CarouselConfig::validate`]).
    pub fn new(
        config: CarouselConfig,
        dispatcher: FrameDispatcher,
    ) -> Result<Self, CarouselConfigError> {
        config.validate()?;
        let id = NEXT_CAROUSEL_ID.fetch_add(1, Ordering::Relaxed);
        Ok(Self {
            inner: Rc::new(CarouselInner {
                id,
                config,
                dispatcher,
                physics: RefCell::new(CarouselPhysicsState::default()),
                render_target: RefCell::new(None),
                on_index_changed: RefCell::new(None),
                on_drag_state_changed: RefCell::new(None),
                last_notified_index: Cell::new(0),
            }),
        })
    }

    pub fn id(&self) -> RegistrationId {
        self.inner.id
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.inner.config
    }

    /// Starts a drag at `x`. Always preempts momentum: the scheduler
    /// registration is released and velocity is zeroed regardless of how
    /// much momentum was in flight.
    pub fn begin_drag(&self, x: f32, t_ms: f64) {
        let was_dragging = {
            let mut state = self.inner.physics.borrow_mut();
            let was_dragging = state.is_dragging;
            state.is_dragging = true;
            state.velocity = 0.0;
            state.drag_anchor = Some(DragAnchor {
                start_x: x,
                start_position: state.position,
            });
            state.tracker.begin_at(x, t_ms);
            was_dragging
        };
        self.inner.dispatcher.unregister(self.inner.id);
        if !was_dragging {
            self.inner.notify_drag_state(true);
        }
    }

    /// Moves the drag to `x`. Position is recomputed from the drag anchor
    /// rather than accumulated, then normalized into the wrap domain, and
    /// the sampler is fed for the eventual release.
    pub fn move_drag(&self, x: f32, t_ms: f64) {
        {
            let mut state = self.inner.physics.borrow_mut();
            if !state.is_dragging {
                return;
            }
            let Some(anchor) = state.drag_anchor else {
                return;
            };
            state.position = physics::wrap_position(
                anchor.start_position + (x - anchor.start_x),
                self.inner.config.single_set_width(),
            );
            state.tracker.add_sample(x, t_ms, &self.inner.config);
        }
        self.inner.apply_render();
        self.inner.notify_index_if_changed();
    }

    /// Releases the drag. With at least one collected sample the averaged
    /// release velocity starts a momentum loop; a gesture shorter than one
    /// sample interval leaves the track at rest.
    pub fn end_drag(&self) {
        let start_momentum = {
            let mut state = self.inner.physics.borrow_mut();
            if !state.is_dragging {
                return;
            }
            state.is_dragging = false;
            state.drag_anchor = None;
            state.velocity = state.tracker.release_velocity(&self.inner.config);
            state.velocity.abs() > self.inner.config.min_velocity
        };
        log::debug!(
            "carousel {}: drag released at velocity {}",
            self.inner.id,
            self.velocity()
        );
        self.inner.notify_drag_state(false);
        if start_momentum {
            CarouselInner::register_momentum(&self.inner);
        }
    }

    /// Accumulates a wheel impulse onto existing momentum, so repeated
    /// scroll ticks feel continuous. Ignored while a drag owns the track.
    pub fn wheel_impulse(&self, delta_y: f32) {
        let start_momentum = {
            let mut state = self.inner.physics.borrow_mut();
            if state.is_dragging {
                return;
            }
            let cap = self.inner.config.wheel_max_velocity;
            state.velocity =
                (state.velocity - delta_y * self.inner.config.wheel_sensitivity).clamp(-cap, cap);
            state.velocity.abs() > self.inner.config.min_velocity
        };
        if start_momentum {
            CarouselInner::register_momentum(&self.inner);
        }
    }

    /// Kicks the track toward the next item with the fixed step velocity.
    pub fn step_next(&self) {
        self.step(-1.0);
    }

    /// Kicks the track toward the previous item.
    pub fn step_previous(&self) {
        self.step(1.0);
    }

    fn step(&self, sign: f32) {
        {
            let mut state = self.inner.physics.borrow_mut();
            if state.is_dragging {
                return;
            }
            state.velocity = sign * self.inner.config.step_velocity;
        }
        self.inner.notify_index_if_changed();
        CarouselInner::register_momentum(&self.inner);
    }

    /// Jumps straight to `index`, killing any in-flight momentum. Indices
    /// beyond the item count fold into range.
    pub fn snap_to_index(&self, index: usize) {
        {
            let mut state = self.inner.physics.borrow_mut();
            if state.is_dragging {
                return;
            }
            state.velocity = 0.0;
            let folded = index % self.inner.config.item_count;
            state.position = physics::wrap_position(
                -(folded as f32) * self.inner.config.item_extent,
                self.inner.config.single_set_width(),
            );
        }
        self.inner.dispatcher.unregister(self.inner.id);
        self.inner.apply_render();
        self.inner.notify_index_if_changed();
    }

    pub fn position(&self) -> f32 {
        self.inner.physics.borrow().position
    }

    pub fn velocity(&self) -> f32 {
        self.inner.physics.borrow().velocity
    }

    pub fn current_index(&self) -> usize {
        physics::current_index(self.position(), &self.inner.config)
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.physics.borrow().is_dragging
    }

    /// Installs the edge-triggered index listener: it fires exactly once per
    /// crossing, not on every recomputation.
    pub fn set_on_index_changed(&self, callback: impl Fn(usize) + 'static) {
        *self.inner.on_index_changed.borrow_mut() = Some(Box::new(callback));
    }

    /// Installs the drag-state listener, fired on every transition. Intended
    /// for haptic/selection-feedback collaborators.
    pub fn set_on_drag_state_changed(&self, callback: impl Fn(bool) + 'static) {
        *self.inner.on_drag_state_changed.borrow_mut() = Some(Box::new(callback));
    }

    /// Installs the direct-write sink that receives the track offset on
    /// every drag move and momentum frame.
    pub fn set_render_target(&self, target: Rc<dyn RenderTarget>) {
        *self.inner.render_target.borrow_mut() = Some(target);
        self.inner.apply_render();
    }
}

impl CarouselInner {
    fn register_momentum(inner: &Rc<Self>) {
        if inner.dispatcher.is_registered(inner.id) {
            return;
        }
        log::trace!("carousel {}: entering momentum", inner.id);
        let weak = Rc::downgrade(inner);
        inner.dispatcher.register(inner.id, move |frame_time_nanos| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(frame_time_nanos);
            }
        });
    }

    fn on_frame(&self, _frame_time_nanos: u64) {
        let result = {
            let mut state = self.physics.borrow_mut();
            physics::tick(&mut state, &self.config)
        };
        if result.position_changed {
            self.apply_render();
            self.notify_index_if_changed();
        }
        if result.finished {
            self.dispatcher.unregister(self.id);
        }
    }

    fn apply_render(&self) {
        let position = self.physics.borrow().position;
        if let Some(target) = self.render_target.borrow().as_ref() {
            target.set_track_offset(position);
        }
    }

    fn notify_index_if_changed(&self) {
        let index = physics::current_index(self.physics.borrow().position, &self.config);
        if self.last_notified_index.get() == index {
            return;
        }
        self.last_notified_index.set(index);
        if let Some(callback) = self.on_index_changed.borrow().as_ref() {
            callback(index);
        }
    }

    fn notify_drag_state(&self, dragging: bool) {
        if let Some(callback) = self.on_drag_state_changed.borrow().as_ref() {
            callback(dragging);
        }
    }
}

impl Drop for CarouselInner {
    fn drop(&mut self) {
        self.dispatcher.unregister(self.id);
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
