//! Momentum physics for the Whirl carousel engine.
//!
//! A first-order friction model over a periodic position domain: each tick
//! advances position by velocity, decays velocity by a retention factor, and
//! normalizes position back into the repeating window. Velocity comes from a
//! bounded history of instantaneous input samples, so release feel does not
//! depend on the host's event rate.

mod config;
mod index_mapper;
mod integrator;
mod velocity_tracker;

pub use config::{CarouselConfig, CarouselConfigError};
pub use index_mapper::current_index;
pub use integrator::{tick, wrap_position, CarouselPhysicsState, DragAnchor, Tick};
pub use velocity_tracker::VelocityTracker;
