//! Carousel state holder and input adapters for the Whirl engine.
//!
//! [`CarouselState`] is the public engine surface: it owns the physics state,
//! drives integration through the shared frame dispatcher, and exposes the
//! position/index reads consumers poll every frame. The [`gestures`] module
//! normalizes heterogeneous host input — pointer, touch, wheel, discrete
//! step controls — onto that surface.

mod carousel;
pub mod gestures;

pub use carousel::{CarouselState, RenderTarget};
pub use whirl_animation::{CarouselConfig, CarouselConfigError};
