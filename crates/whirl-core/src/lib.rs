//! Core runtime for the Whirl carousel engine.
//!
//! Hosts the shared per-frame dispatch source that drives momentum
//! integration. Every carousel on a page registers against the same
//! dispatcher instead of running its own loop.

mod frame_dispatcher;

pub use frame_dispatcher::{FrameDispatcher, FrameRequester, RegistrationId};
