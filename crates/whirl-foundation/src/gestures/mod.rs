//! Input adapters that normalize host events onto the engine vocabulary.
//!
//! Pointer and touch run the same drag state machine and differ only in
//! event shape; wheel deltas and discrete step controls map onto velocity
//! impulses. Adapters stamp event times from a monotonic epoch when the
//! host event carries none.

mod events;
mod pointer;
mod step;
mod touch;
mod wheel;

pub use events::{PointerEvent, PointerEventKind, StepDirection, TouchEvent, TouchId, TouchPhase};
pub use pointer::PointerAdapter;
pub use step::StepAdapter;
pub use touch::TouchAdapter;
pub use wheel::WheelAdapter;
