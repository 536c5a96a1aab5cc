//! Event vocabulary shared by the input adapters.
//!
//! Deliberately minimal: the engine is horizontal-only, so events carry just
//! the track-axis coordinate.

pub type TouchId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A mouse/pen event projected onto the track axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32) -> Self {
        Self { kind, x }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// A single-finger touch event, one per finger per host callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub id: TouchId,
    pub phase: TouchPhase,
    pub x: f32,
}

impl TouchEvent {
    pub fn new(id: TouchId, phase: TouchPhase, x: f32) -> Self {
        Self { id, phase, x }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    Previous,
    Next,
}
