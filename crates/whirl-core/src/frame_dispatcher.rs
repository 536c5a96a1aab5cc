//! Shared per-frame callback dispatch.
//!
//! The dispatcher is a thin registry with no carousel-specific knowledge:
//! entries are keyed by caller-supplied ids and stay registered until
//! removed. A momentum loop therefore sustains itself simply by staying
//! registered while velocity lasts, and consumes no cycles at rest.
//!
//! Host contract: pump input events for a frame *before* calling
//! [`FrameDispatcher::run_frame`], so a callback scheduled on the previous
//! frame observes the latest input state when it runs.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Identifies one registration slot. Each carousel instance owns exactly one.
pub type RegistrationId = u64;

/// Host seam for waking the underlying frame source.
///
/// Mirrors a windowing loop's "request a redraw": the dispatcher calls this
/// whenever it gains work, and the host is expected to invoke
/// [`FrameDispatcher::run_frame`] on its next frame. Tests and headless
/// drivers call `run_frame` directly and never install a requester.
pub trait FrameRequester {
    fn request_frame(&self);
}

type FrameCallback = Rc<RefCell<dyn FnMut(u64)>>;

struct Entry {
    id: RegistrationId,
    callback: FrameCallback,
}

struct DispatcherInner {
    entries: RefCell<Vec<Entry>>,
    requester: RefCell<Option<Rc<dyn FrameRequester>>>,
}

/// Shared per-frame dispatch source.
///
/// Cheap to clone; clones refer to the same registry.
#[derive(Clone)]
pub struct FrameDispatcher {
    inner: Rc<DispatcherInner>,
}

impl Default for FrameDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDispatcher {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(DispatcherInner {
                entries: RefCell::new(Vec::new()),
                requester: RefCell::new(None),
            }),
        }
    }

    /// Installs the host hook used to wake the frame source when work
    /// arrives. Replaces any previous requester.
    pub fn set_frame_requester(&self, requester: Rc<dyn FrameRequester>) {
        *self.inner.requester.borrow_mut() = Some(requester);
    }

    /// Registers `callback` under `id`, replacing any existing registration
    /// with the same id. The callback runs once per [`run_frame`] until
    /// [`unregister`] removes it.
    ///
    /// [`run_frame`]: FrameDispatcher::run_frame
    /// [`unregister`]: FrameDispatcher::unregister
    pub fn register(&self, id: RegistrationId, callback: impl FnMut(u64) + 'static) {
        let callback: FrameCallback = Rc::new(RefCell::new(callback));
        let entry = Entry { id, callback };
        {
            let mut entries = self.inner.entries.borrow_mut();
            if let Some(existing) = entries.iter_mut().find(|entry| entry.id == id) {
                log::trace!("frame dispatcher: replacing registration {id}");
                existing.callback = entry.callback;
            } else {
                entries.push(entry);
            }
        }
        self.schedule();
    }

    /// Removes the registration for `id`, if any.
    pub fn unregister(&self, id: RegistrationId) {
        let mut entries = self.inner.entries.borrow_mut();
        if let Some(index) = entries.iter().position(|entry| entry.id == id) {
            entries.remove(index);
        }
    }

    pub fn is_registered(&self, id: RegistrationId) -> bool {
        self.inner
            .entries
            .borrow()
            .iter()
            .any(|entry| entry.id == id)
    }

    pub fn has_registrations(&self) -> bool {
        !self.inner.entries.borrow().is_empty()
    }

    /// Invokes every callback registered at the start of the frame.
    ///
    /// Runs against a snapshot, so callbacks may freely register and
    /// unregister entries (their own included) mid-frame: an entry removed
    /// by an earlier callback is skipped, and an entry added during the
    /// frame first runs on the next one.
    pub fn run_frame(&self, frame_time_nanos: u64) {
        let snapshot: SmallVec<[(RegistrationId, FrameCallback); 4]> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();

        for (id, callback) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            (callback.borrow_mut())(frame_time_nanos);
        }

        if self.has_registrations() {
            self.schedule();
        }
    }

    fn schedule(&self) {
        if let Some(requester) = self.inner.requester.borrow().as_ref() {
            requester.request_frame();
        }
    }
}
