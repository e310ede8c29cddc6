//! Tick scheduling
//!
//! The host decides when the next tick runs (display refresh in the browser,
//! a plain loop in tests). A session keeps at most one outstanding request.

/// Opaque id of a pending tick request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(pub i32);

/// Host primitive that runs `Session::tick` later
pub trait FrameScheduler {
    /// Ask for one more tick
    fn request_tick(&mut self) -> TickHandle;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Holds at most one outstanding tick request
#[derive(Debug, Default)]
pub struct TickSlot {
    handle: Option<TickHandle>,
}

impl TickSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending request with a fresh one
    pub fn schedule(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.cancel(scheduler);
        self.handle = Some(scheduler.request_tick());
    }

    /// Cancel the pending request; a no-op when nothing is pending
    pub fn cancel(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel_tick(handle);
        }
    }

    pub fn handle(&self) -> Option<TickHandle> {
        self.handle
    }

    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}

/// Scheduler for headless hosts: records the pending request and lets the
/// caller fire it explicitly.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<TickHandle>,
    pub requested: u32,
    pub cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Consume the pending request, returning whether a tick is due
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        self.requested += 1;
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_replaces_pending_request() {
        let mut scheduler = ManualScheduler::new();
        let mut slot = TickSlot::new();

        slot.schedule(&mut scheduler);
        let first = slot.handle().unwrap();
        slot.schedule(&mut scheduler);

        assert_ne!(slot.handle(), Some(first));
        assert_eq!(scheduler.pending(), slot.handle());
        assert_eq!(scheduler.requested, 2);
        assert_eq!(scheduler.cancelled, 1);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut scheduler = ManualScheduler::new();
        let mut slot = TickSlot::new();

        slot.cancel(&mut scheduler);
        slot.schedule(&mut scheduler);
        slot.cancel(&mut scheduler);
        slot.cancel(&mut scheduler);

        assert!(!slot.is_scheduled());
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.cancelled, 1);
    }

    #[test]
    fn test_cancel_after_fire_is_ignored() {
        let mut scheduler = ManualScheduler::new();
        let mut slot = TickSlot::new();

        slot.schedule(&mut scheduler);
        assert!(scheduler.fire());
        slot.cancel(&mut scheduler);

        assert_eq!(scheduler.cancelled, 0);
        assert!(!scheduler.fire());
    }
}
