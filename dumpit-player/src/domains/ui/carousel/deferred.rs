//! Engine-owned delayed actions.
//!
//! The host drives time through the frame clock, so delayed flag resets are
//! queued here and applied at the start of the first step at or after their
//! due time. Stopping the engine drops everything still pending.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Clear the real-drag flag unless a newer gesture has started.
    ClearRealDrag { gesture: u64 },
    /// Allow the next loop correction.
    ClearLoopGuard,
}

#[derive(Debug, Default, Clone)]
pub struct DeferredQueue {
    pending: Vec<(Instant, DeferredAction)>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, action: DeferredAction) {
        self.pending.push((due, action));
    }

    /// Remove and return every action due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredAction> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = rest;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, action)| action).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
