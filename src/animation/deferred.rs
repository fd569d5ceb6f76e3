//! Single-slot deferred continuations.
//!
//! Autoplay pacing and chained jumps need "do this again in N seconds"
//! follow-ups. Each kind of follow-up lives in its own [`Deferred`] slot
//! owned by the engine: scheduling replaces whatever was pending, so at
//! most one continuation per slot is ever outstanding, and `cancel` drops
//! it outright. Time only advances through [`Deferred::advance`], which the
//! engine calls from its frame update, so firing is deterministic and never
//! races the update itself.

#[derive(Debug, Clone)]
struct Pending<T> {
    remaining: f32,
    payload: T,
}

/// Arena-of-one for a delayed continuation carrying a `T` payload.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Deferred<T> {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire after `delay` seconds, superseding any
    /// pending task in this slot.
    pub fn schedule(&mut self, delay: f32, payload: T) {
        self.pending = Some(Pending {
            remaining: delay.max(0.0),
            payload,
        });
    }

    /// Drop the pending task, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a task is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Seconds until the pending task fires.
    pub fn remaining(&self) -> Option<f32> {
        self.pending.as_ref().map(|p| p.remaining)
    }

    /// Payload of the pending task.
    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }

    /// Advance the clock by `dt` seconds, returning the payload if the
    /// pending task came due. The slot is empty afterwards.
    pub fn advance(&mut self, dt: f32) -> Option<T> {
        let pending = self.pending.as_mut()?;
        pending.remaining -= dt.max(0.0);
        if pending.remaining > 0.0 {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }
}
