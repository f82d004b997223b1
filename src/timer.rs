//! Repeating-timer abstraction for autoplay scheduling.
//!
//! The controller never owns a clock; it asks a [`TimerService`] to schedule
//! or cancel a single repeating timer and holds the returned handle. Hosts
//! route each timer fire back into the controller as an autoplay tick.

/// Opaque identity of a scheduled repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Create a handle from a raw id. Intended for `TimerService`
    /// implementations; the controller treats handles as opaque.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw id backing this handle.
    #[inline]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Scheduler for repeating timers.
///
/// Implementations fire the scheduled timer every `interval_ms` until it is
/// cancelled. Cancelling an unknown or already-cancelled handle must be a
/// no-op.
pub trait TimerService {
    /// Schedule a repeating timer and return its handle.
    fn schedule_repeating(&mut self, interval_ms: u64) -> TimerHandle;

    /// Cancel a previously scheduled timer.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug)]
struct ScheduledTimer {
    handle: TimerHandle,
    interval_ms: u64,
    next_due_ms: u64,
}

/// Deterministic [`TimerService`] driven by an explicit clock.
///
/// The service keeps its own millisecond clock which only moves when the
/// caller invokes [`advance`](ManualTimers::advance). Each call returns the
/// handles that fired during the advance, in firing order. This is the
/// timer used by hosts that drive the controller from their own frame loop,
/// and by tests that need a simulated clock.
///
/// ## Example
///
/// ```rust
/// use carousel_core::{ManualTimers, TimerService};
///
/// let mut timers = ManualTimers::new();
/// let handle = timers.schedule_repeating(4000);
///
/// assert!(timers.advance(3999).is_empty());
/// assert_eq!(timers.advance(1), vec![handle]);
/// // Repeats until cancelled
/// assert_eq!(timers.advance(4000), vec![handle]);
///
/// timers.cancel(handle);
/// assert!(timers.advance(10_000).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualTimers {
    now_ms: u64,
    next_id: u64,
    active: Vec<ScheduledTimer>,
}

impl ManualTimers {
    /// Create a timer service with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value in milliseconds.
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of live timers.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether the given handle refers to a live timer.
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.active.iter().any(|t| t.handle == handle)
    }

    /// Move the clock forward by `delta_ms`, returning every timer fire that
    /// occurred in that window, in chronological order.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<TimerHandle> {
        self.now_ms += delta_ms;
        let now = self.now_ms;

        let mut fired = Vec::new();
        loop {
            // Earliest due timer first, so interleaved timers fire in order
            let next = self
                .active
                .iter_mut()
                .filter(|t| t.next_due_ms <= now)
                .min_by_key(|t| t.next_due_ms);
            match next {
                Some(timer) => {
                    fired.push(timer.handle);
                    timer.next_due_ms += timer.interval_ms;
                }
                None => break,
            }
        }
        fired
    }
}

impl TimerService for ManualTimers {
    fn schedule_repeating(&mut self, interval_ms: u64) -> TimerHandle {
        let interval_ms = interval_ms.max(1);
        let handle = TimerHandle::from_raw(self.next_id);
        self.next_id += 1;
        self.active.push(ScheduledTimer {
            handle,
            interval_ms,
            next_due_ms: self.now_ms + interval_ms,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.active.retain(|t| t.handle != handle);
    }
}
