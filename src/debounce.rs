//! Quiet-period detection for bursty event streams.

/// Tracks a burst of events and reports once when the burst has been quiet
/// for a configured period.
///
/// The clock is injected: callers pass a monotonically non-decreasing
/// timestamp in milliseconds to every method. Timestamps are plain `u64`
/// rather than `Instant` so the combinator works unchanged on wasm targets
/// and under a simulated clock in tests.
///
/// ## Example
///
/// ```rust
/// use carousel_core::Debounce;
///
/// let mut settle = Debounce::new(100);
///
/// settle.poke(0);
/// settle.poke(60); // still bursting, deadline pushed
/// assert!(!settle.fire(120)); // only 60ms quiet so far
/// assert!(settle.fire(160)); // 100ms of quiet elapsed
/// assert!(!settle.fire(300)); // reports once per burst
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    quiet_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Create a debounce with the given quiet period in milliseconds.
    ///
    /// A zero period is clamped to 1 ms.
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(1),
            deadline: None,
        }
    }

    /// Record an event at `now_ms`, pushing the deadline out by the quiet
    /// period.
    pub fn poke(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms + self.quiet_ms);
    }

    /// Report whether the quiet period has elapsed since the last poke.
    ///
    /// Returns `true` at most once per burst; the pending deadline is
    /// consumed when it fires.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a burst is waiting for its quiet period to elapse.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The configured quiet period in milliseconds.
    #[inline]
    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }
}
