use std::time::{Duration, Instant};

/// Periodic tick timer with explicit schedule/cancel semantics.
///
/// The scheduler never reads the clock itself; every operation takes `now`
/// from the caller, so tests can drive it with constructed instants instead
/// of real timers. At most one tick fires per `poll` call, so rescheduling
/// can never produce overlapping ticks.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickScheduler {
    /// Creates an idle scheduler; nothing fires until `schedule` is called.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Installs a schedule with the given cadence, first tick one full
    /// interval from `now`.
    ///
    /// Replaces any previous schedule atomically: the old deadline is
    /// dropped and the next tick lands at `now + interval`, so a cadence
    /// swap at a tick boundary neither double-fires nor skips.
    pub fn schedule(&mut self, now: Instant, interval: Duration) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    /// Cancels the active schedule, if any.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true when a schedule is installed.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns the active cadence.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now`, arming the next one.
    ///
    /// Returns false when idle or when the deadline has not arrived. The
    /// next deadline is measured from `now`, not from the old deadline, so
    /// a late poll does not cause a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
