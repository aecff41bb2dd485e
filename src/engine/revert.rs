//! Single-shot, cancellable label revert.
//!
//! Time is a plain `f64` in seconds supplied by the caller, the same base
//! egui exposes through `ctx.input(|i| i.time)`. Tests drive it with a
//! simulated clock instead of sleeping.

use std::time::Duration;

/// How long the acknowledgement stays on the label after a copy.
pub const COPIED_ACK_DELAY: Duration = Duration::from_millis(1500);

/// Identifies one scheduled revert. Stale handles cancel nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertHandle(u64);

#[derive(Debug)]
struct PendingRevert {
    id: u64,
    fire_at: f64,
    restore: String,
}

#[derive(Debug, Default)]
pub struct RevertTimer {
    pending: Option<PendingRevert>,
    next_id: u64,
}

impl RevertTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `restore` to be handed back at `now + delay`.
    ///
    /// At most one revert is pending; scheduling replaces the previous one.
    pub fn schedule(&mut self, now: f64, delay: Duration, restore: String) -> RevertHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(PendingRevert {
            id,
            fire_at: now + delay.as_secs_f64(),
            restore,
        });
        RevertHandle(id)
    }

    /// Cancel the revert identified by `handle`. Returns `false` if it already
    /// fired or was superseded.
    pub fn cancel(&mut self, handle: RevertHandle) -> bool {
        match &self.pending {
            Some(p) if p.id == handle.0 => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Drop whatever is pending.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Fire the pending revert if it is due. Yields the restore text once.
    pub fn poll(&mut self, now: f64) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.fire_at) {
            self.pending.take().map(|p| p.restore)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Text that will be restored, if a revert is pending.
    pub fn restore_text(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.restore.as_str())
    }

    /// Time left before the pending revert fires (zero if overdue).
    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| Duration::from_secs_f64((p.fire_at - now).max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut timer = RevertTimer::new();
        timer.schedule(10.0, COPIED_ACK_DELAY, "RGB(1, 2, 3)".into());

        assert_eq!(timer.poll(11.0), None);
        assert_eq!(timer.poll(11.49), None);
        assert_eq!(timer.poll(11.5).as_deref(), Some("RGB(1, 2, 3)"));
        assert_eq!(timer.poll(20.0), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancelled_revert_never_fires() {
        let mut timer = RevertTimer::new();
        let handle = timer.schedule(0.0, COPIED_ACK_DELAY, "x".into());
        assert!(timer.is_pending());
        assert!(timer.cancel(handle));
        assert!(!timer.is_pending());
        assert!(!timer.cancel(handle));
        assert_eq!(timer.poll(5.0), None);
    }

    #[test]
    fn rescheduling_supersedes_previous_handle() {
        let mut timer = RevertTimer::new();
        let first = timer.schedule(0.0, COPIED_ACK_DELAY, "a".into());
        let second = timer.schedule(1.0, COPIED_ACK_DELAY, "b".into());

        assert!(!timer.cancel(first));
        assert_eq!(timer.poll(1.6), None);
        assert_eq!(timer.restore_text(), Some("b"));
        assert_eq!(timer.poll(2.5).as_deref(), Some("b"));
        assert!(!timer.cancel(second));
    }

    #[test]
    fn remaining_counts_down_and_saturates() {
        let mut timer = RevertTimer::new();
        assert_eq!(timer.remaining(0.0), None);
        timer.schedule(0.0, COPIED_ACK_DELAY, "a".into());
        assert_eq!(timer.remaining(1.0), Some(Duration::from_millis(500)));
        assert_eq!(timer.remaining(3.0), Some(Duration::ZERO));
    }
}
