//! # Scheduled Continuations
//!
//! The two timers the presenter needs, modelled as deadlines instead of
//! callbacks. The event loop asks for the nearest deadline to size its poll
//! timeout, then collects whatever is due.
//!
//! - **Reveal**: second phase of a slide change. At most one is pending; a
//!   newer reveal replaces an older one.
//! - **Auto-hide**: when the controls should dim. Cleared and rescheduled on
//!   every bit of user activity.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReveal {
    pub slide: usize,
    pub due: Instant,
}

#[derive(Debug, Default)]
pub struct Timers {
    reveal: Option<PendingReveal>,
    hide_at: Option<Instant>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule revealing `slide` after `delay`. Returns the reveal it superseded.
    ///
    /// A delay too large to represent reveals immediately; the slide must
    /// always come back.
    pub fn schedule_reveal(
        &mut self,
        slide: usize,
        now: Instant,
        delay: Duration,
    ) -> Option<PendingReveal> {
        self.reveal.replace(PendingReveal {
            slide,
            due: now.checked_add(delay).unwrap_or(now),
        })
    }

    pub fn pending_reveal(&self) -> Option<PendingReveal> {
        self.reveal
    }

    /// Take the pending reveal if it is due.
    pub fn take_due_reveal(&mut self, now: Instant) -> Option<usize> {
        match self.reveal {
            Some(pending) if pending.due <= now => {
                self.reveal = None;
                Some(pending.slide)
            }
            _ => None,
        }
    }

    /// Clear any pending hide deadline and, if `after` is set, schedule a new one.
    /// A deadline past the end of `Instant` never fires.
    pub fn reschedule_hide(&mut self, now: Instant, after: Option<Duration>) {
        self.hide_at = after.and_then(|d| now.checked_add(d));
    }

    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// True once if the hide deadline has passed.
    pub fn take_due_hide(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if at <= now => {
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    /// Nearest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.reveal.map(|r| r.due), self.hide_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_reveal_fires_after_delay() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule_reveal(3, t0, 50 * MS);
        assert_eq!(timers.take_due_reveal(t0 + 49 * MS), None);
        assert_eq!(timers.take_due_reveal(t0 + 50 * MS), Some(3));
        assert_eq!(timers.take_due_reveal(t0 + 60 * MS), None);
    }

    #[test]
    fn test_newer_reveal_supersedes_older() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule_reveal(2, t0, 50 * MS);
        let replaced = timers.schedule_reveal(3, t0 + 10 * MS, 50 * MS);
        assert_eq!(replaced.map(|r| r.slide), Some(2));
        assert_eq!(timers.take_due_reveal(t0 + 55 * MS), None);
        assert_eq!(timers.take_due_reveal(t0 + 60 * MS), Some(3));
    }

    #[test]
    fn test_hide_reschedule_clears_previous() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.reschedule_hide(t0, Some(3000 * MS));
        timers.reschedule_hide(t0 + 2000 * MS, Some(3000 * MS));
        assert!(!timers.take_due_hide(t0 + 3500 * MS));
        assert!(timers.take_due_hide(t0 + 5000 * MS));
        assert!(!timers.take_due_hide(t0 + 6000 * MS));
    }

    #[test]
    fn test_hide_disabled() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.reschedule_hide(t0, None);
        assert_eq!(timers.hide_deadline(), None);
    }

    #[test]
    fn test_huge_hide_delay_never_fires() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.reschedule_hide(t0, Some(Duration::from_secs(u64::MAX)));
        assert_eq!(timers.hide_deadline(), None);
        assert!(!timers.take_due_hide(t0 + 3000 * MS));
    }

    #[test]
    fn test_huge_reveal_delay_reveals_now() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule_reveal(4, t0, Duration::MAX);
        assert_eq!(timers.take_due_reveal(t0), Some(4));
    }

    #[test]
    fn test_next_deadline_is_nearest() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        assert_eq!(timers.next_deadline(), None);
        timers.reschedule_hide(t0, Some(3000 * MS));
        assert_eq!(timers.next_deadline(), Some(t0 + 3000 * MS));
        timers.schedule_reveal(1, t0, 50 * MS);
        assert_eq!(timers.next_deadline(), Some(t0 + 50 * MS));
    }
}
