//! Auto-hide for the navigation controls.
//!
//! Controls sit at full opacity while the presenter is active and fade to
//! [`IDLE_OPACITY`] after a period without mouse, touch or key activity.

use std::time::{Duration, Instant};

use crate::tui::timers::Timers;

pub const IDLE_OPACITY: f32 = 0.7;

#[derive(Debug)]
pub struct AutoHide {
    delay: Option<Duration>,
    dimmed: bool,
}

impl AutoHide {
    /// `None` disables auto-hide entirely.
    pub fn new(delay: Option<Duration>) -> Self {
        Self {
            delay,
            dimmed: false,
        }
    }

    /// Restore full opacity and restart the inactivity countdown.
    pub fn on_activity(&mut self, timers: &mut Timers, now: Instant) {
        self.dimmed = false;
        timers.reschedule_hide(now, self.delay);
    }

    /// The inactivity deadline passed.
    pub fn on_deadline(&mut self) {
        if self.delay.is_some() {
            self.dimmed = true;
        }
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    pub fn opacity(&self) -> f32 {
        if self.dimmed { IDLE_OPACITY } else { 1.0 }
    }
}
