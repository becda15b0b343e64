//! # Navigation State
//!
//! The slide position state machine. Owns the current 1-based position and
//! the slide count; nothing else.
//!
//! ```text
//!   previous()          next()
//!  ◀──────────  current  ──────────▶
//!  (stops at 1)         (stops at total)
//! ```
//!
//! Boundary hits are absorbed as no-ops. A talk must never crash because
//! someone pressed Right on the last slide, so none of these operations
//! return an error.

/// Current position in a deck of `total` slides.
///
/// Invariant: `1 <= current <= total`. `total` is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    total: usize,
}

impl NavigationState {
    /// Start on the first slide. A zero count is raised to one so the
    /// invariant holds even for a degenerate deck.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    /// Start on `start`, falling back to the first slide when it is out of range.
    pub fn starting_at(total: usize, start: usize) -> Self {
        let mut state = Self::new(total);
        state.go_to(start);
        state
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Advance one slide. Returns the new position.
    pub fn next(&mut self) -> usize {
        if self.current < self.total {
            self.current += 1;
        }
        self.current
    }

    /// Go back one slide. Returns the new position.
    pub fn previous(&mut self) -> usize {
        if self.current > 1 {
            self.current -= 1;
        }
        self.current
    }

    /// Jump to `target`. Out-of-range targets are ignored.
    ///
    /// Returns `true` for any in-range target, including the current slide,
    /// so the caller still re-renders and re-announces it.
    pub fn go_to(&mut self, target: usize) -> bool {
        if (1..=self.total).contains(&target) {
            self.current = target;
            return true;
        }
        false
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_on_first_slide() {
        let nav = NavigationState::new(16);
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.total(), 16);
        assert!(nav.is_first());
        assert!(!nav.is_last());
    }

    #[test]
    fn test_zero_total_is_raised_to_one() {
        let nav = NavigationState::new(0);
        assert_eq!(nav.total(), 1);
        assert!(nav.is_first() && nav.is_last());
    }

    #[test]
    fn test_next_stops_at_last_slide() {
        let mut nav = NavigationState::new(3);
        assert_eq!(nav.next(), 2);
        assert_eq!(nav.next(), 3);
        assert_eq!(nav.next(), 3);
        assert!(nav.is_last());
    }

    #[test]
    fn test_previous_stops_at_first_slide() {
        let mut nav = NavigationState::starting_at(3, 2);
        assert_eq!(nav.previous(), 1);
        assert_eq!(nav.previous(), 1);
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut nav = NavigationState::starting_at(16, 5);
        assert!(!nav.go_to(0));
        assert!(!nav.go_to(17));
        assert!(!nav.go_to(usize::MAX));
        assert_eq!(nav.current(), 5);
    }

    #[test]
    fn test_go_to_same_slide_is_accepted() {
        let mut nav = NavigationState::starting_at(4, 2);
        assert!(nav.go_to(2));
        assert_eq!(nav.current(), 2);
        assert!(nav.go_to(4));
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn test_starting_at_invalid_falls_back_to_first() {
        assert_eq!(NavigationState::starting_at(5, 9).current(), 1);
        assert_eq!(NavigationState::starting_at(5, 0).current(), 1);
    }

    #[test]
    fn test_first_and_last() {
        let mut nav = NavigationState::new(7);
        assert!(nav.last());
        assert_eq!(nav.current(), 7);
        assert!(nav.first());
        assert_eq!(nav.current(), 1);
        assert!(nav.first());
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_mixed_sequence_stays_in_bounds() {
        // Deterministic pseudo-random walk over next/previous
        let mut nav = NavigationState::new(6);
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 3 == 0 {
                nav.previous();
            } else {
                nav.next();
            }
            assert!((1..=nav.total()).contains(&nav.current()));
        }
    }
}
