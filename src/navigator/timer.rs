//! Auto-advance timer slot and flip guard
//!
//! Both hand out generation numbers. Whoever actually schedules the tick or
//! the animation echoes the number back, and anything carrying an outdated
//! number is ignored.

use std::time::{Duration, Instant};
use tracing::warn;

/// Ticket identifying one flip transition
pub type FlipTicket = u64;

/// At most one live auto-advance timer per navigator
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    period: Duration,
    generation: u64,
    armed: bool,
}

impl AutoAdvance {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            generation: 0,
            armed: false,
        }
    }

    /// Cancel any armed timer and arm a fresh one
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.armed = true;
        self.generation
    }

    /// Cancel the armed timer; its in-flight ticks become stale
    pub fn cancel(&mut self) {
        if self.armed {
            self.armed = false;
            self.generation += 1;
        }
    }

    /// Whether a tick from `generation` should advance the deck
    pub fn accepts(&self, generation: u64) -> bool {
        self.armed && generation == self.generation
    }

    /// Generation of the armed timer
    pub fn armed(&self) -> Option<u64> {
        self.armed.then_some(self.generation)
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// Re-entrancy lock held while a card flip animates
#[derive(Debug, Clone)]
pub struct FlipGuard {
    timeout: Duration,
    ticket: FlipTicket,
    held_since: Option<Instant>,
}

impl FlipGuard {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ticket: 0,
            held_since: None,
        }
    }

    /// Take the guard for a new flip. A guard held past its timeout is
    /// treated as abandoned and taken over.
    pub fn try_acquire(&mut self, now: Instant) -> Option<FlipTicket> {
        if let Some(since) = self.held_since {
            let held_for = now.saturating_duration_since(since);
            if held_for < self.timeout {
                return None;
            }
            warn!(
                "⏱️ Flip {} never completed, releasing after {:?}",
                self.ticket, held_for
            );
        }
        self.ticket += 1;
        self.held_since = Some(now);
        Some(self.ticket)
    }

    /// Release the guard if `ticket` is the flip currently holding it
    pub fn release(&mut self, ticket: FlipTicket) -> bool {
        if self.held_since.is_some() && ticket == self.ticket {
            self.held_since = None;
            true
        } else {
            false
        }
    }

    pub fn is_held(&self) -> bool {
        self.held_since.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rearm_invalidates_previous_generation() {
        let mut timer = AutoAdvance::new(Duration::from_secs(3));
        let first = timer.arm();
        let second = timer.arm();
        assert!(!timer.accepts(first));
        assert!(timer.accepts(second));
        assert_eq!(timer.armed(), Some(second));
    }

    #[test]
    fn test_cancel_then_arm_never_reuses_generation() {
        let mut timer = AutoAdvance::new(Duration::from_secs(3));
        let first = timer.arm();
        timer.cancel();
        assert!(!timer.accepts(first));
        assert_eq!(timer.armed(), None);

        let second = timer.arm();
        assert_ne!(first, second);
        assert!(!timer.accepts(first));
    }

    #[test]
    fn test_guard_blocks_until_released() {
        let start = Instant::now();
        let mut guard = FlipGuard::new(Duration::from_secs(2));

        let ticket = guard.try_acquire(start).expect("free guard");
        assert!(guard.try_acquire(start + Duration::from_millis(100)).is_none());
        assert!(guard.release(ticket));
        assert!(!guard.is_held());
        assert!(guard.try_acquire(start + Duration::from_millis(200)).is_some());
    }

    #[test]
    fn test_stale_ticket_does_not_release() {
        let start = Instant::now();
        let mut guard = FlipGuard::new(Duration::from_millis(500));

        let old = guard.try_acquire(start).expect("free guard");
        // Completion for `old` never arrives; the timeout hands over the guard
        let new = guard
            .try_acquire(start + Duration::from_millis(600))
            .expect("abandoned guard is taken over");

        assert!(!guard.release(old));
        assert!(guard.is_held());
        assert!(guard.release(new));
    }
}
