//! Cooperative backspace auto-repeat.
//!
//! A press deletes once immediately (in the engine) and arms the schedule;
//! the host pumps `due` from its timer loop and fires that many deletes.
//! Each press gets a fresh generation token, so a cancellation is idempotent
//! and a poll that was already queued when the key was released fires
//! nothing afterwards.

use std::time::{Duration, Instant};

/// Handle for one backspace press. Cancelling it stops the repeats from
/// that press; a stale token cancels nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatToken(u64);

pub(crate) struct BackspaceRepeat {
    initial_delay: Duration,
    interval: Duration,
    generation: u64,
    armed: Option<Armed>,
}

struct Armed {
    token: RepeatToken,
    next_fire: Instant,
}

impl BackspaceRepeat {
    pub(crate) fn new(initial_delay: Duration, interval: Duration) -> Self {
        Self {
            initial_delay,
            interval,
            generation: 0,
            armed: None,
        }
    }

    /// Arm the schedule for a new press. Any earlier press is superseded.
    pub(crate) fn start(&mut self, now: Instant) -> RepeatToken {
        self.generation += 1;
        let token = RepeatToken(self.generation);
        self.armed = Some(Armed {
            token,
            next_fire: now + self.initial_delay,
        });
        token
    }

    /// Number of repeats due at `now`; advances the schedule past them.
    /// Zero while disarmed, however late the poll arrives.
    pub(crate) fn due(&mut self, now: Instant) -> u32 {
        let Some(armed) = self.armed.as_mut() else {
            return 0;
        };
        let mut fires = 0;
        while now >= armed.next_fire {
            fires += 1;
            armed.next_fire += self.interval;
        }
        fires
    }

    /// Disarm if `token` belongs to the active press. Idempotent.
    pub(crate) fn cancel(&mut self, token: RepeatToken) {
        if self.armed.as_ref().is_some_and(|a| a.token == token) {
            self.armed = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat() -> BackspaceRepeat {
        BackspaceRepeat::new(Duration::from_millis(250), Duration::from_millis(50))
    }

    #[test]
    fn nothing_due_before_initial_delay() {
        let mut r = repeat();
        let t0 = Instant::now();
        r.start(t0);
        assert_eq!(r.due(t0 + Duration::from_millis(249)), 0);
        assert_eq!(r.due(t0 + Duration::from_millis(250)), 1);
    }

    #[test]
    fn catches_up_at_fixed_cadence() {
        let mut r = repeat();
        let t0 = Instant::now();
        r.start(t0);
        // 250ms delay then 50ms cadence: at t0+400ms → fires at 250/300/350/400.
        assert_eq!(r.due(t0 + Duration::from_millis(400)), 4);
        assert_eq!(r.due(t0 + Duration::from_millis(449)), 0);
        assert_eq!(r.due(t0 + Duration::from_millis(450)), 1);
    }

    #[test]
    fn cancel_stops_pending_fires() {
        let mut r = repeat();
        let t0 = Instant::now();
        let token = r.start(t0);
        r.cancel(token);
        // The fire that was already due must not happen after cancellation.
        assert_eq!(r.due(t0 + Duration::from_secs(10)), 0);
        // Cancel is idempotent.
        r.cancel(token);
    }

    #[test]
    fn stale_token_does_not_cancel_new_press() {
        let mut r = repeat();
        let t0 = Instant::now();
        let old = r.start(t0);
        let t1 = t0 + Duration::from_millis(10);
        r.start(t1);
        r.cancel(old);
        assert_eq!(r.due(t1 + Duration::from_millis(250)), 1);
    }
}
