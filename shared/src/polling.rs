//! Scheduling rules for periodic refreshes.
//!
//! [`PollGuard`] decides whether a refresh may start right now. It is driven
//! by millisecond timestamps supplied by the caller so the same rules apply to
//! interval ticks and to manual refreshes. Callers reschedule on
//! [`PollSkip::TooSoon`] rather than the guard allowing early calls.

use crate::constants::{MAX_POLL_BACKOFF_MS, POLL_STOP_GRACE_MS};

/// Why a refresh attempt was not started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PollSkip {
    InFlight,
    TooSoon { wait_ms: f64 },
    Stopped,
}

/// Proof that a refresh was admitted. Hand it back to [`PollGuard::complete`].
#[derive(Debug)]
#[must_use = "a started poll must be completed"]
pub struct PollTicket {
    started_at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct PollGuard {
    interval_ms: f64,
    in_flight: bool,
    last_started_at: Option<f64>,
    last_success_at: Option<f64>,
    consecutive_failures: u32,
    finished_at: Option<f64>,
    stopped: bool,
}

impl PollGuard {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            in_flight: false,
            last_started_at: None,
            last_success_at: None,
            consecutive_failures: 0,
            finished_at: None,
            stopped: false,
        }
    }

    #[cfg(test)]
    fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[cfg(test)]
    fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Minimum spacing currently enforced: the interval, doubled per
    /// consecutive failure up to the backoff cap.
    pub fn spacing_ms(&self) -> f64 {
        if self.consecutive_failures == 0 {
            return self.interval_ms;
        }
        let factor = 2f64.powi(self.consecutive_failures.min(16) as i32);
        (self.interval_ms * factor).min(f64::from(MAX_POLL_BACKOFF_MS).max(self.interval_ms))
    }

    pub fn try_begin(&mut self, now_ms: f64) -> Result<PollTicket, PollSkip> {
        if self.stopped {
            return Err(PollSkip::Stopped);
        }
        if let Some(finished_at) = self.finished_at {
            if now_ms - finished_at >= f64::from(POLL_STOP_GRACE_MS) {
                log::info!("polled resource finished, stopping");
                self.stopped = true;
                return Err(PollSkip::Stopped);
            }
        }
        if self.in_flight {
            return Err(PollSkip::InFlight);
        }

        // After a failure the spacing counts from the failed attempt,
        // otherwise from the start of the last successful one.
        let anchor = if self.consecutive_failures > 0 {
            self.last_started_at
        } else {
            self.last_success_at
        };
        if let Some(anchor) = anchor {
            let elapsed = now_ms - anchor;
            let spacing = self.spacing_ms();
            if elapsed < spacing {
                return Err(PollSkip::TooSoon { wait_ms: spacing - elapsed });
            }
        }

        self.in_flight = true;
        self.last_started_at = Some(now_ms);
        Ok(PollTicket { started_at: now_ms })
    }

    pub fn complete(&mut self, ticket: PollTicket, outcome: PollOutcome) {
        self.in_flight = false;
        match outcome {
            PollOutcome::Success => {
                self.last_success_at = Some(ticket.started_at);
                self.consecutive_failures = 0;
            }
            PollOutcome::Failure => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                log::debug!(
                    "poll failed {} time(s) in a row, spacing now {}ms",
                    self.consecutive_failures,
                    self.spacing_ms()
                );
            }
        }
    }

    /// The polled resource reached a terminal state. Attempts are still
    /// admitted for the grace delay, then rejected for good.
    pub fn finish(&mut self, now_ms: f64) {
        if self.finished_at.is_none() {
            self.finished_at = Some(now_ms);
        }
    }

    /// Cooperative stop: every later attempt is rejected.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_is_admitted() {
        let mut guard = PollGuard::new(5_000);
        assert!(guard.try_begin(0.0).is_ok());
        assert!(guard.is_in_flight());
    }

    #[test]
    fn test_at_most_one_in_flight() {
        let mut guard = PollGuard::new(5_000);
        let ticket = guard.try_begin(0.0).unwrap();
        assert_eq!(guard.try_begin(10_000.0).unwrap_err(), PollSkip::InFlight);
        guard.complete(ticket, PollOutcome::Success);
        assert!(guard.try_begin(10_000.0).is_ok());
    }

    #[test]
    fn test_attempts_closer_than_interval_make_one_call() {
        let mut guard = PollGuard::new(5_000);
        let mut calls = 0;
        for now in [0.0, 1_000.0, 2_500.0, 4_000.0] {
            if let Ok(ticket) = guard.try_begin(now) {
                calls += 1;
                guard.complete(ticket, PollOutcome::Success);
            }
        }
        assert_eq!(calls, 1);
        assert!(matches!(guard.try_begin(4_000.0), Err(PollSkip::TooSoon { .. })));
    }

    #[test]
    fn test_spacing_counts_from_start_of_success() {
        // A slow response does not push the next tick out.
        let mut guard = PollGuard::new(5_000);
        let ticket = guard.try_begin(0.0).unwrap();
        guard.complete(ticket, PollOutcome::Success);
        let ticket = guard.try_begin(5_000.0).unwrap();
        guard.complete(ticket, PollOutcome::Success);
        assert!(guard.try_begin(10_000.0).is_ok());
    }

    #[test]
    fn test_early_tick_is_rejected_with_remaining_wait() {
        let mut guard = PollGuard::new(5_000);
        let ticket = guard.try_begin(0.0).unwrap();
        guard.complete(ticket, PollOutcome::Success);
        assert_eq!(
            guard.try_begin(4_950.0).unwrap_err(),
            PollSkip::TooSoon { wait_ms: 50.0 }
        );
        assert!(guard.try_begin(5_000.0).is_ok());
    }

    #[test]
    fn test_finished_allows_calls_during_grace_only() {
        let mut guard = PollGuard::new(1_000);
        let ticket = guard.try_begin(0.0).unwrap();
        guard.complete(ticket, PollOutcome::Success);
        guard.finish(500.0);

        let ticket = guard.try_begin(1_500.0).unwrap();
        guard.complete(ticket, PollOutcome::Success);
        assert!(!guard.is_stopped());

        assert_eq!(guard.try_begin(2_500.0).unwrap_err(), PollSkip::Stopped);
        assert!(guard.is_stopped());
        assert_eq!(guard.try_begin(60_000.0).unwrap_err(), PollSkip::Stopped);
    }

    #[test]
    fn test_repeated_finish_keeps_first_deadline() {
        let mut guard = PollGuard::new(1_000);
        guard.finish(0.0);
        guard.finish(1_900.0);
        assert_eq!(guard.try_begin(2_000.0).unwrap_err(), PollSkip::Stopped);
    }

    #[test]
    fn test_failures_back_off_and_success_resets() {
        let mut guard = PollGuard::new(5_000);
        let ticket = guard.try_begin(0.0).unwrap();
        guard.complete(ticket, PollOutcome::Failure);
        assert_eq!(guard.spacing_ms(), 10_000.0);
        assert!(guard.try_begin(5_000.0).is_err());

        let ticket = guard.try_begin(10_000.0).unwrap();
        guard.complete(ticket, PollOutcome::Failure);
        assert_eq!(guard.spacing_ms(), 20_000.0);

        let ticket = guard.try_begin(30_000.0).unwrap();
        guard.complete(ticket, PollOutcome::Success);
        assert_eq!(guard.consecutive_failures(), 0);
        assert_eq!(guard.spacing_ms(), 5_000.0);
    }

    #[test]
    fn test_backoff_is_capped() {
        let mut guard = PollGuard::new(20_000);
        let mut now = 0.0;
        for _ in 0..10 {
            now += 1_000_000.0;
            let ticket = guard.try_begin(now).unwrap();
            guard.complete(ticket, PollOutcome::Failure);
        }
        assert_eq!(guard.spacing_ms(), f64::from(MAX_POLL_BACKOFF_MS));
    }

    #[test]
    fn test_stop_rejects_everything_after() {
        let mut guard = PollGuard::new(5_000);
        let ticket = guard.try_begin(0.0).unwrap();
        guard.stop();
        guard.complete(ticket, PollOutcome::Success);
        assert_eq!(guard.try_begin(60_000.0).unwrap_err(), PollSkip::Stopped);
    }
}
