//! Client-side view of a room's round lifecycle.
//!
//! The server's status is authoritative. [`RoomTracker`] turns each polled
//! snapshot into a [`RoomPhase`] and owns the single countdown attached to
//! that phase. Because the countdown lives inside the phase value, replacing
//! the phase always discards the previous timer.

use crate::constants::{
    REDIRECT_COUNTDOWN_SECS, RESULT_REVEAL_SECS, START_COUNTDOWN_SECS,
    WAITING_TIMER_CEILING_SECS,
};
use crate::shared_prediction_game::{resolve_winner, RoomDetail, RoomStatus, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Waiting,
    StartCountdown,
    ResultReveal,
    Redirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTimer {
    pub kind: TimerKind,
    pub remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPhase {
    /// No snapshot received yet.
    Loading,
    Waiting { remaining: u32 },
    Starting { remaining: u32 },
    /// Round under way, waiting for the server to publish a result.
    Drawing,
    Revealing { winner: Winner, remaining: u32 },
    Redirecting { winner: Winner, remaining: u32 },
    Finished { winner: Winner },
}

impl RoomPhase {
    pub fn active_timer(&self) -> Option<ActiveTimer> {
        let (kind, remaining) = match *self {
            Self::Waiting { remaining } => (TimerKind::Waiting, remaining),
            Self::Starting { remaining } => (TimerKind::StartCountdown, remaining),
            Self::Revealing { remaining, .. } => (TimerKind::ResultReveal, remaining),
            Self::Redirecting { remaining, .. } => (TimerKind::Redirect, remaining),
            Self::Loading | Self::Drawing | Self::Finished { .. } => return None,
        };
        Some(ActiveTimer { kind, remaining })
    }

    pub fn winner(&self) -> Option<Winner> {
        match *self {
            Self::Revealing { winner, .. }
            | Self::Redirecting { winner, .. }
            | Self::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.winner().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Waiting { .. } => "waiting",
            Self::Starting { .. } => "starting",
            Self::Drawing => "drawing",
            Self::Revealing { .. } => "revealing",
            Self::Redirecting { .. } => "redirecting",
            Self::Finished { .. } => "finished",
        }
    }
}

/// Something the page has to act on after a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    WaitingRearmed,
    StartCountdownElapsed,
    ResultRevealed,
    RedirectDue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomTracker {
    detail: Option<RoomDetail>,
    phase: RoomPhase,
}

impl Default for RoomTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomTracker {
    pub fn new() -> Self {
        Self {
            detail: None,
            phase: RoomPhase::Loading,
        }
    }

    pub fn phase(&self) -> RoomPhase {
        self.phase
    }

    pub fn detail(&self) -> Option<&RoomDetail> {
        self.detail.as_ref()
    }

    #[cfg(test)]
    fn server_completed(&self) -> bool {
        self.detail
            .as_ref()
            .map_or(false, |detail| detail.room.status == RoomStatus::Completed)
    }

    /// Folds a fresh snapshot into local state. Returns `true` when the phase
    /// changed, which is also the only time a timer is (re)started.
    pub fn reconcile(&mut self, snapshot: RoomDetail) -> bool {
        if self.phase.is_resolved() {
            // Completed is terminal; late snapshots from before completion are dropped.
            if snapshot.room.status == RoomStatus::Completed {
                self.detail = Some(snapshot);
            }
            return false;
        }

        let room = &snapshot.room;
        let next = match (room.status, self.phase) {
            (RoomStatus::Completed, _) => Some(RoomPhase::Revealing {
                winner: resolve_winner(room, &snapshot.players),
                remaining: RESULT_REVEAL_SECS,
            }),
            (RoomStatus::Waiting, phase) if !room.is_full() => match phase {
                RoomPhase::Waiting { .. } => None,
                _ => Some(RoomPhase::Waiting {
                    remaining: WAITING_TIMER_CEILING_SECS,
                }),
            },
            (RoomStatus::Waiting, phase) => match phase {
                RoomPhase::Starting { .. } | RoomPhase::Drawing => None,
                _ => Some(RoomPhase::Starting {
                    remaining: START_COUNTDOWN_SECS,
                }),
            },
            (RoomStatus::InProgress, phase) => match phase {
                RoomPhase::Starting { .. } | RoomPhase::Drawing => None,
                RoomPhase::Waiting { .. } => Some(RoomPhase::Starting {
                    remaining: START_COUNTDOWN_SECS,
                }),
                _ => Some(RoomPhase::Drawing),
            },
        };

        self.detail = Some(snapshot);
        match next {
            Some(next) => {
                log::info!("room phase {} -> {}", self.phase.name(), next.name());
                self.phase = next;
                true
            }
            None => false,
        }
    }

    /// Advances the phase timer by one second.
    pub fn tick(&mut self) -> Option<PhaseEvent> {
        match &mut self.phase {
            RoomPhase::Waiting { remaining } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    *remaining = WAITING_TIMER_CEILING_SECS;
                    return Some(PhaseEvent::WaitingRearmed);
                }
                None
            }
            RoomPhase::Starting { remaining } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    self.phase = RoomPhase::Drawing;
                    return Some(PhaseEvent::StartCountdownElapsed);
                }
                None
            }
            RoomPhase::Revealing { winner, remaining } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    let winner = *winner;
                    self.phase = RoomPhase::Redirecting {
                        winner,
                        remaining: REDIRECT_COUNTDOWN_SECS,
                    };
                    return Some(PhaseEvent::ResultRevealed);
                }
                None
            }
            RoomPhase::Redirecting { winner, remaining } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    let winner = *winner;
                    self.phase = RoomPhase::Finished { winner };
                    return Some(PhaseEvent::RedirectDue);
                }
                None
            }
            RoomPhase::Loading | RoomPhase::Drawing | RoomPhase::Finished { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_prediction_game::Prediction;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> RoomDetail {
        serde_json::from_value(value).unwrap()
    }

    fn waiting(current: u32, max: u32) -> RoomDetail {
        snapshot(json!({
            "room": {
                "_id": "room-1", "status": "waiting", "entryFee": 10.0,
                "currentPlayers": current, "maxPlayers": max
            },
            "players": []
        }))
    }

    fn tick_n(tracker: &mut RoomTracker, n: u32) -> Vec<PhaseEvent> {
        (0..n).filter_map(|_| tracker.tick()).collect()
    }

    #[test]
    fn test_room_with_free_seats_is_waiting() {
        let mut tracker = RoomTracker::new();
        assert!(tracker.reconcile(waiting(3, 5)));
        assert_eq!(tracker.phase(), RoomPhase::Waiting { remaining: 30 });
        assert_eq!(
            tracker.phase().active_timer(),
            Some(ActiveTimer { kind: TimerKind::Waiting, remaining: 30 })
        );
    }

    #[test]
    fn test_full_room_starts_countdown() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(5, 5));
        assert_eq!(tracker.phase(), RoomPhase::Starting { remaining: 10 });
        assert_eq!(
            tracker.phase().active_timer().map(|timer| timer.kind),
            Some(TimerKind::StartCountdown)
        );
    }

    #[test]
    fn test_filling_up_replaces_waiting_timer() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(4, 5));
        tick_n(&mut tracker, 7);
        assert!(tracker.reconcile(waiting(5, 5)));
        let timer = tracker.phase().active_timer().unwrap();
        assert_eq!(timer.kind, TimerKind::StartCountdown);
        assert_eq!(timer.remaining, 10);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(3, 5));
        tick_n(&mut tracker, 4);
        let before = tracker.clone();
        assert!(!tracker.reconcile(waiting(3, 5)));
        assert!(!tracker.reconcile(waiting(3, 5)));
        assert_eq!(tracker, before);
        assert_eq!(tracker.phase(), RoomPhase::Waiting { remaining: 26 });
    }

    #[test]
    fn test_new_players_update_detail_without_resetting_timer() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(2, 5));
        tick_n(&mut tracker, 5);
        assert!(!tracker.reconcile(waiting(3, 5)));
        assert_eq!(tracker.detail().unwrap().room.current_players, 3);
        assert_eq!(tracker.phase(), RoomPhase::Waiting { remaining: 25 });
    }

    #[test]
    fn test_waiting_timer_rearms_at_zero() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(1, 5));
        let events = tick_n(&mut tracker, 30);
        assert_eq!(events, vec![PhaseEvent::WaitingRearmed]);
        assert_eq!(tracker.phase(), RoomPhase::Waiting { remaining: 30 });
    }

    #[test]
    fn test_start_countdown_elapses_into_drawing_without_a_winner() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(5, 5));
        let events = tick_n(&mut tracker, 10);
        assert_eq!(events, vec![PhaseEvent::StartCountdownElapsed]);
        assert_eq!(tracker.phase(), RoomPhase::Drawing);
        assert_eq!(tracker.phase().winner(), None);

        // The server still reports a full waiting room: stay put.
        assert!(!tracker.reconcile(waiting(5, 5)));
        assert_eq!(tracker.phase(), RoomPhase::Drawing);
    }

    #[test]
    fn test_completed_round_reveals_then_redirects() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(5, 5));
        let completed = snapshot(json!({
            "room": {
                "_id": "room-1", "status": "completed",
                "currentPlayers": 5, "maxPlayers": 5, "winnerType": "big"
            },
            "players": [{ "hasWon": true, "numberType": "small" }]
        }));
        assert!(tracker.reconcile(completed.clone()));
        assert!(tracker.server_completed());
        assert_eq!(
            tracker.phase(),
            RoomPhase::Revealing { winner: Winner::Declared(Prediction::Big), remaining: 3 }
        );

        assert!(!tracker.reconcile(completed));
        assert_eq!(tick_n(&mut tracker, 3), vec![PhaseEvent::ResultRevealed]);
        assert_eq!(
            tracker.phase().active_timer().map(|timer| timer.kind),
            Some(TimerKind::Redirect)
        );
        assert_eq!(tick_n(&mut tracker, 5), vec![PhaseEvent::RedirectDue]);
        assert_eq!(
            tracker.phase(),
            RoomPhase::Finished { winner: Winner::Declared(Prediction::Big) }
        );
        assert_eq!(tracker.tick(), None);
    }

    #[test]
    fn test_completed_without_winner_info_is_explicit_no_winner() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(snapshot(json!({
            "room": { "_id": "room-2", "status": "completed", "maxPlayers": 2, "winnerType": null },
            "players": [{ "hasWon": false }, { "hasWon": false }]
        })));
        assert_eq!(tracker.phase().winner(), Some(Winner::NoWinner));
    }

    #[test]
    fn test_stale_snapshot_after_completion_is_ignored() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(snapshot(json!({
            "room": { "_id": "room-3", "status": "completed", "maxPlayers": 2, "winnerType": "red" },
            "players": []
        })));
        let before = tracker.clone();
        assert!(!tracker.reconcile(waiting(1, 2)));
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_in_progress_on_first_load_is_drawing() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(snapshot(json!({
            "room": { "_id": "room-4", "status": "in_progress", "currentPlayers": 2, "maxPlayers": 2 }
        })));
        assert_eq!(tracker.phase(), RoomPhase::Drawing);
        assert_eq!(tracker.phase().active_timer(), None);
    }

    #[test]
    fn test_in_progress_after_waiting_shows_countdown() {
        let mut tracker = RoomTracker::new();
        tracker.reconcile(waiting(1, 2));
        tracker.reconcile(snapshot(json!({
            "room": { "_id": "room-1", "status": "in_progress", "currentPlayers": 2, "maxPlayers": 2 }
        })));
        assert_eq!(tracker.phase(), RoomPhase::Starting { remaining: 10 });
    }

    #[test]
    fn test_at_most_one_timer_for_every_phase() {
        let phases = [
            RoomPhase::Loading,
            RoomPhase::Waiting { remaining: 1 },
            RoomPhase::Starting { remaining: 1 },
            RoomPhase::Drawing,
            RoomPhase::Revealing { winner: Winner::NoWinner, remaining: 1 },
            RoomPhase::Redirecting { winner: Winner::NoWinner, remaining: 1 },
            RoomPhase::Finished { winner: Winner::NoWinner },
        ];
        let timed = phases.iter().filter(|phase| phase.active_timer().is_some()).count();
        assert_eq!(timed, 4);
    }
}
