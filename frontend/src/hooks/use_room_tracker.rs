use std::rc::Rc;

use gloo_timers::callback::Interval;
use shared::constants::{ROOM_POLL_INTERVAL_MS, TIMER_TICK_MS};
use shared::error::ClientError;
use shared::room_phase::{PhaseEvent, RoomTracker};
use shared::shared_prediction_game::{GameKind, RoomDetail, RoomStatus};
use yew::prelude::*;

use super::use_poller::{use_poller, PollStatus};
use super::use_session::use_session;
use crate::api;
use crate::notify::report_failure;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomView {
    pub tracker: RoomTracker,
    pub error: Option<String>,
}

pub enum RoomAction {
    Snapshot(RoomDetail),
    Tick,
    Failed(ClientError),
}

impl Reducible for RoomView {
    type Action = RoomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RoomAction::Snapshot(detail) => {
                next.tracker.reconcile(detail);
                next.error = None;
            }
            RoomAction::Tick => {
                if let Some(event) = next.tracker.tick() {
                    log::debug!("room timer event {:?}", event);
                    if event == PhaseEvent::StartCountdownElapsed {
                        log::info!("start countdown elapsed, result arrives with the next poll");
                    }
                }
            }
            RoomAction::Failed(err) => next.error = Some(err.user_message()),
        }
        Rc::new(next)
    }
}

pub struct RoomTrackerHandle {
    pub view: UseReducerHandle<RoomView>,
    pub refresh: Callback<()>,
}

/// Polls one room every 5s and drives its phase timer once per second.
/// Polling stops shortly after the server reports the round completed.
#[hook]
pub fn use_room_tracker(kind: GameKind, room_id: String) -> RoomTrackerHandle {
    let session = use_session();
    let view = use_reducer(RoomView::default);

    let refresh = {
        let view = view.clone();
        use_poller((kind, room_id), true, "room", ROOM_POLL_INTERVAL_MS, move |(kind, room_id)| {
            let session = session.clone();
            let view = view.clone();
            async move {
                match api::fetch_room(&session, kind, &room_id).await {
                    Ok(detail) => {
                        let completed = detail.room.status == RoomStatus::Completed;
                        view.dispatch(RoomAction::Snapshot(detail));
                        if completed {
                            PollStatus::Finished
                        } else {
                            PollStatus::Continue
                        }
                    }
                    Err(err) => {
                        report_failure("room refresh", &err);
                        view.dispatch(RoomAction::Failed(err));
                        PollStatus::Failed
                    }
                }
            }
        })
    };

    // One interval per timer kind; a phase change drops the previous one.
    let timer_kind = view.tracker.phase().active_timer().map(|timer| timer.kind);
    {
        let view = view.clone();
        use_effect_with(timer_kind, move |timer_kind| {
            let interval = timer_kind.map(|_| {
                Interval::new(TIMER_TICK_MS, move || view.dispatch(RoomAction::Tick))
            });
            move || drop(interval)
        });
    }

    RoomTrackerHandle { view, refresh }
}
