use std::rc::Rc;

use shared::constants::ROOM_LIST_POLL_INTERVAL_MS;
use shared::error::ClientError;
use shared::room_list::merge_rooms;
use shared::shared_prediction_game::{GameKind, GameRoom};
use yew::prelude::*;

use super::use_poller::{use_poller, PollStatus};
use super::use_session::use_session;
use crate::api;
use crate::notify::report_failure;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomListState {
    pub rooms: Vec<GameRoom>,
    pub loaded: bool,
    pub error: Option<String>,
}

pub enum RoomListAction {
    Loaded(Vec<GameRoom>),
    Failed(ClientError),
}

impl Reducible for RoomListState {
    type Action = RoomListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RoomListAction::Loaded(incoming) => Rc::new(Self {
                rooms: merge_rooms(&self.rooms, incoming),
                loaded: true,
                error: None,
            }),
            // Keep showing the last good list.
            RoomListAction::Failed(err) => Rc::new(Self {
                rooms: self.rooms.clone(),
                loaded: self.loaded,
                error: Some(err.user_message()),
            }),
        }
    }
}

pub struct RoomListHandle {
    pub state: UseReducerHandle<RoomListState>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_room_list(kind: GameKind) -> RoomListHandle {
    let session = use_session();
    let state = use_reducer(RoomListState::default);

    let refresh = {
        let state = state.clone();
        use_poller(kind, true, "room list", ROOM_LIST_POLL_INTERVAL_MS, move |kind| {
            let session = session.clone();
            let state = state.clone();
            async move {
                match api::fetch_rooms(&session, kind).await {
                    Ok(rooms) => {
                        log::debug!("{} rooms for {}", rooms.len(), kind.slug());
                        state.dispatch(RoomListAction::Loaded(rooms));
                        PollStatus::Continue
                    }
                    Err(err) => {
                        report_failure("room list refresh", &err);
                        state.dispatch(RoomListAction::Failed(err));
                        PollStatus::Failed
                    }
                }
            }
        })
    };

    RoomListHandle { state, refresh }
}
