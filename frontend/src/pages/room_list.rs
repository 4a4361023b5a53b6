use shared::shared_prediction_game::{GameKind, GameRoom};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::{BetDialog, GradientBackground, RoomCard};
use crate::hooks::{use_auth_check, use_room_list};
use crate::styles::{self, theme_for};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RoomListPageProps {
    pub kind: GameKind,
}

#[function_component(RoomListPage)]
pub fn room_list_page(props: &RoomListPageProps) -> Html {
    use_auth_check();
    let kind = props.kind;
    let navigator = use_navigator();
    let list = use_room_list(kind);
    let joining = use_state(|| None::<GameRoom>);

    let on_join = {
        let joining = joining.clone();
        Callback::from(move |room: GameRoom| joining.set(Some(room)))
    };

    let on_close = {
        let joining = joining.clone();
        Callback::from(move |_: ()| joining.set(None))
    };

    let on_joined = {
        let joining = joining.clone();
        Callback::from(move |room_id: String| {
            joining.set(None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Room {
                    game: kind.slug().to_string(),
                    id: room_id,
                });
            }
        })
    };

    let on_refresh = {
        let refresh = list.refresh.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            refresh.emit(());
        })
    };

    let state = &*list.state;
    let content = if !state.loaded && state.error.is_none() {
        html! { <p class={styles::TEXT_BODY}>{"Loading rooms..."}</p> }
    } else if state.rooms.is_empty() {
        html! { <p class={styles::TEXT_BODY}>{"No open rooms right now. Check back soon."}</p> }
    } else {
        html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                { for state.rooms.iter().map(|room| html! {
                    <RoomCard key={room.id.clone()} {kind} room={room.clone()} on_join={on_join.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <Base>
            <GradientBackground kind={Some(kind)}>
                <div class={styles::CONTAINER_LG}>
                    <div class="flex items-center justify-between mb-6">
                        <h1 class={classes!(styles::TEXT_H1, theme_for(kind).accent_text)}>{kind.title()}</h1>
                        <button onclick={on_refresh} class={styles::BUTTON_SECONDARY}>{"Refresh"}</button>
                    </div>
                    if let Some(message) = &state.error {
                        <div class={styles::ALERT_WARNING}>{message}</div>
                    }
                    {content}
                </div>
                if let Some(room) = &*joining {
                    <BetDialog {kind} room={room.clone()} {on_close} {on_joined} />
                }
            </GradientBackground>
        </Base>
    }
}
