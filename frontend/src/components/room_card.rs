use chrono::Utc;
use shared::shared_prediction_game::{relative_time, GameKind, GameRoom, RoomStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles::{self, prediction_chip, theme_for};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RoomCardProps {
    pub kind: GameKind,
    pub room: GameRoom,
    pub on_join: Callback<GameRoom>,
}

#[function_component(RoomCard)]
pub fn room_card(props: &RoomCardProps) -> Html {
    let room = &props.room;
    let theme = theme_for(props.kind);

    let status = match room.status {
        RoomStatus::Waiting if room.is_full() => "Starting",
        RoomStatus::Waiting => "Waiting",
        RoomStatus::InProgress => "In progress",
        RoomStatus::Completed => "Completed",
    };

    let on_join = {
        let on_join = props.on_join.clone();
        let room = room.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_join.emit(room.clone());
        })
    };

    html! {
        <div class={classes!(styles::CARD_HOVER, "space-y-4")}>
            <div class="flex items-center justify-between">
                <span class={classes!("text-lg", "font-semibold", theme.accent_text)}>
                    {format!("Entry {:.2}", room.entry_fee)}
                </span>
                <span class={styles::TEXT_SMALL}>{status}</span>
            </div>

            <div class="flex items-center justify-between">
                <span class={styles::TEXT_BODY}>
                    {format!("{}/{} players", room.current_players, room.max_players)}
                </span>
                <span class={styles::TEXT_SMALL}>
                    {format!("Pays x{:.1}", room.payout_multiplier)}
                </span>
            </div>

            <div class="flex flex-wrap gap-2">
                { for props.kind.predictions().iter().map(|prediction| html! {
                    <span class={classes!("px-2", "py-1", "rounded-full", "text-xs", prediction_chip(*prediction))}>
                        {format!("{} {}", prediction.label(), room.players_on(*prediction))}
                    </span>
                }) }
            </div>

            if let Some(created_at) = room.created_at {
                <p class={styles::TEXT_SMALL}>{format!("Opened {}", relative_time(created_at, Utc::now()))}</p>
            }

            <div class="flex gap-2">
                <button
                    onclick={on_join}
                    disabled={!room.is_open()}
                    class={classes!(styles::BUTTON_PRIMARY, theme.accent_button, "flex-1")}
                >
                    {if room.is_open() { "Join" } else { "Full" }}
                </button>
                <Link<Route>
                    to={Route::Room { game: props.kind.slug().to_string(), id: room.id.clone() }}
                    classes={styles::BUTTON_SECONDARY}
                >
                    {"View"}
                </Link<Route>>
            </div>
        </div>
    }
}
