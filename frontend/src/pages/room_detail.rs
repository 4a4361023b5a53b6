use shared::room_phase::RoomPhase;
use shared::session::Session;
use shared::shared_prediction_game::GameKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::{BetDialog, GradientBackground, PhasePanel, PlayerTable};
use crate::hooks::{use_auth_check, use_room_tracker, use_session};
use crate::styles::{self, theme_for};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RoomDetailPageProps {
    pub kind: GameKind,
    pub room_id: String,
}

#[function_component(RoomDetailPage)]
pub fn room_detail_page(props: &RoomDetailPageProps) -> Html {
    use_auth_check();
    let kind = props.kind;
    let navigator = use_navigator();
    let session = use_session();
    let tracker = use_room_tracker(kind, props.room_id.clone());
    let show_bet = use_state(|| false);

    let view = &*tracker.view;
    let phase = view.tracker.phase();

    // Back to the list once the redirect countdown has run out.
    {
        let finished = matches!(phase, RoomPhase::Finished { .. });
        use_effect_with(finished, move |finished| {
            if *finished {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Rooms {
                        game: kind.slug().to_string(),
                    });
                }
            }
            || ()
        });
    }

    let on_refresh = {
        let refresh = tracker.refresh.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            refresh.emit(());
        })
    };

    let open_bet = {
        let show_bet = show_bet.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_bet.set(true);
        })
    };

    let on_close = {
        let show_bet = show_bet.clone();
        Callback::from(move |_: ()| show_bet.set(false))
    };

    let on_joined = {
        let show_bet = show_bet.clone();
        let refresh = tracker.refresh.clone();
        Callback::from(move |_: String| {
            show_bet.set(false);
            refresh.emit(());
        })
    };

    let user_id = session.user_id();
    let Some(detail) = view.tracker.detail() else {
        return html! {
            <Base>
                <GradientBackground kind={Some(kind)}>
                    <div class={styles::CONTAINER_LG}>
                        <PhasePanel {kind} {phase} />
                        if let Some(message) = &view.error {
                            <div class={classes!(styles::ALERT_ERROR, "mt-4")}>{message}</div>
                        }
                    </div>
                </GradientBackground>
            </Base>
        };
    };

    let room = &detail.room;
    let already_joined = user_id
        .as_deref()
        .map_or(false, |user_id| detail.players.iter().any(|player| player.is_user(user_id)));
    let can_join = room.is_open() && !already_joined && matches!(phase, RoomPhase::Waiting { .. });
    // Outcomes stay hidden until the reveal countdown is over.
    let show_results = matches!(phase, RoomPhase::Redirecting { .. } | RoomPhase::Finished { .. });

    html! {
        <Base>
            <GradientBackground kind={Some(kind)}>
                <div class={classes!(styles::CONTAINER_LG, "space-y-6")}>
                    <div class="flex items-center justify-between">
                        <div>
                            <h1 class={classes!(styles::TEXT_H1, theme_for(kind).accent_text)}>{kind.title()}</h1>
                            <p class={styles::TEXT_SMALL}>
                                {format!(
                                    "Entry {:.2} · {}/{} players · pays x{:.1}",
                                    room.entry_fee, room.current_players, room.max_players, room.payout_multiplier
                                )}
                            </p>
                        </div>
                        <div class="flex gap-2">
                            if can_join {
                                <button onclick={open_bet} class={classes!(styles::BUTTON_PRIMARY, theme_for(kind).accent_button)}>
                                    {"Place bet"}
                                </button>
                            }
                            <button onclick={on_refresh} class={styles::BUTTON_SECONDARY}>{"Refresh"}</button>
                        </div>
                    </div>

                    if let Some(message) = &view.error {
                        <div class={styles::ALERT_WARNING}>{message}</div>
                    }

                    <PhasePanel {kind} {phase} seats_left={room.seats_left()} />

                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::TEXT_H3, "mb-4")}>{if show_results { "Results" } else { "Players" }}</h2>
                        <PlayerTable
                            players={detail.players.clone()}
                            multiplier={room.payout_multiplier}
                            resolved={show_results}
                            user_id={user_id.clone()}
                        />
                    </div>
                </div>
                if *show_bet && can_join {
                    <BetDialog {kind} room={room.clone()} {on_close} {on_joined} />
                }
            </GradientBackground>
        </Base>
    }
}
