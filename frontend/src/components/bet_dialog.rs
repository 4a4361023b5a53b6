//! Stake entry and join submission for a single room.

use shared::constants::JOIN_FAILED_ERROR;
use shared::error::ClientError;
use shared::session::Session;
use shared::shared_prediction_game::{GameKind, GameRoom, Prediction};
use shared::validation::{bet_error_message, quick_stakes, validate_bet};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::hooks::{publish_wallet, use_session, use_wallet};
use crate::notify::notify_success;
use crate::styles::{self, prediction_chip, theme_for};

#[derive(Properties, PartialEq)]
pub struct BetDialogProps {
    pub kind: GameKind,
    pub room: GameRoom,
    pub on_close: Callback<()>,
    /// Fired with the room id once the server accepted the bet.
    pub on_joined: Callback<String>,
}

#[function_component(BetDialog)]
pub fn bet_dialog(props: &BetDialogProps) -> Html {
    let session = use_session();
    let wallet = use_wallet();
    let theme = theme_for(props.kind);

    let selection = use_state(|| None::<Prediction>);
    let stake = use_state(|| format!("{}", props.room.entry_fee));
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_stake_input = {
        let stake = stake.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            stake.set(input.value());
        })
    };

    let on_submit = {
        let kind = props.kind;
        let room = props.room.clone();
        let on_joined = props.on_joined.clone();
        let selection = selection.clone();
        let stake = stake.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match validate_bet(kind, &room, *selection, stake.as_str(), wallet.as_ref()) {
                Ok(request) => request,
                Err(invalid) => {
                    log::debug!("bet rejected locally: {}", invalid.code);
                    error.set(Some(bet_error_message(&invalid).to_string()));
                    return;
                }
            };

            error.set(None);
            submitting.set(true);

            let session = session.clone();
            let on_joined = on_joined.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match api::join_room(&session, kind, &request).await {
                    Ok(receipt) => {
                        let balance = receipt
                            .wallet
                            .or_else(|| wallet.map(|current| current.debit(request.amount)));
                        if let Some(balance) = balance {
                            publish_wallet(&balance);
                        }
                        log::info!(
                            "user {:?} joined room {} on {}",
                            session.user_id(),
                            request.room_id,
                            request.prediction
                        );
                        notify_success("Bet placed");
                        submitting.set(false);
                        on_joined.emit(request.room_id);
                    }
                    Err(err) => {
                        log::error!("join failed: {}", err);
                        let message = match &err {
                            ClientError::Unauthenticated => None,
                            ClientError::Rejected { message } => Some(message.clone()),
                            ClientError::RateLimited | ClientError::Network(_) => Some(err.user_message()),
                            ClientError::Status(_) | ClientError::Decode(_) => Some(JOIN_FAILED_ERROR.to_string()),
                        };
                        error.set(message);
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let prediction_buttons = props.kind.predictions().iter().map(|prediction| {
        let prediction = *prediction;
        let selected = *selection == Some(prediction);
        let onclick = {
            let selection = selection.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                selection.set(Some(prediction));
            })
        };
        html! {
            <button
                type="button"
                {onclick}
                class={classes!(
                    "flex-1", "py-3", "rounded-lg", "font-semibold",
                    prediction_chip(prediction),
                    selected.then_some(classes!("ring-4", theme.ring)),
                    (!selected).then_some("opacity-70")
                )}
            >
                {prediction.label()}
            </button>
        }
    });

    let stake_chips = quick_stakes(props.room.entry_fee).into_iter().map(|amount| {
        let onclick = {
            let stake = stake.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                stake.set(format!("{}", amount));
            })
        };
        html! {
            <button type="button" {onclick} class={classes!(styles::BUTTON_SECONDARY, "px-3", "py-1", "text-sm")}>
                {format!("{}", amount)}
            </button>
        }
    });

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL}>
                <div class="flex items-center justify-between mb-4">
                    <h2 class={styles::TEXT_H3}>{format!("Join {}", props.kind.title())}</h2>
                    <button onclick={on_close} class={styles::BUTTON_ICON}>{"✕"}</button>
                </div>

                <p class={styles::TEXT_SMALL}>
                    {format!(
                        "Entry fee {:.2}, winners receive x{:.1}",
                        props.room.entry_fee, props.room.payout_multiplier
                    )}
                </p>
                <p class={styles::TEXT_SMALL}>
                    {match wallet {
                        Some(balance) => format!("Game wallet: {:.2}", balance.spendable()),
                        None => "Game wallet: unknown".to_string(),
                    }}
                </p>

                <form onsubmit={on_submit} class={styles::FORM}>
                    <div class="flex gap-2">{ for prediction_buttons }</div>

                    <div>
                        <label class={styles::TEXT_LABEL} for="stake">{"Stake"}</label>
                        <input
                            id="stake"
                            type="number"
                            min="0"
                            step="any"
                            class={styles::INPUT}
                            value={(*stake).clone()}
                            oninput={on_stake_input}
                        />
                        <div class="mt-2 flex flex-wrap gap-2">{ for stake_chips }</div>
                    </div>

                    if let Some(message) = &*error {
                        <p class={styles::TEXT_ERROR}>{message}</p>
                    }

                    <button
                        type="submit"
                        disabled={*submitting}
                        class={classes!(styles::BUTTON_PRIMARY, theme.accent_button, "w-full")}
                    >
                        {if *submitting { "Placing bet..." } else { "Place bet" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
