use shared::room_phase::RoomPhase;
use shared::shared_prediction_game::{GameKind, Winner};
use yew::prelude::*;

use crate::styles::{self, prediction_chip, theme_for};

#[derive(Properties, PartialEq)]
pub struct PhasePanelProps {
    pub kind: GameKind,
    pub phase: RoomPhase,
    #[prop_or_default]
    pub seats_left: u32,
}

fn winner_banner(winner: Winner) -> Html {
    match winner {
        Winner::Declared(prediction) => html! {
            <div class="flex items-center justify-center gap-3">
                <span class={styles::TEXT_H3}>{"Winner"}</span>
                <span class={classes!("px-4", "py-2", "rounded-full", "text-lg", "font-bold", prediction_chip(prediction))}>
                    {prediction.label()}
                </span>
            </div>
        },
        Winner::NoWinner => html! {
            <p class={styles::TEXT_H3}>{"No winner this round"}</p>
        },
    }
}

fn countdown(remaining: u32, accent: &'static str) -> Html {
    html! {
        <span class={classes!("text-5xl", "font-black", "tabular-nums", "countdown-pulse", accent)}>
            {remaining}
        </span>
    }
}

/// Renders whatever the current phase calls for. Every phase is handled here
/// and nowhere else.
#[function_component(PhasePanel)]
pub fn phase_panel(props: &PhasePanelProps) -> Html {
    let accent = theme_for(props.kind).accent_text;

    let body = match props.phase {
        RoomPhase::Loading => html! {
            <p class={styles::TEXT_BODY}>{"Loading room..."}</p>
        },
        RoomPhase::Waiting { remaining } => html! {
            <>
                <p class={styles::TEXT_H3}>{"Waiting for players"}</p>
                <p class={styles::TEXT_BODY}>{format!("{} seat(s) left", props.seats_left)}</p>
                <p class={styles::TEXT_SMALL}>{format!("Checking again in {}s", remaining)}</p>
            </>
        },
        RoomPhase::Starting { remaining } => html! {
            <>
                <p class={styles::TEXT_H3}>{"Room full, round starting"}</p>
                {countdown(remaining, accent)}
            </>
        },
        RoomPhase::Drawing => html! {
            <>
                <p class={styles::TEXT_H3}>{"Drawing the result"}</p>
                <p class={styles::TEXT_SMALL}>{"Waiting for the server to publish the outcome."}</p>
            </>
        },
        RoomPhase::Revealing { remaining, .. } => html! {
            <>
                <p class={styles::TEXT_H3}>{"Results are being computed"}</p>
                {countdown(remaining, accent)}
            </>
        },
        RoomPhase::Redirecting { winner, remaining } => html! {
            <>
                {winner_banner(winner)}
                <p class={styles::TEXT_SMALL}>{format!("Returning to the room list in {}s", remaining)}</p>
            </>
        },
        RoomPhase::Finished { winner } => winner_banner(winner),
    };

    html! {
        <div class={classes!(styles::CARD, "flex", "flex-col", "items-center", "gap-3", "text-center")}>
            {body}
        </div>
    }
}
