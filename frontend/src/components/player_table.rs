use chrono::Utc;
use shared::shared_prediction_game::{relative_time, Player};
use yew::prelude::*;

use crate::styles::{self, prediction_chip};

#[derive(Properties, PartialEq)]
pub struct PlayerTableProps {
    pub players: Vec<Player>,
    pub multiplier: f64,
    /// Adds the result and payout columns.
    #[prop_or_default]
    pub resolved: bool,
    #[prop_or_default]
    pub user_id: Option<String>,
}

#[function_component(PlayerTable)]
pub fn player_table(props: &PlayerTableProps) -> Html {
    if props.players.is_empty() {
        return html! { <p class={styles::TEXT_SMALL}>{"No players have joined yet."}</p> };
    }

    let now = Utc::now();
    let rows = props.players.iter().map(|player| {
        let is_me = props
            .user_id
            .as_deref()
            .map_or(false, |user_id| player.is_user(user_id));
        let prediction = match player.prediction {
            Some(prediction) => html! {
                <span class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", prediction_chip(prediction))}>
                    {prediction.label()}
                </span>
            },
            None => html! { <span class={styles::TEXT_SMALL}>{"-"}</span> },
        };

        html! {
            <tr key={player.id.clone()} class={classes!(is_me.then_some("bg-blue-50 dark:bg-blue-900/30"))}>
                <td class={styles::TABLE_CELL}>
                    {player.display_name()}
                    if is_me {
                        <span class="ml-2 text-xs text-blue-600 dark:text-blue-400">{"(you)"}</span>
                    }
                </td>
                <td class={styles::TABLE_CELL}>{prediction}</td>
                <td class={styles::TABLE_CELL}>{format!("{:.2}", player.amount)}</td>
                <td class={styles::TABLE_CELL}>
                    {player.joined_at.map(|at| relative_time(at, now)).unwrap_or_default()}
                </td>
                if props.resolved {
                    <td class={styles::TABLE_CELL}>{if player.has_won { "Won" } else { "Lost" }}</td>
                    <td class={styles::TABLE_CELL}>
                        {player
                            .payout(props.multiplier)
                            .map(|payout| format!("+{:.2}", payout))
                            .unwrap_or_else(|| "0.00".to_string())}
                    </td>
                }
            </tr>
        }
    });

    html! {
        <div class="overflow-x-auto">
            <table class={styles::TABLE}>
                <thead>
                    <tr>
                        <th class={styles::TABLE_HEAD}>{"Player"}</th>
                        <th class={styles::TABLE_HEAD}>{"Prediction"}</th>
                        <th class={styles::TABLE_HEAD}>{"Stake"}</th>
                        <th class={styles::TABLE_HEAD}>{"Joined"}</th>
                        if props.resolved {
                            <th class={styles::TABLE_HEAD}>{"Result"}</th>
                            <th class={styles::TABLE_HEAD}>{"Payout"}</th>
                        }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100 dark:divide-gray-800">
                    { for rows }
                </tbody>
            </table>
        </div>
    }
}
