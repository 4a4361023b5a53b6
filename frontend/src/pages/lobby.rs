use shared::shared_prediction_game::GameKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::GradientBackground;
use crate::hooks::use_auth_check;
use crate::styles::{self, prediction_chip, theme_for};
use crate::Route;

#[function_component(Lobby)]
pub fn lobby() -> Html {
    use_auth_check();

    let card = |kind: GameKind| {
        let theme = theme_for(kind);
        html! {
            <Link<Route> to={Route::Rooms { game: kind.slug().to_string() }} classes={classes!(styles::CARD_HOVER, "block", "space-y-4")}>
                <h2 class={classes!(styles::TEXT_H2, theme.accent_text)}>{kind.title()}</h2>
                <div class="flex gap-2">
                    { for kind.predictions().iter().map(|prediction| html! {
                        <span class={classes!("px-3", "py-1", "rounded-full", "text-sm", prediction_chip(*prediction))}>
                            {prediction.label()}
                        </span>
                    }) }
                </div>
                <p class={styles::TEXT_BODY}>{"Pick a side, fill the room, winners split the pot."}</p>
            </Link<Route>>
        }
    };

    html! {
        <Base>
            <GradientBackground>
                <div class={styles::CONTAINER_LG}>
                    <h1 class={classes!(styles::TEXT_H1, "mb-8")}>{"Games"}</h1>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {card(GameKind::BigSmall)}
                        {card(GameKind::Color)}
                    </div>
                </div>
            </GradientBackground>
        </Base>
    }
}
