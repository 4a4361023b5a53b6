use shared::shared_prediction_game::GameKind;
use yew::prelude::*;

use crate::styles::theme_for;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
    /// Tints the page with the game's colors; plain background when unset.
    #[prop_or_default]
    pub kind: Option<GameKind>,
}

#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    let base = match props.kind {
        Some(kind) => theme_for(kind).gradient,
        None => "bg-white dark:bg-gray-950",
    };

    html! {
        <div class="relative min-h-screen">
            <div class={classes!("fixed", "inset-0", "-z-50", base)}></div>
            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
