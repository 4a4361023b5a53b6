use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::GradientBackground;
use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base>
            <GradientBackground>
                <div class={classes!(styles::FLEX_CENTER, "items-center", "space-y-4")}>
                    <h1 class={styles::TEXT_H1}>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes={styles::BUTTON_PRIMARY}>{"Back to games"}</Link<Route>>
                </div>
            </GradientBackground>
        </Base>
    }
}
