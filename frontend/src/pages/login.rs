use shared::validation::{login_error_message, validate_credentials};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::base::Base;
use crate::components::GradientBackground;
use crate::notify::notify_success;
use crate::session::store_session;
use crate::{styles, Route};

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let handle_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let request = match validate_credentials(&value(&email_ref), &value(&password_ref)) {
                Ok(request) => request,
                Err(invalid) => {
                    error.set(Some(login_error_message(&invalid).to_string()));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api::login(&request).await {
                    Ok(response) => {
                        store_session(&response.token, &response.user.id, &response.user.name);
                        log::info!("logged in as {}", response.user.id);
                        notify_success("Welcome back");
                        loading.set(false);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        log::error!("login failed: {}", err);
                        error.set(Some(err.user_message()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <Base>
            <GradientBackground>
                <div class={styles::FLEX_CENTER}>
                    <div class={styles::AUTH_CARD}>
                        <h1 class={classes!(styles::TEXT_H2, "text-center")}>{"Sign in"}</h1>
                        <form onsubmit={handle_submit} class={styles::FORM}>
                            <div>
                                <label class={styles::TEXT_LABEL} for="email">{"Email"}</label>
                                <input id="email" type="email" autocomplete="email" ref={email_ref} class={styles::INPUT} />
                            </div>
                            <div>
                                <label class={styles::TEXT_LABEL} for="password">{"Password"}</label>
                                <input id="password" type="password" autocomplete="current-password" ref={password_ref} class={styles::INPUT} />
                            </div>
                            if let Some(message) = &*error {
                                <p class={styles::TEXT_ERROR}>{message}</p>
                            }
                            <button type="submit" disabled={*loading} class={styles::AUTH_BUTTON}>
                                {if *loading { "Signing in..." } else { "Sign in" }}
                            </button>
                        </form>
                    </div>
                </div>
            </GradientBackground>
        </Base>
    }
}
