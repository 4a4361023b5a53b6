use shared::shared_account::{MlmStats, UserProfile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::base::Base;
use crate::components::GradientBackground;
use crate::hooks::{use_auth_check, use_session, use_wallet};
use crate::notify::report_failure;
use crate::styles;

#[function_component(Account)]
pub fn account() -> Html {
    use_auth_check();
    let session = use_session();
    let wallet = use_wallet();
    let profile = use_state(|| None::<UserProfile>);
    let stats = use_state(|| None::<MlmStats>);

    {
        let profile = profile.clone();
        let stats = stats.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_profile(&session).await {
                    Ok(loaded) => profile.set(Some(loaded)),
                    Err(err) => {
                        report_failure("profile", &err);
                        if err.is_auth() {
                            return;
                        }
                    }
                }
                match api::fetch_mlm_stats(&session).await {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(err) => report_failure("referral stats", &err),
                }
            });
            || ()
        });
    }

    let row = |label: &'static str, value: String| html! {
        <div class="flex justify-between py-2">
            <span class={styles::TEXT_SMALL}>{label}</span>
            <span class={styles::TEXT_BODY}>{value}</span>
        </div>
    };
    let amount = |value: Option<f64>| value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "--".to_string());

    html! {
        <Base>
            <GradientBackground>
                <div class={classes!(styles::CONTAINER_SM, "space-y-6")}>
                    <h1 class={styles::TEXT_H1}>{"Account"}</h1>

                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::TEXT_H3, "mb-2")}>{"Profile"}</h2>
                        { match &*profile {
                            Some(profile) => html! {
                                <>
                                    {row("Name", profile.name.clone())}
                                    {row("Email", profile.email.clone())}
                                    {row("Referral code", profile.referral_code.clone().unwrap_or_else(|| "--".to_string()))}
                                </>
                            },
                            None => html! { <p class={styles::TEXT_SMALL}>{"Loading..."}</p> },
                        } }
                    </div>

                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::TEXT_H3, "mb-2")}>{"Wallet"}</h2>
                        {row("Main", amount(wallet.map(|w| w.general)))}
                        {row("Benefit", amount(wallet.map(|w| w.benefit)))}
                        {row("Game", amount(wallet.map(|w| w.game)))}
                    </div>

                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::TEXT_H3, "mb-2")}>{"Referrals"}</h2>
                        { match &*stats {
                            Some(stats) => html! {
                                <>
                                    {row("Direct referrals", stats.direct_referrals.to_string())}
                                    {row("Team size", stats.team_size.to_string())}
                                    {row("Total earnings", format!("{:.2}", stats.total_earnings))}
                                </>
                            },
                            None => html! { <p class={styles::TEXT_SMALL}>{"Loading..."}</p> },
                        } }
                    </div>
                </div>
            </GradientBackground>
        </Base>
    }
}
