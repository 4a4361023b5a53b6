use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use shared::constants::{NOTIFICATION_EVENT, NOTIFICATION_TIMEOUT_MS};
use shared::shared_prediction_game::GameKind;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, Event, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_session, use_wallet, use_wallet_poller};
use crate::notify::{notify_success, Notice, NoticeKind};
use crate::session::{clear_session, read_item, write_item};
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

fn handle_theme_toggle(dark_mode: bool) {
    let theme = if dark_mode { "dark" } else { "light" };
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.document_element())
    {
        html.set_class_name(theme);
    }
    write_item("theme", theme);
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let dark_mode = use_state(|| read_item("theme").map_or(true, |theme| theme == "dark"));
    let navigator = use_navigator();
    let session = use_session();
    let logged_in = session.is_logged_in();
    let username = session.username().unwrap_or_else(|| "Account".to_string());
    let show_dropdown = use_state(|| false);
    let wallet = use_wallet();
    let refresh_wallet = use_wallet_poller(logged_in);

    let notice = use_state(|| None::<Notice>);
    let hide_timeout = use_mut_ref(|| None::<Timeout>);

    {
        let notice = notice.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTIFICATION_EVENT, move |event: &Event| {
                    let Some(custom_event) = event.dyn_ref::<CustomEvent>() else { return };
                    let parsed = custom_event
                        .detail()
                        .as_string()
                        .and_then(|raw| serde_json::from_str::<Notice>(&raw).ok());
                    let Some(parsed) = parsed else {
                        log::warn!("ignoring malformed notification");
                        return;
                    };

                    notice.set(Some(parsed));
                    let notice = notice.clone();
                    // A newer toast replaces the pending hide of the previous one.
                    *hide_timeout.borrow_mut() = Some(Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                        notice.set(None);
                    }));
                })
            });
            move || drop(listener)
        });
    }

    {
        let show_dropdown = show_dropdown.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "click", move |event: &Event| {
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .and_then(|element| element.matches(".dropdown-container, .dropdown-container *").ok())
                        .unwrap_or(false);
                    if !inside {
                        show_dropdown.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle_dropdown = {
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_dropdown.set(!*show_dropdown);
        })
    };

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let new_mode = !*dark_mode;
            handle_theme_toggle(new_mode);
            dark_mode.set(new_mode);
        })
    };

    let on_refresh_wallet = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        refresh_wallet.emit(());
    });

    let handle_logout = {
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            clear_session();
            show_dropdown.set(false);
            log::info!("logged out");
            notify_success("Logged out");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let theme_icon = if *dark_mode { "☀️" } else { "🌙" };

    let balance_chip = |label: &'static str, amount: Option<f64>| html! {
        <div class={styles::BALANCE_CHIP}>
            <span class={styles::TEXT_SMALL}>{label}</span>
            <span class="font-medium text-blue-700 dark:text-blue-300">
                {amount.map(|amount| format!("{:.2}", amount)).unwrap_or_else(|| "--".to_string())}
            </span>
        </div>
    };

    let toast = (*notice).as_ref().map(|notice| {
        let class = match notice.kind {
            NoticeKind::Success => styles::TOAST_SUCCESS,
            NoticeKind::Error => styles::TOAST_ERROR,
        };
        html! { <div class={class}>{notice.message.clone()}</div> }
    });

    html! {
        <div class={if *dark_mode { "dark h-full bg-gray-900" } else { "h-full bg-gray-50" }}>
            <style>{styles::APP_CSS}</style>
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between">
                        <div class="flex items-center space-x-6">
                            <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"Predict"}</Link<Route>>
                            if logged_in {
                                <div class="hidden md:flex items-center space-x-2">
                                    { for [GameKind::BigSmall, GameKind::Color].into_iter().map(|kind| html! {
                                        <Link<Route> to={Route::Rooms { game: kind.slug().to_string() }} classes={styles::NAV_LINK}>
                                            {kind.title()}
                                        </Link<Route>>
                                    }) }
                                </div>
                            }
                        </div>

                        <div class={styles::NAV_ITEMS}>
                            if logged_in {
                                <div class="hidden lg:flex items-center space-x-2">
                                    {balance_chip("Main", wallet.map(|w| w.general))}
                                    {balance_chip("Benefit", wallet.map(|w| w.benefit))}
                                    {balance_chip("Game", wallet.map(|w| w.game))}
                                    <button onclick={on_refresh_wallet} class={styles::BUTTON_ICON} title="Refresh wallet">{"↻"}</button>
                                </div>
                                <div class="relative dropdown-container">
                                    <button onclick={toggle_dropdown} class={styles::NAV_LINK}>{username}</button>
                                    if *show_dropdown {
                                        <div class={classes!(styles::DROPDOWN, "min-w-[160px]", "top-full", "mt-2")}>
                                            <Link<Route> to={Route::Account} classes={classes!(styles::DROPDOWN_BUTTON, "flex", "justify-center")}>
                                                {"Account"}
                                            </Link<Route>>
                                            <button onclick={handle_logout}
                                                class={classes!(
                                                    styles::DROPDOWN_BUTTON,
                                                    "flex",
                                                    "justify-center",
                                                    "text-red-700",
                                                    "dark:text-red-400",
                                                    "hover:bg-red-50",
                                                    "dark:hover:bg-red-900/20"
                                                )}>
                                                {"Logout"}
                                            </button>
                                        </div>
                                    }
                                </div>
                            } else {
                                <Link<Route> to={Route::Login} classes={styles::NAV_LINK}>{"Login"}</Link<Route>>
                            }
                            <button onclick={toggle_theme} class={styles::BUTTON_ICON}>{theme_icon}</button>
                        </div>
                    </div>
                </div>
            </nav>
            {for toast}
            <main class="pt-16">{props.children.clone()}</main>
        </div>
    }
}
