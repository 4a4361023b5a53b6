use shared::constants::{WALLET_KEY, WALLET_POLL_INTERVAL_MS, WALLET_UPDATE_EVENT};
use shared::shared_prediction_game::WalletBalance;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;

use super::use_poller::{use_poller, PollStatus};
use super::use_session::use_session;
use crate::api;
use crate::notify::report_failure;
use crate::session::{read_item, write_item};

/// Last balance seen by any page, if one was stored this session.
pub fn cached_wallet() -> Option<WalletBalance> {
    read_item(WALLET_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Stores a balance and tells every mounted `use_wallet` about it.
pub fn publish_wallet(wallet: &WalletBalance) {
    let Ok(raw) = serde_json::to_string(wallet) else { return };
    write_item(WALLET_KEY, &raw);

    let Some(window) = window() else { return };
    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(&raw));
    if let Ok(event) = CustomEvent::new_with_event_init_dict(WALLET_UPDATE_EVENT, &event_init) {
        let _ = window.dispatch_event(&event);
    }
}

#[hook]
pub fn use_wallet() -> Option<WalletBalance> {
    let wallet = use_state(cached_wallet);

    {
        let wallet = wallet.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |e: CustomEvent| {
                let parsed = e
                    .detail()
                    .as_string()
                    .and_then(|raw| serde_json::from_str::<WalletBalance>(&raw).ok());
                match parsed {
                    Some(balance) => wallet.set(Some(balance)),
                    None => log::warn!("ignoring malformed {} event", WALLET_UPDATE_EVENT),
                }
            }) as Box<dyn FnMut(CustomEvent)>);

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    WALLET_UPDATE_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        WALLET_UPDATE_EVENT,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *wallet
}

/// Refreshes the wallet every 20s while `enabled`. Returns a manual refresh.
#[hook]
pub fn use_wallet_poller(enabled: bool) -> Callback<()> {
    let session = use_session();

    use_poller((), enabled, "wallet", WALLET_POLL_INTERVAL_MS, move |_| {
        let session = session.clone();
        async move {
            match api::fetch_wallet(&session).await {
                Ok(balance) => {
                    publish_wallet(&balance);
                    PollStatus::Continue
                }
                Err(err) => {
                    report_failure("wallet refresh", &err);
                    PollStatus::Failed
                }
            }
        }
    })
}
