use shared::constants::{TOKEN_KEY, USERNAME_KEY, USER_ID_KEY, WALLET_KEY};
use shared::session::{unauthorized_notice, Session};
use web_sys::{window, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::notify::notify_error;
use crate::Route;

fn storages() -> Vec<Storage> {
    let Some(window) = window() else {
        return Vec::new();
    };
    [window.local_storage().ok().flatten(), window.session_storage().ok().flatten()]
        .into_iter()
        .flatten()
        .collect()
}

/// Reads a key from local storage, falling back to session storage.
pub fn read_item(key: &str) -> Option<String> {
    storages()
        .into_iter()
        .find_map(|storage| storage.get_item(key).ok().flatten())
}

pub fn write_item(key: &str, value: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist {} to local storage", key);
        }
    }
}

pub fn store_session(token: &str, user_id: &str, username: &str) {
    write_item(TOKEN_KEY, token);
    write_item(USER_ID_KEY, user_id);
    write_item(USERNAME_KEY, username);
}

pub fn clear_session() {
    for storage in storages() {
        for key in [TOKEN_KEY, USER_ID_KEY, USERNAME_KEY, WALLET_KEY] {
            storage.remove_item(key).ok();
        }
    }
}

/// The session every API call goes through. Provided to the tree by
/// [`SessionProvider`].
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    on_unauthorized: Callback<()>,
}

impl SessionHandle {
    /// A session with no redirect attached, for components rendered outside the provider.
    pub fn detached() -> Self {
        Self {
            on_unauthorized: Callback::from(|_| clear_session()),
        }
    }

    pub fn username(&self) -> Option<String> {
        read_item(USERNAME_KEY)
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }
}

impl Session for SessionHandle {
    fn token(&self) -> Option<String> {
        read_item(TOKEN_KEY)
    }

    fn user_id(&self) -> Option<String> {
        read_item(USER_ID_KEY)
    }

    fn on_unauthorized(&self) {
        self.on_unauthorized.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let navigator = use_navigator();
    let session = use_memo((), move |_| {
        let on_unauthorized = Callback::from(move |_: ()| {
            let was_logged_in = read_item(TOKEN_KEY).is_some();
            clear_session();
            notify_error(unauthorized_notice(was_logged_in));
            match &navigator {
                Some(navigator) => navigator.push(&Route::Login),
                None => log::error!("session expired outside the router"),
            }
        });
        SessionHandle { on_unauthorized }
    });

    html! {
        <ContextProvider<SessionHandle> context={(*session).clone()}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
