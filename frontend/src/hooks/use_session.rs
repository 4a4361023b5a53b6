use shared::session::Session;
use yew::prelude::*;

use crate::session::SessionHandle;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(|| {
        log::warn!("use_session called outside SessionProvider");
        SessionHandle::detached()
    })
}

/// Sends the user to the login view when no token is stored, now and every 30s.
#[hook]
pub fn use_auth_check() {
    let session = use_session();

    use_effect_with((), move |_| {
        let check_auth = move || {
            if session.token().is_none() {
                session.on_unauthorized();
            }
        };
        check_auth();
        let interval = gloo_timers::callback::Interval::new(30_000, check_auth);
        move || drop(interval)
    });
}
