use serde::{Deserialize, Serialize};
use shared::constants::NOTIFICATION_EVENT;
use shared::error::ClientError;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

fn dispatch(notice: &Notice) {
    let Some(window) = window() else { return };
    let Ok(detail) = serde_json::to_string(notice) else { return };
    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(&detail));
    if let Ok(event) = CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &event_init) {
        let _ = window.dispatch_event(&event);
    }
}

pub fn notify_success(message: &str) {
    dispatch(&Notice {
        kind: NoticeKind::Success,
        message: message.to_string(),
    });
}

pub fn notify_error(message: &str) {
    dispatch(&Notice {
        kind: NoticeKind::Error,
        message: message.to_string(),
    });
}

/// Logs a failed request and toasts it. Auth failures already redirected.
pub fn report_failure(context: &str, err: &ClientError) {
    log::error!("{} failed: {}", context, err);
    if !err.is_auth() {
        notify_error(&err.user_message());
    }
}
