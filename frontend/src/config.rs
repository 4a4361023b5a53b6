use shared::constants::API_PREFIX;
use web_sys::window;

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            // Served next to the API: same origin, any port
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:3000".to_string()
}

/// Absolute URL for an API path such as `/users/wallet`.
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", get_api_base_url(), API_PREFIX, path)
}
