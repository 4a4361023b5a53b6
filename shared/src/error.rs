use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    GENERIC_FAILURE_ERROR, NETWORK_ERROR, RATE_LIMIT_ERROR, SESSION_EXPIRED_ERROR,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error("request rejected: {message}")]
    Rejected { message: String },
    #[error("rate limited")]
    RateLimited,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Maps a non-success HTTP status onto the error taxonomy.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthenticated,
            429 => Self::RateLimited,
            other => Self::Status(other),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Text shown in the toast. Server rejections are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated => SESSION_EXPIRED_ERROR.to_string(),
            Self::Rejected { message } => message.clone(),
            Self::RateLimited => RATE_LIMIT_ERROR.to_string(),
            Self::Network(_) => NETWORK_ERROR.to_string(),
            Self::Status(_) | Self::Decode(_) => GENERIC_FAILURE_ERROR.to_string(),
        }
    }
}

/// Envelope every endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    fn check(&self) -> Result<(), ClientError> {
        if self.success {
            return Ok(());
        }
        let message = self
            .message
            .clone()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_ERROR.to_string());
        Err(ClientError::Rejected { message })
    }

    pub fn into_data(self) -> Result<T, ClientError> {
        self.check()?;
        self.data
            .ok_or_else(|| ClientError::Decode("response is missing data".to_string()))
    }

    pub fn into_data_or_default(self) -> Result<T, ClientError>
    where
        T: Default,
    {
        self.check()?;
        Ok(self.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejected_envelope_keeps_server_message() {
        let response: ApiResponse<u32> = serde_json::from_value(json!({
            "success": false, "message": "Room is full"
        }))
        .unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(err.user_message(), "Room is full");
    }

    #[test]
    fn test_rejected_envelope_without_message_is_generic() {
        let response: ApiResponse<u32> =
            serde_json::from_value(json!({ "success": false, "error": "  " })).unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(err.user_message(), GENERIC_FAILURE_ERROR);
    }

    #[test]
    fn test_missing_data_is_a_decode_error() {
        let response: ApiResponse<u32> = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(matches!(response.into_data(), Err(ClientError::Decode(_))));

        let response: ApiResponse<Vec<u32>> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_data_or_default(), Ok(Vec::new()));
    }

    #[test]
    fn test_status_mapping() {
        assert!(ClientError::from_status(401).is_auth());
        assert_eq!(ClientError::from_status(429), ClientError::RateLimited);
        assert_eq!(ClientError::from_status(500), ClientError::Status(500));
    }
}
