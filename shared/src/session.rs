use crate::constants::{LOGIN_REQUIRED_ERROR, SESSION_EXPIRED_ERROR};
use crate::error::ClientError;

/// Credentials the API client needs before every request.
pub trait Session {
    fn token(&self) -> Option<String>;
    fn user_id(&self) -> Option<String>;
    /// Called when the server or the store says the user is not logged in.
    fn on_unauthorized(&self);
}

/// Returns the bearer token, or reports the session as unauthorized.
pub fn require_token(session: &impl Session) -> Result<String, ClientError> {
    match session.token().filter(|token| !token.trim().is_empty()) {
        Some(token) => Ok(token),
        None => {
            log::warn!("no session token, skipping request");
            session.on_unauthorized();
            Err(ClientError::Unauthenticated)
        }
    }
}

/// Forwards authentication failures to the session before handing the result back.
pub fn check_auth<T>(session: &impl Session, result: Result<T, ClientError>) -> Result<T, ClientError> {
    if let Err(err) = &result {
        if err.is_auth() {
            session.on_unauthorized();
        }
    }
    result
}

/// Text shown when the session is rejected. A stored token means it expired,
/// no token means the user never logged in.
pub fn unauthorized_notice(had_token: bool) -> &'static str {
    if had_token {
        SESSION_EXPIRED_ERROR
    } else {
        LOGIN_REQUIRED_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeSession {
        token: Option<String>,
        unauthorized: Cell<u32>,
    }

    impl FakeSession {
        fn with_token(token: Option<&str>) -> Self {
            Self {
                token: token.map(str::to_string),
                unauthorized: Cell::new(0),
            }
        }
    }

    impl Session for FakeSession {
        fn token(&self) -> Option<String> {
            self.token.clone()
        }

        fn user_id(&self) -> Option<String> {
            None
        }

        fn on_unauthorized(&self) {
            self.unauthorized.set(self.unauthorized.get() + 1);
        }
    }

    #[test]
    fn test_token_present() {
        let session = FakeSession::with_token(Some("abc"));
        assert_eq!(require_token(&session), Ok("abc".to_string()));
        assert_eq!(session.unauthorized.get(), 0);
    }

    #[test]
    fn test_missing_or_blank_token_short_circuits() {
        for token in [None, Some(""), Some("   ")] {
            let session = FakeSession::with_token(token);
            assert_eq!(require_token(&session), Err(ClientError::Unauthenticated));
            assert_eq!(session.unauthorized.get(), 1);
        }
    }

    #[test]
    fn test_only_auth_errors_log_out() {
        let session = FakeSession::with_token(Some("abc"));
        let _ = check_auth::<()>(&session, Err(ClientError::Network("offline".into())));
        let _ = check_auth::<()>(&session, Ok(()));
        assert_eq!(session.unauthorized.get(), 0);
        let _ = check_auth::<()>(&session, Err(ClientError::Unauthenticated));
        assert_eq!(session.unauthorized.get(), 1);
    }

    #[test]
    fn test_missing_token_still_gets_a_notice() {
        let session = FakeSession::with_token(None);
        assert_eq!(require_token(&session).unwrap_err(), ClientError::Unauthenticated);
        assert_eq!(unauthorized_notice(session.token().is_some()), LOGIN_REQUIRED_ERROR);
        assert_eq!(unauthorized_notice(true), SESSION_EXPIRED_ERROR);
    }
}
