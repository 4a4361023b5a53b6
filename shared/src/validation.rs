use validator::{validate_email, ValidationError};

use crate::constants::{
    BELOW_ENTRY_FEE_ERROR, GENERIC_FAILURE_ERROR, INSUFFICIENT_FUNDS_ERROR, INVALID_STAKE_ERROR,
    ROOM_UNAVAILABLE_ERROR, SELECTION_REQUIRED_ERROR,
};
use crate::shared_account::LoginRequest;
use crate::shared_prediction_game::{GameKind, GameRoom, JoinRoomRequest, Prediction, WalletBalance};

/// Checks a bet locally. Only a request that passes here is sent to the server.
///
/// An unknown wallet counts as an empty one.
pub fn validate_bet(
    kind: GameKind,
    room: &GameRoom,
    selection: Option<Prediction>,
    stake_input: &str,
    wallet: Option<&WalletBalance>,
) -> Result<JoinRoomRequest, ValidationError> {
    if !room.is_open() {
        return Err(ValidationError::new("room_unavailable"));
    }

    let prediction = selection
        .filter(|prediction| kind.accepts(*prediction))
        .ok_or_else(|| ValidationError::new("selection_required"))?;

    let amount = validate_stake(stake_input)?;
    if amount < room.entry_fee {
        return Err(ValidationError::new("below_entry_fee"));
    }

    let available = wallet.map_or(0.0, WalletBalance::spendable);
    if amount > available {
        return Err(ValidationError::new("insufficient_funds"));
    }

    Ok(JoinRoomRequest {
        room_id: room.id.clone(),
        prediction,
        amount,
    })
}

pub fn validate_stake(stake_input: &str) -> Result<f64, ValidationError> {
    match stake_input.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ValidationError::new("invalid_stake")),
    }
}

pub fn bet_error_message(error: &ValidationError) -> &'static str {
    match &*error.code {
        "room_unavailable" => ROOM_UNAVAILABLE_ERROR,
        "selection_required" => SELECTION_REQUIRED_ERROR,
        "invalid_stake" => INVALID_STAKE_ERROR,
        "below_entry_fee" => BELOW_ENTRY_FEE_ERROR,
        "insufficient_funds" => INSUFFICIENT_FUNDS_ERROR,
        _ => GENERIC_FAILURE_ERROR,
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let email = email.trim();
    if !validate_email(email) {
        return Err(ValidationError::new("invalid_email"));
    }
    if password.is_empty() {
        return Err(ValidationError::new("password_required"));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn login_error_message(error: &ValidationError) -> &'static str {
    match &*error.code {
        "invalid_email" => "Please enter a valid email address",
        "password_required" => "Please enter your password",
        _ => GENERIC_FAILURE_ERROR,
    }
}

/// Preset stakes offered next to the stake input.
pub fn quick_stakes(entry_fee: f64) -> Vec<f64> {
    let base = if entry_fee > 0.0 { entry_fee } else { 1.0 };
    [1.0, 2.0, 5.0, 10.0].iter().map(|factor| base * factor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn open_room() -> GameRoom {
        serde_json::from_value(json!({
            "_id": "room-9", "status": "waiting", "entryFee": 10.0,
            "currentPlayers": 1, "maxPlayers": 5
        }))
        .unwrap()
    }

    fn wallet(game: f64) -> WalletBalance {
        WalletBalance { general: 0.0, benefit: 0.0, game }
    }

    fn code(result: Result<JoinRoomRequest, ValidationError>) -> String {
        result.unwrap_err().code.to_string()
    }

    #[test]
    fn test_valid_bet_builds_join_request() {
        let request = validate_bet(
            GameKind::BigSmall,
            &open_room(),
            Some(Prediction::Big),
            " 25 ",
            Some(&wallet(100.0)),
        )
        .unwrap();
        assert_eq!(request.room_id, "room-9");
        assert_eq!(request.prediction, Prediction::Big);
        assert_eq!(request.amount, 25.0);
    }

    #[test]
    fn test_stake_above_balance_is_insufficient_funds() {
        let result = validate_bet(
            GameKind::BigSmall,
            &open_room(),
            Some(Prediction::Small),
            "150",
            Some(&wallet(100.0)),
        );
        let error = result.unwrap_err();
        assert_eq!(error.code, "insufficient_funds");
        assert_eq!(bet_error_message(&error), INSUFFICIENT_FUNDS_ERROR);
    }

    #[test]
    fn test_missing_or_foreign_selection_is_rejected() {
        let room = open_room();
        let wallet = wallet(100.0);
        assert_eq!(
            code(validate_bet(GameKind::BigSmall, &room, None, "20", Some(&wallet))),
            "selection_required"
        );
        assert_eq!(
            code(validate_bet(GameKind::BigSmall, &room, Some(Prediction::Red), "20", Some(&wallet))),
            "selection_required"
        );
    }

    #[test]
    fn test_stake_must_be_positive_number() {
        for input in ["", "abc", "0", "-5", "NaN", "inf"] {
            assert!(validate_stake(input).is_err(), "{input:?} should be rejected");
        }
        assert_eq!(validate_stake("12.5").unwrap(), 12.5);
    }

    #[test]
    fn test_stake_below_entry_fee_and_unknown_wallet() {
        let room = open_room();
        assert_eq!(
            code(validate_bet(GameKind::BigSmall, &room, Some(Prediction::Big), "5", Some(&wallet(100.0)))),
            "below_entry_fee"
        );
        assert_eq!(
            code(validate_bet(GameKind::BigSmall, &room, Some(Prediction::Big), "10", None)),
            "insufficient_funds"
        );
    }

    #[test]
    fn test_full_room_is_unavailable() {
        let room = GameRoom { current_players: 5, ..open_room() };
        assert_eq!(
            code(validate_bet(GameKind::Color, &room, Some(Prediction::Green), "10", Some(&wallet(100.0)))),
            "room_unavailable"
        );
    }

    #[test]
    fn test_quick_stakes_scale_with_entry_fee() {
        assert_eq!(quick_stakes(10.0), vec![10.0, 20.0, 50.0, 100.0]);
        assert_eq!(quick_stakes(0.0), vec![1.0, 2.0, 5.0, 10.0]);
    }

    #[test]
    fn test_credentials_are_checked_before_login() {
        let request = validate_credentials(" player@example.com ", "hunter2").unwrap();
        assert_eq!(request.email, "player@example.com");

        let error = validate_credentials("not-an-email", "hunter2").unwrap_err();
        assert_eq!(error.code, "invalid_email");
        let error = validate_credentials("player@example.com", "").unwrap_err();
        assert_eq!(login_error_message(&error), "Please enter your password");
    }
}
