use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two game families served by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    BigSmall,
    Color,
}

impl GameKind {
    /// Path segment used by the REST API and the client router.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BigSmall => "big-small",
            Self::Color => "color",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "big-small" => Some(Self::BigSmall),
            "color" => Some(Self::Color),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BigSmall => "Big / Small",
            Self::Color => "Color Prediction",
        }
    }

    pub fn predictions(&self) -> &'static [Prediction] {
        match self {
            Self::BigSmall => &[Prediction::Big, Prediction::Small],
            Self::Color => &[Prediction::Red, Prediction::Green, Prediction::Violet],
        }
    }

    pub fn accepts(&self, prediction: Prediction) -> bool {
        self.predictions().contains(&prediction)
    }
}

/// An outcome a player can bet on: a number range for Big/Small, a color otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Big,
    Small,
    Red,
    Green,
    Violet,
    #[serde(other)]
    Unknown,
}

impl Prediction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Big => "Big",
            Self::Small => "Small",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Violet => "Violet",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Waiting,
    InProgress,
    Completed,
}

fn default_multiplier() -> f64 {
    2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRoom {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub entry_fee: f64,
    #[serde(default = "default_multiplier", alias = "multiplier")]
    pub payout_multiplier: f64,
    pub max_players: u32,
    #[serde(default)]
    pub current_players: u32,
    #[serde(default)]
    pub player_counts: BTreeMap<Prediction, u32>,
    pub status: RoomStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "winningColor")]
    pub winner_type: Option<Prediction>,
}

impl GameRoom {
    pub fn is_full(&self) -> bool {
        self.current_players >= self.max_players
    }

    pub fn seats_left(&self) -> u32 {
        self.max_players.saturating_sub(self.current_players)
    }

    /// A room accepts new bets only while waiting with a free seat.
    pub fn is_open(&self) -> bool {
        self.status == RoomStatus::Waiting && !self.is_full()
    }

    pub fn players_on(&self, prediction: Prediction) -> u32 {
        self.player_counts.get(&prediction).copied().unwrap_or(0)
    }

    pub fn payout_for(&self, stake: f64) -> f64 {
        stake * self.payout_multiplier
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "userId")]
    pub user: Option<UserSummary>,
    #[serde(default, alias = "numberType", alias = "color")]
    pub prediction: Option<Prediction>,
    #[serde(default, alias = "betAmount")]
    pub amount: f64,
    #[serde(default)]
    pub has_won: bool,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

impl Player {
    pub fn display_name(&self) -> &str {
        match &self.user {
            Some(user) if !user.name.is_empty() => &user.name,
            _ => "Anonymous",
        }
    }

    pub fn is_user(&self, user_id: &str) -> bool {
        self.user.as_ref().map_or(false, |user| user.id == user_id)
    }

    /// Amount credited to a winning player; `None` for losers.
    pub fn payout(&self, multiplier: f64) -> Option<f64> {
        self.has_won.then(|| self.amount * multiplier)
    }
}

/// Room detail payload: the room plus its joined players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetail {
    pub room: GameRoom,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// The outcome displayed once a round is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Declared(Prediction),
    NoWinner,
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Declared(prediction) => prediction.label(),
            Self::NoWinner => "No winner",
        }
    }
}

/// Winner of a completed round: the room's own field first, then any player
/// flagged as a winner, otherwise an explicit no-winner.
pub fn resolve_winner(room: &GameRoom, players: &[Player]) -> Winner {
    if let Some(declared) = room.winner_type.filter(Prediction::is_known) {
        return Winner::Declared(declared);
    }

    players
        .iter()
        .filter(|player| player.has_won)
        .find_map(|player| player.prediction.filter(Prediction::is_known))
        .map_or(Winner::NoWinner, Winner::Declared)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(default, alias = "balance")]
    pub general: f64,
    #[serde(default, alias = "benefitBalance")]
    pub benefit: f64,
    #[serde(default, alias = "gameBalance")]
    pub game: f64,
}

impl WalletBalance {
    /// Bets are paid out of the game wallet.
    pub fn spendable(&self) -> f64 {
        self.game
    }

    pub fn debit(&self, amount: f64) -> Self {
        Self {
            game: (self.game - amount).max(0.0),
            ..*self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomRequest {
    pub room_id: String,
    pub prediction: Prediction,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct JoinReceipt {
    #[serde(default)]
    pub room: Option<GameRoom>,
    #[serde(default)]
    pub wallet: Option<WalletBalance>,
}

/// Short age label such as "just now", "4m ago" or "2h ago".
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn room(value: serde_json::Value) -> GameRoom {
        serde_json::from_value(value).unwrap()
    }

    fn players(value: serde_json::Value) -> Vec<Player> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_winner_from_room_field_ignores_players() {
        let room = room(json!({
            "_id": "r1", "maxPlayers": 2, "currentPlayers": 2,
            "status": "completed", "winnerType": "big"
        }));
        let players = players(json!([
            { "hasWon": true, "numberType": "small" }
        ]));
        assert_eq!(resolve_winner(&room, &players), Winner::Declared(Prediction::Big));
    }

    #[test]
    fn test_winner_falls_back_to_flagged_player() {
        let room = room(json!({
            "id": "r2", "maxPlayers": 2, "status": "completed", "winnerType": null
        }));
        let players = players(json!([
            { "hasWon": false, "numberType": "big" },
            { "hasWon": true, "numberType": "small" }
        ]));
        assert_eq!(resolve_winner(&room, &players), Winner::Declared(Prediction::Small));
    }

    #[test]
    fn test_no_winner_when_nothing_is_flagged() {
        let room = room(json!({
            "id": "r3", "maxPlayers": 2, "status": "completed", "winnerType": null
        }));
        let players = players(json!([{ "hasWon": false }, { "hasWon": false }]));
        assert_eq!(resolve_winner(&room, &players), Winner::NoWinner);
        assert_eq!(resolve_winner(&room, &[]), Winner::NoWinner);
    }

    #[test]
    fn test_unrecognised_winner_value_is_not_trusted() {
        let room = room(json!({
            "id": "r4", "maxPlayers": 2, "status": "completed", "winningColor": "orange"
        }));
        assert_eq!(room.winner_type, Some(Prediction::Unknown));
        let players = players(json!([{ "hasWon": true, "color": "green" }]));
        assert_eq!(resolve_winner(&room, &players), Winner::Declared(Prediction::Green));
    }

    #[test]
    fn test_room_capacity_helpers() {
        let open = room(json!({
            "id": "r5", "maxPlayers": 5, "currentPlayers": 3, "status": "waiting",
            "entryFee": 10.0, "playerCounts": { "big": 2, "small": 1 }
        }));
        assert!(open.is_open());
        assert_eq!(open.seats_left(), 2);
        assert_eq!(open.players_on(Prediction::Big), 2);
        assert_eq!(open.players_on(Prediction::Red), 0);
        assert_eq!(open.payout_for(10.0), 20.0);

        let full = GameRoom { current_players: 5, ..open };
        assert!(full.is_full());
        assert!(!full.is_open());
    }

    #[test]
    fn test_wallet_aliases_and_debit() {
        let wallet: WalletBalance = serde_json::from_value(json!({
            "balance": 50.0, "benefitBalance": 5.0, "gameBalance": 100.0
        }))
        .unwrap();
        assert_eq!(wallet.spendable(), 100.0);
        let after = wallet.debit(30.0);
        assert_eq!(after.game, 70.0);
        assert_eq!(after.general, 50.0);
    }

    #[test]
    fn test_player_payout_and_identity() {
        let player: Player = serde_json::from_value(json!({
            "_id": "p1",
            "userId": { "_id": "u1", "name": "Asha", "email": "asha@example.com" },
            "color": "violet", "betAmount": 25.0, "hasWon": true
        }))
        .unwrap();
        assert_eq!(player.prediction, Some(Prediction::Violet));
        assert!(player.is_user("u1"));
        assert_eq!(player.display_name(), "Asha");
        assert_eq!(player.payout(2.0), Some(50.0));
    }

    #[test]
    fn test_game_kind_slugs_round_trip() {
        for kind in [GameKind::BigSmall, GameKind::Color] {
            assert_eq!(GameKind::from_slug(kind.slug()), Some(kind));
        }
        assert!(GameKind::Color.accepts(Prediction::Red));
        assert!(!GameKind::Color.accepts(Prediction::Big));
    }

    #[test]
    fn test_relative_time_labels() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").unwrap().with_timezone(&Utc);
        let ago = |secs: i64| relative_time(now - chrono::Duration::seconds(secs), now);
        assert_eq!(ago(-5), "just now");
        assert_eq!(ago(30), "just now");
        assert_eq!(ago(4 * 60 + 10), "4m ago");
        assert_eq!(ago(2 * 3600), "2h ago");
        assert_eq!(ago(3 * 86_400), "3d ago");
    }
}
