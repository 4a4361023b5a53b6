pub const API_PREFIX: &str = "/api";
pub const WALLET_ENDPOINT: &str = "/users/wallet";
pub const PROFILE_ENDPOINT: &str = "/users/profile";
pub const LOGIN_ENDPOINT: &str = "/users/login";
pub const MLM_STATS_ENDPOINT: &str = "/mlm/stats";

// Polling cadence
pub const ROOM_POLL_INTERVAL_MS: u32 = 5_000;
pub const ROOM_LIST_POLL_INTERVAL_MS: u32 = 20_000;
pub const WALLET_POLL_INTERVAL_MS: u32 = 20_000;
pub const POLL_STOP_GRACE_MS: u32 = 2_000;
pub const MAX_POLL_BACKOFF_MS: u32 = 60_000;

// Local round timers
pub const TIMER_TICK_MS: u32 = 1_000;
pub const WAITING_TIMER_CEILING_SECS: u32 = 30;
pub const START_COUNTDOWN_SECS: u32 = 10;
pub const RESULT_REVEAL_SECS: u32 = 3;
pub const REDIRECT_COUNTDOWN_SECS: u32 = 5;

// Browser storage keys and window events
pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "user_id";
pub const USERNAME_KEY: &str = "username";
pub const WALLET_KEY: &str = "wallet";
pub const WALLET_UPDATE_EVENT: &str = "walletUpdate";
pub const NOTIFICATION_EVENT: &str = "notification";
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

// User-facing messages
pub const LOGIN_REQUIRED_ERROR: &str = "Please log in to continue.";
pub const SESSION_EXPIRED_ERROR: &str = "Your session has expired. Please log in again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const RATE_LIMIT_ERROR: &str = "Too many requests. Please wait a moment.";
pub const GENERIC_FAILURE_ERROR: &str = "Something went wrong. Please try again.";
pub const JOIN_FAILED_ERROR: &str = "Could not place your bet. Please try again.";
pub const SELECTION_REQUIRED_ERROR: &str = "Pick a prediction before placing a bet";
pub const INVALID_STAKE_ERROR: &str = "Enter a stake greater than zero";
pub const INSUFFICIENT_FUNDS_ERROR: &str = "Insufficient funds in your game wallet";
pub const BELOW_ENTRY_FEE_ERROR: &str = "Stake must be at least the room entry fee";
pub const ROOM_UNAVAILABLE_ERROR: &str = "This room is no longer accepting bets";
