pub mod constants;
pub mod error;
pub mod polling;
pub mod room_list;
pub mod room_phase;
pub mod session;
pub mod shared_account;
pub mod shared_prediction_game;
pub mod validation;
