pub mod bet_dialog;
pub mod gradient_background;
pub mod phase_panel;
pub mod player_table;
pub mod room_card;

pub use bet_dialog::BetDialog;
pub use gradient_background::GradientBackground;
pub use phase_panel::PhasePanel;
pub use player_table::PlayerTable;
pub use room_card::RoomCard;
