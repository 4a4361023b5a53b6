pub mod use_poller;
pub mod use_room_list;
pub mod use_room_tracker;
pub mod use_session;
pub mod use_wallet;

pub use use_poller::*;
pub use use_room_list::*;
pub use use_room_tracker::*;
pub use use_session::*;
pub use use_wallet::*;
