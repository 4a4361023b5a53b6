pub mod account;
pub mod lobby;
pub mod login;
pub mod not_found;
pub mod room_detail;
pub mod room_list;
