pub mod menu_handler;
pub mod user_handler;
