pub mod error;
pub mod handlers;
pub mod menu;
pub mod views;
