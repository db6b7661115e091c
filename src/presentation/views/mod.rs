pub mod terminal_view;

use std::fmt;

use crate::presentation::{error::ViewError, menu::Menu};

/// Outcomes the handlers report back to the person at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Welcome,
    Registered(String),
    AlreadyExists(String),
    Rejected(String),
    LoggedIn(String),
    InvalidCredentials,
    Goodbye,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Welcome => write!(f, "Welcome to the Authentication App!"),
            Message::Registered(username) => {
                write!(f, "User {} is registered successfully.", username)
            }
            Message::AlreadyExists(username) => {
                write!(f, "User {} already exists. Please login instead.", username)
            }
            Message::Rejected(reason) => write!(f, "{}. Please try again.", reason),
            Message::LoggedIn(username) => write!(f, "User {} is logged in successfully.", username),
            Message::InvalidCredentials => write!(f, "Invalid credentials. Please try again."),
            Message::Goodbye => write!(f, "Bye Bye!"),
        }
    }
}

pub trait View {
    fn get_command(&mut self) -> Result<Menu, ViewError>;

    /// Prompt for `(username, password)`; the password is not echoed.
    fn get_credentials(&mut self) -> Result<(String, String), ViewError>;

    fn show_message(&mut self, message: &Message) -> Result<(), ViewError>;

    fn clear_screen(&mut self) -> Result<(), ViewError>;
}
