use console::{Term, style};
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use crate::presentation::{
    error::ViewError,
    menu::Menu,
    views::{Message, View},
};

/// [`View`] backed by dialoguer prompts on stdout.
pub struct TerminalView {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TerminalView {
    fn get_command(&mut self) -> Result<Menu, ViewError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Please select an option")
            .items(&Menu::ALL)
            .default(0)
            .interact_on(&self.term)?;
        Ok(Menu::ALL[index])
    }

    fn get_credentials(&mut self) -> Result<(String, String), ViewError> {
        let username = Input::<String>::with_theme(&self.theme)
            .with_prompt("Enter Username")
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        let password = Password::with_theme(&self.theme)
            .with_prompt("Enter Password")
            .allow_empty_password(true)
            .interact_on(&self.term)?;
        Ok((username, password))
    }

    fn show_message(&mut self, message: &Message) -> Result<(), ViewError> {
        let text = message.to_string();
        let styled = match message {
            Message::Welcome => style(text).blue(),
            Message::Registered(_) | Message::LoggedIn(_) => style(text).green(),
            Message::AlreadyExists(_) | Message::Rejected(_) | Message::InvalidCredentials => {
                style(text).red()
            }
            Message::Goodbye => style(text),
        };
        self.term.write_line(&styled.to_string())?;
        // blank line between outcomes
        self.term.write_line("")?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), ViewError> {
        self.term.clear_screen()?;
        Ok(())
    }
}
