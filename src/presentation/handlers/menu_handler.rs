use tracing::debug;

use crate::{
    domain::{
        repositories::user_repository::UserRepository, services::password_service::PasswordHasher,
    },
    presentation::{
        error::PresentationError, handlers::user_handler::UserHandler, menu::Menu, views::View,
    },
};

/// Show the welcome banner, then dispatch menu choices until Quit.
pub async fn run<U, P, V>(handler: &mut UserHandler<U, P, V>) -> Result<(), PresentationError>
where
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
    V: View,
{
    handler.welcome()?;

    loop {
        let command = handler.view_mut().get_command()?;
        debug!(?command, "Menu selection");

        match command {
            Menu::Login => {
                handler.login().await?;
            }
            Menu::Register => {
                handler.register().await?;
            }
            Menu::Quit => {
                handler.goodbye()?;
                return Ok(());
            }
        }
    }
}
