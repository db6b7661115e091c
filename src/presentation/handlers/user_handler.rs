use tracing::debug;

use crate::{
    domain::{
        error::DomainError, models::user::User, repositories::user_repository::UserRepository,
        services::password_service::PasswordHasher,
    },
    presentation::{
        error::PresentationError,
        views::{Message, View},
    },
    usecase::{login_usecase::LoginUsecase, register_user_usecase::RegisterUserUsecase},
};

/// Glue between the terminal view and the login / register use cases.
///
/// Expected failures (taken username, bad credentials, rejected input) are
/// shown to the user and yield `Ok(None)`. Anything else is returned.
pub struct UserHandler<U: UserRepository, P: PasswordHasher, V: View> {
    login_service: LoginUsecase<U, P>,
    register_service: RegisterUserUsecase<U, P>,
    view: V,
}

impl<U, P, V> UserHandler<U, P, V>
where
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
    V: View,
{
    pub fn new(
        login_service: LoginUsecase<U, P>,
        register_service: RegisterUserUsecase<U, P>,
        view: V,
    ) -> Self {
        Self {
            login_service,
            register_service,
            view,
        }
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[cfg(test)]
    pub fn into_view(self) -> V {
        self.view
    }

    pub fn welcome(&mut self) -> Result<(), PresentationError> {
        self.show(Message::Welcome)
    }

    pub fn goodbye(&mut self) -> Result<(), PresentationError> {
        self.view.show_message(&Message::Goodbye)?;
        Ok(())
    }

    pub async fn register(&mut self) -> Result<Option<User>, PresentationError> {
        let (username, password) = self.view.get_credentials()?;

        match self.register_service.create_user(&username, &password).await {
            Ok(user) => {
                debug!(date_joined = %user.date_joined(), "Registration complete");
                self.show(Message::Registered(user.username().to_string()))?;
                Ok(Some(user))
            }
            Err(err) => {
                if let Some(taken) = err.already_exists() {
                    let message = Message::AlreadyExists(taken.to_string());
                    self.show(message)?;
                    return Ok(None);
                }
                match err {
                    DomainError::EmptyUsername | DomainError::EmptyPassword => {
                        self.show(Message::Rejected(err.to_string()))?;
                        Ok(None)
                    }
                    other => Err(other.into()),
                }
            }
        }
    }

    pub async fn login(&mut self) -> Result<Option<User>, PresentationError> {
        let (username, password) = self.view.get_credentials()?;

        match self.login_service.login(&username, &password).await {
            Ok(user) => {
                self.show(Message::LoggedIn(user.username().to_string()))?;
                Ok(Some(user))
            }
            Err(DomainError::InvalidCredentials) => {
                self.show(Message::InvalidCredentials)?;
                Ok(None)
            }
            Err(other) => Err(other.into()),
        }
    }

    fn show(&mut self, message: Message) -> Result<(), PresentationError> {
        self.view.clear_screen()?;
        self.view.show_message(&message)?;
        Ok(())
    }
}
