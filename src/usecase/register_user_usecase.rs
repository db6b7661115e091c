use tracing::debug;

use crate::domain::{
    error::DomainError, models::user::User, repositories::user_repository::UserRepository,
    services::password_service::PasswordHasher,
};

/// Whether empty usernames or passwords may be registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialPolicy {
    pub allow_empty_username: bool,
    pub allow_empty_password: bool,
}

impl CredentialPolicy {
    fn check(&self, username: &str, password: &str) -> Result<(), DomainError> {
        if username.is_empty() && !self.allow_empty_username {
            return Err(DomainError::EmptyUsername);
        }
        if password.is_empty() && !self.allow_empty_password {
            return Err(DomainError::EmptyPassword);
        }
        Ok(())
    }
}

pub struct RegisterUserUsecase<U: UserRepository, P: PasswordHasher> {
    user_repository: U,
    password_hasher: P,
    policy: CredentialPolicy,
}

impl<U: UserRepository, P: PasswordHasher> RegisterUserUsecase<U, P> {
    pub fn new(user_repository: U, password_hasher: P, policy: CredentialPolicy) -> Self {
        Self {
            user_repository,
            password_hasher,
            policy,
        }
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<User, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        self.policy.check(username, password)?;

        debug!(username = %username, "Hashing password for registration");
        let stored_secret = self.password_hasher.hash(password);

        // uniqueness is enforced by the insert itself
        let user = self
            .user_repository
            .create_user(username, stored_secret)
            .await?;

        Ok(user)
    }
}
