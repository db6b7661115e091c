use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Unknown user and wrong password both end up here.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Password must not be empty")]
    EmptyPassword,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("User {0} already exists")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl DomainError {
    /// Username carried by a registration conflict, if this is one.
    pub fn already_exists(&self) -> Option<&str> {
        match self {
            DomainError::Repository(RepositoryError::AlreadyExists(username)) => {
                Some(username.as_str())
            }
            _ => None,
        }
    }
}
