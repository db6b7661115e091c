use crate::domain::{
    error::RepositoryError,
    models::{credential::StoredSecret, user::User},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository {
    /// Exact match on username. `Ok(None)` when no row matches.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a new user in a single transaction.
    ///
    /// Uniqueness is left to the store: a duplicate username comes back as
    /// [`RepositoryError::AlreadyExists`], never as a raw database error.
    async fn create_user(
        &self,
        username: &str,
        stored_secret: StoredSecret,
    ) -> Result<User, RepositoryError>;
}
