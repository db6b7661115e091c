use tracing::info;

use crate::domain::{
    error::DomainError, models::user::User, repositories::user_repository::UserRepository,
    services::password_service::PasswordHasher,
};

pub struct LoginUsecase<U: UserRepository, P: PasswordHasher> {
    user_repository: U,
    password_hasher: P,
}

impl<U: UserRepository, P: PasswordHasher> LoginUsecase<U, P> {
    pub fn new(user_repository: U, password_hasher: P) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Succeeds only when the user exists and the password verifies.
    /// Either failure is reported as [`DomainError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> Result<User, DomainError>
    where
        U: Send + Sync,
        P: Send + Sync,
    {
        // no hashing work for unknown users
        let Some(user) = self.user_repository.find_by_username(username).await? else {
            info!("Login failed");
            return Err(DomainError::InvalidCredentials);
        };

        if !self.password_hasher.verify(password, user.stored_secret()) {
            info!("Login failed");
            return Err(DomainError::InvalidCredentials);
        }

        info!(username = %user.username(), "User logged in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use rstest::*;

    use super::*;
    use crate::domain::{
        error::RepositoryError,
        models::{
            credential::StoredSecret,
            user::{User, UserId},
        },
    };

    // mock repository interface
    #[derive(Clone)]
    struct MockUserRepository;

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
            match username {
                "testuser" => Ok(Some(User::reconstruct(
                    UserId::new(1),
                    "testuser".to_string(),
                    StoredSecret::new("hash:test_password".to_string()),
                    None,
                    Utc::now(),
                ))),
                "broken_db" => Err(RepositoryError::Database(sea_orm::DbErr::Custom(
                    "connection refused".to_string(),
                ))),
                _ => Ok(None),
            }
        }

        async fn create_user(
            &self,
            _username: &str,
            _stored_secret: StoredSecret,
        ) -> Result<User, RepositoryError> {
            unreachable!("login never creates users")
        }
    }

    #[derive(Clone)]
    struct MockPasswordHasher;

    impl PasswordHasher for MockPasswordHasher {
        fn hash(&self, plain_password: &str) -> StoredSecret {
            StoredSecret::new(format!("hash:{}", plain_password))
        }

        fn verify(&self, plain_password: &str, stored_secret: &StoredSecret) -> bool {
            self.hash(plain_password) == *stored_secret
        }
    }

    #[fixture]
    fn login_usecase() -> LoginUsecase<MockUserRepository, MockPasswordHasher> {
        LoginUsecase::new(MockUserRepository, MockPasswordHasher)
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_positive(login_usecase: LoginUsecase<MockUserRepository, MockPasswordHasher>) {
        let user = login_usecase.login("testuser", "test_password").await.unwrap();
        assert_eq!(user.username(), "testuser");
        assert_eq!(user.id(), UserId::new(1));
    }

    #[rstest]
    #[case("testuser", "wrong_password")]
    #[case("invalid_user", "test_password")]
    #[tokio::test]
    async fn test_login_negative(
        login_usecase: LoginUsecase<MockUserRepository, MockPasswordHasher>,
        #[case] username: &str,
        #[case] password: &str,
    ) {
        let result = login_usecase.login(username, password).await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_infrastructure_error_propagates(
        login_usecase: LoginUsecase<MockUserRepository, MockPasswordHasher>,
    ) {
        let result = login_usecase.login("broken_db", "test_password").await;
        assert!(matches!(
            result,
            Err(DomainError::Repository(RepositoryError::Database(_)))
        ));
    }
}
