use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, TransactionTrait,
};
use tracing::{debug, info};

use crate::domain::{
    error::RepositoryError,
    models::{credential::StoredSecret, user::User},
    repositories::user_repository::UserRepository,
};
use entity::users;

#[derive(Clone)]
pub struct SqliteUserRepository {
    db: DatabaseConnection,
}

impl SqliteUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        debug!(username = %username, "Retrieving user by username");

        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(user.map(User::from))
    }

    async fn create_user(
        &self,
        username: &str,
        stored_secret: StoredSecret,
    ) -> Result<User, RepositoryError> {
        // Begin transaction
        let txn = self.db.begin().await?;

        let user_model = users::ActiveModel {
            username: Set(username.to_string()),
            stored_secret: Set(stored_secret.into_inner()),
            last_login: Set(None),
            date_joined: Set(Utc::now()),
            ..Default::default()
        };

        let inserted = match user_model.insert(&txn).await {
            Ok(model) => model,
            Err(err) => {
                txn.rollback().await?;
                if is_unique_violation(&err) {
                    info!(username = %username, "Registration rejected, username taken");
                    return Err(RepositoryError::AlreadyExists(username.to_string()));
                }
                return Err(err.into());
            }
        };

        // Commit transaction
        txn.commit().await?;

        info!(username = %username, user_id = inserted.id, "User created");
        Ok(User::from(inserted))
    }
}
