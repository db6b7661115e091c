use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::credential::StoredSecret;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(i32);
impl UserId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: String,
    stored_secret: StoredSecret,
    last_login: Option<DateTime<Utc>>,
    date_joined: DateTime<Utc>,
}

impl User {
    pub fn reconstruct(
        id: UserId,
        username: String,
        stored_secret: StoredSecret,
        last_login: Option<DateTime<Utc>>,
        date_joined: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            stored_secret,
            last_login,
            date_joined,
        }
    }

    // getterのみ提供
    pub fn id(&self) -> UserId {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn stored_secret(&self) -> &StoredSecret {
        &self.stored_secret
    }
    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        self.last_login
    }
    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self::reconstruct(
            UserId::new(model.id),
            model.username,
            StoredSecret::new(model.stored_secret),
            model.last_login,
            model.date_joined,
        )
    }
}
