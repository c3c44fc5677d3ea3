use chrono::Utc;
use entity::user::{self, UserRole};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// Emails are stored lowercased so registration conflicts and invitation
    /// matching are case-insensitive.
    pub async fn create(
        &self,
        email: &str,
        password_hash: String,
        role: UserRole,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<user::Model, DbErr> {
        let user = user::ActiveModel {
            email: ActiveValue::Set(email.to_lowercase()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await
    }
}
