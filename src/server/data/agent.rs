use chrono::Utc;
use entity::agent;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct AgentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AgentRepository<'a, C> {
    /// Creates a new instance of [`AgentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        agency_name: String,
        slug: String,
    ) -> Result<agent::Model, DbErr> {
        let agent = agent::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            agency_name: ActiveValue::Set(agency_name),
            slug: ActiveValue::Set(slug),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        agent.insert(self.db).await
    }

    pub async fn get_by_id(&self, agent_id: i32) -> Result<Option<agent::Model>, DbErr> {
        entity::prelude::Agent::find_by_id(agent_id).one(self.db).await
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<agent::Model>, DbErr> {
        entity::prelude::Agent::find()
            .filter(agent::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let existing = entity::prelude::Agent::find()
            .filter(agent::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }
}
