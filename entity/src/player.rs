use sea_orm::entity::prelude::*;

/// Player-side state describing whether/how a player is claimed by an agent.
///
/// `represented` and `pending_confirmation` imply a linked agent; `free_agent`
/// and `pending_invitation` imply no agent. The pairing is maintained by the
/// code paths that write both columns together, not by a check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum RepresentationStatus {
    #[sea_orm(string_value = "free_agent")]
    FreeAgent,
    #[sea_orm(string_value = "pending_confirmation")]
    PendingConfirmation,
    #[sea_orm(string_value = "pending_invitation")]
    PendingInvitation,
    #[sea_orm(string_value = "represented")]
    Represented,
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Only populated when the player self-registered; agent-entered roster
    /// rows have no login account.
    #[sea_orm(unique)]
    pub user_id: Option<i32>,
    pub agent_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub representation_status: RepresentationStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentId",
        to = "super::agent::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Agent,
    #[sea_orm(has_many = "super::agent_invitation::Entity")]
    AgentInvitation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::agent_invitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgentInvitation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
