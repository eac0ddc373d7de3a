use sea_orm::entity::prelude::*;

/// A committed reservation of a therapist slot. The schema carries a unique
/// constraint on `(therapist_id, appointment_time)`; inserts racing for the
/// same slot are decided by the database, not by a prior read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "therapist_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub session_id: i32,
    pub user_id: Uuid,
    pub therapist_id: i32,
    /// Slot key formatted as `"<date> <start>-<end>"`.
    pub appointment_time: String,
    pub additional_info: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::Entity",
        from = "Column::TherapistId",
        to = "super::Column::TherapistId"
    )]
    Therapist,
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::UserId",
        to = "crate::user::Column::Id"
    )]
    User,
}

impl Related<super::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Therapist.def()
    }
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
