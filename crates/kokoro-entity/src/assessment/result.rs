use sea_orm::entity::prelude::*;

/// One scored assessment attempt. Rows are append-only; a user's history is
/// the full sequence of their past attempts.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub result_id: i32,
    pub user_id: Uuid,
    pub assessment_id: i32,
    pub total_score: i32,
    pub mental_health_condition: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::UserId",
        to = "crate::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::Entity",
        from = "Column::AssessmentId",
        to = "super::Column::AssessmentId"
    )]
    Assessment,
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
