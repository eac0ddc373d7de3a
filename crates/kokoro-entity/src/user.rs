use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::access_tokens::Entity")]
    AccessToken,
    #[sea_orm(has_many = "super::therapist::session::Entity")]
    TherapistSession,
    #[sea_orm(has_many = "super::assessment::user_answer::Entity")]
    UserAnswer,
    #[sea_orm(has_many = "super::assessment::result::Entity")]
    AssessmentResult,
}

impl Related<super::access_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessToken.def()
    }
}

impl Related<super::therapist::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TherapistSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
