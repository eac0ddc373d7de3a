pub mod availability;
pub mod session;

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "therapists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub therapist_id: i32,
    pub name: String,
    pub specialization: Option<String>,
    pub location: Option<String>,
    pub virtual_available: bool,
    pub in_person_available: bool,
    pub image_url: Option<String>,
    pub about: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "availability::Entity")]
    Availability,
    #[sea_orm(has_many = "session::Entity")]
    Session,
}

impl Related<availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Availability.def()
    }
}

impl Related<session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
