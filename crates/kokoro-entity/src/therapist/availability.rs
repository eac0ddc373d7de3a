use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "therapist_availability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub availability_id: i32,
    pub therapist_id: i32,
    pub day_of_week: String,
    // Times are kept as plain "HH:MM" strings, the same representation the
    // appointment_time slot key is built from.
    pub start_time: String,
    pub end_time: String,
    pub is_online: bool,
    pub is_in_office: bool,
    pub availability_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::Entity",
        from = "Column::TherapistId",
        to = "super::Column::TherapistId"
    )]
    Therapist,
}

impl Related<super::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Therapist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
