use kokoro_entity::therapist::availability;
use kokoro_entity::therapist::availability::{Entity as AvailabilityEntity, Model as Availability};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn for_therapist<C: ConnectionTrait>(conn: &C, therapist_id: i32) -> Result<Vec<Availability>, DbErr> {
        AvailabilityEntity::find()
            .filter(availability::Column::TherapistId.eq(therapist_id))
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, therapist_id, "failed to load availability"),
            )
    }

    pub async fn load_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Availability>, DbErr> {
        AvailabilityEntity::find()
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load availability"))
    }
}
