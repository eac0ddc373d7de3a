use kokoro_entity::therapist::{Entity as TherapistEntity, Model as Therapist};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn load_therapists<C: ConnectionTrait>(conn: &C) -> Result<Vec<Therapist>, DbErr> {
        TherapistEntity::find()
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load therapists"))
    }
}
