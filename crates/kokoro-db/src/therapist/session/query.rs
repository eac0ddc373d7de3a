use kokoro_entity::therapist::session;
use kokoro_entity::therapist::session::{Entity as SessionEntity, Model as Session};
use kokoro_entity::therapist::{Entity as TherapistEntity, Model as Therapist};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn user_sessions<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<(Session, Option<Therapist>)>, DbErr> {
        SessionEntity::find()
            .find_also_related(TherapistEntity)
            .filter(session::Column::UserId.eq(user_id))
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load sessions"))
    }

    /// Every committed `(therapist_id, appointment_time)` pair. Used to
    /// subtract booked slots from configured availability.
    pub async fn booked_slots<C: ConnectionTrait>(conn: &C) -> Result<Vec<(i32, String)>, DbErr> {
        SessionEntity::find()
            .select_only()
            .column(session::Column::TherapistId)
            .column(session::Column::AppointmentTime)
            .into_tuple()
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load booked slots"))
    }

    pub async fn booked_therapists<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<i32>, DbErr> {
        SessionEntity::find()
            .select_only()
            .column(session::Column::TherapistId)
            .filter(session::Column::UserId.eq(user_id))
            .into_tuple()
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load booked therapists"),
            )
    }
}
