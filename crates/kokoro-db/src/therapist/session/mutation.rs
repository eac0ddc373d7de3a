use chrono::Utc;
use kokoro_entity::therapist::session;
use kokoro_entity::therapist::session::{ActiveModel as ActiveSession, Entity as SessionEntity};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TryInsertResult};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Atomic conditional insert of a booked session. The unique constraint
    /// on `(therapist_id, appointment_time)` decides slot conflicts; a
    /// conflicted insert returns `Ok(None)` and writes nothing.
    pub async fn book<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        therapist_id: i32,
        appointment_time: String,
        additional_info: Option<String>,
    ) -> Result<Option<i32>, DbErr> {
        let booked = ActiveSession {
            session_id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            therapist_id: ActiveValue::Set(therapist_id),
            appointment_time: ActiveValue::Set(appointment_time.clone()),
            additional_info: ActiveValue::Set(additional_info),
            created_at: ActiveValue::Set(Utc::now()),
        };

        let on_conflict = OnConflict::columns([session::Column::TherapistId, session::Column::AppointmentTime])
            .do_nothing()
            .to_owned();

        let res = SessionEntity::insert(booked)
            .on_conflict(on_conflict)
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %user_id, therapist_id, %appointment_time, "failed to book session"),
            )?;

        match res {
            TryInsertResult::Inserted(res) => Ok(Some(res.last_insert_id)),
            TryInsertResult::Conflicted | TryInsertResult::Empty => Ok(None),
        }
    }

    /// Deletes the session only when it belongs to `user_id`; returns the
    /// number of affected rows. Ownership is part of the delete predicate.
    pub async fn unbook<C: ConnectionTrait>(conn: &C, user_id: Uuid, session_id: i32) -> Result<u64, DbErr> {
        let res = SessionEntity::delete_many()
            .filter(session::Column::SessionId.eq(session_id))
            .filter(session::Column::UserId.eq(user_id))
            .exec(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %user_id, session_id, "failed to unbook session"),
            )?;
        Ok(res.rows_affected)
    }
}
