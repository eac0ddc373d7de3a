pub mod error;

use chrono::NaiveDate;
use error::BookingError;
use futures_util::try_join;
use kokoro_db::therapist;
use kokoro_db::therapist::availability::query::Query as AvailabilityQuery;
use kokoro_db::therapist::session::mutation::Mutation as SessionMutation;
use kokoro_db::therapist::session::query::Query as SessionQuery;
use kokoro_entity::therapist::availability::Model as Availability;
use kokoro_entity::therapist::session::Model as Session;
use kokoro_entity::therapist::Model as Therapist;
use sea_orm::ConnectionTrait;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time;
use uuid::Uuid;

/// The string under which a bookable window is committed:
/// `"<date> <start>-<end>"`, e.g. `"2024-08-01 10:00-11:00"`.
pub fn slot_key(date: NaiveDate, start_time: &str, end_time: &str) -> String {
    format!("{date} {start_time}-{end_time}")
}

/// Commits a reservation for `(therapist_id, appointment_time)` and returns
/// the generated session id. The decision is a single conditional insert
/// against the slot uniqueness constraint, so of two concurrent attempts for
/// the same slot exactly one succeeds, regardless of how many server
/// processes are running.
pub async fn book_appointment<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
    user_id: Uuid,
    therapist_id: i32,
    appointment_time: String,
    additional_info: Option<String>,
) -> Result<i32, BookingError> {
    let session_id = time::timeout(
        limit,
        SessionMutation::book(conn, user_id, therapist_id, appointment_time.clone(), additional_info),
    )
    .await??;

    match session_id {
        Some(session_id) => {
            tracing::debug!(%user_id, therapist_id, %appointment_time, session_id, "booked session");
            Ok(session_id)
        }
        None => Err(BookingError::SlotAlreadyBooked),
    }
}

/// Withdraws a booked session owned by `user_id`. A session that does not
/// exist and a session owned by someone else are indistinguishable to the
/// caller; the distinction is only visible in the logs.
pub async fn unbook_session<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
    user_id: Uuid,
    session_id: i32,
) -> Result<(), BookingError> {
    let affected = time::timeout(limit, SessionMutation::unbook(conn, user_id, session_id)).await??;
    if affected == 0 {
        tracing::info!(%user_id, session_id, "unbook matched nothing (unknown session or foreign owner)");
        return Err(BookingError::NotFoundOrNotAuthorized);
    }
    tracing::debug!(%user_id, session_id, "unbooked session");
    Ok(())
}

/// All configured availability rows of one therapist. Booked slots are not
/// subtracted here; `therapists_with_open_slots` does that for the listing.
pub async fn therapist_availability<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
    therapist_id: i32,
) -> Result<Vec<Availability>, BookingError> {
    let rows = time::timeout(limit, AvailabilityQuery::for_therapist(conn, therapist_id)).await??;
    if rows.is_empty() {
        return Err(BookingError::NoAvailability);
    }
    Ok(rows)
}

pub async fn user_sessions<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
    user_id: Uuid,
) -> Result<Vec<(Session, Option<Therapist>)>, BookingError> {
    Ok(time::timeout(limit, SessionQuery::user_sessions(conn, user_id)).await??)
}

pub async fn booked_therapists<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
    user_id: Uuid,
) -> Result<Vec<i32>, BookingError> {
    Ok(time::timeout(limit, SessionQuery::booked_therapists(conn, user_id)).await??)
}

/// Every therapist together with the availability rows whose slot is not yet
/// booked. O(availability x booked) per therapist, fine for the small
/// per-therapist cardinalities involved.
pub async fn therapists_with_open_slots<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
) -> Result<Vec<(Therapist, Vec<Availability>)>, BookingError> {
    let (therapists, availability, booked) = time::timeout(
        limit,
        async {
            try_join!(
                therapist::query::Query::load_therapists(conn),
                AvailabilityQuery::load_all(conn),
                SessionQuery::booked_slots(conn),
            )
        },
    )
    .await??;

    let booked: HashSet<(i32, String)> = booked.into_iter().collect();

    let res = therapists
        .into_iter()
        .map(|therapist| {
            let open = availability
                .iter()
                .filter(|slot| {
                    slot.therapist_id == therapist.therapist_id
                        && !booked.contains(&(
                            therapist.therapist_id,
                            slot_key(slot.availability_date, &slot.start_time, &slot.end_time),
                        ))
                })
                .cloned()
                .collect();
            (therapist, open)
        })
        .collect();
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::slot_key;
    use chrono::NaiveDate;

    #[test]
    fn slot_key_matches_committed_format() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert_eq!(slot_key(date, "10:00", "11:00"), "2024-08-01 10:00-11:00");
    }
}
