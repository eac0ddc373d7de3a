use chrono::NaiveDate;
use kokoro_core::booking;
use kokoro_core::booking::error::BookingError;
use kokoro_test_helpers::schema::setup_schema;
use kokoro_test_helpers::seed::{create_test_availability, create_test_therapist, create_test_user};
use kokoro_test_helpers::{SqliteDb, TestDb};
use sea_orm::{Database, DbErr};
use std::time::Duration;
use test_log::test;
use tokio::join;

const LIMIT: Duration = Duration::from_secs(5);

#[test(tokio::test)]
async fn test_booking_a_taken_slot_fails() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let bob = create_test_user(&db, "bob", "token-bob").await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;

    let slot = "2024-08-01 10:00-11:00".to_owned();
    let session_id = booking::book_appointment(&db, LIMIT, alice, therapist, slot.clone(), None)
        .await
        .unwrap();
    assert!(session_id > 0);

    let err = booking::book_appointment(&db, LIMIT, bob, therapist, slot, None)
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::SlotAlreadyBooked));

    // A different window of the same therapist is still bookable.
    booking::book_appointment(&db, LIMIT, bob, therapist, "2024-08-01 11:00-12:00".to_owned(), None)
        .await
        .unwrap();

    Ok(())
}

#[test(tokio::test)]
async fn test_concurrent_bookings_agree_on_one_winner() -> Result<(), DbErr> {
    // File-backed so the pool can hand both attempts a real connection.
    let file = SqliteDb::new().unwrap();
    let db = Database::connect(file.db_uri().as_ref()).await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let bob = create_test_user(&db, "bob", "token-bob").await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;

    let slot = "2024-08-01 10:00-11:00".to_owned();
    let (first, second) = join!(
        booking::book_appointment(&db, LIMIT, alice, therapist, slot.clone(), None),
        booking::book_appointment(&db, LIMIT, bob, therapist, slot.clone(), None),
    );

    let winners = [&first, &second].iter().filter(|res| res.is_ok()).count();
    assert_eq!(winners, 1);
    let loser = if first.is_err() { first } else { second };
    assert!(matches!(loser.unwrap_err(), BookingError::SlotAlreadyBooked));

    Ok(())
}

#[test(tokio::test)]
async fn test_unbook_rejects_foreign_and_unknown_sessions() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let bob = create_test_user(&db, "bob", "token-bob").await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;

    let session_id =
        booking::book_appointment(&db, LIMIT, alice, therapist, "2024-08-01 10:00-11:00".to_owned(), None)
            .await
            .unwrap();

    let err = booking::unbook_session(&db, LIMIT, bob, session_id).await.unwrap_err();
    assert!(matches!(err, BookingError::NotFoundOrNotAuthorized));

    let err = booking::unbook_session(&db, LIMIT, alice, session_id + 1).await.unwrap_err();
    assert!(matches!(err, BookingError::NotFoundOrNotAuthorized));

    booking::unbook_session(&db, LIMIT, alice, session_id).await.unwrap();
    assert!(booking::user_sessions(&db, LIMIT, alice).await.unwrap().is_empty());

    Ok(())
}

#[test(tokio::test)]
async fn test_exhausted_budget_is_a_timeout() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;

    let err = booking::user_sessions(&db, Duration::ZERO, alice).await.unwrap_err();
    assert!(matches!(err, BookingError::Timeout(_)));

    Ok(())
}

#[test(tokio::test)]
async fn test_availability_of_unknown_therapist_is_an_error() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;
    let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    create_test_availability(&db, therapist, date, "10:00", "11:00").await?;

    let slots = booking::therapist_availability(&db, LIMIT, therapist).await.unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start_time, "10:00");

    let err = booking::therapist_availability(&db, LIMIT, therapist + 1).await.unwrap_err();
    assert!(matches!(err, BookingError::NoAvailability));

    Ok(())
}

#[test(tokio::test)]
async fn test_listing_subtracts_booked_slots() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;
    let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    create_test_availability(&db, therapist, date, "10:00", "11:00").await?;
    create_test_availability(&db, therapist, date, "11:00", "12:00").await?;

    booking::book_appointment(&db, LIMIT, alice, therapist, booking::slot_key(date, "10:00", "11:00"), None)
        .await
        .unwrap();

    let listing = booking::therapists_with_open_slots(&db, LIMIT).await.unwrap();
    assert_eq!(listing.len(), 1);
    let (listed, open) = &listing[0];
    assert_eq!(listed.therapist_id, therapist);
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].start_time, "11:00");

    assert_eq!(booking::booked_therapists(&db, LIMIT, alice).await.unwrap(), vec![therapist]);

    Ok(())
}
