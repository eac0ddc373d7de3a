use kokoro_db::therapist::session::mutation::Mutation as SessionMutation;
use kokoro_db::therapist::session::query::Query as SessionQuery;
use kokoro_test_helpers::schema::setup_schema;
use kokoro_test_helpers::seed::{create_test_therapist, create_test_user};
use sea_orm::{Database, DbErr};
use test_log::test;

const SLOT: &str = "2024-08-01 10:00-11:00";

#[test(tokio::test)]
async fn test_second_booking_of_a_slot_writes_nothing() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let bob = create_test_user(&db, "bob", "token-bob").await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;

    let first = SessionMutation::book(&db, alice, therapist, SLOT.to_owned(), None).await?;
    assert!(first.is_some());

    let second = SessionMutation::book(&db, bob, therapist, SLOT.to_owned(), None).await?;
    assert_eq!(second, None);

    let slots = SessionQuery::booked_slots(&db).await?;
    assert_eq!(slots, vec![(therapist, SLOT.to_owned())]);

    Ok(())
}

#[test(tokio::test)]
async fn test_distinct_slots_and_therapists_do_not_conflict() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let sato = create_test_therapist(&db, "Dr. Sato").await?;
    let tanaka = create_test_therapist(&db, "Dr. Tanaka").await?;

    assert!(SessionMutation::book(&db, alice, sato, SLOT.to_owned(), None).await?.is_some());
    assert!(
        SessionMutation::book(&db, alice, sato, "2024-08-01 11:00-12:00".to_owned(), None)
            .await?
            .is_some()
    );
    // The same window with another therapist is a different slot.
    assert!(
        SessionMutation::book(&db, alice, tanaka, SLOT.to_owned(), None)
            .await?
            .is_some()
    );

    Ok(())
}

#[test(tokio::test)]
async fn test_unbook_is_scoped_to_the_owner() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let bob = create_test_user(&db, "bob", "token-bob").await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;

    let session_id = SessionMutation::book(&db, alice, therapist, SLOT.to_owned(), None)
        .await?
        .unwrap();

    assert_eq!(SessionMutation::unbook(&db, bob, session_id).await?, 0);
    assert_eq!(SessionQuery::user_sessions(&db, alice).await?.len(), 1);

    assert_eq!(SessionMutation::unbook(&db, alice, session_id).await?, 1);

    // The slot is free again after the withdrawal.
    assert!(
        SessionMutation::book(&db, bob, therapist, SLOT.to_owned(), None)
            .await?
            .is_some()
    );

    Ok(())
}

#[test(tokio::test)]
async fn test_user_sessions_carry_the_therapist() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let therapist = create_test_therapist(&db, "Dr. Sato").await?;

    SessionMutation::book(&db, alice, therapist, SLOT.to_owned(), Some("first visit".to_owned())).await?;

    let sessions = SessionQuery::user_sessions(&db, alice).await?;
    assert_eq!(sessions.len(), 1);
    let (session, joined) = &sessions[0];
    assert_eq!(session.appointment_time, SLOT);
    assert_eq!(session.additional_info.as_deref(), Some("first visit"));
    assert_eq!(joined.as_ref().map(|therapist| therapist.name.as_str()), Some("Dr. Sato"));

    assert_eq!(SessionQuery::booked_therapists(&db, alice).await?, vec![therapist]);

    Ok(())
}
