use kokoro_db::assessment::option::query::Query as OptionQuery;
use kokoro_db::user::query::Query as UserQuery;
use kokoro_test_helpers::schema::setup_schema;
use kokoro_test_helpers::seed::{create_test_assessment, create_test_user};
use sea_orm::{Database, DbErr};
use test_log::test;

#[test(tokio::test)]
async fn test_scores_by_id_skips_unknown_ids() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let (_, questions) = create_test_assessment(
        &db,
        "PHQ-9",
        &[("Feeling down", &[("Not at all", 0), ("Nearly every day", 3)])],
    )
    .await?;

    let ids = [questions[0].option_ids[0], questions[0].option_ids[1], 9999];
    let scores = OptionQuery::scores_by_id(&db, &ids).await?;

    assert_eq!(scores.len(), 2);
    assert_eq!(scores.get(&questions[0].option_ids[0]), Some(&0));
    assert_eq!(scores.get(&questions[0].option_ids[1]), Some(&3));
    // An id missing from the map is the caller's signal, not a zero.
    assert_eq!(scores.get(&9999), None);

    Ok(())
}

#[test(tokio::test)]
async fn test_find_by_token_resolves_the_owner() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    create_test_user(&db, "bob", "token-bob").await?;

    let user = UserQuery::find_by_token(&db, "token-alice").await?;
    assert_eq!(user.map(|user| user.id), Some(alice));

    assert_eq!(UserQuery::find_by_token(&db, "token-unknown").await?, None);

    Ok(())
}
