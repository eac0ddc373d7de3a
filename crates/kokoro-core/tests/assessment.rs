use kokoro_core::assessment;
use kokoro_core::assessment::error::AssessmentError;
use kokoro_core::assessment::{AnswerSelection, Condition};
use kokoro_entity::assessment::{result, user_answer};
use kokoro_test_helpers::schema::setup_schema;
use kokoro_test_helpers::seed::{create_test_assessment, create_test_user};
use sea_orm::{Database, DbErr, EntityTrait};
use std::time::Duration;
use test_log::test;

const LIMIT: Duration = Duration::from_secs(5);

#[test(tokio::test)]
async fn test_submission_is_scored_and_persisted() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let (assessment_id, questions) = create_test_assessment(
        &db,
        "PHQ-9",
        &[
            ("Little interest in doing things", &[("Never", 3)]),
            ("Feeling down", &[("Nearly every day", 4)]),
        ],
    )
    .await?;

    let answers = vec![
        AnswerSelection {
            question_id: questions[0].question_id,
            option_id: questions[0].option_ids[0],
        },
        AnswerSelection {
            question_id: questions[1].question_id,
            option_id: questions[1].option_ids[0],
        },
    ];
    let submission = assessment::submit_assessment(&db, LIMIT, alice, assessment_id, answers)
        .await
        .unwrap();

    assert_eq!(submission.condition, Condition::ModerateRisk);
    assert_eq!(submission.result.total_score, 7);
    assert_eq!(submission.result.mental_health_condition, "Moderate risk");
    assert_eq!(submission.answers.len(), 2);
    assert_eq!(submission.answers[0].question_id, questions[0].question_id);

    assert_eq!(user_answer::Entity::find().all(&db).await?.len(), 2);
    assert_eq!(result::Entity::find().all(&db).await?.len(), 1);

    Ok(())
}

#[test(tokio::test)]
async fn test_empty_submission_is_rejected() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let (assessment_id, _) = create_test_assessment(&db, "PHQ-9", &[("q", &[("a", 1)])]).await?;

    let err = assessment::submit_assessment(&db, LIMIT, alice, assessment_id, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AssessmentError::InvalidSubmission));

    assert!(user_answer::Entity::find().all(&db).await?.is_empty());
    assert!(result::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[test(tokio::test)]
async fn test_unknown_option_rolls_the_whole_submission_back() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let (assessment_id, questions) = create_test_assessment(&db, "PHQ-9", &[("q", &[("a", 2)])]).await?;

    let answers = vec![
        AnswerSelection {
            question_id: questions[0].question_id,
            option_id: questions[0].option_ids[0],
        },
        AnswerSelection {
            question_id: questions[0].question_id,
            option_id: 9999,
        },
    ];
    let err = assessment::submit_assessment(&db, LIMIT, alice, assessment_id, answers)
        .await
        .unwrap_err();
    assert!(matches!(err, AssessmentError::UnknownOption(9999)));

    // The valid answer must not survive the aborted transaction.
    assert!(user_answer::Entity::find().all(&db).await?.is_empty());
    assert!(result::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[test(tokio::test)]
async fn test_results_are_listed_per_user() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let alice = create_test_user(&db, "alice", "token-alice").await?;
    let bob = create_test_user(&db, "bob", "token-bob").await?;
    let (assessment_id, questions) = create_test_assessment(&db, "PHQ-9", &[("q", &[("a", 1)])]).await?;

    let answers = vec![AnswerSelection {
        question_id: questions[0].question_id,
        option_id: questions[0].option_ids[0],
    }];
    assessment::submit_assessment(&db, LIMIT, alice, assessment_id, answers.clone())
        .await
        .unwrap();
    assessment::submit_assessment(&db, LIMIT, alice, assessment_id, answers)
        .await
        .unwrap();

    let results = assessment::user_results(&db, LIMIT, alice).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|result| result.total_score == 1));

    assert!(assessment::user_results(&db, LIMIT, bob).await.unwrap().is_empty());

    // Results hang off their assessment.
    let grouped = kokoro_entity::assessment::Entity::find()
        .find_with_related(result::Entity)
        .all(&db)
        .await?;
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].1.len(), 2);

    Ok(())
}

#[test(tokio::test)]
async fn test_exhausted_budget_is_a_timeout() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;

    let err = assessment::list_assessments(&db, Duration::ZERO).await.unwrap_err();
    assert!(matches!(err, AssessmentError::Timeout(_)));

    Ok(())
}

#[test(tokio::test)]
async fn test_questions_are_listed_with_their_options() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    let (assessment_id, _) = create_test_assessment(
        &db,
        "GAD-7",
        &[("Feeling nervous", &[("Not at all", 0), ("Several days", 1)])],
    )
    .await?;

    let assessments = assessment::list_assessments(&db, LIMIT).await.unwrap();
    assert_eq!(assessments.len(), 1);
    assert_eq!(assessments[0].name, "GAD-7");

    let questions = assessment::assessment_questions(&db, LIMIT, assessment_id).await.unwrap();
    assert_eq!(questions.len(), 1);
    let (question, options) = &questions[0];
    assert_eq!(question.question_text, "Feeling nervous");
    assert_eq!(options.len(), 2);

    Ok(())
}
