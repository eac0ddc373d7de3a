pub mod error;

use error::AssessmentError;
use kokoro_db::assessment::answer::mutation::Mutation as AnswerMutation;
use kokoro_db::assessment::option::query::Query as OptionQuery;
use kokoro_db::assessment::query::Query as AssessmentQuery;
use kokoro_db::assessment::result::mutation::Mutation as ResultMutation;
use kokoro_db::assessment::result::query::Query as ResultQuery;
use kokoro_db::util::FlattenTransactionResultExt;
use kokoro_entity::assessment::option::Model as AnswerOption;
use kokoro_entity::assessment::question::Model as Question;
use kokoro_entity::assessment::result::Model as AssessmentResult;
use kokoro_entity::assessment::user_answer::Model as Answer;
use kokoro_entity::assessment::Model as Assessment;
use sea_orm::{ConnectionTrait, TransactionTrait};
use serde_derive::Serialize;
use std::fmt;
use std::time::Duration;
use tokio::time;
use uuid::Uuid;

pub use kokoro_db::assessment::answer::mutation::AnswerSelection;

/// Discrete risk label derived from a submission's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    #[serde(rename = "Low risk")]
    LowRisk,
    #[serde(rename = "Moderate risk")]
    ModerateRisk,
    #[serde(rename = "High risk")]
    HighRisk,
    #[serde(rename = "Severe risk")]
    SevereRisk,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::LowRisk => "Low risk",
            Self::ModerateRisk => "Moderate risk",
            Self::HighRisk => "High risk",
            Self::SevereRisk => "Severe risk",
        };
        f.write_str(label)
    }
}

/// Pure, total classification of a summed score. Thresholds are evaluated in
/// ascending order, first match wins.
pub fn classify(total_score: i64) -> Condition {
    if total_score < 5 {
        Condition::LowRisk
    } else if total_score < 10 {
        Condition::ModerateRisk
    } else if total_score < 15 {
        Condition::HighRisk
    } else {
        Condition::SevereRisk
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub condition: Condition,
    pub answers: Vec<Answer>,
    pub result: AssessmentResult,
}

/// Scores one assessment attempt and persists it.
///
/// The whole attempt runs in a single transaction: option scores are
/// resolved first, every answer row is inserted, and one result row is
/// written. Either all of it commits or none of it does. A submitted option
/// id that does not exist fails the submission instead of contributing an
/// undefined amount to the total.
pub async fn submit_assessment<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    limit: Duration,
    user_id: Uuid,
    assessment_id: i32,
    answers: Vec<AnswerSelection>,
) -> Result<Submission, AssessmentError> {
    if answers.is_empty() {
        return Err(AssessmentError::InvalidSubmission);
    }

    let transaction = conn.transaction::<_, Submission, AssessmentError>(|txn| {
        Box::pin(async move {
            let option_ids: Vec<i32> = answers.iter().map(|answer| answer.option_id).collect();
            let scores = OptionQuery::scores_by_id(txn, &option_ids).await?;

            let mut total_score: i64 = 0;
            for answer in &answers {
                let Some(score) = scores.get(&answer.option_id) else {
                    tracing::warn!(%user_id, assessment_id, option_id = answer.option_id, "submission references unknown option");
                    return Err(AssessmentError::UnknownOption(answer.option_id));
                };
                total_score += i64::from(*score);
            }
            let condition = classify(total_score);
            let total_score = i32::try_from(total_score).map_err(|_| AssessmentError::InvalidSubmission)?;

            let inserted = AnswerMutation::insert_answers(txn, user_id, assessment_id, &answers).await?;
            let result =
                ResultMutation::insert_result(txn, user_id, assessment_id, total_score, condition.to_string()).await?;

            tracing::debug!(%user_id, assessment_id, total_score, %condition, "scored assessment submission");
            Ok(Submission {
                condition,
                answers: inserted,
                result,
            })
        })
    });

    time::timeout(limit, transaction).await?.flatten_res()
}

pub async fn list_assessments<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
) -> Result<Vec<Assessment>, AssessmentError> {
    Ok(time::timeout(limit, AssessmentQuery::load_assessments(conn)).await??)
}

pub async fn assessment_questions<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
    assessment_id: i32,
) -> Result<Vec<(Question, Vec<AnswerOption>)>, AssessmentError> {
    Ok(time::timeout(limit, AssessmentQuery::questions_with_options(conn, assessment_id)).await??)
}

pub async fn user_results<C: ConnectionTrait>(
    conn: &C,
    limit: Duration,
    user_id: Uuid,
) -> Result<Vec<AssessmentResult>, AssessmentError> {
    Ok(time::timeout(limit, ResultQuery::user_results(conn, user_id)).await??)
}

#[cfg(test)]
mod tests {
    use super::{classify, Condition};

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify(0), Condition::LowRisk);
        assert_eq!(classify(4), Condition::LowRisk);
        assert_eq!(classify(5), Condition::ModerateRisk);
        assert_eq!(classify(9), Condition::ModerateRisk);
        assert_eq!(classify(10), Condition::HighRisk);
        assert_eq!(classify(14), Condition::HighRisk);
        assert_eq!(classify(15), Condition::SevereRisk);
        assert_eq!(classify(i64::MAX), Condition::SevereRisk);
        assert_eq!(classify(-3), Condition::LowRisk);
    }

    #[test]
    fn condition_labels() {
        assert_eq!(Condition::LowRisk.to_string(), "Low risk");
        assert_eq!(
            serde_json::to_value(Condition::ModerateRisk).unwrap(),
            serde_json::json!("Moderate risk")
        );
    }
}
