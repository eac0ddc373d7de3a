use chrono::Utc;
use kokoro_entity::assessment::user_answer::{ActiveModel as ActiveAnswer, Model as Answer};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSelection {
    pub question_id: i32,
    pub option_id: i32,
}

pub struct Mutation;

impl Mutation {
    /// Inserts every answer of one submission, returning the inserted rows in
    /// submission order. Meant to run inside the submission transaction so a
    /// mid-sequence failure leaves no partial answer set.
    pub async fn insert_answers<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        assessment_id: i32,
        answers: &[AnswerSelection],
    ) -> Result<Vec<Answer>, DbErr> {
        let mut inserted = Vec::with_capacity(answers.len());
        for answer in answers {
            let row = ActiveAnswer {
                answer_id: ActiveValue::NotSet,
                user_id: ActiveValue::Set(user_id),
                question_id: ActiveValue::Set(answer.question_id),
                option_id: ActiveValue::Set(answer.option_id),
                assessment_id: ActiveValue::Set(assessment_id),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %user_id, assessment_id, question_id = answer.question_id, "failed to insert answer"),
            )?;
            inserted.push(row);
        }
        Ok(inserted)
    }
}
