use chrono::Utc;
use kokoro_entity::assessment::result::{ActiveModel as ActiveResult, Model as AssessmentResult};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn insert_result<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        assessment_id: i32,
        total_score: i32,
        condition: String,
    ) -> Result<AssessmentResult, DbErr> {
        ActiveResult {
            result_id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            assessment_id: ActiveValue::Set(assessment_id),
            total_score: ActiveValue::Set(total_score),
            mental_health_condition: ActiveValue::Set(condition),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(conn)
        .await
        .inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %user_id, assessment_id, "failed to insert assessment result"),
        )
    }
}
