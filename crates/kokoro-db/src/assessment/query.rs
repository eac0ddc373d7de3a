use kokoro_entity::assessment::option::Model as AnswerOption;
use kokoro_entity::assessment::question::Model as Question;
use kokoro_entity::assessment::{Entity as AssessmentEntity, Model as Assessment, question};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn load_assessments<C: ConnectionTrait>(conn: &C) -> Result<Vec<Assessment>, DbErr> {
        AssessmentEntity::find()
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load assessments"))
    }

    /// The questions of one assessment, each paired with its options.
    pub async fn questions_with_options<C: ConnectionTrait>(
        conn: &C,
        assessment_id: i32,
    ) -> Result<Vec<(Question, Vec<AnswerOption>)>, DbErr> {
        question::Entity::find()
            .filter(question::Column::AssessmentId.eq(assessment_id))
            .find_with_related(kokoro_entity::assessment::option::Entity)
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, assessment_id, "failed to load questions"),
            )
    }
}
