pub(crate) mod error;

use crate::AppConfig;
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::{Router, get, post};
use axum::{Extension, Json};
use error::AssessmentRouteError;
use kokoro_core::assessment;
use kokoro_core::assessment::{AnswerSelection, Condition};
use kokoro_entity::assessment::Model as Assessment;
use kokoro_entity::assessment::option::Model as AnswerOption;
use kokoro_entity::assessment::question::Model as Question;
use kokoro_entity::assessment::result::Model as AssessmentResult;
use kokoro_entity::assessment::user_answer::Model as Answer;
use sea_orm::DatabaseConnection;
use sea_orm::prelude::DateTimeUtc;
use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;

pub(crate) fn create_router() -> Router {
    Router::new()
        .route("/assessments", get(list_assessments))
        .route("/assessments/{assessment_id}", get(get_assessment))
        .route("/submit-assessment", post(submit_assessment))
        .route("/assessment-results", get(list_results))
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AssessmentSummary {
    pub(crate) assessment_id: i32,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
}

impl From<Assessment> for AssessmentSummary {
    fn from(assessment: Assessment) -> Self {
        Self {
            assessment_id: assessment.assessment_id,
            name: assessment.name,
            description: assessment.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct OptionResponse {
    pub(crate) option_id: i32,
    pub(crate) question_id: i32,
    pub(crate) option_text: String,
    pub(crate) score: i32,
}

impl From<AnswerOption> for OptionResponse {
    fn from(option: AnswerOption) -> Self {
        Self {
            option_id: option.option_id,
            question_id: option.question_id,
            option_text: option.option_text,
            score: option.score,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct QuestionWithOptions {
    pub(crate) question_id: i32,
    pub(crate) assessment_id: i32,
    pub(crate) question_text: String,
    pub(crate) options: Vec<OptionResponse>,
}

impl From<(Question, Vec<AnswerOption>)> for QuestionWithOptions {
    fn from((question, options): (Question, Vec<AnswerOption>)) -> Self {
        Self {
            question_id: question.question_id,
            assessment_id: question.assessment_id,
            question_text: question.question_text,
            options: options.into_iter().map(OptionResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AssessmentDetailResponse {
    pub(crate) questions: Vec<QuestionWithOptions>,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub(crate) struct AnswerRequest {
    pub(crate) question_id: i32,
    pub(crate) option_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SubmitAssessmentRequest {
    pub(crate) answers: Vec<AnswerRequest>,
    pub(crate) assessment_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AnswerResponse {
    pub(crate) answer_id: i32,
    pub(crate) question_id: i32,
    pub(crate) option_id: i32,
    pub(crate) assessment_id: i32,
    #[schema(value_type = String)]
    pub(crate) created_at: DateTimeUtc,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer_id: answer.answer_id,
            question_id: answer.question_id,
            option_id: answer.option_id,
            assessment_id: answer.assessment_id,
            created_at: answer.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ResultResponse {
    pub(crate) result_id: i32,
    pub(crate) assessment_id: i32,
    pub(crate) total_score: i32,
    pub(crate) mental_health_condition: String,
    #[schema(value_type = String)]
    pub(crate) created_at: DateTimeUtc,
}

impl From<AssessmentResult> for ResultResponse {
    fn from(result: AssessmentResult) -> Self {
        Self {
            result_id: result.result_id,
            assessment_id: result.assessment_id,
            total_score: result.total_score,
            mental_health_condition: result.mental_health_condition,
            created_at: result.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SubmitAssessmentResponse {
    pub(crate) message: &'static str,
    #[schema(value_type = String)]
    pub(crate) condition: Condition,
    #[serde(rename = "answersResults")]
    pub(crate) answers_results: Vec<AnswerResponse>,
    pub(crate) result: ResultResponse,
}

#[utoipa::path(
    get,
    path = "/assessments",
    responses(
        (status = OK, body = [AssessmentSummary], description = "All available assessments"),
    ),
    tag = "assessments",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_assessments(
    ExtractUserId(_user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
) -> Result<impl IntoResponse, AssessmentRouteError> {
    let assessments = assessment::list_assessments(&conn, config.persistence_timeout()).await?;
    let response: Vec<_> = assessments.into_iter().map(AssessmentSummary::from).collect();
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/assessments/{assessment_id}",
    responses(
        (status = OK, body = AssessmentDetailResponse, description = "The assessment's questions with their scored options"),
    ),
    params(
        ("assessment_id" = i32, Path, description = "The assessment to load"),
    ),
    tag = "assessments",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_assessment(
    ExtractUserId(_user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    Path(assessment_id): Path<i32>,
) -> Result<impl IntoResponse, AssessmentRouteError> {
    let questions = assessment::assessment_questions(&conn, config.persistence_timeout(), assessment_id).await?;
    let questions = questions.into_iter().map(QuestionWithOptions::from).collect();
    Ok(Json(AssessmentDetailResponse { questions }))
}

#[utoipa::path(
    post,
    path = "/submit-assessment",
    request_body = SubmitAssessmentRequest,
    responses(
        (status = OK, body = SubmitAssessmentResponse, description = "Answers persisted and scored"),
        (status = BAD_REQUEST, description = "Invalid input format"),
    ),
    tag = "assessments",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn submit_assessment(
    ExtractUserId(user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    body: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssessmentRouteError> {
    // A body that is not `{ answers: [...], assessment_id }` never reaches
    // the scorer.
    let Json(body) = body.map_err(|_| AssessmentRouteError::InvalidBody)?;

    let answers: Vec<AnswerSelection> = body
        .answers
        .iter()
        .map(|answer| AnswerSelection {
            question_id: answer.question_id,
            option_id: answer.option_id,
        })
        .collect();

    let submission =
        assessment::submit_assessment(&conn, config.persistence_timeout(), user, body.assessment_id, answers).await?;

    Ok(Json(SubmitAssessmentResponse {
        message: "Answers submitted successfully",
        condition: submission.condition,
        answers_results: submission.answers.into_iter().map(AnswerResponse::from).collect(),
        result: ResultResponse::from(submission.result),
    }))
}

#[utoipa::path(
    get,
    path = "/assessment-results",
    responses(
        (status = OK, body = [ResultResponse], description = "The caller's past assessment results, newest first"),
    ),
    tag = "assessments",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_results(
    ExtractUserId(user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
) -> Result<impl IntoResponse, AssessmentRouteError> {
    let results = assessment::user_results(&conn, config.persistence_timeout(), user).await?;
    let response: Vec<_> = results.into_iter().map(ResultResponse::from).collect();
    Ok(Json(response))
}
