pub(crate) mod error;

use crate::AppConfig;
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{Router, delete, get, post};
use axum::{Extension, Json};
use chrono::NaiveDate;
use error::TherapistError;
use http::StatusCode;
use kokoro_core::booking;
use kokoro_entity::therapist;
use kokoro_entity::therapist::availability::Model as Availability;
use kokoro_entity::therapist::session::Model as Session;
use sea_orm::DatabaseConnection;
use sea_orm::prelude::DateTimeUtc;
use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;

pub(crate) fn create_router() -> Router {
    Router::new()
        .route("/therapists", get(list_therapists))
        .route("/therapist-availability/{therapist_id}", get(get_availability))
        .route("/book-appointment", post(book_appointment))
        .route("/user-sessions", get(list_user_sessions))
        .route("/user-sessions/{session_id}", delete(unbook_session))
        .route("/user-booked-therapists", get(list_booked_therapists))
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AvailabilitySlot {
    pub(crate) availability_date: NaiveDate,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) day_of_week: String,
    pub(crate) is_online: bool,
    pub(crate) is_in_office: bool,
}

impl From<Availability> for AvailabilitySlot {
    fn from(slot: Availability) -> Self {
        Self {
            availability_date: slot.availability_date,
            start_time: slot.start_time,
            end_time: slot.end_time,
            day_of_week: slot.day_of_week,
            is_online: slot.is_online,
            is_in_office: slot.is_in_office,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct TherapistResponse {
    pub(crate) therapist_id: i32,
    pub(crate) name: String,
    pub(crate) specialization: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) virtual_available: bool,
    pub(crate) in_person_available: bool,
    pub(crate) image_url: Option<String>,
    pub(crate) about: Option<String>,
    #[schema(value_type = String)]
    pub(crate) created_at: DateTimeUtc,
    pub(crate) availability: Vec<AvailabilitySlot>,
}

impl From<(therapist::Model, Vec<Availability>)> for TherapistResponse {
    fn from((therapist, availability): (therapist::Model, Vec<Availability>)) -> Self {
        Self {
            therapist_id: therapist.therapist_id,
            name: therapist.name,
            specialization: therapist.specialization,
            location: therapist.location,
            virtual_available: therapist.virtual_available,
            in_person_available: therapist.in_person_available,
            image_url: therapist.image_url,
            about: therapist.about,
            created_at: therapist.created_at,
            availability: availability.into_iter().map(AvailabilitySlot::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct BookAppointmentRequest {
    pub(crate) therapist_id: i32,
    pub(crate) appointment_time: String,
    pub(crate) additional_info: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct BookAppointmentResponse {
    pub(crate) message: &'static str,
    pub(crate) session_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub(crate) message: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserSessionResponse {
    pub(crate) session_id: i32,
    pub(crate) therapist_id: i32,
    pub(crate) appointment_time: String,
    pub(crate) additional_info: Option<String>,
    #[schema(value_type = String)]
    pub(crate) created_at: DateTimeUtc,
    pub(crate) therapist_name: Option<String>,
    pub(crate) image_url: Option<String>,
}

impl From<(Session, Option<therapist::Model>)> for UserSessionResponse {
    fn from((session, therapist): (Session, Option<therapist::Model>)) -> Self {
        let (therapist_name, image_url) = therapist
            .map(|therapist| (Some(therapist.name), therapist.image_url))
            .unwrap_or_default();
        Self {
            session_id: session.session_id,
            therapist_id: session.therapist_id,
            appointment_time: session.appointment_time,
            additional_info: session.additional_info,
            created_at: session.created_at,
            therapist_name,
            image_url,
        }
    }
}

#[utoipa::path(
    get,
    path = "/therapists",
    responses(
        (status = OK, body = [TherapistResponse], description = "All therapists, each with their still-unbooked availability"),
    ),
    tag = "therapists"
)]
pub(crate) async fn list_therapists(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
) -> Result<impl IntoResponse, TherapistError> {
    let therapists = booking::therapists_with_open_slots(&conn, config.persistence_timeout()).await?;
    let response: Vec<_> = therapists.into_iter().map(TherapistResponse::from).collect();
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/therapist-availability/{therapist_id}",
    responses(
        (status = OK, body = [AvailabilitySlot], description = "Configured availability of one therapist"),
        (status = NOT_FOUND, description = "No availability for the selected therapist"),
    ),
    params(
        ("therapist_id" = i32, Path, description = "The therapist whose availability should be listed"),
    ),
    tag = "therapists"
)]
pub(crate) async fn get_availability(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    Path(therapist_id): Path<i32>,
) -> Result<impl IntoResponse, TherapistError> {
    let slots = booking::therapist_availability(&conn, config.persistence_timeout(), therapist_id).await?;
    let response: Vec<_> = slots.into_iter().map(AvailabilitySlot::from).collect();
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/book-appointment",
    request_body = BookAppointmentRequest,
    responses(
        (status = CREATED, body = BookAppointmentResponse, description = "Appointment committed"),
        (status = BAD_REQUEST, description = "Time slot already booked"),
    ),
    tag = "therapists",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn book_appointment(
    ExtractUserId(user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    Json(body): Json<BookAppointmentRequest>,
) -> Result<impl IntoResponse, TherapistError> {
    let session_id = booking::book_appointment(
        &conn,
        config.persistence_timeout(),
        user,
        body.therapist_id,
        body.appointment_time,
        body.additional_info,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookAppointmentResponse {
            message: "Appointment booked successfully",
            session_id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/user-sessions",
    responses(
        (status = OK, body = [UserSessionResponse], description = "The caller's booked sessions"),
    ),
    tag = "therapists",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_user_sessions(
    ExtractUserId(user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
) -> Result<impl IntoResponse, TherapistError> {
    let sessions = booking::user_sessions(&conn, config.persistence_timeout(), user).await?;
    let response: Vec<_> = sessions.into_iter().map(UserSessionResponse::from).collect();
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/user-sessions/{session_id}",
    responses(
        (status = OK, body = MessageResponse, description = "Session withdrawn"),
        (status = NOT_FOUND, description = "Session not found or not authorized"),
    ),
    params(
        ("session_id" = i32, Path, description = "The booked session to withdraw"),
    ),
    tag = "therapists",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn unbook_session(
    ExtractUserId(user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, TherapistError> {
    booking::unbook_session(&conn, config.persistence_timeout(), user, session_id).await?;
    Ok(Json(MessageResponse {
        message: "Session unbooked successfully",
    }))
}

#[utoipa::path(
    get,
    path = "/user-booked-therapists",
    responses(
        (status = OK, body = [i32], description = "Ids of therapists the caller has booked"),
    ),
    tag = "therapists",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_booked_therapists(
    ExtractUserId(user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
) -> Result<impl IntoResponse, TherapistError> {
    let therapists = booking::booked_therapists(&conn, config.persistence_timeout(), user).await?;
    Ok(Json(therapists))
}
