use super::{assessments, status, therapists};
use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        status::get_status,
        therapists::list_therapists,
        therapists::get_availability,
        therapists::book_appointment,
        therapists::list_user_sessions,
        therapists::unbook_session,
        therapists::list_booked_therapists,
        assessments::list_assessments,
        assessments::get_assessment,
        assessments::submit_assessment,
        assessments::list_results,
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

pub(crate) fn create_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
}
