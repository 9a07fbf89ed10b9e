//! Axum route configuration and API documentation.
//!
//! Maps every HTTP endpoint to its controller handler and assembles the
//! OpenAPI document served through Swagger UI at `/api-docs`.

use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{achievement, auth, chat, export, group, meditation, stress},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::me,
        meditation::create_session,
        meditation::get_sessions,
        meditation::get_session,
        meditation::update_session,
        meditation::complete_session,
        meditation::delete_session,
        stress::create_assessment,
        stress::get_assessments,
        stress::get_insights,
        stress::get_assessment,
        stress::delete_assessment,
        achievement::get_achievements,
        achievement::create_achievement,
        achievement::update_achievement,
        achievement::delete_achievement,
        achievement::get_my_achievements,
        achievement::get_points,
        group::create_group_session,
        group::get_group_sessions,
        group::get_group_session,
        group::join_group_session,
        group::leave_group_session,
        group::cancel_group_session,
        group::start_group_session,
        group::complete_group_session,
        chat::post_message,
        chat::get_messages,
        export::export_meditation_sessions,
        export::export_stress_assessments,
    ),
    tags(
        (name = "auth", description = "Registration, login, and current-user lookup"),
        (name = "meditation", description = "Meditation session tracking"),
        (name = "stress", description = "Stress assessments and insights"),
        (name = "achievement", description = "Achievement definitions and user progress"),
        (name = "group", description = "Group meditation session lifecycle"),
        (name = "chat", description = "Group session chat"),
        (name = "export", description = "Personal data export")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/meditation-sessions",
            post(meditation::create_session).get(meditation::get_sessions),
        )
        .route(
            "/api/meditation-sessions/{id}",
            get(meditation::get_session)
                .put(meditation::update_session)
                .delete(meditation::delete_session),
        )
        .route(
            "/api/meditation-sessions/{id}/complete",
            post(meditation::complete_session),
        )
        .route(
            "/api/stress-assessments",
            post(stress::create_assessment).get(stress::get_assessments),
        )
        .route("/api/stress-assessments/insights", get(stress::get_insights))
        .route(
            "/api/stress-assessments/{id}",
            get(stress::get_assessment).delete(stress::delete_assessment),
        )
        .route(
            "/api/achievements",
            get(achievement::get_achievements).post(achievement::create_achievement),
        )
        .route("/api/achievements/mine", get(achievement::get_my_achievements))
        .route("/api/achievements/points", get(achievement::get_points))
        .route(
            "/api/achievements/{id}",
            put(achievement::update_achievement).delete(achievement::delete_achievement),
        )
        .route(
            "/api/group-sessions",
            post(group::create_group_session).get(group::get_group_sessions),
        )
        .route("/api/group-sessions/{id}", get(group::get_group_session))
        .route("/api/group-sessions/{id}/join", post(group::join_group_session))
        .route("/api/group-sessions/{id}/leave", post(group::leave_group_session))
        .route(
            "/api/group-sessions/{id}/cancel",
            post(group::cancel_group_session),
        )
        .route("/api/group-sessions/{id}/start", post(group::start_group_session))
        .route(
            "/api/group-sessions/{id}/complete",
            post(group::complete_group_session),
        )
        .route(
            "/api/group-sessions/{id}/messages",
            post(chat::post_message).get(chat::get_messages),
        )
        .route(
            "/api/export/meditation-sessions",
            get(export::export_meditation_sessions),
        )
        .route(
            "/api/export/stress-assessments",
            get(export::export_stress_assessments),
        )
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
