//! mindcare-lambda
//!
//! HTTP API of the MindCare backend: axum routes served through
//! `lambda_http` in AWS, or a plain TCP listener locally.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod usage;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Bearer token required
    let protected = Router::new()
        .route(
            "/bookings",
            get(routes::bookings::list_bookings).post(routes::bookings::create_booking),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    // Bearer token with the admin claim required
    let admin = Router::new()
        .route("/admin/dashboard", get(routes::admin::get_dashboard))
        .route("/admin/students", get(routes::admin::list_students))
        .route("/admin/report", get(routes::admin::download_report))
        .route("/admin/reset", post(routes::admin::reset))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Chat
        .route("/api/chat", post(routes::chat::chat))
        .route("/api/chat/history", get(routes::history::get_history))
        .route("/api/chat/messages", post(routes::history::save_message))
        .route("/api/guests", post(routes::guests::create_guest))
        // Screening (public questionnaire data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/assessments", post(routes::assessments::submit_assessment))
        .route("/counselors", get(routes::bookings::list_counselors))
        // Forum
        .route(
            "/forum/posts",
            get(routes::forum::list_posts).post(routes::forum::create_post),
        )
        .route("/forum/posts/{id}/like", post(routes::forum::like_post))
        .route("/events", post(routes::events::record_event))
        .merge(protected)
        .merge(admin)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
