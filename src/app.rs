use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calendar/sessions", get(handlers::user_sessions))
        .route(
            "/calendar/sessions/location/:location",
            get(handlers::location_sessions),
        )
        .route("/api/calendars", post(handlers::bootstrap))
        .route("/api/view", get(handlers::get_view))
        .route("/api/notifications", get(handlers::get_notifications))
        .route(
            "/api/notifications/:slot",
            delete(handlers::dismiss_notification),
        )
        .with_state(state)
}
