use crate::calendar::{init_calendars, BootstrapRequest, CalendarBootstrap};
use crate::config::CalendarKind;
use crate::errors::AppError;
use crate::models::{CalendarEvent, ViewQuery};
use crate::normalize::normalize_session;
use crate::notify::{Notification, NotificationLevel, CALENDAR_NOTIFICATION_SLOT};
use crate::state::AppState;
use crate::tooltip::tooltip_content;
use crate::ui::render_index;
use crate::view::{select_view, ViewMode};
use axum::{
    extract::{Path, Query, RawQuery, State},
    http::{header::COOKIE, HeaderMap, StatusCode},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewResponse {
    pub view: ViewMode,
}

pub async fn index(Query(query): Query<IndexQuery>) -> Html<String> {
    Html(render_index(query.location.as_deref()))
}

pub async fn bootstrap(Json(request): Json<BootstrapRequest>) -> Json<CalendarBootstrap> {
    Json(init_calendars(&request.elements, request.viewport_width))
}

pub async fn get_view(Query(query): Query<ViewQuery>) -> Json<ViewResponse> {
    Json(ViewResponse {
        view: select_view(query.width),
    })
}

pub async fn user_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    load_events(&state, CalendarKind::User, &headers, query.as_deref()).await
}

pub async fn location_sessions(
    State(state): State<AppState>,
    Path(location): Path<String>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    let kind = CalendarKind::from_attributes(Some("location"), Some(location.as_str()))?;
    load_events(&state, kind, &headers, query.as_deref()).await
}

pub async fn get_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.lock().await.list())
}

pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(slot): Path<String>,
) -> Result<StatusCode, AppError> {
    match state.notifications.lock().await.dismiss(&slot) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::not_found(format!("no notification in slot {slot}"))),
    }
}

async fn load_events(
    state: &AppState,
    kind: CalendarKind,
    headers: &HeaderMap,
    query: Option<&str>,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    let cookie = headers.get(COOKIE).and_then(|value| value.to_str().ok());

    let sessions = match state.source.fetch(&kind, cookie, query).await {
        Ok(sessions) => sessions,
        Err(err) => {
            error!("failed to load sessions from {}: {err}", kind.upstream_path());
            let notification = state.notifications.lock().await.notify(
                CALENDAR_NOTIFICATION_SLOT,
                NotificationLevel::Error,
                format!("Could not load sessions: {err}"),
            );
            return Err(AppError::bad_gateway(notification));
        }
    };

    let show_location = kind.shows_location();
    let events: Vec<CalendarEvent> = sessions
        .iter()
        .map(|session| {
            let event = normalize_session(session);
            let tooltip = tooltip_content(&event, show_location);
            CalendarEvent { event, tooltip }
        })
        .collect();

    info!("serving {} events for {}", events.len(), kind.feed_path());
    Ok(Json(events))
}
