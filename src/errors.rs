use crate::config::ConfigError;
use crate::notify::Notification;
use axum::{http::StatusCode, Json};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub notification: Option<Notification>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            notification: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            notification: None,
        }
    }

    pub fn bad_gateway(notification: Notification) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: notification.payload.clone(),
            notification: Some(notification),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self.notification {
            Some(notification) => (self.status, Json(notification)).into_response(),
            None => (self.status, self.message).into_response(),
        }
    }
}
