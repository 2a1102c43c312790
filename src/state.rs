use crate::notify::NotificationBoard;
use crate::source::SessionSource;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub source: SessionSource,
    pub notifications: Arc<Mutex<NotificationBoard>>,
}

impl AppState {
    pub fn new(source: SessionSource) -> Self {
        Self {
            source,
            notifications: Arc::new(Mutex::new(NotificationBoard::default())),
        }
    }
}
