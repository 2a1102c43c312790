use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CALENDAR_NOTIFICATION_SLOT: &str = "calendar-notification";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub slot: String,
    pub level: NotificationLevel,
    pub payload: String,
}

#[derive(Debug, Default)]
pub struct NotificationBoard {
    slots: BTreeMap<String, Notification>,
}

impl NotificationBoard {
    pub fn notify(
        &mut self,
        slot: impl Into<String>,
        level: NotificationLevel,
        payload: impl Into<String>,
    ) -> Notification {
        let notification = Notification {
            slot: slot.into(),
            level,
            payload: payload.into(),
        };
        self.slots
            .insert(notification.slot.clone(), notification.clone());
        notification
    }

    pub fn dismiss(&mut self, slot: &str) -> Option<Notification> {
        self.slots.remove(slot)
    }

    pub fn get(&self, slot: &str) -> Option<&Notification> {
        self.slots.get(slot)
    }

    pub fn list(&self) -> Vec<Notification> {
        self.slots.values().cloned().collect()
    }
}
