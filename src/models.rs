use crate::color::HexColor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "SessionRecord")]
pub struct Session {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub contact_person: Option<ContactPerson>,
    pub description: Option<String>,
    pub assignment_count: u32,
    pub min_participants: Option<u32>,
    pub max_participants: Option<u32>,
    pub overbook: bool,
}

// Upstream sends the end as `end_`; an already resolved record carries `end`.
#[derive(Deserialize)]
struct SessionRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    start: DateTime<Utc>,
    #[serde(default)]
    end_: Option<DateTime<Utc>>,
    #[serde(default)]
    end: Option<DateTime<Utc>>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    contact_person: Option<ContactPerson>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    assignment_count: u32,
    #[serde(default)]
    min_participants: Option<u32>,
    #[serde(default)]
    max_participants: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    overbook: bool,
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Self {
            title: record.title,
            start: record.start,
            end: record.end_.or(record.end),
            location: record.location,
            contact_person: record.contact_person,
            description: record.description,
            assignment_count: record.assignment_count,
            min_participants: record.min_participants,
            max_participants: record.max_participants,
            overbook: record.overbook,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub contact_person: Option<ContactPerson>,
    pub description: Option<String>,
    pub assignment_count: u32,
    pub min_participants: Option<u32>,
    pub max_participants: Option<u32>,
    pub overbook: bool,
    #[serde(rename = "textColor")]
    pub text_color: HexColor,
    #[serde(rename = "backgroundColor")]
    pub background_color: HexColor,
    #[serde(rename = "borderColor")]
    pub border_color: HexColor,
    pub display: DisplayMode,
}

// Unknown keys such as `tooltip` land in the engine's `extendedProps`.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    #[serde(flatten)]
    pub event: NormalizedEvent,
    pub tooltip: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub width: u32,
}
