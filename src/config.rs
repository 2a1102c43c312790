use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementAttributes {
    #[serde(default)]
    pub calendar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarKind {
    Location(String),
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("calendar type missing")]
    MissingType,
    #[error("unknown calendar type `{0}`")]
    UnknownType(String),
    #[error("location id missing")]
    MissingLocation,
    #[error("invalid location id `{0}`")]
    InvalidLocation(String),
}

impl CalendarKind {
    pub fn from_attributes(
        calendar: Option<&str>,
        location: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let calendar = non_blank(calendar).ok_or(ConfigError::MissingType)?;
        match calendar {
            "location" => {
                let id = non_blank(location).ok_or(ConfigError::MissingLocation)?;
                if !id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                {
                    return Err(ConfigError::InvalidLocation(id.to_string()));
                }
                Ok(CalendarKind::Location(id.to_string()))
            }
            "user" => Ok(CalendarKind::User),
            other => Err(ConfigError::UnknownType(other.to_string())),
        }
    }

    pub fn upstream_path(&self) -> String {
        match self {
            CalendarKind::Location(id) => format!("/admin/sessions/location/{id}"),
            CalendarKind::User => "/admin/sessions".to_string(),
        }
    }

    pub fn feed_path(&self) -> String {
        match self {
            CalendarKind::Location(id) => format!("/calendar/sessions/location/{id}"),
            CalendarKind::User => "/calendar/sessions".to_string(),
        }
    }

    pub fn shows_location(&self) -> bool {
        !matches!(self, CalendarKind::Location(_))
    }
}

impl TryFrom<&ElementAttributes> for CalendarKind {
    type Error = ConfigError;

    fn try_from(attributes: &ElementAttributes) -> Result<Self, Self::Error> {
        CalendarKind::from_attributes(attributes.calendar.as_deref(), attributes.location.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
