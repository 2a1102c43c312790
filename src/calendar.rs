use crate::config::{CalendarKind, ElementAttributes};
use crate::notify::CALENDAR_NOTIFICATION_SLOT;
use crate::view::{select_view, ViewMode};
use serde::{Deserialize, Serialize};
use tracing::error;

pub const CALENDAR_HEIGHT: u32 = 800;
pub const FIRST_DAY_MONDAY: u8 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct HeaderToolbar {
    pub left: &'static str,
    pub center: &'static str,
    pub right: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventTimeFormat {
    pub hour: &'static str,
    pub minute: &'static str,
    pub meridiem: bool,
    pub hour12: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventSource {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TooltipOptions {
    pub arrow: bool,
    #[serde(rename = "allowHTML")]
    pub allow_html: bool,
    pub placement: &'static str,
    pub delay: [u32; 2],
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            arrow: false,
            allow_html: true,
            placement: "right",
            delay: [200, 0],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    pub plugins: Vec<&'static str>,
    pub initial_view: ViewMode,
    pub first_day: u8,
    pub height: u32,
    pub header_toolbar: HeaderToolbar,
    pub event_time_format: EventTimeFormat,
    pub event_sources: Vec<EventSource>,
    pub tooltip: TooltipOptions,
    pub notification_slot: &'static str,
}

impl CalendarOptions {
    pub fn new(kind: &CalendarKind, viewport_width: u32) -> Self {
        Self {
            plugins: vec!["dayGrid", "timeGrid", "list"],
            initial_view: select_view(viewport_width),
            first_day: FIRST_DAY_MONDAY,
            height: CALENDAR_HEIGHT,
            header_toolbar: HeaderToolbar {
                left: "prev,next today",
                center: "title",
                right: [ViewMode::DayGridMonth, ViewMode::TimeGridWeek, ViewMode::ListWeek]
                    .map(ViewMode::as_str)
                    .join(","),
            },
            event_time_format: EventTimeFormat {
                hour: "numeric",
                minute: "2-digit",
                meridiem: false,
                hour12: false,
            },
            event_sources: vec![EventSource {
                url: kind.feed_path(),
            }],
            tooltip: TooltipOptions::default(),
            notification_slot: CALENDAR_NOTIFICATION_SLOT,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BootstrapRequest {
    #[serde(default)]
    pub viewport_width: u32,
    #[serde(default)]
    pub elements: Vec<ElementAttributes>,
}

#[derive(Debug, Serialize)]
pub struct CalendarInit {
    pub index: usize,
    pub options: CalendarOptions,
}

#[derive(Debug, Serialize)]
pub struct SkippedElement {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Serialize, Default)]
pub struct CalendarBootstrap {
    pub calendars: Vec<CalendarInit>,
    pub skipped: Vec<SkippedElement>,
}

pub fn init_calendars(elements: &[ElementAttributes], viewport_width: u32) -> CalendarBootstrap {
    let mut bootstrap = CalendarBootstrap::default();

    for (index, attributes) in elements.iter().enumerate() {
        match CalendarKind::try_from(attributes) {
            Ok(kind) => bootstrap.calendars.push(CalendarInit {
                index,
                options: CalendarOptions::new(&kind, viewport_width),
            }),
            Err(err) => {
                error!("skipping calendar element {index}: {err}");
                bootstrap.skipped.push(SkippedElement {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    bootstrap
}
