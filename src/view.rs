use serde::{Deserialize, Serialize};

pub const VIEW_BREAKPOINT: u32 = 765;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    DayGridMonth,
    TimeGridWeek,
    ListWeek,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::DayGridMonth => "dayGridMonth",
            ViewMode::TimeGridWeek => "timeGridWeek",
            ViewMode::ListWeek => "listWeek",
        }
    }
}

pub fn select_view(width: u32) -> ViewMode {
    if width >= VIEW_BREAKPOINT {
        ViewMode::DayGridMonth
    } else {
        ViewMode::ListWeek
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_boundaries() {
        assert_eq!(select_view(0), ViewMode::ListWeek);
        assert_eq!(select_view(764), ViewMode::ListWeek);
        assert_eq!(select_view(765), ViewMode::DayGridMonth);
        assert_eq!(select_view(10_000), ViewMode::DayGridMonth);
    }

    #[test]
    fn serializes_as_engine_view_names() {
        assert_eq!(serde_json::to_value(ViewMode::ListWeek).unwrap(), "listWeek");
        assert_eq!(
            serde_json::to_value(ViewMode::DayGridMonth).unwrap(),
            ViewMode::DayGridMonth.as_str()
        );
        assert_eq!(
            serde_json::to_value(ViewMode::TimeGridWeek).unwrap(),
            "timeGridWeek"
        );
    }
}
