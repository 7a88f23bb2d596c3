use serde::Serialize;

/// The four mutually exclusive duty statuses of a driver.
///
/// The declaration order is the fixed chart row order (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// All statuses in chart row order.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    pub fn row_index(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::Sleeper => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDutyNotDriving => 3,
        }
    }

    pub fn from_row(row: usize) -> Option<Self> {
        Self::ALL.get(row).copied()
    }

    /// Convert wire string → enum
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OffDuty" => Some(DutyStatus::OffDuty),
            "Sleeper" => Some(DutyStatus::Sleeper),
            "Driving" => Some(DutyStatus::Driving),
            "OnDutyNotDriving" => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }

    /// Convert enum → wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OffDuty",
            DutyStatus::Sleeper => "Sleeper",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "OnDutyNotDriving",
        }
    }

    /// Label printed next to the chart rows and in the summaries.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::Sleeper => "Sleeper",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty",
        }
    }

    /// Chart color, as `#rrggbb`.
    pub fn color(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "#22c55e",
            DutyStatus::Sleeper => "#a855f7",
            DutyStatus::Driving => "#3b82f6",
            DutyStatus::OnDutyNotDriving => "#f59e0b",
        }
    }

    /// Rest statuses are plotted as rest stops on the route map.
    pub fn is_rest(&self) -> bool {
        matches!(self, DutyStatus::OffDuty | DutyStatus::Sleeper)
    }
}
