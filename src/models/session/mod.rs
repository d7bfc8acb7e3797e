// Work-session model
// Read-only snapshot published by the main application

use serde::{Deserialize, Serialize};

pub const KEY_CLOCK_IN: &str = "clockIn";
pub const KEY_CLOCK_OUT: &str = "clockOut";
pub const KEY_REMAINING_TEXT: &str = "_remainingText";
pub const KEY_OVERTIME_TEXT: &str = "_overtimeText";
pub const KEY_TODAY_EARNINGS: &str = "_todayEarnings";
pub const KEY_MONTHLY_EARNINGS: &str = "_monthlyEarnings";
pub const KEY_CALENDAR_DATA: &str = "_calendarData";
pub const KEY_IS_CLOCKED_IN: &str = "isClockedIn";
pub const KEY_IS_LOADING: &str = "_isLoading";
pub const KEY_PENDING_ACTION: &str = "pendingAction";

pub const DEFAULT_HOURS_TEXT: &str = "--h --m";
pub const DEFAULT_EARNINGS_TEXT: &str = "$0.00";

/// The values the widget displays out of everything the main application
/// publishes. The widget never writes these back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSessionSnapshot {
    /// ISO-8601 local timestamp of the last clock-in
    pub clock_in: Option<String>,
    /// ISO-8601 local timestamp of the last clock-out
    pub clock_out: Option<String>,
    pub remaining_text: String,
    pub overtime_text: String,
    pub today_earnings: String,
    pub monthly_earnings: String,
    /// Encoded day-status feed for the mini calendar
    pub calendar_data: String,
    pub is_clocked_in: bool,
    pub is_loading: bool,
}

impl Default for WorkSessionSnapshot {
    fn default() -> Self {
        Self {
            clock_in: None,
            clock_out: None,
            remaining_text: DEFAULT_HOURS_TEXT.to_string(),
            overtime_text: DEFAULT_HOURS_TEXT.to_string(),
            today_earnings: DEFAULT_EARNINGS_TEXT.to_string(),
            monthly_earnings: DEFAULT_EARNINGS_TEXT.to_string(),
            calendar_data: String::new(),
            is_clocked_in: false,
            is_loading: false,
        }
    }
}

/// One-shot request the widget leaves for the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingAction {
    ClockIn,
    ClockOut,
}

impl PendingAction {
    /// Clock out when a session is open, otherwise clock in
    pub fn toggle_for(is_clocked_in: bool) -> Self {
        if is_clocked_in {
            PendingAction::ClockOut
        } else {
            PendingAction::ClockIn
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            PendingAction::ClockIn => "clock_in",
            PendingAction::ClockOut => "clock_out",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "clock_in" => Some(PendingAction::ClockIn),
            "clock_out" => Some(PendingAction::ClockOut),
            _ => None,
        }
    }

    /// Label for the clock button that triggers this action
    pub fn button_label(self) -> &'static str {
        match self {
            PendingAction::ClockIn => "Clock In",
            PendingAction::ClockOut => "Clock Out",
        }
    }
}
