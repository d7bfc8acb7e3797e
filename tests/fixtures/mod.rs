// Test fixtures - reusable test data
// Provides sample feeds, session data and a recording render sink

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone};
use work_hours_widget::models::render::{RenderSink, Slot};
use work_hours_widget::models::sizing::WidgetDimensions;
use work_hours_widget::models::theme::ArgbColor;

/// Sample day-status feeds
pub mod feeds {
    /// The four status kinds, one each
    pub const MIXED: &str = "1:completed:09:15,2:inprogress,3:offday,4:bogus";

    /// A full working week ending with today in progress
    pub const WEEK: &str =
        "1:offday,2:offday,3:completed:08:00,4:completed:07:45,5:completed:08:10,6:completed,7:inprogress:08:30";

    /// More entries than the calendar has slots
    pub fn overflowing() -> String {
        (1..=60)
            .map(|day| format!("{}:completed", day))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Widget sizes as the host reports them
pub mod sizes {
    use super::*;

    /// 80dp square on a 2x screen
    pub fn small() -> WidgetDimensions {
        WidgetDimensions::new(160, 160, 2.0)
    }

    /// 180dp square on a 2x screen
    pub fn large() -> WidgetDimensions {
        WidgetDimensions::new(360, 360, 2.0)
    }

    /// 4x2 cell widget on a 3x screen
    pub fn wide() -> WidgetDimensions {
        WidgetDimensions::new(1050, 330, 3.0)
    }
}

/// Fixed local instant for deterministic tests (a Wednesday morning)
pub fn morning() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 13, 9, 30, 0)
        .single()
        .expect("unambiguous local time")
}

/// Session values the main application would publish mid-shift
pub fn clocked_in_session() -> Vec<(&'static str, &'static str)> {
    vec![
        ("clockIn", "2024-03-13T08:02:37.412000"),
        ("_remainingText", "6h 32m"),
        ("_overtimeText", "0h 45m"),
        ("_todayEarnings", "$21.40"),
        ("_monthlyEarnings", "$1,204.80"),
        ("_calendarData", feeds::WEEK),
    ]
}

/// Render sink that remembers the last instruction per slot
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub visible: HashMap<Slot, bool>,
    pub text: HashMap<Slot, String>,
    pub text_colors: HashMap<Slot, ArgbColor>,
    pub backgrounds: HashMap<Slot, ArgbColor>,
}

impl RecordingSink {
    pub fn is_visible(&self, slot: Slot) -> bool {
        self.visible.get(&slot).copied().unwrap_or(false)
    }

    pub fn text_of(&self, slot: Slot) -> &str {
        self.text.get(&slot).map(String::as_str).unwrap_or("")
    }
}

impl RenderSink for RecordingSink {
    fn set_visible(&mut self, slot: Slot, visible: bool) {
        self.visible.insert(slot, visible);
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        self.text.insert(slot, text.to_string());
    }

    fn set_text_color(&mut self, slot: Slot, color: ArgbColor) {
        self.text_colors.insert(slot, color);
    }

    fn set_background(&mut self, slot: Slot, color: ArgbColor) {
        self.backgrounds.insert(slot, color);
    }
}
