// Day status model
// One decoded entry of the mini-calendar feed

use serde::{Deserialize, Serialize};

use crate::models::theme::ArgbColor;

/// Number of day cells in the mini calendar (six weeks of seven days).
pub const DAY_SLOT_COUNT: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    Completed,
    InProgress,
    OffDay,
    Empty,
}

impl DayStatus {
    /// Maps a feed status code; anything unrecognised is `Empty`
    pub fn from_code(code: &str) -> Self {
        match code {
            "completed" => DayStatus::Completed,
            "inprogress" => DayStatus::InProgress,
            "offday" => DayStatus::OffDay,
            _ => DayStatus::Empty,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            DayStatus::Completed => "✅",
            DayStatus::InProgress => "🕒",
            DayStatus::OffDay => "💤",
            DayStatus::Empty => "",
        }
    }

    /// Cell text color, lighter shades on dark backgrounds
    pub fn color(self, dark_background: bool) -> ArgbColor {
        match (self, dark_background) {
            (DayStatus::Completed, true) => ArgbColor::rgb(0xA5, 0xD6, 0xA7),
            (DayStatus::Completed, false) => ArgbColor::rgb(0x38, 0x8E, 0x3C),
            (DayStatus::InProgress, true) => ArgbColor::rgb(0xFF, 0xD1, 0x80),
            (DayStatus::InProgress, false) => ArgbColor::rgb(0xFF, 0xA5, 0x00),
            (DayStatus::OffDay, true) => ArgbColor::rgb(0x90, 0xCA, 0xF9),
            (DayStatus::OffDay, false) => ArgbColor::rgb(0x19, 0x76, 0xD2),
            (DayStatus::Empty, true) => ArgbColor::WHITE,
            (DayStatus::Empty, false) => ArgbColor::BLACK,
        }
    }
}

/// A decoded day of the feed. Lives for a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatusEntry {
    pub day_label: String,
    pub status: DayStatus,
    pub detail_time: Option<String>,
}

impl DayStatusEntry {
    /// Two-line cell text: the day label, then the detail and status glyph.
    ///
    /// `Empty` entries keep a blank second line so every cell has the same
    /// height.
    pub fn display_text(&self) -> String {
        let time = self.detail_time.as_deref().filter(|t| !t.is_empty());
        let second_line = match self.status {
            DayStatus::Completed => time.unwrap_or("✓"),
            DayStatus::InProgress => time.unwrap_or("○"),
            DayStatus::OffDay => "OFF",
            DayStatus::Empty => return format!("{}\n ", self.day_label),
        };

        format!("{}\n{} {}", self.day_label, second_line, self.status.glyph())
            .trim_end()
            .to_string()
    }
}
