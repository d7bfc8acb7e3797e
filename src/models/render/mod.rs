//! Render descriptor handed to the host renderer.
//!
//! A [`RenderInstruction`] is built once per refresh and painted onto a
//! [`RenderSink`], which addresses widget elements through [`Slot`]s.

use serde::{Deserialize, Serialize};

use crate::models::day_status::DayStatus;
use crate::models::page::VisiblePage;
use crate::models::sizing::SizingProfile;
use crate::models::theme::{ArgbColor, BackgroundColor};

/// Everything the host needs to draw one widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub visible_page: VisiblePage,
    pub title: String,
    pub nav_buttons_enabled: bool,
    /// Root background with the transparency applied as alpha
    pub background: ArgbColor,
    /// Contrast color for the title and every label
    pub text_color: ArgbColor,
    /// Theme color for button backgrounds
    pub accent_color: ArgbColor,
    pub sizing: SizingProfile,
    pub content: PageContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageContent {
    Main(MainContent),
    History(HistoryContent),
    Summary(SummaryContent),
    Salary(SalaryContent),
    Settings(SettingsContent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainContent {
    pub clock_in_text: String,
    pub clock_out_text: String,
    pub clock_button_label: String,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryContent {
    pub header: String,
    /// Always exactly `DAY_SLOT_COUNT` cells
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub text: String,
    pub status: DayStatus,
    pub color: ArgbColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryContent {
    pub remaining: String,
    pub overtime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryContent {
    pub today_earnings: String,
    pub monthly_earnings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsContent {
    pub transparency_label: String,
    pub presets: Vec<PresetButton>,
    pub colors: Vec<ColorButton>,
    pub theme_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetButton {
    pub value: i64,
    pub label: String,
    pub selected: bool,
    pub background: ArgbColor,
    pub text_color: ArgbColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorButton {
    pub color: BackgroundColor,
    pub selected: bool,
    pub swatch: ArgbColor,
}

/// Named elements of the widget layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Root,
    Title,
    PreviousButton,
    NextButton,
    SettingsButton,
    HomeContent,
    SettingsContent,
    ClockInLabel,
    ClockOutLabel,
    ClockButton,
    LoadingLabel,
    RemainingLabel,
    RemainingValue,
    OvertimeLabel,
    OvertimeValue,
    TodayEarningsLabel,
    TodayEarningsValue,
    MonthlyEarningsLabel,
    MonthlyEarningsValue,
    CalendarContainer,
    CalendarHeader,
    Day(usize),
    TransparencyLabel,
    TransparencyPreset(usize),
    ColorButton(BackgroundColor),
    ThemeLabel,
}

/// Host-side target the descriptor is painted onto.
pub trait RenderSink {
    fn set_visible(&mut self, slot: Slot, visible: bool);
    fn set_text(&mut self, slot: Slot, text: &str);
    fn set_text_color(&mut self, slot: Slot, color: ArgbColor);
    fn set_background(&mut self, slot: Slot, color: ArgbColor);
}
