// Widget actions
// The closed set of taps the widget can receive

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::theme::{BackgroundColor, CycleDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransparencyChange {
    /// One configured step more opaque
    Increase,
    /// One configured step more transparent
    Decrease,
    /// Absolute percentage, clamped to 0..=100
    Set(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetAction {
    Previous,
    Next,
    ToggleSettings,
    EnterSettings,
    ExitSettings,
    ChangeTransparency(TransparencyChange),
    ChangeTheme(CycleDirection),
    ChangeBackgroundColor(BackgroundColor),
    ClockInOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("unknown widget action '{0}'")]
    Unknown(String),
    #[error("invalid transparency value '{0}'")]
    InvalidTransparency(String),
    #[error("unknown background color '{0}'")]
    UnknownColor(String),
}

impl FromStr for WidgetAction {
    type Err = ActionParseError;

    /// Parses the identifiers the host attaches to widget buttons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(value) = s.strip_prefix("transparency:") {
            let percent = value
                .trim()
                .parse::<i64>()
                .map_err(|_| ActionParseError::InvalidTransparency(value.to_string()))?;
            return Ok(WidgetAction::ChangeTransparency(TransparencyChange::Set(percent)));
        }

        if let Some(id) = s.strip_prefix("color:") {
            let color = BackgroundColor::from_id(id.trim())
                .ok_or_else(|| ActionParseError::UnknownColor(id.to_string()))?;
            return Ok(WidgetAction::ChangeBackgroundColor(color));
        }

        match s {
            "previous" => Ok(WidgetAction::Previous),
            "next" => Ok(WidgetAction::Next),
            "settings" => Ok(WidgetAction::ToggleSettings),
            "enter_settings" => Ok(WidgetAction::EnterSettings),
            "exit_settings" => Ok(WidgetAction::ExitSettings),
            "transparency_up" => Ok(WidgetAction::ChangeTransparency(TransparencyChange::Increase)),
            "transparency_down" => Ok(WidgetAction::ChangeTransparency(TransparencyChange::Decrease)),
            "theme_next" => Ok(WidgetAction::ChangeTheme(CycleDirection::Next)),
            "theme_previous" => Ok(WidgetAction::ChangeTheme(CycleDirection::Previous)),
            "clock_in_out" => Ok(WidgetAction::ClockInOut),
            other => Err(ActionParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for WidgetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetAction::Previous => write!(f, "previous"),
            WidgetAction::Next => write!(f, "next"),
            WidgetAction::ToggleSettings => write!(f, "settings"),
            WidgetAction::EnterSettings => write!(f, "enter_settings"),
            WidgetAction::ExitSettings => write!(f, "exit_settings"),
            WidgetAction::ChangeTransparency(TransparencyChange::Increase) => {
                write!(f, "transparency_up")
            }
            WidgetAction::ChangeTransparency(TransparencyChange::Decrease) => {
                write!(f, "transparency_down")
            }
            WidgetAction::ChangeTransparency(TransparencyChange::Set(value)) => {
                write!(f, "transparency:{}", value)
            }
            WidgetAction::ChangeTheme(CycleDirection::Next) => write!(f, "theme_next"),
            WidgetAction::ChangeTheme(CycleDirection::Previous) => write!(f, "theme_previous"),
            WidgetAction::ChangeBackgroundColor(color) => write!(f, "color:{}", color.id()),
            WidgetAction::ClockInOut => write!(f, "clock_in_out"),
        }
    }
}
