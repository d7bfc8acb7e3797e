// Settings module
// Persisted widget state shared by every placed widget instance

use serde::{Deserialize, Serialize};

use crate::models::page::{Page, VisiblePage};
use crate::models::theme::{BackgroundColor, Theme};

pub const KEY_CURRENT_TAB: &str = "current_tab";
pub const KEY_SETTINGS_MODE: &str = "settings_mode";
pub const KEY_TRANSPARENCY: &str = "transparency";
pub const KEY_THEME: &str = "theme";
pub const KEY_BACKGROUND_COLOR: &str = "backgroundColor";
pub const KEY_LAST_SETTINGS_TIME: &str = "last_settings_time";

pub const MIN_TRANSPARENCY: i64 = 0;
pub const MAX_TRANSPARENCY: i64 = 100;
pub const DEFAULT_TRANSPARENCY: i64 = 100;

/// Snapshot of the persisted widget settings.
///
/// `transparency` is a percentage where 100 is fully opaque. Values written by
/// other processes are kept as-is and only clamped when rendered, so the
/// snapshot can carry anything the store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    pub current_page: Page,
    pub settings_mode: bool,
    pub transparency: i64,
    pub theme_id: String,
    pub background_color: String,
    /// Epoch milliseconds of the last interaction with the settings overlay
    pub last_settings_time: Option<i64>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            current_page: Page::Main,
            settings_mode: false,
            transparency: DEFAULT_TRANSPARENCY,
            theme_id: Theme::default().id().to_string(),
            background_color: BackgroundColor::default().id().to_string(),
            last_settings_time: None,
        }
    }
}

impl WidgetState {
    pub fn visible_page(&self) -> VisiblePage {
        if self.settings_mode {
            VisiblePage::Settings
        } else {
            VisiblePage::Content(self.current_page)
        }
    }

    /// Theme to render with; unknown ids fall back to the default theme
    pub fn theme(&self) -> Theme {
        Theme::from_id(&self.theme_id).unwrap_or_default()
    }

    /// Background to render with; unknown ids fall back to white
    pub fn background(&self) -> BackgroundColor {
        BackgroundColor::from_id(&self.background_color).unwrap_or_default()
    }

    pub fn clamped_transparency(&self) -> i64 {
        self.transparency.clamp(MIN_TRANSPARENCY, MAX_TRANSPARENCY)
    }

    /// Alpha channel (0-255) derived from the transparency percentage
    pub fn background_alpha(&self) -> u8 {
        let alpha = (self.clamped_transparency() * 255 / 100).clamp(0, 255);
        u8::try_from(alpha).unwrap_or(u8::MAX)
    }
}
