use chrono::NaiveDate;

use crate::models::day_status::{DayStatus, DayStatusEntry, DAY_SLOT_COUNT};
use crate::models::page::{Page, VisiblePage};
use crate::models::render::{
    ColorButton, DayCell, HistoryContent, MainContent, PageContent, PresetButton,
    RenderInstruction, SalaryContent, SettingsContent, SummaryContent,
};
use crate::models::session::{PendingAction, WorkSessionSnapshot};
use crate::models::settings::WidgetState;
use crate::models::sizing::SizingProfile;
use crate::models::theme::{ArgbColor, BackgroundColor};
use crate::services::day_status::decode_feed;
use crate::services::state_machine::PageView;
use crate::utils::date::{format_clock_time, month_header};

pub const DEFAULT_TRANSPARENCY_PRESETS: [i64; 4] = [25, 50, 75, 100];

const PRESET_SELECTED_BACKGROUND: ArgbColor = ArgbColor::rgb(0x4C, 0xAF, 0x50);
const PRESET_BACKGROUND: ArgbColor = ArgbColor::rgb(0xDD, 0xDD, 0xDD);

/// Everything one render depends on.
#[derive(Debug, Clone, Copy)]
pub struct RenderInputs<'a> {
    pub state: &'a WidgetState,
    pub session: &'a WorkSessionSnapshot,
    pub sizing: SizingProfile,
    /// Local date the calendar header is built for
    pub today: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct RenderEmitter {
    presets: Vec<i64>,
}

impl Default for RenderEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSPARENCY_PRESETS.to_vec())
    }
}

impl RenderEmitter {
    /// `presets` must already be ascending, unique and within 0..=100, as
    /// [`WidgetConfig::sanitized`](crate::services::config::WidgetConfig::sanitized)
    /// leaves them.
    pub fn new(presets: Vec<i64>) -> Self {
        Self { presets }
    }

    pub fn presets(&self) -> &[i64] {
        &self.presets
    }

    pub fn emit(&self, inputs: RenderInputs<'_>) -> RenderInstruction {
        let state = inputs.state;
        let view = PageView::for_state(state);
        let background = state.background();

        let content = match view.visible_page {
            VisiblePage::Content(Page::Main) => PageContent::Main(main_content(inputs.session)),
            VisiblePage::Content(Page::History) => PageContent::History(history_content(
                inputs.session,
                inputs.today,
                background.is_dark(),
            )),
            VisiblePage::Content(Page::Summary) => PageContent::Summary(SummaryContent {
                remaining: inputs.session.remaining_text.clone(),
                overtime: inputs.session.overtime_text.clone(),
            }),
            VisiblePage::Content(Page::Salary) => PageContent::Salary(SalaryContent {
                today_earnings: inputs.session.today_earnings.clone(),
                monthly_earnings: inputs.session.monthly_earnings.clone(),
            }),
            VisiblePage::Settings => PageContent::Settings(self.settings_content(state)),
        };

        RenderInstruction {
            visible_page: view.visible_page,
            title: view.title.to_string(),
            nav_buttons_enabled: view.nav_buttons_enabled,
            background: background.base_color().with_alpha(state.background_alpha()),
            text_color: background.text_color(),
            accent_color: state.theme().accent(),
            sizing: inputs.sizing,
            content,
        }
    }

    fn settings_content(&self, state: &WidgetState) -> SettingsContent {
        let transparency = state.clamped_transparency();
        let selected = selected_preset(&self.presets, transparency);
        let current_color = state.background();

        let presets = self
            .presets
            .iter()
            .map(|&value| {
                let is_selected = Some(value) == selected;
                PresetButton {
                    value,
                    label: format!("{}%", value),
                    selected: is_selected,
                    background: if is_selected {
                        PRESET_SELECTED_BACKGROUND
                    } else {
                        PRESET_BACKGROUND
                    },
                    text_color: if is_selected {
                        ArgbColor::WHITE
                    } else {
                        ArgbColor::BLACK
                    },
                }
            })
            .collect();

        let colors = BackgroundColor::ALL
            .into_iter()
            .map(|color| ColorButton {
                color,
                selected: color == current_color,
                swatch: color.base_color(),
            })
            .collect();

        SettingsContent {
            transparency_label: format!("Transparency: {}%", transparency),
            presets,
            colors,
            theme_label: format!("Theme: {}", state.theme().name()),
        }
    }
}

/// First preset at or above `current`, else the largest one.
pub(crate) fn selected_preset(presets: &[i64], current: i64) -> Option<i64> {
    presets
        .iter()
        .copied()
        .find(|&p| p >= current)
        .or_else(|| presets.last().copied())
}

fn main_content(session: &WorkSessionSnapshot) -> MainContent {
    MainContent {
        clock_in_text: format!("Clock In: {}", format_clock_time(session.clock_in.as_deref())),
        clock_out_text: format!("Clock Out: {}", format_clock_time(session.clock_out.as_deref())),
        clock_button_label: PendingAction::toggle_for(session.is_clocked_in)
            .button_label()
            .to_string(),
        loading: session.is_loading,
    }
}

fn history_content(session: &WorkSessionSnapshot, today: NaiveDate, dark: bool) -> HistoryContent {
    let entries = decode_feed(&session.calendar_data);
    HistoryContent {
        header: month_header(today),
        days: day_cells(&entries, dark),
    }
}

/// Exactly `DAY_SLOT_COUNT` cells; slots past the feed are blank.
fn day_cells(entries: &[DayStatusEntry], dark: bool) -> Vec<DayCell> {
    (0..DAY_SLOT_COUNT)
        .map(|slot| match entries.get(slot) {
            Some(entry) => DayCell {
                text: entry.display_text(),
                status: entry.status,
                color: entry.status.color(dark),
            },
            None => DayCell {
                text: String::new(),
                status: DayStatus::Empty,
                color: DayStatus::Empty.color(dark),
            },
        })
        .collect()
}
