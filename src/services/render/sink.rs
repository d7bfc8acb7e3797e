use crate::models::render::{PageContent, RenderInstruction, RenderSink, Slot};

const MAIN_SLOTS: [Slot; 4] = [
    Slot::ClockInLabel,
    Slot::ClockOutLabel,
    Slot::ClockButton,
    Slot::LoadingLabel,
];
const HISTORY_SLOTS: [Slot; 2] = [Slot::CalendarContainer, Slot::CalendarHeader];
const SUMMARY_SLOTS: [Slot; 4] = [
    Slot::RemainingLabel,
    Slot::RemainingValue,
    Slot::OvertimeLabel,
    Slot::OvertimeValue,
];
const SALARY_SLOTS: [Slot; 4] = [
    Slot::TodayEarningsLabel,
    Slot::TodayEarningsValue,
    Slot::MonthlyEarningsLabel,
    Slot::MonthlyEarningsValue,
];

impl RenderInstruction {
    /// Paint the descriptor onto a host render target.
    ///
    /// Every page's slots get an explicit visibility so a sink never keeps
    /// stale elements from a previous page.
    pub fn paint(&self, sink: &mut dyn RenderSink) {
        sink.set_background(Slot::Root, self.background);

        sink.set_text(Slot::Title, &self.title);
        sink.set_text_color(Slot::Title, self.text_color);

        for slot in [Slot::PreviousButton, Slot::NextButton] {
            sink.set_visible(slot, self.nav_buttons_enabled);
            sink.set_background(slot, self.accent_color);
        }
        sink.set_visible(Slot::SettingsButton, true);
        sink.set_background(Slot::SettingsButton, self.accent_color);

        let in_settings = self.visible_page.is_settings();
        sink.set_visible(Slot::HomeContent, !in_settings);
        sink.set_visible(Slot::SettingsContent, in_settings);

        let showing_main = matches!(self.content, PageContent::Main(_));
        let showing_history = matches!(self.content, PageContent::History(_));
        let showing_summary = matches!(self.content, PageContent::Summary(_));
        let showing_salary = matches!(self.content, PageContent::Salary(_));
        set_group_visible(sink, &MAIN_SLOTS, showing_main);
        set_group_visible(sink, &HISTORY_SLOTS, showing_history);
        set_group_visible(sink, &SUMMARY_SLOTS, showing_summary);
        set_group_visible(sink, &SALARY_SLOTS, showing_salary);

        match &self.content {
            PageContent::Main(main) => {
                sink.set_text(Slot::ClockInLabel, &main.clock_in_text);
                sink.set_text(Slot::ClockOutLabel, &main.clock_out_text);
                sink.set_text(Slot::ClockButton, &main.clock_button_label);
                sink.set_background(Slot::ClockButton, self.accent_color);
                sink.set_visible(Slot::LoadingLabel, main.loading);
                for slot in [Slot::ClockInLabel, Slot::ClockOutLabel] {
                    sink.set_text_color(slot, self.text_color);
                }
            }
            PageContent::History(history) => {
                sink.set_text(Slot::CalendarHeader, &history.header);
                sink.set_text_color(Slot::CalendarHeader, self.text_color);
                for (index, cell) in history.days.iter().enumerate() {
                    sink.set_text(Slot::Day(index), &cell.text);
                    sink.set_text_color(Slot::Day(index), cell.color);
                }
            }
            PageContent::Summary(summary) => {
                sink.set_text(Slot::RemainingValue, &summary.remaining);
                sink.set_text(Slot::OvertimeValue, &summary.overtime);
                paint_text_color(sink, &SUMMARY_SLOTS, self);
            }
            PageContent::Salary(salary) => {
                sink.set_text(Slot::TodayEarningsValue, &salary.today_earnings);
                sink.set_text(Slot::MonthlyEarningsValue, &salary.monthly_earnings);
                paint_text_color(sink, &SALARY_SLOTS, self);
            }
            PageContent::Settings(settings) => {
                sink.set_text(Slot::TransparencyLabel, &settings.transparency_label);
                sink.set_text_color(Slot::TransparencyLabel, self.text_color);
                for (index, preset) in settings.presets.iter().enumerate() {
                    let slot = Slot::TransparencyPreset(index);
                    sink.set_text(slot, &preset.label);
                    sink.set_background(slot, preset.background);
                    sink.set_text_color(slot, preset.text_color);
                }
                for button in &settings.colors {
                    let slot = Slot::ColorButton(button.color);
                    sink.set_background(slot, button.swatch);
                    sink.set_text(slot, if button.selected { "✓" } else { "" });
                    // The check mark sits on the swatch itself
                    sink.set_text_color(slot, button.color.text_color());
                }
                sink.set_text(Slot::ThemeLabel, &settings.theme_label);
                sink.set_text_color(Slot::ThemeLabel, self.text_color);
            }
        }
    }
}

fn set_group_visible(sink: &mut dyn RenderSink, slots: &[Slot], visible: bool) {
    for slot in slots {
        sink.set_visible(*slot, visible);
    }
}

fn paint_text_color(sink: &mut dyn RenderSink, slots: &[Slot], instruction: &RenderInstruction) {
    for slot in slots {
        sink.set_text_color(*slot, instruction.text_color);
    }
}
