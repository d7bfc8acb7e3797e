use crate::models::action::{TransparencyChange, WidgetAction};
use crate::models::page::PagingPolicy;
use crate::models::settings::{WidgetState, MAX_TRANSPARENCY, MIN_TRANSPARENCY};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Applies actions to state snapshots. Every transition is total: out of
/// range requests are clamped or ignored.
#[derive(Debug, Clone, Copy)]
pub struct PageStateMachine {
    policy: PagingPolicy,
    transparency_step: i64,
}

impl Default for PageStateMachine {
    fn default() -> Self {
        Self::new(PagingPolicy::default(), 10)
    }
}

impl PageStateMachine {
    pub fn new(policy: PagingPolicy, transparency_step: i64) -> Self {
        Self {
            policy,
            transparency_step: transparency_step.max(1),
        }
    }

    pub fn policy(&self) -> PagingPolicy {
        self.policy
    }

    pub fn transparency_step(&self) -> i64 {
        self.transparency_step
    }

    /// Next state after `action`. `now_ms` stamps settings interactions.
    pub fn apply(&self, state: &WidgetState, action: WidgetAction, now_ms: i64) -> WidgetState {
        let mut next = state.clone();

        match action {
            WidgetAction::Previous | WidgetAction::Next if state.settings_mode => {
                log::debug!("Ignoring {} while in settings mode", action);
            }
            WidgetAction::Previous => next.current_page = state.current_page.previous(self.policy),
            WidgetAction::Next => next.current_page = state.current_page.next(self.policy),
            WidgetAction::ToggleSettings => {
                if state.settings_mode {
                    exit_settings(&mut next);
                } else {
                    enter_settings(&mut next, now_ms);
                }
            }
            WidgetAction::EnterSettings => enter_settings(&mut next, now_ms),
            WidgetAction::ExitSettings => exit_settings(&mut next),
            WidgetAction::ChangeTransparency(change) => {
                next.transparency = self.change_transparency(state.clamped_transparency(), change);
                touch_settings(&mut next, now_ms);
            }
            WidgetAction::ChangeTheme(direction) => {
                next.theme_id = state.theme().cycle(direction).id().to_string();
                touch_settings(&mut next, now_ms);
            }
            WidgetAction::ChangeBackgroundColor(color) => {
                next.background_color = color.id().to_string();
                touch_settings(&mut next, now_ms);
            }
            // Handled by the dispatcher; the shared state does not change
            WidgetAction::ClockInOut => {}
        }

        if next != *state {
            log::debug!("{} -> {:?}", action, next);
        }
        next
    }

    fn change_transparency(&self, current: i64, change: TransparencyChange) -> i64 {
        let target = match change {
            TransparencyChange::Increase => current.saturating_add(self.transparency_step),
            TransparencyChange::Decrease => current.saturating_sub(self.transparency_step),
            TransparencyChange::Set(value) => value,
        };
        target.clamp(MIN_TRANSPARENCY, MAX_TRANSPARENCY)
    }

    /// Leave a settings overlay that has been idle longer than the timeout.
    ///
    /// A zero timeout disables the check. An overlay without a stamp gets one
    /// instead of being closed.
    pub fn expire_stale_settings(
        &self,
        state: &WidgetState,
        now_ms: i64,
        timeout_minutes: u32,
    ) -> WidgetState {
        if !state.settings_mode || timeout_minutes == 0 {
            return state.clone();
        }

        let mut next = state.clone();
        match state.last_settings_time {
            None => next.last_settings_time = Some(now_ms),
            Some(stamp) => {
                let idle = now_ms.saturating_sub(stamp);
                if idle > i64::from(timeout_minutes) * MILLIS_PER_MINUTE {
                    log::info!("Settings overlay idle for {} ms, closing it", idle);
                    exit_settings(&mut next);
                }
            }
        }
        next
    }
}

fn enter_settings(state: &mut WidgetState, now_ms: i64) {
    if !state.settings_mode {
        log::info!("Entering settings mode");
    }
    state.settings_mode = true;
    state.last_settings_time = Some(now_ms);
}

fn exit_settings(state: &mut WidgetState) {
    if state.settings_mode {
        log::info!("Leaving settings mode");
    }
    state.settings_mode = false;
    state.last_settings_time = None;
}

fn touch_settings(state: &mut WidgetState, now_ms: i64) {
    if state.settings_mode {
        state.last_settings_time = Some(now_ms);
    }
}
