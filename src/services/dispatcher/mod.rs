// Action dispatcher
// Routes widget taps to state transitions or to the host application

use anyhow::Result;

use crate::models::action::WidgetAction;
use crate::models::session::PendingAction;
use crate::models::settings::WidgetState;
use crate::services::session::SessionService;
use crate::services::settings::SettingsService;
use crate::services::state_machine::PageStateMachine;

/// Channel to the main application.
#[cfg_attr(test, mockall::automock)]
pub trait HostSignal {
    /// Bring the main application forward so it consumes the pending action
    fn launch_app(&self, action: PendingAction) -> Result<()>;
}

/// Result of one dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub state: WidgetState,
    /// Whether the persisted widget state changed
    pub changed: bool,
    pub pending_action: Option<PendingAction>,
}

pub struct ActionDispatcher<'a> {
    settings: SettingsService<'a>,
    session: SessionService<'a>,
    host: &'a dyn HostSignal,
    machine: PageStateMachine,
}

impl<'a> ActionDispatcher<'a> {
    pub fn new(
        settings: SettingsService<'a>,
        session: SessionService<'a>,
        host: &'a dyn HostSignal,
        machine: PageStateMachine,
    ) -> Self {
        Self {
            settings,
            session,
            host,
            machine,
        }
    }

    /// Read, transition, persist. Never fails; store and host errors are logged.
    ///
    /// A transition the store refused is reported as unchanged, with the state
    /// as it was read.
    pub fn dispatch(&self, action: WidgetAction, now_ms: i64) -> DispatchOutcome {
        let before = self.settings.load();

        if action == WidgetAction::ClockInOut {
            return self.dispatch_clock(before);
        }

        let after = self.machine.apply(&before, action, now_ms);
        if after == before {
            return DispatchOutcome {
                state: before,
                changed: false,
                pending_action: None,
            };
        }

        if !self.settings.save_changes(&before, &after) {
            log::error!(
                "Widget state after {} was not persisted, keeping previous state",
                action
            );
            return DispatchOutcome {
                state: before,
                changed: false,
                pending_action: None,
            };
        }

        DispatchOutcome {
            state: after,
            changed: true,
            pending_action: None,
        }
    }

    fn dispatch_clock(&self, state: WidgetState) -> DispatchOutcome {
        if state.settings_mode {
            log::debug!("Ignoring clock action while in settings mode");
            return DispatchOutcome {
                state,
                changed: false,
                pending_action: None,
            };
        }

        let action = PendingAction::toggle_for(self.session.is_clocked_in());
        if !self.session.request_action(action) {
            log::error!("Could not record pending action {}", action.code());
        }
        if let Err(e) = self.host.launch_app(action) {
            log::error!("Failed to signal host application: {:#}", e);
        }

        DispatchOutcome {
            state,
            changed: false,
            pending_action: Some(action),
        }
    }
}
