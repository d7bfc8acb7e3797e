//! Composition root of the widget core.
//!
//! [`WidgetController`] wires the stores, the host channel and the
//! configuration together and runs one read → transition → persist → render
//! cycle per call. All placed widget instances share one persisted state;
//! only their sizing differs.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::action::{ActionParseError, WidgetAction};
use crate::models::render::RenderInstruction;
use crate::models::session::PendingAction;
use crate::models::settings::WidgetState;
use crate::models::sizing::WidgetDimensions;
use crate::services::config::WidgetConfig;
use crate::services::dispatcher::{ActionDispatcher, DispatchOutcome, HostSignal};
use crate::services::render::{RenderEmitter, RenderInputs};
use crate::services::session::SessionService;
use crate::services::settings::SettingsService;
use crate::services::sizing::SizingResolver;
use crate::services::state_machine::PageStateMachine;
use crate::services::store::KeyValueStore;

/// One placed widget as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstance {
    pub id: i32,
    pub dimensions: WidgetDimensions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWidget {
    pub id: i32,
    pub instruction: RenderInstruction,
}

/// Summary sent back over the host channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInfo {
    pub widget_count: usize,
    pub widget_ids: Vec<i32>,
    pub is_settings_mode: bool,
}

pub struct WidgetController<'a> {
    settings_store: &'a dyn KeyValueStore,
    session_store: &'a dyn KeyValueStore,
    host: &'a dyn HostSignal,
    config: WidgetConfig,
    machine: PageStateMachine,
    resolver: SizingResolver,
    emitter: RenderEmitter,
}

impl<'a> WidgetController<'a> {
    pub fn new(
        settings_store: &'a dyn KeyValueStore,
        session_store: &'a dyn KeyValueStore,
        host: &'a dyn HostSignal,
        config: WidgetConfig,
    ) -> Self {
        let config = config.sanitized();
        Self {
            settings_store,
            session_store,
            host,
            machine: PageStateMachine::new(config.paging_policy, config.transparency_step),
            resolver: SizingResolver::new(config.sizing_thresholds),
            emitter: RenderEmitter::new(config.transparency_presets.clone()),
            config,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn settings(&self) -> SettingsService<'a> {
        SettingsService::new(self.settings_store)
    }

    fn session(&self) -> SessionService<'a> {
        SessionService::new(self.session_store)
    }

    /// Current persisted state
    pub fn state(&self) -> WidgetState {
        self.settings().load()
    }

    pub fn handle_action(&self, action: WidgetAction, now: DateTime<Local>) -> DispatchOutcome {
        log::debug!("Handling action {}", action);
        ActionDispatcher::new(self.settings(), self.session(), self.host, self.machine)
            .dispatch(action, now.timestamp_millis())
    }

    /// Parse a host tap identifier and handle it. Unknown identifiers are
    /// rejected without touching any state.
    pub fn handle_tap(
        &self,
        tap: &str,
        now: DateTime<Local>,
    ) -> Result<DispatchOutcome, ActionParseError> {
        let action = tap.parse::<WidgetAction>().map_err(|e| {
            log::warn!("Rejected widget tap: {}", e);
            e
        })?;
        Ok(self.handle_action(action, now))
    }

    /// Called directly by the main application to close the overlay
    pub fn exit_settings_mode(&self, now: DateTime<Local>) -> bool {
        self.handle_action(WidgetAction::ExitSettings, now).changed
    }

    /// Consume the action the widget left for the main application
    pub fn take_pending_action(&self) -> Option<PendingAction> {
        self.session().take_pending_action()
    }

    /// Render one instance.
    pub fn refresh(&self, dimensions: WidgetDimensions, now: DateTime<Local>) -> RenderInstruction {
        let state = self.current_state(now);
        self.render(&state, dimensions, now)
    }

    /// Render every placed instance from the one shared state.
    pub fn render_all(
        &self,
        instances: &[WidgetInstance],
        now: DateTime<Local>,
    ) -> Vec<RenderedWidget> {
        if instances.is_empty() {
            return Vec::new();
        }

        let state = self.current_state(now);
        instances
            .iter()
            .map(|instance| RenderedWidget {
                id: instance.id,
                instruction: self.render(&state, instance.dimensions, now),
            })
            .collect()
    }

    pub fn widget_info(&self, widget_ids: &[i32]) -> WidgetInfo {
        WidgetInfo {
            widget_count: widget_ids.len(),
            widget_ids: widget_ids.to_vec(),
            is_settings_mode: self.state().settings_mode,
        }
    }

    // Loads the state and closes a stale settings overlay before rendering
    fn current_state(&self, now: DateTime<Local>) -> WidgetState {
        let settings = self.settings();
        let loaded = settings.load();
        let state = self.machine.expire_stale_settings(
            &loaded,
            now.timestamp_millis(),
            self.config.settings_timeout_minutes,
        );
        settings.save_changes(&loaded, &state);
        state
    }

    fn render(
        &self,
        state: &WidgetState,
        dimensions: WidgetDimensions,
        now: DateTime<Local>,
    ) -> RenderInstruction {
        let session = self.session().load();
        self.emitter.emit(RenderInputs {
            state,
            session: &session,
            sizing: self.resolver.resolve(dimensions),
            today: now.date_naive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::{Page, VisiblePage};
    use crate::models::render::PageContent;
    use crate::models::settings::KEY_SETTINGS_MODE;
    use crate::models::sizing::SizeTier;
    use crate::services::dispatcher::MockHostSignal;
    use crate::services::store::{KeyValueStoreExt, MemoryStore};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 12, 10, 0, 0).single().unwrap()
    }

    fn small() -> WidgetDimensions {
        WidgetDimensions::new(160, 160, 2.0)
    }

    #[test]
    fn test_refresh_defaults() {
        let (settings, session, host) = (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        let controller = WidgetController::new(&settings, &session, &host, WidgetConfig::default());

        let instruction = controller.refresh(small(), now());
        assert_eq!(instruction.visible_page, VisiblePage::Content(Page::Main));
        assert_eq!(instruction.sizing.tier, SizeTier::Small);
    }

    #[test]
    fn test_handle_tap() {
        let (settings, session, host) = (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        let controller = WidgetController::new(&settings, &session, &host, WidgetConfig::default());

        let outcome = controller.handle_tap("previous", now()).unwrap();
        assert_eq!(outcome.state.current_page, Page::Salary);

        assert!(controller.handle_tap("ACTION_TEST", now()).is_err());
        assert_eq!(controller.state().current_page, Page::Salary);
    }

    #[test]
    fn test_exit_settings_mode() {
        let (settings, session, host) = (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        let controller = WidgetController::new(&settings, &session, &host, WidgetConfig::default());

        controller.handle_action(WidgetAction::EnterSettings, now());
        assert!(controller.widget_info(&[3]).is_settings_mode);

        assert!(controller.exit_settings_mode(now()));
        assert!(!controller.exit_settings_mode(now()));
        assert!(!settings.read_bool(KEY_SETTINGS_MODE, true));
    }

    #[test]
    fn test_stale_overlay_closed_on_refresh() {
        let (settings, session, host) = (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        let controller = WidgetController::new(&settings, &session, &host, WidgetConfig::default());

        controller.handle_action(WidgetAction::EnterSettings, now());
        let later = now() + Duration::minutes(45);
        let instruction = controller.refresh(small(), later);

        assert_eq!(instruction.visible_page, VisiblePage::Content(Page::Main));
        assert!(!controller.state().settings_mode);
    }

    #[test]
    fn test_render_all_shares_state() {
        let (settings, session, host) = (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        let controller = WidgetController::new(&settings, &session, &host, WidgetConfig::default());
        controller.handle_action(WidgetAction::Next, now());

        let rendered = controller.render_all(
            &[
                WidgetInstance { id: 4, dimensions: small() },
                WidgetInstance { id: 9, dimensions: WidgetDimensions::new(500, 500, 2.0) },
            ],
            now(),
        );

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].instruction.title, "History");
        assert_eq!(rendered[1].instruction.title, "History");
        assert_eq!(rendered[0].instruction.sizing.tier, SizeTier::Small);
        assert_eq!(rendered[1].instruction.sizing.tier, SizeTier::ExtraLarge);
        assert!(controller.render_all(&[], now()).is_empty());
    }

    #[test]
    fn test_out_of_range_presets_dropped() {
        let (settings, session, host) = (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        let config = WidgetConfig {
            transparency_presets: vec![120, 50, 50, -1, 30],
            ..WidgetConfig::default()
        };
        let controller = WidgetController::new(&settings, &session, &host, config);
        controller.handle_action(WidgetAction::EnterSettings, now());

        let PageContent::Settings(content) = controller.refresh(small(), now()).content else {
            panic!("expected settings content");
        };
        let labels: Vec<&str> = content.presets.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["30%", "50%"]);
    }

    #[test]
    fn test_widget_info_json() {
        let (settings, session, host) = (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        let controller = WidgetController::new(&settings, &session, &host, WidgetConfig::default());

        let json = serde_json::to_string(&controller.widget_info(&[12, 15])).unwrap();
        assert_eq!(
            json,
            r#"{"widgetCount":2,"widgetIds":[12,15],"isSettingsMode":false}"#
        );
    }

    #[test]
    fn test_take_pending_action() {
        let (settings, session, mut host) =
            (MemoryStore::new(), MemoryStore::new(), MockHostSignal::new());
        host.expect_launch_app().returning(|_| Ok(()));
        let controller = WidgetController::new(&settings, &session, &host, WidgetConfig::default());

        controller.handle_tap("clock_in_out", now()).unwrap();
        assert_eq!(controller.take_pending_action(), Some(PendingAction::ClockIn));
        assert_eq!(controller.take_pending_action(), None);
    }
}
