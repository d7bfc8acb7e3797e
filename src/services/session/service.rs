use crate::models::session::{
    PendingAction, WorkSessionSnapshot, DEFAULT_EARNINGS_TEXT, DEFAULT_HOURS_TEXT,
    KEY_CALENDAR_DATA, KEY_CLOCK_IN, KEY_CLOCK_OUT, KEY_IS_CLOCKED_IN, KEY_IS_LOADING,
    KEY_MONTHLY_EARNINGS, KEY_OVERTIME_TEXT, KEY_PENDING_ACTION, KEY_REMAINING_TEXT,
    KEY_TODAY_EARNINGS,
};
use crate::services::store::{KeyValueStore, KeyValueStoreExt};

/// Reads the snapshot the main application publishes and carries the single
/// pending-action flag back to it.
pub struct SessionService<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SessionService<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn load(&self) -> WorkSessionSnapshot {
        let store = self.store;
        WorkSessionSnapshot {
            clock_in: store.read_opt_string(KEY_CLOCK_IN).filter(|s| !s.is_empty()),
            clock_out: store.read_opt_string(KEY_CLOCK_OUT).filter(|s| !s.is_empty()),
            remaining_text: store.read_display_text(KEY_REMAINING_TEXT, DEFAULT_HOURS_TEXT),
            overtime_text: store.read_display_text(KEY_OVERTIME_TEXT, DEFAULT_HOURS_TEXT),
            today_earnings: store.read_display_text(KEY_TODAY_EARNINGS, DEFAULT_EARNINGS_TEXT),
            monthly_earnings: store.read_display_text(KEY_MONTHLY_EARNINGS, DEFAULT_EARNINGS_TEXT),
            calendar_data: store.read_string(KEY_CALENDAR_DATA, ""),
            is_clocked_in: store.read_bool(KEY_IS_CLOCKED_IN, false),
            is_loading: store.read_bool(KEY_IS_LOADING, false),
        }
    }

    pub fn is_clocked_in(&self) -> bool {
        self.store.read_bool(KEY_IS_CLOCKED_IN, false)
    }

    /// Leave a one-shot request for the main application
    pub fn request_action(&self, action: PendingAction) -> bool {
        log::info!("Requesting pending action {}", action.code());
        self.store.write(KEY_PENDING_ACTION, action.code())
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        let code = self.store.read_opt_string(KEY_PENDING_ACTION)?;
        let action = PendingAction::from_code(&code);
        if action.is_none() {
            log::warn!("Ignoring unknown pending action '{}'", code);
        }
        action
    }

    /// Read and clear the pending action; used by the consuming application
    pub fn take_pending_action(&self) -> Option<PendingAction> {
        let action = self.pending_action();
        if self.store.read_opt_string(KEY_PENDING_ACTION).is_some() {
            self.store.clear(KEY_PENDING_ACTION);
        }
        action
    }
}
