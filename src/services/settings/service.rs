use crate::models::settings::WidgetState;
use crate::services::store::KeyValueStore;

use crate::models::settings::KEY_CURRENT_TAB;
use crate::services::store::KeyValueStoreExt;

use super::mapper::{read_state, stored_page_is_valid, write_changes, write_state};

/// Reads and persists the shared widget state.
pub struct SettingsService<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SettingsService<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Get the current state, with defaults for anything absent
    pub fn load(&self) -> WidgetState {
        let state = read_state(self.store);
        log::debug!("Loaded widget state: {:?}", state);
        state
    }

    /// Persist a whole snapshot
    pub fn save(&self, state: &WidgetState) -> bool {
        write_state(self.store, state)
    }

    /// Persist only what changed between two snapshots.
    ///
    /// A page index that was normalised on read is written back along with
    /// the change.
    pub fn save_changes(&self, before: &WidgetState, after: &WidgetState) -> bool {
        if before == after {
            return true;
        }

        let mut ok = write_changes(self.store, before, after);
        if before.current_page == after.current_page && !stored_page_is_valid(self.store) {
            log::info!("Writing back normalised page {:?}", after.current_page);
            ok &= self.store.write(KEY_CURRENT_TAB, after.current_page.index());
        }
        ok
    }

    /// Reset to defaults
    pub fn reset(&self) -> bool {
        log::info!("Resetting widget settings to defaults");
        self.save(&WidgetState::default())
    }
}
