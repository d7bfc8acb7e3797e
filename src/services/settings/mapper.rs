use crate::models::page::Page;
use crate::models::settings::{
    WidgetState, DEFAULT_TRANSPARENCY, KEY_BACKGROUND_COLOR, KEY_CURRENT_TAB,
    KEY_LAST_SETTINGS_TIME, KEY_SETTINGS_MODE, KEY_THEME, KEY_TRANSPARENCY,
};
use crate::models::theme::{BackgroundColor, Theme};
use crate::services::store::{KeyValueStore, KeyValueStoreExt};

/// Builds a state snapshot from the store, defaulting every absent key.
pub fn read_state(store: &dyn KeyValueStore) -> WidgetState {
    let stored_tab = store.read_int(KEY_CURRENT_TAB, Page::Main.index());
    let current_page = Page::from_index(stored_tab).unwrap_or_else(|| {
        log::warn!("Stored page index {} out of range, showing Main", stored_tab);
        Page::Main
    });

    WidgetState {
        current_page,
        settings_mode: store.read_bool(KEY_SETTINGS_MODE, false),
        transparency: store.read_int(KEY_TRANSPARENCY, DEFAULT_TRANSPARENCY),
        theme_id: store.read_string(KEY_THEME, Theme::default().id()),
        background_color: store.read_string(KEY_BACKGROUND_COLOR, BackgroundColor::default().id()),
        last_settings_time: store.read_opt_int(KEY_LAST_SETTINGS_TIME),
    }
}

/// Whether the stored page index names a real page. Absent counts as valid.
pub fn stored_page_is_valid(store: &dyn KeyValueStore) -> bool {
    Page::from_index(store.read_int(KEY_CURRENT_TAB, Page::Main.index())).is_some()
}

/// Writes every field of the snapshot. Returns false if any write failed.
pub fn write_state(store: &dyn KeyValueStore, state: &WidgetState) -> bool {
    let results = [
        store.write(KEY_CURRENT_TAB, state.current_page.index()),
        store.write(KEY_SETTINGS_MODE, state.settings_mode),
        store.write(KEY_TRANSPARENCY, state.transparency),
        store.write(KEY_THEME, state.theme_id.as_str()),
        store.write(KEY_BACKGROUND_COLOR, state.background_color.as_str()),
        write_settings_time(store, state.last_settings_time),
    ];
    results.iter().all(|ok| *ok)
}

/// Writes only the fields that differ between two snapshots.
pub fn write_changes(store: &dyn KeyValueStore, before: &WidgetState, after: &WidgetState) -> bool {
    let mut ok = true;

    if before.current_page != after.current_page {
        ok &= store.write(KEY_CURRENT_TAB, after.current_page.index());
    }
    if before.settings_mode != after.settings_mode {
        ok &= store.write(KEY_SETTINGS_MODE, after.settings_mode);
    }
    if before.transparency != after.transparency {
        ok &= store.write(KEY_TRANSPARENCY, after.transparency);
    }
    if before.theme_id != after.theme_id {
        ok &= store.write(KEY_THEME, after.theme_id.as_str());
    }
    if before.background_color != after.background_color {
        ok &= store.write(KEY_BACKGROUND_COLOR, after.background_color.as_str());
    }
    if before.last_settings_time != after.last_settings_time {
        ok &= write_settings_time(store, after.last_settings_time);
    }

    ok
}

fn write_settings_time(store: &dyn KeyValueStore, stamp: Option<i64>) -> bool {
    match stamp {
        Some(millis) => store.write(KEY_LAST_SETTINGS_TIME, millis),
        None => store.clear(KEY_LAST_SETTINGS_TIME),
    }
}
