use rusqlite::{params, OptionalExtension};

use super::{KeyValueStore, StoreError, StoreValue};
use crate::services::database::Database;

/// One logical store (namespace) inside the shared `widget_prefs` table.
pub struct SqliteStore<'a> {
    db: &'a Database,
    namespace: String,
}

impl<'a> SqliteStore<'a> {
    pub fn new(db: &'a Database, namespace: impl Into<String>) -> Self {
        Self {
            db,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// All keys currently stored in this namespace, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.db.connection();
        let mut stmt =
            conn.prepare("SELECT key FROM widget_prefs WHERE namespace = ?1 ORDER BY key")?;
        let keys = stmt
            .query_map(params![self.namespace], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> Result<Option<StoreValue>, StoreError> {
        let raw: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM widget_prefs WHERE namespace = ?1 AND key = ?2",
                params![self.namespace, key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: StoreValue) -> Result<(), StoreError> {
        let json = serde_json::to_string(&value)?;
        self.db.connection().execute(
            "INSERT INTO widget_prefs (namespace, key, value, updated_at)
             VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
             ON CONFLICT(namespace, key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP",
            params![self.namespace, key, json],
        )?;
        log::debug!("Stored {}/{} = {}", self.namespace, key, json);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.db.connection().execute(
            "DELETE FROM widget_prefs WHERE namespace = ?1 AND key = ?2",
            params![self.namespace, key],
        )?;
        Ok(())
    }
}
