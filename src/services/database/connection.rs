use anyhow::{Context, Result};
use rusqlite::Connection;

use super::schema;

/// Thin wrapper around the SQLite connection backing the widget stores.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the provided path.
    ///
    /// Pass `":memory:"` for a throwaway database.
    pub fn new(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).context(format!("Failed to open database at {}", path))?;

        // The widget and the main application may touch the file at the same time
        conn.busy_timeout(std::time::Duration::from_millis(250))
            .context("Failed to set busy timeout")?;

        Ok(Self { conn })
    }

    /// Opens the database and makes sure the schema is current.
    pub fn open(path: &str) -> Result<Self> {
        let db = Self::new(path)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Provides read/write access to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates tables and runs migrations.
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(self.connection())
    }
}
