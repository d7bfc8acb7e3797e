use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_widget_prefs_table(conn)?;
    run_widget_prefs_migrations(conn)?;
    Ok(())
}

fn create_widget_prefs_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS widget_prefs (
            namespace TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (namespace, key)
        )",
        [],
    )
    .context("Failed to create widget_prefs table")?;

    Ok(())
}

// First releases stored values without a modification stamp
fn run_widget_prefs_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(
        conn,
        "widget_prefs",
        "updated_at",
        "ALTER TABLE widget_prefs ADD COLUMN updated_at TEXT",
    )?;

    Ok(())
}
