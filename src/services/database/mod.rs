// Database service module
// SQLite connection and schema for the persisted widget stores

mod connection;
mod migrations;
mod schema;

pub use connection::Database;
