// Settings service module
// Widget state persisted in the settings store

mod mapper;
mod service;

pub use mapper::{read_state, write_changes, write_state};
pub use service::SettingsService;
