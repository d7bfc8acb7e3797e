// Session service module
// Read-only view of the main application's work-session data

mod service;

pub use service::SessionService;
