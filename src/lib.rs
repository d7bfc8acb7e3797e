// Work Hours Widget Library
// Exports all modules for the widget host and for testing

pub mod models;
pub mod services;
pub mod utils;

pub use services::controller::WidgetController;
