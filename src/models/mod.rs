// Module exports for models

pub mod action;
pub mod day_status;
pub mod page;
pub mod render;
pub mod session;
pub mod settings;
pub mod sizing;
pub mod theme;
