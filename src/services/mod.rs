// Service module exports

pub mod config;
pub mod controller;
pub mod database;
pub mod day_status;
pub mod dispatcher;
pub mod render;
pub mod session;
pub mod settings;
pub mod sizing;
pub mod state_machine;
pub mod store;
