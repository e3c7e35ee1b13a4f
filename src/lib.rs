pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod startup;
pub mod state;
pub mod upstream;
