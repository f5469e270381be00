pub mod api;
pub mod config;
pub mod error;
pub mod extract;
mod main_lib;
pub mod models;
pub mod views;

pub use main_lib::{build_state, init_tracing, AppState};
