pub mod api;
pub mod conditions;
pub mod config;
pub mod error;
pub mod loader;
pub mod scorer;
// cmd and reports are binary modules (declared in main.rs).
