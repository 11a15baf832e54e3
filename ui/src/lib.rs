//! This crate contains the shared UI for the location and scheme preference step.

pub mod app;
pub use app::PreferenceService;

pub mod components;
pub mod preferences;
pub mod services;
pub mod utils;
