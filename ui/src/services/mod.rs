//! Infrastructure Services
//!
//! - **browser**: `web_sys` helpers for reload, focus and scrolling
//! - **config**: selector labels, timings and layout thresholds
//! - **errors**: catalog and preference error types
//! - **page_data**: JSON blocks embedded in the page
//!
//! The services are WASM-first; off wasm32 the browser helpers do nothing.

pub mod browser;
pub mod config;
pub mod errors;
pub mod page_data;
